//! Destination routing for sample entries.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::classify::Classifier;
use crate::config::Config;
use crate::descriptor::SampleEntry;
use crate::error::{Error, Result};
use crate::fs::naming::validate_path_component;
use crate::fs::paths::resolve_source_path;
use crate::route::pack::extract_pack_name;
use crate::route::token::extract_token;

/// Where one sample goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutingResult {
    /// Sample path as written in the descriptor.
    pub sample_path: String,

    /// Sample location on disk, relative to the descriptor's directory.
    pub source: PathBuf,

    /// Pack folder name, e.g. "Techno From Mars".
    pub pack_name: String,

    /// Category folder name, e.g. "Kick".
    pub category: String,

    /// Full destination path of the copied sample.
    pub destination: PathBuf,
}

/// Computes destination paths for the samples of a descriptor.
#[derive(Debug, Clone)]
pub struct Router {
    classifier: Classifier,
    output_root: PathBuf,
    pack_suffix: String,
}

impl Router {
    pub fn new(classifier: Classifier, output_root: PathBuf, pack_suffix: String) -> Self {
        Self {
            classifier,
            output_root,
            pack_suffix,
        }
    }

    /// Build a router from the loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Classifier::from_mapping(&config.mapping),
            config.output_root(),
            config.output.pack_suffix.clone(),
        )
    }

    /// Route one sample of the descriptor at `descriptor_path`.
    ///
    /// Fails with [`Error::PackNameMatch`] when neither the descriptor path nor
    /// the sample path carries a pack name. Only computes paths; nothing is
    /// created or copied.
    pub fn route(&self, descriptor_path: &Path, entry: &SampleEntry) -> Result<RoutingResult> {
        let file_name = entry.file_name();
        let token = extract_token(file_name);
        tracing::debug!("Sample path: {} Sample type: {}", entry.path, token);

        let haystack = format!("{}/{}", descriptor_path.to_string_lossy(), entry.path);
        let pack_name = extract_pack_name(&haystack, &self.pack_suffix).ok_or_else(|| {
            Error::PackNameMatch {
                pattern: self.pack_suffix.clone(),
                haystack: haystack.clone(),
            }
        })?;
        tracing::debug!("Pack name: {}", pack_name);

        let category = self.classifier.classify(token);
        validate_path_component(file_name)?;

        let destination = self
            .output_root
            .join(pack_name)
            .join(category)
            .join(file_name);
        tracing::debug!("Destination: {}", destination.display());

        Ok(RoutingResult {
            sample_path: entry.path.clone(),
            source: resolve_source_path(descriptor_path, &entry.path),
            pack_name: pack_name.to_string(),
            category: category.to_string(),
            destination,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MappingConfig;

    const DESCRIPTOR: &str = "/packs/Techno From Mars/Kit.dspreset";

    fn router() -> Router {
        Router::new(
            Classifier::from_mapping(&MappingConfig::default()),
            PathBuf::from("/out"),
            "From Mars".to_string(),
        )
    }

    #[test]
    fn test_route_kick() {
        let result = router()
            .route(Path::new(DESCRIPTOR), &SampleEntry::new("Samples/BD_909_Kick_01.wav"))
            .unwrap();

        assert_eq!(result.pack_name, "Techno From Mars");
        assert_eq!(result.category, "Kick");
        assert_eq!(
            result.destination,
            PathBuf::from("/out/Techno From Mars/Kick/BD_909_Kick_01.wav")
        );
        assert_eq!(
            result.source,
            PathBuf::from("/packs/Techno From Mars/Samples/BD_909_Kick_01.wav")
        );
        assert_eq!(result.sample_path, "Samples/BD_909_Kick_01.wav");
    }

    #[test]
    fn test_route_percussion_synonym() {
        let result = router()
            .route(Path::new(DESCRIPTOR), &SampleEntry::new("Samples/Tambourine_Hit.wav"))
            .unwrap();

        assert_eq!(result.category, "Percussion");
        assert_eq!(
            result.destination,
            PathBuf::from("/out/Techno From Mars/Percussion/Tambourine_Hit.wav")
        );
    }

    #[test]
    fn test_route_without_letters() {
        let result = router()
            .route(Path::new(DESCRIPTOR), &SampleEntry::new("Samples/123.wav"))
            .unwrap();

        assert_eq!(result.category, "undefined");
        assert_eq!(
            result.destination,
            PathBuf::from("/out/Techno From Mars/undefined/123.wav")
        );
    }

    #[test]
    fn test_route_unknown_type_keeps_case() {
        let result = router()
            .route(Path::new(DESCRIPTOR), &SampleEntry::new("Samples/Wobble_Bass.wav"))
            .unwrap();

        assert_eq!(result.category, "Wobble");
    }

    #[test]
    fn test_destination_composition() {
        let router = router();
        for path in ["a/SD_1.wav", "HH closed.wav", "x/y/echo-tail.wav", "Conga.aif"] {
            let entry = SampleEntry::new(path);
            let result = router.route(Path::new(DESCRIPTOR), &entry).unwrap();
            let expected = Path::new("/out")
                .join(&result.pack_name)
                .join(&result.category)
                .join(entry.file_name());
            assert_eq!(result.destination, expected);
        }
    }

    #[test]
    fn test_pack_name_from_sample_path() {
        let result = router()
            .route(
                Path::new("/presets/Kit.dspreset"),
                &SampleEntry::new("../Acid From Mars/SD_01.wav"),
            )
            .unwrap();

        assert_eq!(result.pack_name, "Acid From Mars");
        assert_eq!(result.category, "Snare");
    }

    #[test]
    fn test_missing_pack_name() {
        let err = router()
            .route(Path::new("/packs/Techno/Kit.dspreset"), &SampleEntry::new("BD.wav"))
            .unwrap_err();

        assert!(matches!(err, Error::PackNameMatch { .. }));
    }

    #[test]
    fn test_custom_pack_suffix() {
        let router = Router::new(
            Classifier::from_mapping(&MappingConfig::default()),
            PathBuf::from("/out"),
            "Sample Pack".to_string(),
        );
        let result = router
            .route(Path::new("/packs/Lofi Sample Pack/Kit.dspreset"), &SampleEntry::new("sd.wav"))
            .unwrap();

        assert_eq!(
            result.destination,
            PathBuf::from("/out/Lofi Sample Pack/Snare/sd.wav")
        );
    }

    #[test]
    fn test_empty_file_name_rejected() {
        let err = router()
            .route(Path::new(DESCRIPTOR), &SampleEntry::new("Samples/"))
            .unwrap_err();

        assert!(matches!(err, Error::InvalidFilename(_)));
    }
}
