//! DecentSampler preset (`.dspreset`) parsing.

use std::fs;
use std::path::Path;

use crate::descriptor::entry::SampleEntry;
use crate::error::{Error, Result};

/// Read a preset file and list every sample it references.
pub fn parse_descriptor(path: &Path) -> Result<Vec<SampleEntry>> {
    let content = fs::read_to_string(path).map_err(|e| Error::Parse {
        path: path.to_path_buf(),
        message: format!("Failed to read file: {}", e),
    })?;

    let entries = parse_descriptor_str(&content).map_err(|message| Error::Parse {
        path: path.to_path_buf(),
        message,
    })?;

    tracing::debug!("Found {} samples in {}", entries.len(), path.display());

    Ok(entries)
}

/// Extract the sample entries from preset XML.
///
/// Every `<sample>` element is returned in document order, wherever it is
/// nested.
pub fn parse_descriptor_str(xml: &str) -> std::result::Result<Vec<SampleEntry>, String> {
    let document = roxmltree::Document::parse(xml).map_err(|e| format!("Invalid XML: {}", e))?;

    document
        .descendants()
        .filter(|node| node.has_tag_name("sample"))
        .map(|node| -> std::result::Result<SampleEntry, String> {
            let position = document.text_pos_at(node.range().start);

            let path = node.attribute("path").ok_or_else(|| {
                format!("<sample> at line {} has no 'path' attribute", position.row)
            })?;

            let root_note = node
                .attribute("rootNote")
                .map(|value| {
                    value.trim().parse::<i32>().map_err(|_| {
                        format!(
                            "<sample> at line {} has an invalid rootNote '{}'",
                            position.row, value
                        )
                    })
                })
                .transpose()?;

            Ok(SampleEntry {
                path: path.to_string(),
                root_note,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRESET: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<DecentSampler minVersion="1.0.0">
  <groups>
    <group>
      <sample path="Samples/BD_909_Kick_01.wav" rootNote="36" loNote="36" hiNote="36"/>
      <sample path="Samples/SD_909_01.wav" rootNote="38" loNote="38" hiNote="38"/>
    </group>
    <group>
      <sample path="Samples/Tambourine_Hit.wav"/>
    </group>
  </groups>
</DecentSampler>"#;

    #[test]
    fn test_parse_samples_in_order() {
        let entries = parse_descriptor_str(PRESET).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].path, "Samples/BD_909_Kick_01.wav");
        assert_eq!(entries[0].root_note, Some(36));
        assert_eq!(entries[1].path, "Samples/SD_909_01.wav");
        assert_eq!(entries[2].path, "Samples/Tambourine_Hit.wav");
        assert_eq!(entries[2].root_note, None);
    }

    #[test]
    fn test_parse_no_samples() {
        let entries = parse_descriptor_str("<DecentSampler><groups/></DecentSampler>").unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_missing_path_attribute() {
        let err = parse_descriptor_str(r#"<groups><sample rootNote="36"/></groups>"#).unwrap_err();
        assert!(err.contains("path"));
    }

    #[test]
    fn test_invalid_root_note() {
        let err =
            parse_descriptor_str(r#"<groups><sample path="a.wav" rootNote="C1"/></groups>"#)
                .unwrap_err();
        assert!(err.contains("rootNote"));
    }

    #[test]
    fn test_malformed_xml() {
        assert!(parse_descriptor_str("<groups><sample path=").is_err());
    }

    #[test]
    fn test_parse_descriptor_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Kit.dspreset");
        fs::write(&path, PRESET).unwrap();

        let entries = parse_descriptor(&path).unwrap();
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn test_parse_descriptor_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_descriptor(&dir.path().join("missing.dspreset")).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }
}
