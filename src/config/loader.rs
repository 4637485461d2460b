//! Configuration structures and loading logic.

use crate::config::policy::FailurePolicy;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Category label every percussion keyword maps to.
pub const PERCUSSION_LABEL: &str = "Percussion";

/// Category label every effect keyword maps to.
pub const EFFECT_LABEL: &str = "FX";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub mapping: MappingConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Where sorted samples go.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Base directory for sorted samples.
    #[serde(default)]
    pub output_root: Option<PathBuf>,

    /// Text following the pack word, e.g. "From Mars" in "Techno From Mars".
    #[serde(default = "default_pack_suffix")]
    pub pack_suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_root: None,
            pack_suffix: default_pack_suffix(),
        }
    }
}

/// Keyword tables used to pick the category folder of a sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingConfig {
    /// Curated keyword to category table.
    #[serde(default = "default_base_mapping")]
    pub base_mapping: BTreeMap<String, String>,

    /// Keywords that all land in the percussion folder.
    #[serde(default = "default_percussion_keywords")]
    pub percussion_keywords: Vec<String>,

    /// Keywords that all land in the effects folder.
    #[serde(default = "default_effect_keywords")]
    pub effect_keywords: Vec<String>,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            base_mapping: default_base_mapping(),
            percussion_keywords: default_percussion_keywords(),
            effect_keywords: default_effect_keywords(),
        }
    }
}

/// Run options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// What to do when a sample fails to route or copy.
    #[serde(default)]
    pub failure_policy: FailurePolicy,

    /// Only compute destinations, never touch the filesystem.
    #[serde(default)]
    pub dry_run: bool,

    /// Overwrite samples that already exist at their destination.
    #[serde(default = "default_true")]
    pub overwrite: bool,

    /// Print a line for every copied sample.
    #[serde(default = "default_true")]
    pub show_copies: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            failure_policy: FailurePolicy::default(),
            dry_run: false,
            overwrite: true,
            show_copies: true,
        }
    }
}

fn default_pack_suffix() -> String {
    "From Mars".to_string()
}

fn default_base_mapping() -> BTreeMap<String, String> {
    [
        ("bd", "Kick"),
        ("sd", "Snare"),
        ("clap", "Snare"),
        ("handclap", "Snare"),
        ("hh", "HiHat"),
        ("ch", "HiHat"),
        ("oh", "HiHat"),
        ("perc", PERCUSSION_LABEL),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn default_percussion_keywords() -> Vec<String> {
    [
        "bell", "bongo", "click", "shaker", "blip", "cabasa", "conga", "smack", "tamb", "block",
        "clave", "cowbell", "duck", "guiro", "laser", "rip", "triangle", "hand", "sidestick",
        "snap", "splat", "tabla", "udu", "wood", "woodblock", "wub", "timable", "knock",
        "rimshot", "rim", "tambo", "clack", "burst", "klak", "klick", "tambourine", "tube",
        "agogo", "djembe", "cowb", "maraca", "cross", "toms", "tom", "timbale",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_effect_keywords() -> Vec<String> {
    ["stun", "echo", "tone", "xplo"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}. Create one from config.example.toml",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the effective output directory.
    pub fn output_root(&self) -> PathBuf {
        self.output
            .output_root
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}
