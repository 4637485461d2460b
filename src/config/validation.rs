//! Configuration validation logic.

use crate::config::loader::{Config, MappingConfig};
use crate::error::{Error, Result};
use regex::Regex;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_mapping(&config.mapping)?;
    validate_pack_suffix(&config.output.pack_suffix)?;

    if let Some(root) = &config.output.output_root {
        if root.as_os_str().is_empty() {
            return Err(Error::MissingConfig("output_root".to_string()));
        }
    }

    Ok(())
}

/// Validate the keyword tables.
pub fn validate_mapping(mapping: &MappingConfig) -> Result<()> {
    validate_keywords("base_mapping", mapping.base_mapping.keys())?;
    validate_keywords("percussion_keywords", &mapping.percussion_keywords)?;
    validate_keywords("effect_keywords", &mapping.effect_keywords)?;

    for (keyword, category) in &mapping.base_mapping {
        validate_category(keyword, category)?;
    }

    Ok(())
}

/// Validate that every keyword is lowercase and alphabetic only.
///
/// Tokens are extracted as alphabetic runs and lowercased before lookup, so any
/// other keyword could never match.
pub fn validate_keywords<S: AsRef<str>, I: IntoIterator<Item = S>>(
    field: &str,
    keywords: I,
) -> Result<()> {
    let keyword_pattern = Regex::new(r"^[a-z]+$").unwrap();

    for keyword in keywords {
        let keyword = keyword.as_ref();
        if !keyword_pattern.is_match(keyword) {
            return Err(Error::ConfigValidation {
                field: field.to_string(),
                message: format!(
                    "Keyword '{}' must be lowercase letters only (a-z)",
                    keyword
                ),
            });
        }
    }

    Ok(())
}

/// Validate a category label, which becomes a single directory name.
pub fn validate_category(keyword: &str, category: &str) -> Result<()> {
    let separator_pattern = Regex::new(r"[/\\\x00]").unwrap();

    if category.trim().is_empty() || category == "." || category == ".." {
        return Err(Error::ConfigValidation {
            field: "base_mapping".to_string(),
            message: format!("Category for '{}' is not a usable folder name", keyword),
        });
    }

    if separator_pattern.is_match(category) {
        return Err(Error::ConfigValidation {
            field: "base_mapping".to_string(),
            message: format!(
                "Category '{}' for '{}' must be a single folder name",
                category, keyword
            ),
        });
    }

    Ok(())
}

/// Validate the pack-name suffix.
pub fn validate_pack_suffix(suffix: &str) -> Result<()> {
    if suffix.trim().is_empty() {
        return Err(Error::MissingConfig("pack_suffix".to_string()));
    }

    if suffix.contains('/') || suffix.contains('\\') {
        return Err(Error::ConfigValidation {
            field: "pack_suffix".to_string(),
            message: format!("Pack suffix '{}' must not contain path separators", suffix),
        });
    }

    Ok(())
}
