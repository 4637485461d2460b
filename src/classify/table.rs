//! Keyword to category lookup table.

use std::collections::HashMap;

use crate::config::{MappingConfig, EFFECT_LABEL, PERCUSSION_LABEL};

/// Immutable mapping from lowercase keyword to category label.
#[derive(Debug, Clone, Default)]
pub struct CategoryTable {
    entries: HashMap<String, String>,
}

impl CategoryTable {
    /// Build the table from the configured keyword tables.
    ///
    /// Insertion order is base mapping, then percussion keywords, then effect
    /// keywords. A later insertion overwrites an earlier one for the same key.
    ///
    /// Keywords must be lowercase ASCII letters, as checked by
    /// [`validate_mapping`](crate::config::validation::validate_mapping).
    /// Any other keyword can never match a token.
    pub fn build(mapping: &MappingConfig) -> Self {
        let mut entries: HashMap<String, String> = mapping
            .base_mapping
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        for keyword in &mapping.percussion_keywords {
            entries.insert(keyword.clone(), PERCUSSION_LABEL.to_string());
        }
        for keyword in &mapping.effect_keywords {
            entries.insert(keyword.clone(), EFFECT_LABEL.to_string());
        }

        debug_assert!(
            entries
                .keys()
                .all(|k| !k.is_empty() && k.bytes().all(|b| b.is_ascii_lowercase())),
            "category keywords must be lowercase ASCII letters"
        );

        tracing::debug!("Category table built with {} keywords", entries.len());

        Self { entries }
    }

    /// Look up an already lowercased keyword.
    pub fn get(&self, keyword: &str) -> Option<&str> {
        self.entries.get(keyword).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
