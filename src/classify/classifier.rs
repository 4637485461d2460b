//! Sample category classification.

use crate::classify::table::CategoryTable;
use crate::config::MappingConfig;

/// Resolves a filename token to the category folder it belongs in.
#[derive(Debug, Clone)]
pub struct Classifier {
    table: CategoryTable,
}

impl Classifier {
    pub fn new(table: CategoryTable) -> Self {
        Self { table }
    }

    /// Build a classifier straight from the configured keyword tables.
    pub fn from_mapping(mapping: &MappingConfig) -> Self {
        Self::new(CategoryTable::build(mapping))
    }

    /// Classify a token.
    ///
    /// Matching is case-insensitive. A token with no table entry is its own
    /// category, returned with its original casing.
    pub fn classify<'a>(&'a self, token: &'a str) -> &'a str {
        self.table
            .get(&token.to_lowercase())
            .unwrap_or(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> Classifier {
        Classifier::from_mapping(&MappingConfig::default())
    }

    #[test]
    fn test_case_insensitive() {
        let c = classifier();
        for token in ["BD", "sd", "Hh", "Tambourine", "ECHO", "cowBell"] {
            let lower = token.to_lowercase();
            let upper = token.to_uppercase();
            assert_eq!(c.classify(token), c.classify(&lower));
            assert_eq!(c.classify(token), c.classify(&upper));
        }
        assert_eq!(c.classify("BD"), "Kick");
    }

    #[test]
    fn test_percussion_keywords() {
        let c = classifier();
        let mapping = MappingConfig::default();
        for keyword in &mapping.percussion_keywords {
            if mapping.effect_keywords.contains(keyword) {
                continue;
            }
            assert_eq!(c.classify(keyword), "Percussion", "keyword {}", keyword);
        }
    }

    #[test]
    fn test_effect_keywords() {
        let c = classifier();
        for keyword in &MappingConfig::default().effect_keywords {
            assert_eq!(c.classify(keyword), "FX", "keyword {}", keyword);
        }
    }

    #[test]
    fn test_effect_list_wins_over_percussion_list() {
        let mut mapping = MappingConfig::default();
        mapping.effect_keywords.push("laser".to_string());
        let c = Classifier::from_mapping(&mapping);
        assert_eq!(c.classify("laser"), "FX");
        assert_eq!(c.classify("Laser"), "FX");
    }

    #[test]
    fn test_unknown_token_passes_through() {
        let c = classifier();
        assert_eq!(c.classify("Wobble"), "Wobble");
        assert_eq!(c.classify("WOBBLE"), "WOBBLE");
        assert_eq!(c.classify("undefined"), "undefined");
    }
}
