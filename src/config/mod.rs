//! Configuration module for the dspreset-sorter.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Keyword tables and the failure policy
//! - Configuration validation

pub mod loader;
pub mod policy;
pub mod validation;

pub use loader::{
    Config, MappingConfig, OptionsConfig, OutputConfig, EFFECT_LABEL, PERCUSSION_LABEL,
};
pub use policy::FailurePolicy;
pub use validation::validate_config;
