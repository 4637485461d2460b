//! Error types for the dspreset-sorter application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // Descriptor errors
    #[error("Failed to parse descriptor {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    // Routing errors
    #[error("Couldn't match '<word> {pattern}' in {haystack}")]
    PackNameMatch { pattern: String, haystack: String },

    // File system errors
    #[error("Failed to copy {} to {}: {source}", src.display(), dst.display())]
    Copy {
        src: PathBuf,
        dst: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid path component: {0}")]
    InvalidFilename(String),

    // Batch errors
    #[error("{0} sample(s) failed to sort")]
    EntriesFailed(usize),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Process exit code for a run that ended with this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_)
            | Error::ConfigValidation { .. }
            | Error::MissingConfig(_)
            | Error::TomlParse(_) => exit_codes::CONFIG_ERROR,
            Error::Parse { .. } => exit_codes::PARSE_ERROR,
            Error::PackNameMatch { .. } | Error::Copy { .. } | Error::InvalidFilename(_) => {
                exit_codes::ABORT
            }
            Error::EntriesFailed(_) => exit_codes::SOME_ENTRIES_FAILED,
            Error::Io(_) | Error::Json(_) => exit_codes::UNEXPECTED_ERROR,
        }
    }
}

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const ABORT: i32 = 1;
    pub const PARSE_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const UNEXPECTED_ERROR: i32 = 5;
    pub const SOME_ENTRIES_FAILED: i32 = 6;
}
