//! Filesystem module.
//!
//! Provides:
//! - Source path resolution and directory management
//! - Sample copying
//! - Path component validation

pub mod copy;
pub mod naming;
pub mod paths;

pub use copy::{copy_sample, CopyOutcome};
pub use naming::validate_path_component;
pub use paths::{ensure_dir, resolve_source_path};
