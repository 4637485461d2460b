//! Sample classification module.
//!
//! Provides:
//! - The keyword to category table
//! - The classifier used by the router

pub mod classifier;
pub mod table;

pub use classifier::Classifier;
pub use table::CategoryTable;
