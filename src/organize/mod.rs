//! Sample organizing module.
//!
//! Provides:
//! - The batch driver that applies the failure policy
//! - Batch state and statistics

pub mod batch;
pub mod state;

pub use batch::run_batch;
pub use state::{BatchState, FailedSample};
