//! Batch state tracking.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use crate::route::RoutingResult;

/// A sample that failed to route or copy.
#[derive(Debug, Clone, Serialize)]
pub struct FailedSample {
    pub sample_path: String,
    pub message: String,
}

/// Per-descriptor batch state.
#[derive(Debug, Default)]
pub struct BatchState {
    pub descriptor: PathBuf,

    // Routing results, in descriptor order
    pub routed: Vec<RoutingResult>,

    // Statistics
    pub copied_count: u64,
    pub skipped_count: u64,
    pub bytes_copied: u64,
    pub category_counts: BTreeMap<String, u64>,

    pub failures: Vec<FailedSample>,
}

impl BatchState {
    pub fn new(descriptor: PathBuf) -> Self {
        Self {
            descriptor,
            ..Default::default()
        }
    }

    /// Record a routed sample.
    pub fn add_routed(&mut self, result: RoutingResult) {
        *self
            .category_counts
            .entry(result.category.clone())
            .or_default() += 1;
        self.routed.push(result);
    }

    /// Increment copied count.
    pub fn add_copied(&mut self, bytes: u64) {
        self.copied_count += 1;
        self.bytes_copied += bytes;
    }

    /// Increment skipped count.
    pub fn increment_skipped(&mut self) {
        self.skipped_count += 1;
    }

    /// Record a failed sample.
    pub fn add_failure(&mut self, sample_path: &str, message: String) {
        self.failures.push(FailedSample {
            sample_path: sample_path.to_string(),
            message,
        });
    }

    pub fn failed_count(&self) -> usize {
        self.failures.len()
    }
}
