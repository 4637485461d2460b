//! DSPreset Sorter - sorts the samples of a DecentSampler preset into folders.
//!
//! Every sample a `.dspreset` file references is copied to
//! `<output_root>/<pack name>/<category>/<file name>`, where the pack name is
//! taken from the descriptor path (e.g. "Techno From Mars") and the category
//! from the leading letters of the sample file name (e.g. `BD_01.wav` → Kick).
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use dspreset_sorter::{parse_descriptor, run_batch, Config, Router};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Path::new("config.toml"))?;
//!     let descriptor = Path::new("/packs/Techno From Mars/Kit.dspreset");
//!
//!     let entries = parse_descriptor(descriptor)?;
//!     let router = Router::from_config(&config);
//!     let state = run_batch(descriptor, &entries, &router, &config.options)?;
//!
//!     println!("{} samples copied", state.copied_count);
//!     Ok(())
//! }
//! ```

pub mod classify;
pub mod cli;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod fs;
pub mod organize;
pub mod output;
pub mod route;

// Re-exports for convenience
pub use classify::{CategoryTable, Classifier};
pub use config::{Config, FailurePolicy};
pub use descriptor::{parse_descriptor, SampleEntry};
pub use error::{Error, Result};
pub use organize::{run_batch, BatchState};
pub use route::{Router, RoutingResult};
