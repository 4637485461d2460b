//! Preset descriptor module.

pub mod entry;
pub mod parser;

pub use entry::SampleEntry;
pub use parser::{parse_descriptor, parse_descriptor_str};
