//! Sample routing module.
//!
//! Provides:
//! - Naming token extraction from sample file names
//! - Pack name extraction from descriptor paths
//! - Destination path composition

pub mod pack;
pub mod router;
pub mod token;

pub use pack::extract_pack_name;
pub use router::{Router, RoutingResult};
pub use token::{extract_token, UNDEFINED_TOKEN};
