//! Key/value resources: parsing and retrieval.

pub mod fetch;
pub mod parse;

pub use fetch::{get_bel_resource, ResourceClient};
pub use parse::{parse_bel_resource, BelResource};
