//! `bel-resources` - read, sanitize, and write BEL resources.
//!
//! This crate reads BEL namespace files, annotation files, and knowledge
//! documents, converts between namespaces and annotations, and writes
//! ontology graphs out as namespaces.

pub mod config;
pub mod constants;
pub mod convert;
pub mod document;
pub mod error;
pub mod github;
pub mod obo;
pub mod resource;
pub mod types;
pub mod utils;
pub mod writers;

pub use document::{
    make_knowledge_header, sanitize, split, split_file_to_annotations_and_definitions,
    KnowledgeHeader, ResourceSections,
};
pub use error::{Error, Result};
pub use resource::{get_bel_resource, parse_bel_resource, BelResource};
pub use types::LogicalLine;
pub use writers::{write_annotation, write_namespace};
