//! Knowledge document reading and header writing.
//!
//! Raw lines flow through [`sanitize`] into [`split`], which yields the
//! document, definition, and statement sections consumed by downstream
//! parsers and by the header writer.

pub mod header;
pub mod sanitize;
pub mod split;

pub use header::{make_knowledge_header, KnowledgeHeader};
pub use sanitize::{sanitize, Sanitizer};
pub use split::{split, split_file_to_annotations_and_definitions, ResourceSections, SectionSplitter};
