//! Namespace and annotation file writers.
//!
//! Every writer takes its settings as an explicit options value; there are no
//! process-wide defaults beyond the constants in [`crate::constants`].

pub mod annotation;
pub mod namespace;

use std::io::Write;

use crate::constants::resource::{DEFAULT_COPYRIGHT, DEFAULT_DELIMITER};
use crate::error::Result;

pub use annotation::{write_annotation, AnnotationOptions};
pub use namespace::{write_namespace, NamespaceOptions};

/// The `[Author]` section.
#[derive(Debug, Clone, Default)]
pub struct AuthorInfo {
    /// Author name.
    pub name: Option<String>,
    /// Copyright statement; `Other/Proprietary` when unset.
    pub copyright: Option<String>,
    /// Contact information.
    pub contact: Option<String>,
}

/// The `[Citation]` section.
#[derive(Debug, Clone, Default)]
pub struct CitationInfo {
    /// Citation name.
    pub name: Option<String>,
    /// Citation description.
    pub description: Option<String>,
    /// Published version.
    pub version: Option<String>,
    /// Publication date.
    pub date: Option<String>,
    /// Reference URL.
    pub url: Option<String>,
}

/// The `[Processing]` section.
#[derive(Debug, Clone)]
pub struct ProcessingOptions {
    /// Whether values are case sensitive.
    pub case_sensitive: bool,
    /// Delimiter between value and encoding.
    pub delimiter: String,
    /// Whether consumers may cache the resource.
    pub cacheable: bool,
}

impl Default for ProcessingOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            delimiter: DEFAULT_DELIMITER.to_string(),
            cacheable: true,
        }
    }
}

const fn flag(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Strip line breaks so a value stays on its key's line.
fn single_line(value: &str) -> String {
    value.trim().replace(['\r', '\n'], "")
}

fn write_header(out: &mut impl Write, name: &str) -> Result<()> {
    writeln!(out, "[{name}]")?;
    Ok(())
}

fn write_field(out: &mut impl Write, key: &str, value: &str) -> Result<()> {
    writeln!(out, "{key}={}", single_line(value))?;
    Ok(())
}

fn write_optional_field(out: &mut impl Write, key: &str, value: Option<&str>) -> Result<()> {
    match value {
        Some(value) => write_field(out, key, value),
        None => Ok(()),
    }
}

fn write_author(out: &mut impl Write, author: &AuthorInfo) -> Result<()> {
    writeln!(out)?;
    write_header(out, "Author")?;
    write_optional_field(out, "NameString", author.name.as_deref())?;
    write_field(out, "CopyrightString", author.copyright.as_deref().unwrap_or(DEFAULT_COPYRIGHT))?;
    write_optional_field(out, "ContactInfoString", author.contact.as_deref())
}

fn write_citation(out: &mut impl Write, citation: &CitationInfo) -> Result<()> {
    writeln!(out)?;
    write_header(out, "Citation")?;
    write_optional_field(out, "NameString", citation.name.as_deref())?;
    write_optional_field(out, "DescriptionString", citation.description.as_deref())?;
    write_optional_field(out, "PublishedVersionString", citation.version.as_deref())?;
    write_optional_field(out, "PublishedDate", citation.date.as_deref())?;
    write_optional_field(out, "ReferenceURL", citation.url.as_deref())
}

fn write_processing(out: &mut impl Write, processing: &ProcessingOptions) -> Result<()> {
    writeln!(out)?;
    write_header(out, "Processing")?;
    write_field(out, "CaseSensitiveFlag", flag(processing.case_sensitive))?;
    write_field(out, "DelimiterString", &processing.delimiter)?;
    write_field(out, "CacheableFlag", flag(processing.cacheable))
}
