//! Annotation (`.belanno`) writer.

use std::collections::BTreeMap;
use std::io::Write;

use tracing::info;

use crate::error::Result;
use crate::utils::{iso_8601_date, iso_8601_datetime};
use crate::writers::{
    single_line, write_author, write_citation, write_field, write_header, write_optional_field,
    write_processing, AuthorInfo, CitationInfo, ProcessingOptions,
};

/// Settings for [`write_annotation`].
#[derive(Debug, Clone, Default)]
pub struct AnnotationOptions {
    /// `Keyword`
    pub keyword: String,
    /// `DescriptionString`
    pub description: String,
    /// `UsageString`
    pub usage: Option<String>,
    /// `VersionString`; today's date when unset.
    pub version: Option<String>,
    /// `CreatedDateTime`; now when unset.
    pub created: Option<String>,
    /// `[Author]` section.
    pub author: AuthorInfo,
    /// `[Citation]` section.
    pub citation: CitationInfo,
    /// `[Processing]` section.
    pub processing: ProcessingOptions,
}

impl AnnotationOptions {
    /// Options with the given keyword and description.
    pub fn new(keyword: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            description: description.into(),
            ..Self::default()
        }
    }
}

/// Write an annotation file with values sorted by key.
pub fn write_annotation<W: Write>(
    out: &mut W,
    values: &BTreeMap<String, String>,
    options: &AnnotationOptions,
) -> Result<()> {
    info!("Writing annotation {} ({} values)", options.keyword, values.len());

    write_header(out, "AnnotationDefinition")?;
    write_field(out, "Keyword", &options.keyword)?;
    write_field(out, "TypeString", "list")?;
    write_field(
        out,
        "VersionString",
        &options.version.clone().unwrap_or_else(iso_8601_date),
    )?;
    write_field(
        out,
        "CreatedDateTime",
        &options.created.clone().unwrap_or_else(iso_8601_datetime),
    )?;
    write_field(out, "DescriptionString", &options.description)?;
    write_optional_field(out, "UsageString", options.usage.as_deref())?;

    write_author(out, &options.author)?;
    write_citation(out, &options.citation)?;
    write_processing(out, &options.processing)?;

    writeln!(out)?;
    write_header(out, "Values")?;
    let delimiter = &options.processing.delimiter;
    for (key, label) in values {
        writeln!(out, "{}{delimiter}{}", single_line(key), single_line(label))?;
    }

    Ok(())
}
