//! Namespace (`.belns`) writer.

use std::collections::BTreeMap;
use std::io::Write;

use tracing::{debug, info};

use crate::constants::resource::DEFAULT_ENCODING;
use crate::error::Result;
use crate::types::NamespaceDomain;
use crate::utils::{iso_8601_date, iso_8601_datetime};
use crate::writers::{
    single_line, write_author, write_citation, write_field, write_header, write_optional_field,
    write_processing, AuthorInfo, CitationInfo, ProcessingOptions,
};

/// Settings for [`write_namespace`].
#[derive(Debug, Clone)]
pub struct NamespaceOptions {
    /// `NameString`
    pub name: String,
    /// `Keyword`
    pub keyword: String,
    /// `DomainString`; omitted when unset.
    pub domain: Option<NamespaceDomain>,
    /// `DescriptionString`
    pub description: Option<String>,
    /// `SpeciesString`
    pub species: Option<String>,
    /// `VersionString`; today's date when unset.
    pub version: Option<String>,
    /// `CreatedDateTime`; now when unset.
    pub created: Option<String>,
    /// `QueryValueURL`
    pub query_url: Option<String>,
    /// `[Author]` section.
    pub author: AuthorInfo,
    /// `[Citation]` section.
    pub citation: CitationInfo,
    /// `[Processing]` section.
    pub processing: ProcessingOptions,
    /// Encoding written for values without one.
    pub default_encoding: String,
}

impl NamespaceOptions {
    /// Options with the given name and keyword and defaults elsewhere.
    pub fn new(name: impl Into<String>, keyword: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keyword: keyword.into(),
            domain: None,
            description: None,
            species: None,
            version: None,
            created: None,
            query_url: None,
            author: AuthorInfo::default(),
            citation: CitationInfo::default(),
            processing: ProcessingOptions::default(),
            default_encoding: DEFAULT_ENCODING.to_string(),
        }
    }
}

/// Write a namespace file.
///
/// Values are written sorted by name; blank names are skipped and empty
/// encodings are replaced by `options.default_encoding`.
pub fn write_namespace<W: Write>(
    out: &mut W,
    values: &BTreeMap<String, String>,
    options: &NamespaceOptions,
) -> Result<()> {
    info!("Writing namespace {} ({} values)", options.keyword, values.len());

    write_header(out, "Namespace")?;
    write_field(out, "Keyword", &options.keyword)?;
    write_field(out, "NameString", &options.name)?;
    write_optional_field(out, "DomainString", options.domain.map(NamespaceDomain::name))?;
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
    write_optional_field(out, "DescriptionString", options.description.as_deref())?;
    write_optional_field(out, "SpeciesString", options.species.as_deref())?;
    write_optional_field(out, "QueryValueURL", options.query_url.as_deref())?;

    write_author(out, &options.author)?;
    write_citation(out, &options.citation)?;
    write_processing(out, &options.processing)?;

    writeln!(out)?;
    write_header(out, "Values")?;
    let delimiter = &options.processing.delimiter;
    for (name, encoding) in values {
        let name = single_line(name);
        if name.is_empty() {
            debug!("Skipping blank namespace value");
            continue;
        }
        let encoding = if encoding.trim().is_empty() {
            options.default_encoding.as_str()
        } else {
            encoding.trim()
        };
        writeln!(out, "{name}{delimiter}{encoding}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::resource::parse::parse_bel_resource;

    fn options() -> NamespaceOptions {
        let mut options = NamespaceOptions::new("Test Namespace", "TEST");
        options.domain = Some(NamespaceDomain::Gene);
        options.version = Some("1.0.0".to_string());
        options.created = Some("2020-01-01T00:00:00".to_string());
        options.description = Some("multi\nline".to_string());
        options.author.name = Some("Ada".to_string());
        options.citation.name = Some("Test Citation".to_string());
        options
    }

    fn render(values: &BTreeMap<String, String>, options: &NamespaceOptions) -> String {
        let mut out = Vec::new();
        write_namespace(&mut out, values, options).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_namespace_layout() {
        let values = BTreeMap::from([
            ("EGFR".to_string(), "GRP".to_string()),
            ("AKT1".to_string(), String::new()),
            ("  ".to_string(), "X".to_string()),
        ]);
        let text = render(&values, &options());

        assert!(text.starts_with("[Namespace]\nKeyword=TEST\nNameString=Test Namespace\n"));
        assert!(text.contains("DomainString=Gene and Gene Products\n"));
        assert!(text.contains("VersionString=1.0.0\n"));
        assert!(text.contains("DescriptionString=multiline\n"));
        assert!(text.ends_with("[Values]\nAKT1|ABGMPRO\nEGFR|GRP\n"));
    }

    #[test]
    fn test_domain_omitted_when_unset() {
        let mut options = options();
        options.domain = None;
        let text = render(&BTreeMap::new(), &options);
        assert!(!text.contains("DomainString"));
    }

    #[test]
    fn test_written_namespace_parses_back() {
        let values = BTreeMap::from([("AKT1".to_string(), "GRP".to_string())]);
        let text = render(&values, &options());
        let resource = parse_bel_resource(text.lines()).unwrap();

        assert_eq!(resource.get("Namespace", "Keyword"), Some("TEST"));
        assert_eq!(resource.get("Author", "NameString"), Some("Ada"));
        assert_eq!(resource.get("Processing", "CaseSensitiveFlag"), Some("yes"));
        assert_eq!(resource.values["AKT1"], Some("GRP".to_string()));
    }
}
