//! Knowledge document header writer.
//!
//! Produces the document property and definition sections that precede the
//! statements of a BEL script.

use std::collections::{BTreeMap, BTreeSet};

use chrono::Local;

use crate::constants::{definitions, header::{BANNER_WIDTH, RULE_WIDTH}, VERSION};
use crate::utils::iso_8601_date;

/// Everything written into a knowledge document header.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeHeader {
    /// Document name (required).
    pub name: String,
    /// Document version; today's date when unset.
    pub version: Option<String>,
    /// Free-text description, newlines removed on output.
    pub description: Option<String>,
    /// Document authors.
    pub authors: Vec<String>,
    /// Contact information.
    pub contact: Option<String>,
    /// Copyright statement.
    pub copyright: Option<String>,
    /// License statement.
    pub licenses: Option<String>,
    /// Disclaimer.
    pub disclaimer: Option<String>,
    /// Namespace keyword to URL.
    pub namespace_urls: BTreeMap<String, String>,
    /// Namespace keyword to regular expression.
    pub namespace_patterns: BTreeMap<String, String>,
    /// Annotation keyword to URL.
    pub annotation_urls: BTreeMap<String, String>,
    /// Annotation keyword to regular expression.
    pub annotation_patterns: BTreeMap<String, String>,
    /// Annotation keyword to inline list of values.
    pub annotation_lists: BTreeMap<String, BTreeSet<String>>,
}

impl KnowledgeHeader {
    /// Create a header for a document with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

fn banner(title: &str) -> [String; 3] {
    let rule = "#".repeat(BANNER_WIDTH);
    [rule.clone(), format!("#| {title}"), rule]
}

fn push_block<I>(out: &mut Vec<String>, title: &str, lines: I)
where
    I: IntoIterator<Item = String>,
{
    let lines: Vec<String> = lines.into_iter().collect();
    if lines.is_empty() {
        return;
    }
    out.push(format!("# {title}"));
    out.push("#".repeat(RULE_WIDTH));
    out.extend(lines);
    out.push(String::new());
}

/// Document property lines (`SET DOCUMENT ...`).
pub fn make_document_metadata(header: &KnowledgeHeader) -> Vec<String> {
    let mut out: Vec<String> = banner("Metadata").into();
    out.push(String::new());

    out.push(format!("SET DOCUMENT Name = \"{}\"", header.name));
    let version = header.version.clone().unwrap_or_else(iso_8601_date);
    out.push(format!("SET DOCUMENT Version = \"{version}\""));

    if let Some(description) = &header.description {
        out.push(format!("SET DOCUMENT Description = \"{}\"", description.replace('\n', "")));
    }
    if !header.authors.is_empty() {
        out.push(format!("SET DOCUMENT Authors = \"{}\"", header.authors.join(", ")));
    }

    let optional = [
        ("ContactInfo", &header.contact),
        ("Licenses", &header.licenses),
        ("Copyright", &header.copyright),
        ("Disclaimer", &header.disclaimer),
    ];
    for (key, value) in optional.iter().filter_map(|(k, v)| v.as_ref().map(|v| (k, v))) {
        out.push(format!("SET DOCUMENT {key} = \"{value}\""));
    }

    out.push(String::new());
    out
}

/// Namespace definition lines, URL definitions before patterns.
pub fn make_document_namespaces(header: &KnowledgeHeader) -> Vec<String> {
    let mut out: Vec<String> = banner("Namespaces").into();
    out.push(String::new());

    push_block(
        &mut out,
        "Namespaces defined with URLs",
        header.namespace_urls.iter().map(|(k, v)| definitions::namespace_url(k, v)),
    );
    push_block(
        &mut out,
        "Namespaces defined with patterns",
        header.namespace_patterns.iter().map(|(k, v)| definitions::namespace_pattern(k, v)),
    );

    out
}

/// Annotation definition lines: URLs, then patterns, then inline lists.
pub fn make_document_annotations(header: &KnowledgeHeader) -> Vec<String> {
    let mut out: Vec<String> = banner("Annotations").into();
    out.push(String::new());

    push_block(
        &mut out,
        "Annotations defined with URLs",
        header.annotation_urls.iter().map(|(k, v)| definitions::annotation_url(k, v)),
    );
    push_block(
        &mut out,
        "Annotations defined with patterns",
        header.annotation_patterns.iter().map(|(k, v)| definitions::annotation_pattern(k, v)),
    );
    push_block(
        &mut out,
        "Annotations defined with lists",
        header.annotation_lists.iter().map(|(k, v)| definitions::annotation_list(k, v)),
    );

    out
}

/// Full header: generation banner, metadata, namespaces, annotations, and the
/// opening banner of the statements section.
pub fn make_knowledge_header(header: &KnowledgeHeader) -> Vec<String> {
    let mut out: Vec<String> = banner(&format!(
        "Generated by bel-resources v{VERSION} on {}",
        Local::now().format("%a %b %e %H:%M:%S %Y")
    ))
    .into();
    out.push(String::new());

    out.extend(make_document_metadata(header));
    out.extend(make_document_namespaces(header));
    out.extend(make_document_annotations(header));
    out.extend(banner("Statements"));
    out.push(String::new());
    out
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::document::split::split_file_to_annotations_and_definitions;

    fn example() -> KnowledgeHeader {
        let mut header = KnowledgeHeader::new("Test Document");
        header.version = Some("1.0.0".to_string());
        header.description = Some("Line one\nline two".to_string());
        header.authors = vec!["Ada".to_string(), "Grace".to_string()];
        header.contact = Some("ada@example.com".to_string());
        header.namespace_urls.insert("HGNC".into(), "https://example.com/hgnc.belns".into());
        header.namespace_urls.insert("CHEBI".into(), "https://example.com/chebi.belns".into());
        header.namespace_patterns.insert("dbSNP".into(), "rs[0-9]+".into());
        header.annotation_urls.insert("Species".into(), "https://example.com/species.belanno".into());
        header
            .annotation_lists
            .insert("Confidence".into(), ["High".to_string(), "Low".to_string()].into());
        header
    }

    #[test]
    fn test_metadata_lines() {
        let lines = make_document_metadata(&example());
        assert!(lines.contains(&r#"SET DOCUMENT Name = "Test Document""#.to_string()));
        assert!(lines.contains(&r#"SET DOCUMENT Version = "1.0.0""#.to_string()));
        assert!(lines.contains(&r#"SET DOCUMENT Description = "Line oneline two""#.to_string()));
        assert!(lines.contains(&r#"SET DOCUMENT Authors = "Ada, Grace""#.to_string()));
        assert!(lines.contains(&r#"SET DOCUMENT ContactInfo = "ada@example.com""#.to_string()));
        assert!(!lines.iter().any(|l| l.contains("Disclaimer")));
    }

    #[test]
    fn test_version_defaults_to_today() {
        let lines = make_document_metadata(&KnowledgeHeader::new("x"));
        let expected = format!("SET DOCUMENT Version = \"{}\"", iso_8601_date());
        assert!(lines.contains(&expected));
    }

    #[test]
    fn test_namespaces_are_sorted() {
        let lines = make_document_namespaces(&example());
        let defines: Vec<&String> = lines.iter().filter(|l| l.starts_with("DEFINE")).collect();
        assert_eq!(defines.len(), 3);
        assert!(defines[0].contains("CHEBI"));
        assert!(defines[1].contains("HGNC"));
        assert!(defines[2].contains("PATTERN"));
    }

    #[test]
    fn test_header_round_trips_through_splitter() {
        let header = make_knowledge_header(&example());
        let sections = split_file_to_annotations_and_definitions(&header);
        assert_eq!(sections.document.len(), 5);
        assert_eq!(sections.definitions.len(), 5);
        assert!(sections.statements.is_empty());
    }

    #[test]
    fn test_empty_definition_blocks_are_omitted() {
        let lines = make_document_annotations(&KnowledgeHeader::new("x"));
        assert!(!lines.iter().any(|l| l.contains("defined with")));
    }
}
