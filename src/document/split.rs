//! Section splitter.
//!
//! Partitions sanitized lines into document properties, definitions, and
//! statements. The state only moves forward (`Document -> Definition ->
//! Statement`); once statements begin, a line that looks like a definition
//! is still a statement.

// Allow unwrap for compile-time constant regex patterns in lazy_static blocks
#![allow(clippy::unwrap_used)]

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::document::sanitize::sanitize;
use crate::types::{LogicalLine, Section};

lazy_static! {
    /// `SET DOCUMENT` property assignment
    static ref DOCUMENT_RE: Regex = Regex::new(r"^SET\s+DOCUMENT").unwrap();
    /// `DEFINE NAMESPACE` or `DEFINE ANNOTATION`
    static ref DEFINITION_RE: Regex = Regex::new(r"^DEFINE\s+(NAMESPACE|ANNOTATION)").unwrap();
}

/// The three ordered sections of a knowledge document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceSections {
    /// `SET DOCUMENT` lines.
    pub document: Vec<LogicalLine>,
    /// `DEFINE NAMESPACE` / `DEFINE ANNOTATION` lines.
    pub definitions: Vec<LogicalLine>,
    /// Everything else, from the first non-header line on.
    pub statements: Vec<LogicalLine>,
}

impl ResourceSections {
    /// Lines of one section.
    pub fn section(&self, section: Section) -> &[LogicalLine] {
        match section {
            Section::Document => &self.document,
            Section::Definition => &self.definitions,
            Section::Statement => &self.statements,
        }
    }

    /// All lines in file order.
    pub fn iter(&self) -> impl Iterator<Item = &LogicalLine> {
        self.document
            .iter()
            .chain(&self.definitions)
            .chain(&self.statements)
    }

    /// Total number of lines across sections.
    pub fn len(&self) -> usize {
        self.document.len() + self.definitions.len() + self.statements.len()
    }

    /// Whether every section is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Whether a line sets a document property.
pub fn is_document_line(text: &str) -> bool {
    DOCUMENT_RE.is_match(text)
}

/// Whether a line defines a namespace or annotation.
pub fn is_definition_line(text: &str) -> bool {
    DEFINITION_RE.is_match(text)
}

/// Incremental section classifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionSplitter {
    state: Section,
}

impl SectionSplitter {
    /// Create a splitter in the `Document` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub const fn state(&self) -> Section {
        self.state
    }

    /// Advance the state for `text` and return the section the line belongs to.
    pub fn classify(&mut self, text: &str) -> Section {
        let next = match self.state {
            Section::Document if is_document_line(text) => Section::Document,
            Section::Document | Section::Definition if is_definition_line(text) => Section::Definition,
            Section::Definition if is_document_line(text) => Section::Definition,
            _ => Section::Statement,
        };
        if next != self.state {
            debug!(from = self.state.name(), to = next.name(), text, "section transition");
            self.state = next;
        }
        next
    }
}

/// Partition logical lines into the three sections, preserving order.
pub fn split<I>(lines: I) -> ResourceSections
where
    I: IntoIterator<Item = LogicalLine>,
{
    let mut splitter = SectionSplitter::new();
    let mut sections = ResourceSections::default();

    for line in lines {
        match splitter.classify(&line.text) {
            Section::Document => sections.document.push(line),
            Section::Definition => sections.definitions.push(line),
            Section::Statement => sections.statements.push(line),
        }
    }

    sections
}

/// Sanitize raw lines and split them into sections.
pub fn split_file_to_annotations_and_definitions<I>(lines: I) -> ResourceSections
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    split(sanitize(lines))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn lines(texts: &[&str]) -> Vec<LogicalLine> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| LogicalLine::new(i + 1, *t))
            .collect()
    }

    fn texts(lines: &[LogicalLine]) -> Vec<&str> {
        lines.iter().map(LogicalLine::as_str).collect()
    }

    #[test]
    fn test_empty_input() {
        let sections = split(Vec::new());
        assert!(sections.is_empty());
        assert_eq!(sections, ResourceSections::default());
    }

    #[test]
    fn test_three_sections() {
        let sections = split(lines(&[
            r#"SET DOCUMENT Name = "Test""#,
            r#"SET DOCUMENT Version = "1.0.0""#,
            r#"DEFINE NAMESPACE HGNC AS URL "https://example.com/hgnc.belns""#,
            r#"DEFINE ANNOTATION Species AS URL "https://example.com/species.belanno""#,
            r#"SET Citation = {"PubMed", "Title", "12345"}"#,
            "p(HGNC:AKT1) -> p(HGNC:EGFR)",
        ]));

        assert_eq!(sections.document.len(), 2);
        assert_eq!(sections.definitions.len(), 2);
        assert_eq!(texts(&sections.statements), vec![
            r#"SET Citation = {"PubMed", "Title", "12345"}"#,
            "p(HGNC:AKT1) -> p(HGNC:EGFR)",
        ]);
    }

    #[test]
    fn test_no_backward_transition() {
        let sections = split(lines(&[
            r#"DEFINE NAMESPACE HGNC AS URL "a""#,
            "p(HGNC:AKT1)",
            r#"DEFINE NAMESPACE CHEBI AS URL "b""#,
            r#"SET DOCUMENT Name = "late""#,
        ]));

        assert!(sections.document.is_empty());
        assert_eq!(texts(&sections.definitions), vec![r#"DEFINE NAMESPACE HGNC AS URL "a""#]);
        assert_eq!(sections.statements.len(), 3);
    }

    #[test]
    fn test_document_line_after_definitions_stays_in_definitions() {
        let sections = split(lines(&[
            r#"DEFINE NAMESPACE HGNC AS URL "a""#,
            r#"SET DOCUMENT Name = "x""#,
            "p(HGNC:AKT1)",
        ]));
        assert_eq!(sections.definitions.len(), 2);
        assert_eq!(sections.statements.len(), 1);
    }

    #[test]
    fn test_statement_straight_after_document() {
        let sections = split(lines(&[r#"SET DOCUMENT Name = "x""#, "p(HGNC:AKT1)"]));
        assert_eq!(sections.document.len(), 1);
        assert!(sections.definitions.is_empty());
        assert_eq!(sections.statements.len(), 1);
    }

    #[test]
    fn test_document_only() {
        let sections = split(lines(&[r#"SET DOCUMENT Name = "x""#, r#"SET   DOCUMENT Version = "1""#]));
        assert_eq!(sections.document.len(), 2);
        assert!(sections.definitions.is_empty());
        assert!(sections.statements.is_empty());
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        let mut splitter = SectionSplitter::new();
        assert_eq!(splitter.classify("define namespace X as url \"a\""), Section::Statement);
        assert_eq!(splitter.state(), Section::Statement);
    }

    #[test]
    fn test_splitter_keeps_line_numbers_and_order() {
        let sections = split_file_to_annotations_and_definitions([
            "# header",
            r#"SET DOCUMENT Name = "x""#,
            "",
            "DEFINE NAMESPACE HGNC AS URL \\",
            r#""https://example.com/hgnc.belns""#,
            "p(HGNC:AKT1)",
        ]);
        let numbers: Vec<usize> = sections.iter().map(|l| l.line_number).collect();
        assert_eq!(numbers, vec![2, 5, 6]);
    }
}
