//! Core type definitions shared by readers and writers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One semantic line of a resource file after continuations are joined and
/// comments stripped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogicalLine {
    /// 1-based number of the last physical line that contributed to this line.
    pub line_number: usize,
    /// Joined text without comments or continuation markers.
    pub text: String,
}

impl LogicalLine {
    /// Create a new logical line.
    pub fn new(line_number: usize, text: impl Into<String>) -> Self {
        Self {
            line_number,
            text: text.into(),
        }
    }

    /// Get the text of the line.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for LogicalLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.line_number, self.text)
    }
}

/// The section of a knowledge document a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Section {
    /// `SET DOCUMENT` property assignments.
    #[default]
    Document,
    /// `DEFINE NAMESPACE` / `DEFINE ANNOTATION` lines.
    Definition,
    /// Everything after the definitions.
    Statement,
}

impl Section {
    /// Returns the human-readable name of this section.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Document => "Document",
            Self::Definition => "Definition",
            Self::Statement => "Statement",
        }
    }
}

/// The domain a namespace's values are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NamespaceDomain {
    /// Biological processes and pathologies.
    BiologicalProcess,
    /// Chemicals and small molecules.
    Chemical,
    /// Genes and their products.
    Gene,
    /// Anything else.
    #[default]
    Other,
}

impl NamespaceDomain {
    /// Returns all domains.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::BiologicalProcess, Self::Chemical, Self::Gene, Self::Other]
    }

    /// The `DomainString` value written into namespace files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BiologicalProcess => "BiologicalProcess",
            Self::Chemical => "Chemical",
            Self::Gene => "Gene and Gene Products",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for NamespaceDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NamespaceDomain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let valid = Self::all().iter().map(|d| d.name()).collect::<Vec<_>>().join(", ");
                format!("unknown namespace domain {s:?} (expected one of: {valid})")
            })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_domain_round_trips_through_name() {
        for domain in NamespaceDomain::all() {
            assert_eq!(domain.name().parse::<NamespaceDomain>().unwrap(), *domain);
        }
    }

    #[test]
    fn test_domain_parse_is_case_insensitive() {
        assert_eq!("chemical".parse::<NamespaceDomain>().unwrap(), NamespaceDomain::Chemical);
        assert!("Protein".parse::<NamespaceDomain>().is_err());
    }

    #[test]
    fn test_sections_are_ordered() {
        assert!(Section::Document < Section::Definition);
        assert!(Section::Definition < Section::Statement);
    }

    #[test]
    fn test_logical_line_display() {
        assert_eq!(LogicalLine::new(3, "SET Species = 9606").to_string(), "3: SET Species = 9606");
    }
}
