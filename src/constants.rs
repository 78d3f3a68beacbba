//! Resource format constants.
//!
//! Centralizes the definition line formats and default values shared by the
//! readers and writers.

/// Library version recorded in generated document headers.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Knowledge document definition lines.
pub mod definitions {
    /// `DEFINE NAMESPACE <keyword> AS URL "<url>"`
    #[must_use]
    pub fn namespace_url(keyword: &str, url: &str) -> String {
        format!("DEFINE NAMESPACE {keyword} AS URL \"{url}\"")
    }

    /// `DEFINE NAMESPACE <keyword> AS PATTERN "<pattern>"`
    #[must_use]
    pub fn namespace_pattern(keyword: &str, pattern: &str) -> String {
        format!("DEFINE NAMESPACE {keyword} AS PATTERN \"{pattern}\"")
    }

    /// `DEFINE ANNOTATION <keyword> AS URL "<url>"`
    #[must_use]
    pub fn annotation_url(keyword: &str, url: &str) -> String {
        format!("DEFINE ANNOTATION {keyword} AS URL \"{url}\"")
    }

    /// `DEFINE ANNOTATION <keyword> AS PATTERN "<pattern>"`
    #[must_use]
    pub fn annotation_pattern(keyword: &str, pattern: &str) -> String {
        format!("DEFINE ANNOTATION {keyword} AS PATTERN \"{pattern}\"")
    }

    /// `DEFINE ANNOTATION <keyword> AS LIST {"a", "b"}` with values sorted.
    #[must_use]
    pub fn annotation_list<I, S>(keyword: &str, values: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut values: Vec<String> = values.into_iter().map(|v| v.as_ref().to_string()).collect();
        values.sort();
        let quoted = values
            .iter()
            .map(|v| format!("\"{v}\""))
            .collect::<Vec<_>>()
            .join(", ");
        format!("DEFINE ANNOTATION {keyword} AS LIST {{{quoted}}}")
    }
}

/// Key/value resource (`.belns` / `.belanno`) constants.
pub mod resource {
    /// Default delimiter between a value and its encoding.
    pub const DEFAULT_DELIMITER: &str = "|";

    /// Encoding written for namespace values that have none of their own.
    pub const DEFAULT_ENCODING: &str = "ABGMPRO";

    /// Encoding used for values converted from an annotation file.
    pub const ANNOTATION_CONVERSION_ENCODING: &str = "O";

    /// Encoding given to OBO terms written as annotation-style namespaces.
    pub const OBO_ANNOTATION_ENCODING: &str = "P";

    /// Copyright written when none is supplied.
    pub const DEFAULT_COPYRIGHT: &str = "Other/Proprietary";

    /// Section header that starts the value block.
    pub const VALUES_HEADER: &str = "[Values]";
}

/// Document header layout constants.
pub mod header {
    /// Width of `#` banner lines.
    pub const BANNER_WIDTH: usize = 80;

    /// Width of the short rule under sub-headings.
    pub const RULE_WIDTH: usize = 20;
}

#[cfg(test)]
mod tests {
    use super::definitions::*;

    #[test]
    fn test_namespace_formats() {
        assert_eq!(
            namespace_url("HGNC", "https://example.com/hgnc.belns"),
            r#"DEFINE NAMESPACE HGNC AS URL "https://example.com/hgnc.belns""#
        );
        assert_eq!(
            namespace_pattern("dbSNP", "rs[0-9]+"),
            r#"DEFINE NAMESPACE dbSNP AS PATTERN "rs[0-9]+""#
        );
    }

    #[test]
    fn test_annotation_list_is_sorted() {
        assert_eq!(
            annotation_list("Confidence", ["High", "Axiomatic", "Low"]),
            r#"DEFINE ANNOTATION Confidence AS LIST {"Axiomatic", "High", "Low"}"#
        );
    }

    #[test]
    fn test_annotation_list_empty() {
        assert_eq!(
            annotation_list("Empty", Vec::<String>::new()),
            "DEFINE ANNOTATION Empty AS LIST {}"
        );
    }
}
