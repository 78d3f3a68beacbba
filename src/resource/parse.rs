//! Key/value resource parser for `.belns` and `.belanno` files.
//!
//! A resource is an INI-like metadata block followed by a `[Values]` section
//! of `name<delimiter>encoding` lines.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::resource::{DEFAULT_DELIMITER, VALUES_HEADER};
use crate::error::{Error, Result};

/// Location label used when parsing lines that did not come from a file or URL.
pub const INLINE_LOCATION: &str = "<input>";

/// A parsed namespace or annotation resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BelResource {
    /// Metadata sections, e.g. `Namespace`, `Author`, `Citation`, `Processing`.
    pub sections: BTreeMap<String, BTreeMap<String, String>>,
    /// Value name to encoding (namespaces) or label (annotations).
    pub values: BTreeMap<String, Option<String>>,
}

impl BelResource {
    /// All keys of one metadata section.
    pub fn section(&self, name: &str) -> Option<&BTreeMap<String, String>> {
        self.sections.get(name)
    }

    /// A single metadata value.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections.get(section)?.get(key).map(String::as_str)
    }

    /// A metadata value that must be present.
    pub fn require(&self, section: &str, key: &str) -> Result<&str> {
        self.get(section, key).ok_or_else(|| {
            Error::invalid(INLINE_LOCATION, format!("missing [{section}] {key}"))
        })
    }

    /// The delimiter between values and their encodings.
    pub fn delimiter(&self) -> &str {
        self.get("Processing", "DelimiterString").unwrap_or(DEFAULT_DELIMITER)
    }

    /// Whether the `[Values]` section is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Parse the lines of a key/value resource.
pub fn parse_bel_resource<I>(lines: I) -> Result<BelResource>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let lines: Vec<I::Item> = lines.into_iter().collect();

    let values_start = lines
        .iter()
        .rposition(|l| l.as_ref().trim() == VALUES_HEADER)
        .ok_or_else(|| Error::invalid(INLINE_LOCATION, "no [Values] section"))?;

    let mut resource = BelResource {
        sections: parse_metadata(&lines[..values_start])?,
        values: BTreeMap::new(),
    };

    let delimiter = resource.delimiter().to_string();
    for line in &lines[values_start + 1..] {
        let line = line.as_ref().trim();
        if line.is_empty() {
            continue;
        }
        match line.rsplit_once(delimiter.as_str()) {
            Some((key, value)) => resource
                .values
                .insert(key.trim().to_string(), Some(value.trim().to_string())),
            None => resource.values.insert(line.to_string(), None),
        };
    }

    Ok(resource)
}

fn parse_metadata<S: AsRef<str>>(lines: &[S]) -> Result<BTreeMap<String, BTreeMap<String, String>>> {
    let mut sections: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
    let mut current: Option<String> = None;

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref().trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            let name = name.trim().to_string();
            sections.entry(name.clone()).or_default();
            current = Some(name);
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(Error::invalid(
                INLINE_LOCATION,
                format!("line {}: expected key=value, found {line:?}", index + 1),
            ));
        };

        let Some(section) = &current else {
            return Err(Error::invalid(
                INLINE_LOCATION,
                format!("line {}: {key:?} appears before any section header", index + 1),
            ));
        };

        sections
            .entry(section.clone())
            .or_default()
            .insert(key.trim().to_string(), value.trim().to_string());
    }

    Ok(sections)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    const NAMESPACE: &str = "\
[Namespace]
Keyword=TEST
NameString=Test Namespace
DescriptionString=A namespace for testing

[Citation]
NameString=Test Citation

[Processing]
DelimiterString=|

[Values]
AKT1|GRP
EGFR|GRP
A|B|P
";

    #[test]
    fn test_parse_namespace() {
        let resource = parse_bel_resource(NAMESPACE.lines()).unwrap();
        assert_eq!(resource.get("Namespace", "Keyword"), Some("TEST"));
        assert_eq!(resource.get("Citation", "NameString"), Some("Test Citation"));
        assert_eq!(resource.values.len(), 3);
        assert_eq!(resource.values["AKT1"], Some("GRP".to_string()));
    }

    #[test]
    fn test_values_split_at_last_delimiter() {
        let resource = parse_bel_resource(NAMESPACE.lines()).unwrap();
        assert_eq!(resource.values["A|B"], Some("P".to_string()));
    }

    #[test]
    fn test_custom_delimiter_and_missing_encoding() {
        let text = "[Processing]\nDelimiterString=;\n[Values]\nfoo;bar\nlonely\n";
        let resource = parse_bel_resource(text.lines()).unwrap();
        assert_eq!(resource.delimiter(), ";");
        assert_eq!(resource.values["foo"], Some("bar".to_string()));
        assert_eq!(resource.values["lonely"], None);
    }

    #[test]
    fn test_keys_keep_their_case() {
        let resource = parse_bel_resource("[Author]\nNameString = Ada\n[Values]\n".lines()).unwrap();
        assert_eq!(resource.get("Author", "NameString"), Some("Ada"));
        assert!(resource.is_empty());
    }

    #[test]
    fn test_missing_values_header_is_invalid() {
        let err = parse_bel_resource("[Namespace]\nKeyword=X\n".lines()).unwrap_err();
        assert!(matches!(err, Error::InvalidResource { .. }));
    }

    #[test]
    fn test_key_before_section_is_invalid() {
        let err = parse_bel_resource("Keyword=X\n[Values]\n".lines()).unwrap_err();
        assert!(matches!(err, Error::InvalidResource { .. }));
    }

    #[test]
    fn test_require_reports_missing_key() {
        let resource = parse_bel_resource(NAMESPACE.lines()).unwrap();
        assert!(resource.require("Namespace", "Keyword").is_ok());
        let err = resource.require("Author", "NameString").unwrap_err();
        assert!(err.to_string().contains("[Author] NameString"));
    }
}
