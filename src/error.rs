//! Resource error types.
//!
//! The line sanitizer and section splitter never fail; everything layered on
//! top of them (fetching, key/value parsing, GitHub lookups) reports through
//! this enum.

use thiserror::Error;

/// Crate result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading, fetching, or writing BEL resources
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<std::path::PathBuf>,
    },

    /// Network error (connection, timeout, DNS)
    #[error("Network error: {0}")]
    Network(String),

    /// The resource could not be retrieved from its location
    #[error("Missing resource at {location}: {reason}")]
    MissingResource {
        /// Path or URL that was requested.
        location: String,
        /// Why retrieval failed.
        reason: String,
    },

    /// The resource was retrieved but contains no values
    #[error("Empty resource at {location}")]
    EmptyResource {
        /// Path or URL of the resource.
        location: String,
    },

    /// The resource content could not be parsed
    #[error("Invalid resource at {location}: {message}")]
    InvalidResource {
        /// Path or URL of the resource, or `<input>` for in-memory lines.
        location: String,
        /// Description of the parse failure.
        message: String,
    },

    /// GitHub API error with status context
    #[error("GitHub API error: {message}")]
    GitHub {
        /// Human-readable error description.
        message: String,
        /// HTTP status code, if from an HTTP response.
        status: Option<u16>,
        /// Actionable suggestion for resolving the error.
        hint: Option<&'static str>,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create a missing-resource error
    pub fn missing(location: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MissingResource {
            location: location.into(),
            reason: reason.into(),
        }
    }

    /// Create an empty-resource error
    pub fn empty(location: impl Into<String>) -> Self {
        Self::EmptyResource { location: location.into() }
    }

    /// Create an invalid-resource error
    pub fn invalid(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidResource {
            location: location.into(),
            message: message.into(),
        }
    }

    /// Create a GitHub error without a status
    pub fn github(message: impl Into<String>) -> Self {
        Self::GitHub {
            message: message.into(),
            status: None,
            hint: None,
        }
    }

    /// Create a GitHub error with HTTP status
    pub fn github_status(message: impl Into<String>, status: u16) -> Self {
        let hint = match status {
            401 => Some("Check the GITHUB_TOKEN environment variable"),
            403 => Some("Rate limited or forbidden - set GITHUB_TOKEN or wait before retrying"),
            404 => Some("The repository or path was not found"),
            422 => Some("The path query was rejected - check for typos"),
            500..=599 => Some("GitHub server error - try again later"),
            _ => None,
        };
        Self::GitHub {
            message: message.into(),
            status: Some(status),
            hint,
        }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Whether this is one of the resource errors (missing, empty, invalid)
    pub const fn is_resource_error(&self) -> bool {
        matches!(
            self,
            Self::MissingResource { .. } | Self::EmptyResource { .. } | Self::InvalidResource { .. }
        )
    }

    /// Location of the resource this error is about, if any
    pub fn location(&self) -> Option<&str> {
        match self {
            Self::MissingResource { location, .. }
            | Self::EmptyResource { location }
            | Self::InvalidResource { location, .. } => Some(location),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn github_status_provides_hints() {
        let err = Error::github_status("Unauthorized", 401);
        match err {
            Error::GitHub { hint: Some(h), .. } => {
                assert!(h.contains("GITHUB_TOKEN"));
            }
            _ => panic!("Expected GitHub error with hint"),
        }
    }

    #[test]
    fn resource_errors_are_grouped() {
        assert!(Error::missing("a.belns", "not found").is_resource_error());
        assert!(Error::empty("a.belns").is_resource_error());
        assert!(Error::invalid("a.belns", "bad").is_resource_error());
        assert!(!Error::github("nope").is_resource_error());
    }

    #[test]
    fn location_is_reported() {
        assert_eq!(Error::empty("x.belanno").location(), Some("x.belanno"));
        assert_eq!(Error::github("m").location(), None);
    }
}
