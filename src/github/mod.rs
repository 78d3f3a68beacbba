//! GitHub integration.
//!
//! Resolves the raw URL of the most recent commit of a resource file kept in
//! a GitHub repository, so documents can pin an exact namespace version.

/// API client for GitHub commit lookups
pub mod api;

// Re-export key components
pub use api::{GitHubClient, ResourceLocation, CONSO_IDENTIFIERS, CONSO_NAMES, FAMPLEX};
