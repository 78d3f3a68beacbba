//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.
//! Writers and clients receive these values explicitly; nothing reads them
//! from process-wide state after loading.

use dotenv::dotenv;
use std::env;
use crate::error::{Error, Result};

/// Default GitHub REST endpoint.
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Default host serving raw repository content.
pub const DEFAULT_GITHUB_RAW_URL: &str = "https://raw.githubusercontent.com";

/// Configuration for resource retrieval and writing.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Default author recorded in written resources
    pub author: String,
    /// Default author contact recorded in written resources
    pub contact: Option<String>,
    /// Base URL of the GitHub REST API
    pub github_api_url: String,
    /// Base URL for raw GitHub file content
    pub github_raw_url: String,
    /// Optional token sent to the GitHub API
    pub github_token: Option<String>,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
}

impl Config {
    /// User agent sent with HTTP requests (GitHub rejects requests without one).
    #[must_use]
    pub fn user_agent(&self) -> String {
        format!("{}/{}", self.app_name, self.app_version)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            author: "unknown".to_string(),
            contact: None,
            github_api_url: DEFAULT_GITHUB_API_URL.to_string(),
            github_raw_url: DEFAULT_GITHUB_RAW_URL.to_string(),
            github_token: None,
            timeout_secs: 30,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        if let Some(author) = env::var("BEL_RESOURCES_AUTHOR")
            .ok()
            .or_else(|| env::var("USER").ok())
            .or_else(|| env::var("USERNAME").ok())
            .filter(|a| !a.trim().is_empty())
        {
            config.author = author;
        }

        config.contact = env::var("BEL_RESOURCES_CONTACT").ok().filter(|c| !c.is_empty());

        if let Ok(url) = env::var("GITHUB_API_URL") {
            config.github_api_url = url.trim_end_matches('/').to_string();
        }

        if let Ok(url) = env::var("GITHUB_RAW_URL") {
            config.github_raw_url = url.trim_end_matches('/').to_string();
        }

        config.github_token = env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty());

        if let Ok(secs) = env::var("BEL_RESOURCES_TIMEOUT_SECS") {
            config.timeout_secs = secs.parse::<u64>().map_err(|_| {
                Error::config(
                    format!("BEL_RESOURCES_TIMEOUT_SECS is not a number: {secs}"),
                    "Set it to a whole number of seconds, e.g. 30",
                )
            })?;
        }

        Ok(config)
    }

    /// Check if a GitHub token is configured
    pub const fn has_github_token(&self) -> bool {
        self.github_token.is_some()
    }
}
