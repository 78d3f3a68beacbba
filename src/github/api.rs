use reqwest::Client;
use serde_json::Value;
use std::time::Duration as StdDuration;

use crate::config::Config;
use crate::error::{Error, Result};

/// A resource file inside a GitHub repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceLocation {
    /// Repository owner.
    pub owner: &'static str,
    /// Repository name.
    pub repo: &'static str,
    /// Path of the file inside the repository.
    pub path: &'static str,
}

/// Curation of Neurodegeneration Supporting Ontology names.
pub const CONSO_NAMES: ResourceLocation = ResourceLocation {
    owner: "pharmacome",
    repo: "conso",
    path: "export/conso-names.belns",
};

/// Curation of Neurodegeneration Supporting Ontology identifiers.
pub const CONSO_IDENTIFIERS: ResourceLocation = ResourceLocation {
    owner: "pharmacome",
    repo: "conso",
    path: "export/conso.belns",
};

/// `FamPlex` names.
pub const FAMPLEX: ResourceLocation = ResourceLocation {
    owner: "sorgerlab",
    repo: "famplex",
    path: "export/famplex.belns",
};

/// Client for resolving resource files on GitHub
#[derive(Clone)]
pub struct GitHubClient {
    api_url: String,
    raw_url: String,
    token: Option<String>,
    client: Client,
}

impl GitHubClient {
    /// Create a new GitHub client from config
    pub fn new(config: &Config) -> Self {
        Self {
            api_url: config.github_api_url.trim_end_matches('/').to_string(),
            raw_url: config.github_raw_url.trim_end_matches('/').to_string(),
            token: config.github_token.clone(),
            client: Client::builder()
                .timeout(StdDuration::from_secs(config.timeout_secs))
                .user_agent(config.user_agent())
                .build()
                .unwrap_or_default(),
        }
    }

    /// Make a GET request to the GitHub API
    async fn get_with_query(&self, path: &str, query: &[(&str, &str)]) -> Result<Value> {
        let url = format!("{}{}", self.api_url, path);
        let mut request = self.client
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .query(query);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let resp = request
            .send()
            .await
            .map_err(|e| Error::Network(format!("Request to {} failed: {}", path, e)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::github_status(
                format!("Request to {} returned {}", path, status),
                status.as_u16(),
            ));
        }

        resp.json().await
            .map_err(|e| Error::github(format!("Invalid JSON from {}: {}", path, e)))
    }

    /// SHA of the most recent commit touching `path`
    pub async fn get_github_hash(&self, owner: &str, repo: &str, path: &str) -> Result<String> {
        let api_path = format!("/repos/{owner}/{repo}/commits");
        let json = self.get_with_query(&api_path, &[("path", path.trim_start_matches('/'))]).await?;

        let commits = json.as_array()
            .ok_or_else(|| Error::github(format!("Expected a list of commits from {api_path}")))?;

        let sha = commits.first()
            .and_then(|c| c["sha"].as_str())
            .ok_or_else(|| Error::github(format!("No commits found for {owner}/{repo}/{path}")))?;

        tracing::debug!("Latest commit for {owner}/{repo}/{path} is {sha}");
        Ok(sha.to_string())
    }

    /// Raw URL of `path` pinned at its most recent commit
    pub async fn get_github_url(&self, owner: &str, repo: &str, path: &str) -> Result<String> {
        let sha = self.get_github_hash(owner, repo, path).await?;
        Ok(format!(
            "{}/{owner}/{repo}/{sha}/{}",
            self.raw_url,
            path.trim_start_matches('/')
        ))
    }

    /// Raw URL of a well-known resource pinned at its most recent commit
    pub async fn get_resource_url(&self, location: ResourceLocation) -> Result<String> {
        self.get_github_url(location.owner, location.repo, location.path).await
    }
}
