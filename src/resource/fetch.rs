//! Resource retrieval from filesystem paths and URLs.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::resource::parse::{parse_bel_resource, BelResource};
use crate::utils::{expand_path, is_url};

/// Fetches resource lines from paths or URLs.
#[derive(Clone)]
pub struct ResourceClient {
    client: Client,
}

impl Default for ResourceClient {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl ResourceClient {
    /// Create a client using the timeout and user agent from config
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .user_agent(config.user_agent())
                .build()
                .unwrap_or_default(),
        }
    }

    /// Read the lines of a resource from a path or `http(s)://` URL.
    pub async fn get_lines(&self, location: &str) -> Result<Vec<String>> {
        if is_url(location) {
            self.get_url_lines(location).await
        } else {
            read_path_lines(location)
        }
    }

    async fn get_url_lines(&self, url: &str) -> Result<Vec<String>> {
        info!("Downloading resource from {url}");
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::missing(url, format!("request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::missing(url, format!("server returned {status}")));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| Error::Network(format!("Reading body of {url} failed: {e}")))?;

        Ok(body.lines().map(String::from).collect())
    }

    /// Fetch and parse a resource.
    ///
    /// Parse failures are reported as invalid resources at `location`; a
    /// resource without values is an empty resource.
    pub async fn get_bel_resource(&self, location: &str) -> Result<BelResource> {
        let lines = self.get_lines(location).await?;
        resource_from_lines(location, &lines)
    }
}

/// Read resource lines from a local path (`~` and `$VARS` are expanded).
pub fn read_path_lines(location: &str) -> Result<Vec<String>> {
    let path = expand_path(location);
    debug!("Reading resource from {}", path.display());
    if !path.is_file() {
        return Err(Error::missing(location, "no such file"));
    }
    let content = fs_err::read_to_string(&path).map_err(|e| Error::io(e, path.clone()))?;
    Ok(content.lines().map(String::from).collect())
}

/// Parse already-retrieved lines, tagging errors with `location`.
pub fn resource_from_lines<S: AsRef<str>>(location: &str, lines: &[S]) -> Result<BelResource> {
    let resource = parse_bel_resource(lines).map_err(|e| match e {
        Error::InvalidResource { message, .. } => Error::invalid(location, message),
        other => other,
    })?;

    if resource.is_empty() {
        return Err(Error::empty(location));
    }

    Ok(resource)
}

/// Fetch and parse a resource with a default client.
pub async fn get_bel_resource(location: &str) -> Result<BelResource> {
    ResourceClient::default().get_bel_resource(location).await
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use std::io::Write;

    const ANNOTATION: &str = "\
[AnnotationDefinition]
Keyword=TESTAN1
DescriptionString=Test annotation

[Processing]
DelimiterString=|

[Values]
TestAnnot1|O
TestAnnot2|O
";

    #[test]
    fn test_read_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ANNOTATION.as_bytes()).unwrap();
        let lines = read_path_lines(file.path().to_str().unwrap()).unwrap();
        assert_eq!(lines.len(), ANNOTATION.lines().count());
    }

    #[test]
    fn test_missing_path() {
        let err = read_path_lines("/nonexistent/bel_resources_test.belanno").unwrap_err();
        assert!(matches!(err, Error::MissingResource { .. }));
    }

    #[test]
    fn test_empty_resource() {
        let err = resource_from_lines("x.belns", &["[Namespace]", "Keyword=X", "[Values]"]).unwrap_err();
        assert!(matches!(err, Error::EmptyResource { ref location } if location == "x.belns"));
    }

    #[test]
    fn test_invalid_resource_is_tagged() {
        let err = resource_from_lines("bad.belns", &["not a resource"]).unwrap_err();
        assert_eq!(err.location(), Some("bad.belns"));
        assert!(matches!(err, Error::InvalidResource { .. }));
    }

    #[tokio::test]
    async fn test_get_from_url() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/test_an_1.belanno")
            .with_status(200)
            .with_body(ANNOTATION)
            .create_async()
            .await;

        let url = format!("{}/test_an_1.belanno", server.url());
        let resource = ResourceClient::default().get_bel_resource(&url).await.unwrap();

        mock.assert_async().await;
        assert_eq!(resource.values.len(), 2);
        assert_eq!(resource.values["TestAnnot1"], Some("O".to_string()));
    }

    #[tokio::test]
    async fn test_url_not_found_is_missing() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/gone.belns")
            .with_status(404)
            .create_async()
            .await;

        let url = format!("{}/gone.belns", server.url());
        let err = ResourceClient::default().get_bel_resource(&url).await.unwrap_err();
        assert!(matches!(err, Error::MissingResource { .. }));
    }
}
