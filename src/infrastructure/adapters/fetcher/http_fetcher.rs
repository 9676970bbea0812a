//! HTTP Document Fetcher - fetches documents from the external content host
//!
//! Implements `DocumentFetcherPort` by issuing a single GET against a URL
//! built from a template, e.g.
//! `https://drive.google.com/uc?export=download&id={id}`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::application::ports::{DocumentFetcherPort, FetchError};

/// Placeholder substituted with the request identifier.
const ID_PLACEHOLDER: &str = "{id}";

/// HTTP document fetcher configuration
#[derive(Debug, Clone)]
pub struct HttpFetcherConfig {
    /// URL template containing `{id}`.
    pub url_template: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for HttpFetcherConfig {
    fn default() -> Self {
        Self {
            url_template: "https://drive.google.com/uc?export=download&id={id}".to_string(),
            timeout_secs: 30,
        }
    }
}

impl HttpFetcherConfig {
    pub fn new(url_template: impl Into<String>) -> Self {
        Self {
            url_template: url_template.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP document fetcher
pub struct HttpDocumentFetcher {
    client: Client,
    config: HttpFetcherConfig,
}

impl HttpDocumentFetcher {
    pub fn new(config: HttpFetcherConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn with_default_config() -> Result<Self, FetchError> {
        Self::new(HttpFetcherConfig::default())
    }

    /// Build the upstream URL for an identifier. The identifier is opaque and
    /// substituted as-is.
    fn document_url(&self, id: &str) -> String {
        self.config.url_template.replace(ID_PLACEHOLDER, id)
    }
}

#[async_trait]
impl DocumentFetcherPort for HttpDocumentFetcher {
    async fn fetch(&self, id: &str) -> Result<Vec<u8>, FetchError> {
        let url = self.document_url(id);

        tracing::debug!(url = %url, "Fetching document from upstream");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else if e.is_connect() {
                FetchError::Network(format!("Cannot connect to upstream: {}", e))
            } else {
                FetchError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        // Whole body buffered before relaying; bounds document size to memory.
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::InvalidResponse(format!("Failed to read body: {}", e)))?
            .to_vec();

        tracing::info!(document_id = %id, size = body.len(), "Document fetched");

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = HttpFetcherConfig::default();
        assert!(config.url_template.contains("{id}"));
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_config_builder() {
        let config = HttpFetcherConfig::new("http://example.com/doc/{id}").with_timeout(5);
        assert_eq!(config.url_template, "http://example.com/doc/{id}");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_document_url_substitution() {
        let fetcher =
            HttpDocumentFetcher::new(HttpFetcherConfig::new("http://host/uc?id={id}")).unwrap();
        assert_eq!(fetcher.document_url("abc123"), "http://host/uc?id=abc123");
    }
}
