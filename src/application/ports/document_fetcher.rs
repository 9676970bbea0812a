//! Document Fetcher Port
//!
//! Abstract interface for fetching a binary document from the external
//! content host by opaque identifier.

use async_trait::async_trait;
use thiserror::Error;

/// Fetch error
#[derive(Debug, Error)]
pub enum FetchError {
    /// Upstream answered with a non-success status.
    #[error("Upstream returned HTTP {status}")]
    UpstreamStatus { status: u16 },

    /// Request did not complete within the configured timeout.
    #[error("Upstream request timed out")]
    Timeout,

    /// Transport-level failure (connect, DNS, read).
    #[error("Network error: {0}")]
    Network(String),

    /// The response body could not be read.
    #[error("Invalid upstream response: {0}")]
    InvalidResponse(String),
}

/// Document Fetcher Port
///
/// One outbound request per call, no retry, no caching. The identifier is
/// opaque and passed through without shape validation. The whole body is
/// buffered before being returned.
#[async_trait]
pub trait DocumentFetcherPort: Send + Sync {
    async fn fetch(&self, id: &str) -> Result<Vec<u8>, FetchError>;
}
