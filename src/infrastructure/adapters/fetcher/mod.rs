//! Document Fetcher Adapter

mod http_fetcher;

pub use http_fetcher::{HttpDocumentFetcher, HttpFetcherConfig};
