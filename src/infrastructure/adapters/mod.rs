//! Infrastructure Adapters

pub mod fetcher;

pub use fetcher::{HttpDocumentFetcher, HttpFetcherConfig};
