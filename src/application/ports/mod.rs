//! Application Ports
//!
//! Outbound port definitions: the seams between the request-handling layer
//! and the infrastructure implementations.

mod document_fetcher;
mod user_store;

pub use document_fetcher::{DocumentFetcherPort, FetchError};
pub use user_store::{UserRecord, UserStoreError, UserStorePort};
