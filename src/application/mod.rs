//! Application Layer
//!
//! Port definitions shared by the HTTP layer and the infrastructure
//! implementations.

pub mod ports;

pub use ports::{DocumentFetcherPort, FetchError, UserRecord, UserStoreError, UserStorePort};
