//! docgate - document relay + user directory gateway
//!
//! Two unrelated capabilities behind one HTTP surface:
//! - a resource proxy that fetches a binary document from an external content
//!   host by opaque identifier and relays it unmodified;
//! - a user directory with create/read/delete over in-memory records, unique
//!   by username.
//!
//! Layout:
//! - Application: port traits (`UserStorePort`, `DocumentFetcherPort`)
//! - Infrastructure: HTTP layer, in-memory store, outbound fetcher adapter

pub mod application;
pub mod config;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
