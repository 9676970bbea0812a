//! Infrastructure Layer
//!
//! - HTTP: routing, handlers, server
//! - Memory: in-memory user store
//! - Adapters: outbound document fetcher

pub mod adapters;
pub mod http;
pub mod memory;
