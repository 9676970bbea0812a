//! Application State
//!
//! The shared state handed to every handler. Ports are injected at
//! construction; nothing in this crate holds module-level mutable state.

use std::sync::Arc;
use std::time::Instant;

use crate::application::ports::{DocumentFetcherPort, UserStorePort};

/// Application state
pub struct AppState {
    pub user_store: Arc<dyn UserStorePort>,
    pub fetcher: Arc<dyn DocumentFetcherPort>,
    /// Process start, for the health endpoint's uptime.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(user_store: Arc<dyn UserStorePort>, fetcher: Arc<dyn DocumentFetcherPort>) -> Self {
        Self {
            user_store,
            fetcher,
            started_at: Instant::now(),
        }
    }
}
