//! docgate server binary
//!
//! Bootstrap: config, logging, state wiring, HTTP server with graceful
//! shutdown.

use std::sync::Arc;

use docgate::config::{load_config, print_config};
use docgate::infrastructure::adapters::{HttpDocumentFetcher, HttpFetcherConfig};
use docgate::infrastructure::http::{AppState, HttpServer, ServerConfig};
use docgate::infrastructure::memory::InMemoryUserStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (env vars > config file > defaults)
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // Initialize logging
    let log_filter = format!("{},docgate={},tower_http=debug", config.log.level, config.log.level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("docgate - document relay + user directory gateway");
    print_config(&config);

    // Wire up state: in-memory store and outbound fetcher
    let user_store = Arc::new(InMemoryUserStore::new());

    let fetcher_config = HttpFetcherConfig::new(config.upstream.url_template.clone())
        .with_timeout(config.upstream.timeout_secs);
    let fetcher = Arc::new(
        HttpDocumentFetcher::new(fetcher_config)
            .map_err(|e| anyhow::anyhow!("Failed to build fetcher: {}", e))?,
    );

    let state = AppState::new(user_store, fetcher);

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
