//! Configuration Loader
//!
//! Merges configuration sources, highest priority first:
//! 1. Environment variables
//! 2. Configuration file (config.toml / config.local.toml)
//! 3. Defaults

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// Configuration loading error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// Configuration file search names
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// Load the application configuration.
///
/// Environment variables use the `DOCGATE_` prefix with `__` as the level
/// separator, e.g.:
/// - `DOCGATE_SERVER__PORT=8080`
/// - `DOCGATE_UPSTREAM__URL_TEMPLATE=http://host/doc/{id}`
///
/// A bare `PORT` variable is also honored as a port override, matching the
/// conventional deployment surface for this kind of gateway.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// Load configuration from an explicit file path, or the default search
/// locations when `None`.
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. Defaults (lowest priority)
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default(
            "upstream.url_template",
            "https://drive.google.com/uc?export=download&id={id}",
        )?
        .set_default("upstream.timeout_secs", 30)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. Configuration file, if present
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. Environment variables (highest priority)
    builder = builder.add_source(
        Environment::with_prefix("DOCGATE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // Bare PORT override, above everything else
    if let Ok(raw) = std::env::var("PORT") {
        let port: u16 = raw
            .parse()
            .map_err(|_| ConfigError::ParseError(format!("Invalid PORT value: {}", raw)))?;
        builder = builder.set_override("server.port", i64::from(port))?;
    }

    let config = builder.build()?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize config: {}", e)))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// Validate configuration invariants.
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.upstream.url_template.is_empty() {
        return Err(ConfigError::ValidationError(
            "Upstream URL template cannot be empty".to_string(),
        ));
    }

    if !config.upstream.url_template.contains("{id}") {
        return Err(ConfigError::ValidationError(
            "Upstream URL template must contain an {id} placeholder".to_string(),
        ));
    }

    Ok(())
}

/// Log the effective configuration at startup.
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Upstream template: {}", config.upstream.url_template);
    tracing::info!("Upstream timeout: {}s", config.upstream.timeout_secs);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_template() {
        let mut config = AppConfig::default();
        config.upstream.url_template = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_template_without_placeholder() {
        let mut config = AppConfig::default();
        config.upstream.url_template = "http://host/doc".to_string();
        assert!(validate_config(&config).is_err());
    }
}
