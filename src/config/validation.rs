use crate::config::types::{Config, FetcherConfig, ServerConfig, StorageConfig};
use crate::ConfigError;
use reqwest::header::HeaderValue;
use std::net::SocketAddr;
use url::Url;

const MAX_TIMEOUT_SECS: u64 = 300;
const MAX_REDIRECTS: usize = 20;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_server_config(&config.server)?;
    validate_fetcher_config(&config.fetcher)?;
    validate_storage_config(&config.storage)?;
    Ok(())
}

/// Validates server configuration
fn validate_server_config(config: &ServerConfig) -> Result<(), ConfigError> {
    config.bind.parse::<SocketAddr>().map_err(|e| {
        ConfigError::InvalidAddress(format!("'{}' is not a host:port address: {}", config.bind, e))
    })?;

    for origin in &config.allowed_origins {
        validate_origin(origin)?;
    }

    Ok(())
}

/// Validates a CORS origin entry
fn validate_origin(origin: &str) -> Result<(), ConfigError> {
    if origin == "*" {
        return Ok(());
    }

    let url = Url::parse(origin)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid allowed origin '{}': {}", origin, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "Allowed origin '{}' must use http or https",
            origin
        )));
    }

    // Origins are compared as header values, so they must be representable as one
    HeaderValue::from_str(origin.trim_end_matches('/')).map_err(|_| {
        ConfigError::Validation(format!("Allowed origin '{}' is not a valid header value", origin))
    })?;

    Ok(())
}

/// Validates fetcher configuration
fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if HeaderValue::from_str(&config.user_agent).is_err() {
        return Err(ConfigError::Validation(format!(
            "user_agent '{}' is not a valid header value",
            config.user_agent
        )));
    }

    if config.timeout_secs < 1 || config.timeout_secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be between 1 and {}, got {}",
            MAX_TIMEOUT_SECS, config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 || config.connect_timeout_secs > config.timeout_secs {
        return Err(ConfigError::Validation(format!(
            "connect_timeout_secs must be between 1 and timeout_secs ({}), got {}",
            config.timeout_secs, config.connect_timeout_secs
        )));
    }

    if config.max_redirects > MAX_REDIRECTS {
        return Err(ConfigError::Validation(format!(
            "max_redirects must be <= {}, got {}",
            MAX_REDIRECTS, config.max_redirects
        )));
    }

    Ok(())
}

/// Validates storage configuration
fn validate_storage_config(config: &StorageConfig) -> Result<(), ConfigError> {
    if config.database_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "database_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
