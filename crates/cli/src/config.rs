//! Configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional:
//!
//! - `STORELENS_BASE_URL` - Base URL of the Fake Store API
//!   (default: `https://fakestoreapi.com`)
//! - `STORELENS_TIMEOUT_SECS` - Per-request timeout in whole seconds
//!   (default: `30`, must be at least 1)
//! - `RUST_LOG` - Log filter, e.g. `storelens=debug`

use std::time::Duration;

use thiserror::Error;

/// Base URL of the public Fake Store API.
const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Per-request timeout applied when `STORELENS_TIMEOUT_SECS` is unset.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Fake Store API connection settings.
#[derive(Debug, Clone)]
pub struct StoreApiConfig {
    /// Base URL the collection endpoints hang off, without a trailing slash.
    pub base_url: String,
    /// Timeout applied to each request.
    pub timeout: Duration,
}

impl StoreApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `STORELENS_TIMEOUT_SECS` is set but is not
    /// a positive whole number of seconds.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists (ignore errors if it doesn't)
        let _ = dotenvy::dotenv();

        let base_url = get_env_or_default("STORELENS_BASE_URL", DEFAULT_BASE_URL);
        let timeout_var = std::env::var("STORELENS_TIMEOUT_SECS").ok();
        let timeout_secs = parse_timeout_secs(timeout_var.as_deref())?;

        Ok(Self {
            base_url: normalize_base_url(&base_url),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Get an environment variable or return a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Strip trailing slashes so endpoint paths can be appended blindly.
fn normalize_base_url(raw: &str) -> String {
    raw.trim_end_matches('/').to_string()
}

/// Parse the request timeout, falling back to the default when unset.
fn parse_timeout_secs(raw: Option<&str>) -> Result<u64, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_TIMEOUT_SECS);
    };

    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        Ok(_) => Err(ConfigError::InvalidEnvVar(
            "STORELENS_TIMEOUT_SECS".to_string(),
            "timeout must be at least 1 second".to_string(),
        )),
        Err(_) => Err(ConfigError::InvalidEnvVar(
            "STORELENS_TIMEOUT_SECS".to_string(),
            format!("not a whole number of seconds: {raw}"),
        )),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_defaults_when_unset() {
        assert_eq!(
            parse_timeout_secs(None).expect("default timeout"),
            DEFAULT_TIMEOUT_SECS
        );
    }

    #[test]
    fn test_timeout_parses_whole_seconds() {
        assert_eq!(parse_timeout_secs(Some("5")).expect("timeout"), 5);
        assert_eq!(parse_timeout_secs(Some(" 120 ")).expect("timeout"), 120);
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        assert!(parse_timeout_secs(Some("0")).is_err());
    }

    #[test]
    fn test_non_numeric_timeout_is_rejected() {
        assert!(parse_timeout_secs(Some("soon")).is_err());
        assert!(parse_timeout_secs(Some("1.5")).is_err());
        assert!(parse_timeout_secs(Some("-3")).is_err());
    }

    #[test]
    fn test_base_url_loses_trailing_slashes() {
        assert_eq!(
            normalize_base_url("https://fakestoreapi.com/"),
            "https://fakestoreapi.com"
        );
        assert_eq!(normalize_base_url("http://localhost:8080//"), "http://localhost:8080");
        assert_eq!(
            normalize_base_url("https://fakestoreapi.com"),
            "https://fakestoreapi.com"
        );
    }
}
