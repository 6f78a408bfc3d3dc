//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `TIENDA_API_BASE_URL` - Backend base URL
//!   (default: `https://security-module.onrender.com/api/v1`)
//! - `TIENDA_SESSION_DIR` - Directory for the persisted session cache
//!   (default: `.tienda`)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Default backend base URL, including the API version prefix.
pub const DEFAULT_BASE_URL: &str = "https://security-module.onrender.com/api/v1";

const DEFAULT_SESSION_DIR: &str = ".tienda";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Backend base URL (no trailing slash).
    pub base_url: String,
    /// Directory holding the persisted session cache.
    pub session_dir: PathBuf,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `TIENDA_API_BASE_URL` is set but is not a
    /// valid absolute URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url =
            std::env::var("TIENDA_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let session_dir = std::env::var("TIENDA_SESSION_DIR")
            .map_or_else(|_| PathBuf::from(DEFAULT_SESSION_DIR), PathBuf::from);

        Self::new(&base_url, session_dir)
    }

    /// Build a configuration from an explicit base URL.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `base_url` is not a valid absolute URL.
    pub fn new(base_url: &str, session_dir: PathBuf) -> Result<Self, ConfigError> {
        Url::parse(base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("TIENDA_API_BASE_URL".to_string(), e.to_string())
        })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session_dir,
        })
    }
}
