//! Storefront client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//! - `AMAZIN_API_BASE_URL` - Bookstore backend URL (default: `http://localhost:8080`)
//! - `AMAZIN_STORAGE_PATH` - Client-side key/value store file (default: `.amazin/storage.json`)
//! - `AMAZIN_DEFAULT_USER_ID` - User id used when none is stored (default: `user123`)
//! - `AMAZIN_TOAST_DURATION_MS` - How long a toast stays visible (default: 3000)
//! - `AMAZIN_TOAST_TRANSITION_MS` - Toast hide transition length (default: 300)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default backend URL.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Default location of the client-side store.
pub const DEFAULT_STORAGE_PATH: &str = ".amazin/storage.json";

/// User id used when no identifier has been stored yet.
pub const DEFAULT_USER_ID: &str = "user123";

const DEFAULT_TOAST_DURATION_MS: u64 = 3000;
const DEFAULT_TOAST_TRANSITION_MS: u64 = 300;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront client configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Base URL of the bookstore backend
    pub api_base_url: Url,
    /// Path of the JSON key/value store holding the current user id
    pub storage_path: PathBuf,
    /// Fallback user id when nothing is stored
    pub default_user_id: String,
    /// Toast timing
    pub toast: ToastConfig,
}

/// Toast notification timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastConfig {
    /// Time a toast stays fully shown before hiding
    pub duration: Duration,
    /// Length of the hide transition before the toast is removed
    pub transition: Duration,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(DEFAULT_TOAST_DURATION_MS),
            transition: Duration::from_millis(DEFAULT_TOAST_TRANSITION_MS),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let api_base_url = parse_base_url(
            "AMAZIN_API_BASE_URL",
            &get_or("AMAZIN_API_BASE_URL", DEFAULT_API_BASE_URL),
        )?;
        let storage_path = PathBuf::from(get_or("AMAZIN_STORAGE_PATH", DEFAULT_STORAGE_PATH));
        let default_user_id = get_or("AMAZIN_DEFAULT_USER_ID", DEFAULT_USER_ID);
        if default_user_id.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "AMAZIN_DEFAULT_USER_ID".to_string(),
                "must not be empty".to_string(),
            ));
        }

        let toast = ToastConfig {
            duration: parse_millis(
                "AMAZIN_TOAST_DURATION_MS",
                lookup("AMAZIN_TOAST_DURATION_MS"),
                DEFAULT_TOAST_DURATION_MS,
            )?,
            transition: parse_millis(
                "AMAZIN_TOAST_TRANSITION_MS",
                lookup("AMAZIN_TOAST_TRANSITION_MS"),
                DEFAULT_TOAST_TRANSITION_MS,
            )?,
        };

        Ok(Self {
            api_base_url,
            storage_path,
            default_user_id,
            toast,
        })
    }

    /// Replace the backend URL (e.g. from a command-line flag).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the URL is not an absolute http(s) URL.
    pub fn with_api_base_url(mut self, url: &str) -> Result<Self, ConfigError> {
        self.api_base_url = parse_base_url("--api-url", url)?;
        Ok(self)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse and validate an http(s) base URL.
fn parse_base_url(var_name: &str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("URL must use http or https, got: {}", url.scheme()),
        ));
    }
    Ok(url)
}

/// Parse an optional millisecond value with a default.
fn parse_millis(
    var_name: &str,
    value: Option<String>,
    default: u64,
) -> Result<Duration, ConfigError> {
    value.map_or(Ok(Duration::from_millis(default)), |raw| {
        raw.trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))
    })
}
