//! # API Configuration
//!
//! Where the backend lives.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Base URL Priority                                    │
//! │                                                                         │
//! │  1. Explicit value passed by the caller (highest priority)             │
//! │                                                                         │
//! │  2. SERVICEHUB_API_URL environment variable                             │
//! │                                                                         │
//! │  Neither set: ApiError::Config. Signup is the only networked flow,     │
//! │  so the error surfaces on the signup screen and nowhere else.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;
use url::Url;

use crate::error::{ApiError, ApiResult};

/// Environment variable naming the backend base URL.
pub const API_URL_ENV: &str = "SERVICEHUB_API_URL";

/// Route for account creation, joined onto the base URL.
const SIGNUP_PATH: &str = "/api/auth/signup";

/// Configuration for the backend connection.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Backend base URL (e.g., "https://api.servicehub.example").
    pub base_url: String,
}

impl ApiConfig {
    /// Creates a config with an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiConfig {
            base_url: base_url.into(),
        }
    }

    /// Creates a config from the provided value or the environment.
    ///
    /// Having no base URL at all is a configuration error, not a default:
    /// there is no sensible backend to guess.
    pub fn from_env_or(base_url: Option<String>) -> ApiResult<Self> {
        let base_url = base_url
            .or_else(|| std::env::var(API_URL_ENV).ok())
            .ok_or_else(|| {
                ApiError::Config(format!("API base URL is not configured. Set {API_URL_ENV}."))
            })?;

        Ok(ApiConfig { base_url })
    }

    /// Validates the base URL.
    ///
    /// ## Rules
    /// - Must parse as a URL
    /// - Scheme must be http or https
    pub fn validate(&self) -> ApiResult<()> {
        let url = Url::parse(&self.base_url)?;

        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ApiError::Config(format!(
                    "Base URL must be http or https, got: {}",
                    other
                )));
            }
        }

        debug!(base_url = %self.base_url, "API config validated");
        Ok(())
    }

    /// The full signup endpoint URL.
    pub fn signup_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), SIGNUP_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_url_wins() {
        let config = ApiConfig::from_env_or(Some("https://api.example.com".to_string())).unwrap();
        assert_eq!(config.base_url, "https://api.example.com");
    }

    #[test]
    fn test_missing_url_is_a_config_error() {
        // No other test sets this variable, so removal cannot race
        std::env::remove_var(API_URL_ENV);

        let err = ApiConfig::from_env_or(None).unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
        assert!(err.to_string().contains(API_URL_ENV));
    }

    #[test]
    fn test_signup_url_handles_trailing_slash() {
        let config = ApiConfig::new("https://api.example.com/");
        assert_eq!(
            config.signup_url(),
            "https://api.example.com/api/auth/signup"
        );

        let config = ApiConfig::new("https://api.example.com");
        assert_eq!(
            config.signup_url(),
            "https://api.example.com/api/auth/signup"
        );
    }

    #[test]
    fn test_validate_rejects_garbage() {
        assert!(ApiConfig::new("not a url").validate().is_err());
        assert!(ApiConfig::new("ftp://example.com").validate().is_err());
        assert!(ApiConfig::new("https://api.example.com").validate().is_ok());
    }
}
