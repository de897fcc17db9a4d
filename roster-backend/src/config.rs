use std::env::var;
use std::fmt;
use std::time::Duration;

use dotenvy::dotenv;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("ADMIN_PASSWORD environment variable is required and must not be empty")]
    MissingAdminPassword,
}

/// Application configuration with environment variable overrides
#[derive(Clone)]
pub struct Config {
    /// Password for the `admin` Basic Auth user
    /// Env: ADMIN_PASSWORD (required)
    pub admin_password: String,

    /// Server port
    /// Env: PORT (default: 8080)
    pub port: u16,

    /// Path segment all API routes are nested under
    /// Env: API_VERSION (default: "v1")
    pub api_version: String,

    /// Request body size limit in bytes
    /// Env: REQUEST_BODY_LIMIT (default: 1048576 = 1MB)
    pub request_body_limit: usize,

    /// Request timeout in seconds
    /// Env: REQUEST_TIMEOUT_SECS (default: 30)
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenv(); //for debugging mostly
        Self::from_lookup(|key| var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let admin_password = lookup("ADMIN_PASSWORD")
            .filter(|password| !password.is_empty())
            .ok_or(ConfigError::MissingAdminPassword)?;
        let defaults = Self::with_admin_password(admin_password);

        Ok(Self {
            port: parse_or(&lookup, "PORT", defaults.port),
            api_version: lookup("API_VERSION")
                .filter(|version| !version.is_empty())
                .unwrap_or_else(|| defaults.api_version.clone()),
            request_body_limit: parse_or(&lookup, "REQUEST_BODY_LIMIT", defaults.request_body_limit),
            request_timeout: Duration::from_secs(parse_or(
                &lookup,
                "REQUEST_TIMEOUT_SECS",
                defaults.request_timeout.as_secs(),
            )),
            ..defaults
        })
    }

    /// Create configuration with all default values and the given admin password
    pub fn with_admin_password(admin_password: impl Into<String>) -> Self {
        Self {
            admin_password: admin_password.into(),
            port: 8080,
            api_version: "v1".to_string(),
            request_body_limit: 1024 * 1024, // 1 MB
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("admin_password", &"<redacted>")
            .field("port", &self.port)
            .field("api_version", &self.api_version)
            .field("request_body_limit", &self.request_body_limit)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

/// Parse a variable or return the default value
fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    lookup(key)
        .and_then(|val| val.parse().ok())
        .unwrap_or(default)
}
