//! Site configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; defaults reproduce the event as announced.
//!
//! - `SITE_HOST` - Bind address (default: 127.0.0.1)
//! - `SITE_PORT` - Listen port (default: 3000)
//! - `SITE_BASE_URL` - Public URL for the site (default: <http://localhost:3000>)
//! - `SITE_DATA_DIR` - Directory for persisted registrations and drink selections (default: data)
//! - `EVENT_STARTS_AT` - RFC 3339 start of the grand opening (default: 2025-03-15T10:00:00+02:00)
//! - `ADMIN_USERNAME` - Dashboard username (default: admin)
//! - `ADMIN_PASSWORD` - Dashboard password (default: arisfarm2025)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use chrono::{DateTime, FixedOffset};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

const DEFAULT_EVENT_STARTS_AT: &str = "2025-03-15T10:00:00+02:00";
const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "arisfarm2025";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Site application configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the site
    pub base_url: String,
    /// Directory backing the key/value storage
    pub data_dir: PathBuf,
    /// When the grand opening starts
    pub event_starts_at: DateTime<FixedOffset>,
    /// Dashboard credentials
    pub admin: AdminCredentials,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

/// The single username/password pair that unlocks the dashboard.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: SecretString,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl AdminCredentials {
    /// Check a submitted username and password.
    #[must_use]
    pub fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password.expose_secret()
    }

    /// Whether the password is still the one printed on the invitation.
    #[must_use]
    pub fn uses_default_password(&self) -> bool {
        self.password.expose_secret() == DEFAULT_ADMIN_PASSWORD
    }
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self {
            username: DEFAULT_ADMIN_USERNAME.to_string(),
            password: SecretString::from(DEFAULT_ADMIN_PASSWORD),
        }
    }
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("SITE_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("SITE_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("SITE_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("SITE_PORT".to_string(), e.to_string()))?;
        let base_url = get_env_or_default("SITE_BASE_URL", "http://localhost:3000");
        let data_dir = PathBuf::from(get_env_or_default("SITE_DATA_DIR", "data"));
        let event_starts_at = parse_event_start(&get_env_or_default(
            "EVENT_STARTS_AT",
            DEFAULT_EVENT_STARTS_AT,
        ))?;

        let admin = AdminCredentials {
            username: get_env_or_default("ADMIN_USERNAME", DEFAULT_ADMIN_USERNAME),
            password: SecretString::from(get_env_or_default(
                "ADMIN_PASSWORD",
                DEFAULT_ADMIN_PASSWORD,
            )),
        };

        Ok(Self {
            host,
            port,
            base_url,
            data_dir,
            event_starts_at,
            admin,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Configuration for tests and local tooling: defaults everywhere, data
    /// under `data_dir`.
    #[must_use]
    pub fn for_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            data_dir: data_dir.into(),
            event_starts_at: default_event_start(),
            admin: AdminCredentials::default(),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether cookies should be marked `Secure`.
    #[must_use]
    pub fn is_https(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse an RFC 3339 event start time.
fn parse_event_start(value: &str) -> Result<DateTime<FixedOffset>, ConfigError> {
    DateTime::parse_from_rfc3339(value)
        .map_err(|e| ConfigError::InvalidEnvVar("EVENT_STARTS_AT".to_string(), e.to_string()))
}

fn default_event_start() -> DateTime<FixedOffset> {
    // The constant is valid RFC 3339; fall back to the Unix epoch rather than panic
    DateTime::parse_from_rfc3339(DEFAULT_EVENT_STARTS_AT).unwrap_or_default()
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}
