//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (NEWSDESK_*)
//! 2. The `FT_API_KEY` credential variable
//! 3. TOML config file (if NEWSDESK_CONFIG_FILE set)
//! 4. Built-in defaults
//!
//! The loaded config is read-only for the lifetime of the process.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Environment variable holding the upstream credential.
pub const API_KEY_ENV: &str = "FT_API_KEY";

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (NEWSDESK_*)
/// 2. `FT_API_KEY`
/// 3. TOML config file (if NEWSDESK_CONFIG_FILE set)
/// 4. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Credential sent to the content search API as `X-Api-Key`.
    ///
    /// Set via FT_API_KEY or NEWSDESK_API_KEY.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Root URL of the content search API.
    ///
    /// Set via NEWSDESK_API_BASE_URL environment variable.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Interface to listen on.
    ///
    /// Set via NEWSDESK_HOST environment variable.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on.
    ///
    /// Set via NEWSDESK_PORT environment variable.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Upstream request timeout in milliseconds.
    ///
    /// Set via NEWSDESK_TIMEOUT_MS environment variable.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// User-Agent string for upstream requests.
    ///
    /// Set via NEWSDESK_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Directory served for any path that is not a page route.
    ///
    /// Set via NEWSDESK_STATIC_DIR environment variable.
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

fn default_api_base_url() -> String {
    "https://api.ft.com".into()
}

fn default_host() -> String {
    "127.0.0.1".into()
}

fn default_port() -> u16 {
    8000
}

fn default_timeout_ms() -> u64 {
    5_000
}

fn default_user_agent() -> String {
    "newsdesk/0.1".into()
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("./static")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: default_api_base_url(),
            host: default_host(),
            port: default_port(),
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
            static_dir: default_static_dir(),
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Socket address the HTTP server binds to.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if `host` is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip = self.host.parse().map_err(|_| ConfigError::Invalid {
            field: "host".into(),
            reason: format!("not an IP address: {}", self.host),
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    /// Build the layered figment without extracting it.
    fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("NEWSDESK_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment
            .merge(Env::raw().only(&[API_KEY_ENV]).map(|_| "api_key".into()))
            .merge(
                Env::prefixed("NEWSDESK_")
                    .ignore(&["CONFIG_FILE"])
                    .map(|key| key.as_str().to_lowercase().into())
                    .split("__"),
            )
    }

    /// Return the upstream credential, failing if it was never configured.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if the API key is not set or blank.
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.api_key.as_deref().filter(|key| !key.trim().is_empty()).ok_or_else(|| ConfigError::Missing {
            field: "api_key".into(),
            hint: format!("Set the {API_KEY_ENV} environment variable, e.g. {API_KEY_ENV}=FOO123 newsdesk"),
        })
    }
}
