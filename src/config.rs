//! Process configuration
//!
//! Both binaries read their settings from the environment once at startup and
//! pass the resulting structs down explicitly. Every variable has a default,
//! so a bare `cargo run` talks to a lookup service on `127.0.0.1:5000`.

use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_LOOKUP_PORT: u16 = 5000;
pub const DEFAULT_LOOKUP_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

/// Invalid configuration value
#[derive(Debug, Error)]
#[error("invalid value for {var}: {value:?}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
}

/// Settings for the lookup service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_LOOKUP_PORT,
        }
    }
}

impl ServerConfig {
    /// Read `RAIL_LOOKUP_HOST` and `RAIL_LOOKUP_PORT`
    ///
    /// # Errors
    /// Returns `ConfigError` if either variable is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// # Errors
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            host: parse_var(&var, "RAIL_LOOKUP_HOST")?.unwrap_or(defaults.host),
            port: parse_var(&var, "RAIL_LOOKUP_PORT")?.unwrap_or(defaults.port),
        })
    }
}

/// Settings for the conversational agent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentConfig {
    /// Base URL of the lookup service; tools live under `/tool/<name>`
    pub lookup_url: String,
    pub gemini_api_url: String,
    /// Empty means no `key` query parameter is sent
    pub gemini_api_key: String,
    pub http_timeout: Option<Duration>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            lookup_url: DEFAULT_LOOKUP_URL.to_string(),
            gemini_api_url: DEFAULT_GEMINI_API_URL.to_string(),
            gemini_api_key: String::new(),
            http_timeout: None,
        }
    }
}

impl AgentConfig {
    /// Read `RAIL_LOOKUP_URL`, `GEMINI_API_URL`, `GEMINI_API_KEY` and
    /// `RAIL_HTTP_TIMEOUT_SECS`
    ///
    /// # Errors
    /// Returns `ConfigError` if the timeout is set but not a whole number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// # Errors
    /// Returns `ConfigError` if the timeout is set but not a whole number.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let timeout_secs: Option<u64> = parse_var(&var, "RAIL_HTTP_TIMEOUT_SECS")?;
        Ok(Self {
            lookup_url: var("RAIL_LOOKUP_URL").unwrap_or(defaults.lookup_url),
            gemini_api_url: var("GEMINI_API_URL").unwrap_or(defaults.gemini_api_url),
            gemini_api_key: var("GEMINI_API_KEY").unwrap_or(defaults.gemini_api_key),
            http_timeout: timeout_secs.map(Duration::from_secs),
        })
    }

    /// HTTP client shared by the Gemini classifier and the tool client
    ///
    /// # Errors
    /// Returns the underlying error if the TLS backend cannot be initialized.
    pub fn http_client(&self) -> reqwest::Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.http_timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }
}

fn parse_var<T: std::str::FromStr>(
    var: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError> {
    match var(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError { var: name, value }),
    }
}
