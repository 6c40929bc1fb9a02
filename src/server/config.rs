//! Process-wide configuration loaded from the environment at startup.

use std::{net::SocketAddr, time::Duration};

use crate::server::error::config::ConfigError;

/// Default relative path of the upstream artist feed
pub static DEFAULT_ARTIST_PATH: &str = "/artist.json";
/// Default relative path of the upstream event feed
pub static DEFAULT_EVENTS_PATH: &str = "/events.json";
/// Default bind address for the HTTP server
pub static DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
/// Default timeout applied to every upstream request
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// Immutable configuration shared by the HTTP server and the upstream client.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL both upstream feeds are served from
    pub upstream_base_url: String,
    /// Path of the artist feed relative to `upstream_base_url`
    pub artist_path: String,
    /// Path of the event feed relative to `upstream_base_url`
    pub events_path: String,
    /// Timeout applied to each upstream request
    pub upstream_timeout: Duration,
    /// Address the HTTP server listens on
    pub bind_addr: SocketAddr,
    /// Emit logs as JSON rather than plain text
    pub log_json: bool,
}

impl Config {
    /// Builds the configuration from environment variables.
    ///
    /// `UPSTREAM_BASE_URL` is required; every other variable falls back to a default.
    ///
    /// # Returns
    /// - `Ok(Config)` - Configuration loaded successfully
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable is set but could not be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from the provided variable lookup.
    ///
    /// Values are trimmed and an empty value counts as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars(lookup);

        let upstream_base_url = vars.required("UPSTREAM_BASE_URL")?;
        validate_base_url("UPSTREAM_BASE_URL", &upstream_base_url)?;
        let artist_path = vars
            .optional("UPSTREAM_ARTIST_PATH")
            .unwrap_or_else(|| DEFAULT_ARTIST_PATH.to_string());
        let events_path = vars
            .optional("UPSTREAM_EVENTS_PATH")
            .unwrap_or_else(|| DEFAULT_EVENTS_PATH.to_string());

        let upstream_timeout = match vars.optional("UPSTREAM_TIMEOUT_SECS") {
            Some(value) => parse_timeout("UPSTREAM_TIMEOUT_SECS", &value)?,
            None => Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        };

        let bind_addr = vars
            .optional("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = parse_bind_addr("BIND_ADDR", &bind_addr)?;

        let log_json = match vars.optional("LOG_JSON") {
            Some(value) => parse_bool("LOG_JSON", &value)?,
            None => false,
        };

        Ok(Self {
            upstream_base_url,
            artist_path,
            events_path,
            upstream_timeout,
            bind_addr,
            log_json,
        })
    }
}

struct Vars<F>(F);

impl<F: Fn(&str) -> Option<String>> Vars<F> {
    fn required(&self, var: &str) -> Result<String, ConfigError> {
        self.optional(var)
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    }

    fn optional(&self, var: &str) -> Option<String> {
        (self.0)(var)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }
}

fn validate_base_url(var: &str, value: &str) -> Result<(), ConfigError> {
    let url = reqwest::Url::parse(value).map_err(|e| ConfigError::invalid(var, e))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ConfigError::invalid(
            var,
            format!("unsupported scheme {scheme:?}"),
        )),
    }
}

fn parse_timeout(var: &str, value: &str) -> Result<Duration, ConfigError> {
    match value.parse::<u64>() {
        Ok(0) => Err(ConfigError::invalid(var, "timeout must be greater than zero")),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(e) => Err(ConfigError::invalid(var, e)),
    }
}

fn parse_bind_addr(var: &str, value: &str) -> Result<SocketAddr, ConfigError> {
    value
        .parse::<SocketAddr>()
        .map_err(|e| ConfigError::invalid(var, e))
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => Err(ConfigError::invalid(
            var,
            format!("expected a boolean, got {other:?}"),
        )),
    }
}
