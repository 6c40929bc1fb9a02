//! Errors raised while loading configuration from the environment.

use std::fmt::Display;

use thiserror::Error;

/// Reasons the process configuration could not be loaded at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required variable is unset or blank
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// A variable is set but its value could not be parsed
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Name of the offending variable
        var: String,
        /// Why the value was rejected
        reason: String,
    },
}

impl ConfigError {
    /// Rejects the value of `var` for the provided reason
    pub fn invalid(var: &str, reason: impl Display) -> Self {
        Self::InvalidEnvValue {
            var: var.to_string(),
            reason: reason.to_string(),
        }
    }
}
