//! Error types for the artist gateway server.
//!
//! This module provides the error taxonomy of the service with specialized error types for
//! each domain (configuration, artist lookup, upstream feeds). All errors implement
//! `IntoResponse` for Axum HTTP responses and use `thiserror` for ergonomic error
//! definitions with automatic `Display` and `Error` trait implementations.

pub mod artist;
pub mod config;
pub mod upstream;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{artist::ArtistError, config::ConfigError, upstream::UpstreamError};

/// Main error type for the artist gateway.
///
/// Aggregates all domain-specific error types into a single unified error type. It uses
/// `thiserror`'s `#[from]` attribute to enable automatic conversion via the `?` operator.
/// The `IntoResponse` implementation maps errors to the HTTP responses consumers receive.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Artist errors (no artist matches the requested ID)
/// - Upstream errors (server errors, timeouts, transport and decoding failures)
/// - Startup errors (building the HTTP client, binding the HTTP listener)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Artist lookup error.
    #[error(transparent)]
    ArtistError(#[from] ArtistError),
    /// Failure fetching or decoding one of the upstream feeds.
    #[error(transparent)]
    UpstreamError(#[from] UpstreamError),
    /// HTTP client construction error.
    #[error(transparent)]
    HttpClientError(#[from] reqwest::Error),
    /// I/O error while starting or running the HTTP server.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl Error {
    /// Whether this error means an upstream feed is unavailable (server error or timeout)
    pub fn is_upstream_unavailable(&self) -> bool {
        matches!(self, Self::UpstreamError(err) if err.is_unavailable())
    }

    /// Whether this error means the requested artist does not exist upstream
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ArtistError(ArtistError::NotFound(_)))
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found with an empty body - No artist matches the requested ID
/// - 500 Internal Server Error with an empty body - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ArtistError(err) => err.into_response(),
            Self::UpstreamError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns an empty body so no upstream detail leaks to callers.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
