//! Errors raised while resolving an artist.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failure resolving an artist by ID.
#[derive(Error, Debug)]
pub enum ArtistError {
    /// No artist in the upstream artist feed carries the requested ID
    #[error("Artist ID {0} not found in upstream artist feed")]
    NotFound(i64),
}

impl IntoResponse for ArtistError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => {
                tracing::debug!("{}", self);

                StatusCode::NOT_FOUND.into_response()
            }
        }
    }
}
