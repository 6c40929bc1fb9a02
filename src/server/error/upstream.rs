//! Errors raised while fetching the upstream feeds.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::upstream::UpstreamFeed;

/// Failure fetching one of the upstream JSON feeds.
///
/// `Unavailable` and `Timeout` together form the "upstream unavailable" class; every other
/// variant is a distinct failure that must still abort the request.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// The feed answered with a server error (5xx)
    #[error("Upstream {feed} feed unavailable: responded with {status}")]
    Unavailable {
        /// Feed the request targeted
        feed: UpstreamFeed,
        /// Status the feed answered with
        status: StatusCode,
    },
    /// The feed did not answer within the configured request timeout
    #[error("Upstream {feed} feed timed out")]
    Timeout {
        /// Feed the request targeted
        feed: UpstreamFeed,
    },
    /// The feed answered with a status that is neither success nor a server error
    #[error("Upstream {feed} feed responded with unexpected status {status}")]
    UnexpectedStatus {
        /// Feed the request targeted
        feed: UpstreamFeed,
        /// Status the feed answered with
        status: StatusCode,
    },
    /// The feed could not be reached (connection refused, DNS, TLS, ...)
    #[error("Failed to reach upstream {feed} feed: {source}")]
    Transport {
        /// Feed the request targeted
        feed: UpstreamFeed,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },
    /// The feed answered successfully but its body is not the expected JSON array
    #[error("Failed to decode upstream {feed} feed: {source}")]
    Decode {
        /// Feed the request targeted
        feed: UpstreamFeed,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },
}

impl UpstreamError {
    /// Whether this error belongs to the "upstream unavailable" class
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. } | Self::Timeout { .. })
    }

    /// The feed the failure originated from
    pub fn feed(&self) -> UpstreamFeed {
        match self {
            Self::Unavailable { feed, .. }
            | Self::Timeout { feed }
            | Self::UnexpectedStatus { feed, .. }
            | Self::Transport { feed, .. }
            | Self::Decode { feed, .. } => *feed,
        }
    }
}

impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        if self.is_unavailable() {
            tracing::error!(feed = %self.feed(), "Upstream unavailable: {}", self);
        } else {
            tracing::error!(feed = %self.feed(), "Upstream request failed: {}", self);
        }

        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
