//! Client for the upstream artist and event feeds.
//!
//! Both feeds are unauthenticated, non-paginated JSON arrays served from fixed paths below a
//! shared base URL. Every fetch retrieves the full collection; responses are classified into
//! [`UpstreamError`] variants so the service layer can tell an unavailable feed apart from
//! other transport failures.

use std::{fmt, time::Duration};

use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;

use crate::{
    model::artist::{ArtistDto, EventDto},
    server::{config::Config, error::upstream::UpstreamError},
};

/// Identifies which upstream feed a request targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpstreamFeed {
    /// The artist collection
    Artists,
    /// The event collection
    Events,
}

impl fmt::Display for UpstreamFeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Artists => f.write_str("artist"),
            Self::Events => f.write_str("event"),
        }
    }
}

/// HTTP client for the upstream feeds.
///
/// Wraps a single pooled [`reqwest::Client`], so clones share connections.
#[derive(Clone, Debug)]
pub struct UpstreamClient {
    http: reqwest::Client,
    artist_url: String,
    events_url: String,
}

impl UpstreamClient {
    /// Creates a client for the feeds described by the provided base URL and paths.
    ///
    /// # Arguments
    /// - `base_url` - Base URL both feeds are served from
    /// - `artist_path` - Path of the artist feed relative to `base_url`
    /// - `events_path` - Path of the event feed relative to `base_url`
    /// - `timeout` - Timeout applied to every request
    ///
    /// # Returns
    /// - `Ok(UpstreamClient)` - Client ready to issue requests
    /// - `Err(reqwest::Error)` - The underlying HTTP client could not be built
    pub fn new(
        base_url: &str,
        artist_path: &str,
        events_path: &str,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            artist_url: join_url(base_url, artist_path),
            events_url: join_url(base_url, events_path),
        })
    }

    /// Creates a client from the process configuration
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Self::new(
            &config.upstream_base_url,
            &config.artist_path,
            &config.events_path,
            config.upstream_timeout,
        )
    }

    /// Fetches the full artist collection
    pub async fn fetch_artists(&self) -> Result<Vec<ArtistDto>, UpstreamError> {
        self.fetch_collection(UpstreamFeed::Artists, &self.artist_url)
            .await
    }

    /// Fetches the full event collection
    pub async fn fetch_events(&self) -> Result<Vec<EventDto>, UpstreamError> {
        self.fetch_collection(UpstreamFeed::Events, &self.events_url)
            .await
    }

    /// Absolute URL of the provided feed
    pub fn feed_url(&self, feed: UpstreamFeed) -> &str {
        match feed {
            UpstreamFeed::Artists => &self.artist_url,
            UpstreamFeed::Events => &self.events_url,
        }
    }

    async fn fetch_collection<T: DeserializeOwned>(
        &self,
        feed: UpstreamFeed,
        url: &str,
    ) -> Result<Vec<T>, UpstreamError> {
        tracing::debug!(%feed, url, "fetching upstream feed");

        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| classify_send_error(feed, e))?;

        let status = response.status();
        if status.is_server_error() {
            return Err(UpstreamError::Unavailable { feed, status });
        }
        if !status.is_success() {
            return Err(UpstreamError::UnexpectedStatus { feed, status });
        }

        let collection = response
            .json::<Vec<T>>()
            .await
            .map_err(|e| classify_body_error(feed, e))?;

        tracing::debug!(%feed, entries = collection.len(), "fetched upstream feed");

        Ok(collection)
    }
}

fn classify_send_error(feed: UpstreamFeed, error: reqwest::Error) -> UpstreamError {
    if error.is_timeout() {
        UpstreamError::Timeout { feed }
    } else {
        UpstreamError::Transport {
            feed,
            source: error,
        }
    }
}

// The body is streamed after headers arrive, so the timeout can still fire here.
fn classify_body_error(feed: UpstreamFeed, error: reqwest::Error) -> UpstreamError {
    if error.is_timeout() {
        UpstreamError::Timeout { feed }
    } else if error.is_decode() {
        UpstreamError::Decode {
            feed,
            source: error,
        }
    } else {
        UpstreamError::Transport {
            feed,
            source: error,
        }
    }
}

fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    format!("{}/{}", base, path)
}
