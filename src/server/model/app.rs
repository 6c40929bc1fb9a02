//! Application state handed to every request handler.

use crate::server::upstream::UpstreamClient;

/// State shared by every request handler
#[derive(Clone)]
pub struct AppState {
    /// Client for the upstream artist and event feeds
    pub upstream: UpstreamClient,
}

impl From<UpstreamClient> for AppState {
    fn from(upstream: UpstreamClient) -> Self {
        Self { upstream }
    }
}
