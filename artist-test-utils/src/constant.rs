//! Upstream feed locations used across all tests.
//!
//! The mock server serves both feeds below a common base path, mirroring a deployment where
//! the feeds live under a shared prefix rather than at the host root.

/// Base path below the mock server root that both feeds are served from
pub static TEST_BASE_PATH: &str = "/api";

/// Path of the artist feed relative to the base URL
pub static TEST_ARTIST_PATH: &str = "/artist.json";

/// Path of the event feed relative to the base URL
pub static TEST_EVENTS_PATH: &str = "/events.json";
