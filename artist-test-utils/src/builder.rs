//! Declarative test builder for mock upstream feeds.
//!
//! The builder queues mock endpoint definitions which are registered on a fresh mockito
//! server during the final `build()` call.

use serde_json::Value;

use crate::{
    constant::{TEST_ARTIST_PATH, TEST_BASE_PATH, TEST_EVENTS_PATH},
    error::TestError,
    setup::TestSetup,
};

/// A queued mock endpoint
struct MockEndpoint {
    path: String,
    status: usize,
    body: Option<String>,
    expected_requests: usize,
}

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up the mock artist and event feeds. Methods can be
/// chained together and finalized with `build()` to create a complete test setup.
pub struct TestBuilder {
    endpoints: Vec<MockEndpoint>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no mock endpoints configured.
    pub fn new() -> Self {
        Self {
            endpoints: Vec::new(),
        }
    }

    /// Serve the provided artists from the artist feed.
    ///
    /// # Arguments
    /// - `artists` - Artist objects returned as a JSON array
    /// - `expected_requests` - Number of times the feed should be requested
    pub fn with_artist_feed(self, artists: Vec<Value>, expected_requests: usize) -> Self {
        self.with_json_body(TEST_ARTIST_PATH, Value::Array(artists), expected_requests)
    }

    /// Serve the provided events from the event feed.
    ///
    /// # Arguments
    /// - `events` - Event objects returned as a JSON array
    /// - `expected_requests` - Number of times the feed should be requested
    pub fn with_event_feed(self, events: Vec<Value>, expected_requests: usize) -> Self {
        self.with_json_body(TEST_EVENTS_PATH, Value::Array(events), expected_requests)
    }

    /// Serve both feeds from the reference catalog, each expected `expected_requests` times.
    pub fn with_reference_catalog(self, expected_requests: usize) -> Self {
        self.with_artist_feed(crate::fixtures::catalog::artists(), expected_requests)
            .with_event_feed(crate::fixtures::catalog::events(), expected_requests)
    }

    /// Answer the artist feed with the provided status and an empty body
    pub fn with_artist_feed_status(self, status: usize, expected_requests: usize) -> Self {
        self.with_status(TEST_ARTIST_PATH, status, expected_requests)
    }

    /// Answer the event feed with the provided status and an empty body
    pub fn with_event_feed_status(self, status: usize, expected_requests: usize) -> Self {
        self.with_status(TEST_EVENTS_PATH, status, expected_requests)
    }

    /// Serve a raw, possibly malformed, body with status 200 on the provided feed path
    pub fn with_raw_body(
        mut self,
        feed_path: &str,
        body: &str,
        expected_requests: usize,
    ) -> Self {
        self.endpoints.push(MockEndpoint {
            path: feed_path.to_string(),
            status: 200,
            body: Some(body.to_string()),
            expected_requests,
        });
        self
    }

    fn with_json_body(mut self, feed_path: &str, body: Value, expected_requests: usize) -> Self {
        self.endpoints.push(MockEndpoint {
            path: feed_path.to_string(),
            status: 200,
            body: Some(body.to_string()),
            expected_requests,
        });
        self
    }

    fn with_status(mut self, feed_path: &str, status: usize, expected_requests: usize) -> Self {
        self.endpoints.push(MockEndpoint {
            path: feed_path.to_string(),
            status,
            body: None,
            expected_requests,
        });
        self
    }

    /// Build the test setup, registering every queued endpoint on a new mock server.
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new().await;

        for endpoint in self.endpoints {
            let mut mock = setup
                .server
                .mock("GET", format!("{}{}", TEST_BASE_PATH, endpoint.path).as_str())
                .with_status(endpoint.status)
                .expect(endpoint.expected_requests);

            if let Some(body) = endpoint.body {
                mock = mock
                    .with_header("content-type", "application/json")
                    .with_body(body);
            }

            setup.mocks.push(mock.create_async().await);
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
