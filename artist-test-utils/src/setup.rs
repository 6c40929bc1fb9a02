use mockito::{Mock, Server, ServerGuard};

use crate::constant::{TEST_ARTIST_PATH, TEST_BASE_PATH, TEST_EVENTS_PATH};

/// Mock upstream server with the endpoints registered by a [`TestBuilder`](crate::TestBuilder).
pub struct TestSetup {
    pub server: ServerGuard,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    pub async fn new() -> Self {
        let server = Server::new_async().await;

        TestSetup {
            server,
            mocks: Vec::new(),
        }
    }

    /// Base URL both mock feeds are served below
    pub fn base_url(&self) -> String {
        format!("{}{}", self.server.url(), TEST_BASE_PATH)
    }

    /// Path of the artist feed relative to [`Self::base_url`]
    pub fn artist_path(&self) -> &'static str {
        TEST_ARTIST_PATH
    }

    /// Path of the event feed relative to [`Self::base_url`]
    pub fn events_path(&self) -> &'static str {
        TEST_EVENTS_PATH
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// Calls `assert()` on all mocks created by the TestBuilder to verify
    /// they were invoked the expected number of times.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
