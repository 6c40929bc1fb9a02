use std::{thread, time::Duration};

use artist_gateway::server::{
    error::upstream::UpstreamError,
    upstream::{UpstreamClient, UpstreamFeed},
};
use artist_test_utils::prelude::*;

use crate::util::TestSetupExt;

/// Expect the full artist collection to be decoded
#[tokio::test]
async fn fetches_full_artist_collection() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_artist_feed(catalog::artists(), 1)
        .build()
        .await?;
    let upstream = test.upstream_client();

    let artists = upstream.fetch_artists().await.unwrap();

    assert_eq!(artists.len(), 9);
    assert_eq!(artists[0].id, Some(21));
    assert_eq!(artists[8].name.as_deref(), Some("Magenta"));
    assert!(artists.iter().all(|a| a.events.is_empty()));

    test.assert_mocks();

    Ok(())
}

/// Expect the full event collection to be decoded with artist references intact
#[tokio::test]
async fn fetches_full_event_collection() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_event_feed(catalog::events(), 1)
        .build()
        .await?;
    let upstream = test.upstream_client();

    let events = upstream.fetch_events().await.unwrap();

    assert_eq!(events.len(), 13);
    assert!(events.iter().all(|e| e.artists.is_some()));
    assert!(events[2].hidden_from_search);

    test.assert_mocks();

    Ok(())
}

/// Expect feeds to be requested as JSON below the configured base path
#[tokio::test]
async fn requests_json_from_configured_path() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let mock = test
        .server
        .mock("GET", "/api/events.json")
        .match_header("accept", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .expect(1)
        .create_async()
        .await;
    let upstream = test.upstream_client();

    let events = upstream.fetch_events().await.unwrap();

    assert!(events.is_empty());
    mock.assert_async().await;

    Ok(())
}

/// Expect an unreachable upstream to surface as a transport failure
#[tokio::test]
async fn unreachable_upstream_is_transport_error() -> Result<(), TestError> {
    let upstream = UpstreamClient::new(
        "http://127.0.0.1:1",
        TEST_ARTIST_PATH,
        TEST_EVENTS_PATH,
        Duration::from_secs(5),
    )?;

    let result = upstream.fetch_artists().await;

    assert!(matches!(
        result,
        Err(UpstreamError::Transport {
            feed: UpstreamFeed::Artists,
            ..
        })
    ));
    assert!(!result.unwrap_err().is_unavailable());

    Ok(())
}

/// Expect a slow upstream to surface as a timeout, counted as unavailable
#[tokio::test]
async fn slow_upstream_is_timeout() -> Result<(), TestError> {
    let mut test = TestBuilder::new().build().await?;
    let _mock = test
        .server
        .mock("GET", "/api/artist.json")
        .with_status(200)
        .with_chunked_body(|w| {
            thread::sleep(Duration::from_millis(1000));
            w.write_all(b"[]")
        })
        .create_async()
        .await;
    let upstream = UpstreamClient::new(
        &test.base_url(),
        TEST_ARTIST_PATH,
        TEST_EVENTS_PATH,
        Duration::from_millis(100),
    )?;

    let result = upstream.fetch_artists().await;

    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(matches!(
        err,
        UpstreamError::Timeout {
            feed: UpstreamFeed::Artists
        }
    ));
    assert!(err.is_unavailable());

    Ok(())
}
