//! Tests for the get_artist_events endpoint.

use artist_gateway::{model::artist::EventDto, server::controller::artist::get_artist_events};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use super::*;

/// Expected: 200 OK with events 1 and 5 for artist 26
#[tokio::test]
async fn success_with_events() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_event_feed(catalog::events(), 1)
        .build()
        .await?;

    let resp = get_artist_events(State(test.app_state()), Path(26))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let events: Vec<EventDto> = serde_json::from_slice(&body_bytes(resp).await)?;
    assert_eq!(events.iter().filter_map(|e| e.id).collect::<Vec<_>>(), vec![1, 5]);

    test.assert_mocks();

    Ok(())
}

/// Expected: 200 OK with an empty array for an artist without events
#[tokio::test]
async fn success_with_empty_list() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_event_feed(catalog::events(), 1)
        .build()
        .await?;

    let resp = get_artist_events(State(test.app_state()), Path(999))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await, b"[]".to_vec());

    Ok(())
}

/// Expected: 500 Internal Server Error with an empty body
#[tokio::test]
async fn error_when_event_feed_unavailable() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_event_feed_status(503, 1)
        .build()
        .await?;

    let resp = get_artist_events(State(test.app_state()), Path(21))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_bytes(resp).await.is_empty());

    test.assert_mocks();

    Ok(())
}
