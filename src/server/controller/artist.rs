//! Artist endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::artist::{ArtistDto, EventDto},
    server::{error::Error, model::app::AppState, service::artist::ArtistService},
};

/// OpenAPI tag grouping the artist endpoints
pub static ARTIST_TAG: &str = "artist";

/// Get an artist with the events it performs at
///
/// Fetches the artist and event feeds, attaches every event listing the artist and returns
/// the composed artist.
///
/// # Responses
/// - 200 (Success): The artist with its events
/// - 404 (Not Found): No artist with the requested ID exists upstream, empty body
/// - 500 (Internal Server Error): An upstream feed is unavailable or failed, empty body
#[utoipa::path(
    get,
    path = "/artist/{id}",
    tag = ARTIST_TAG,
    params(
        ("id" = i64, Path, description = "Upstream artist ID")
    ),
    responses(
        (status = 200, description = "Artist with its events", body = ArtistDto),
        (status = 404, description = "Artist not found"),
        (status = 500, description = "Upstream feed unavailable or failed")
    ),
)]
pub async fn get_artist(
    State(state): State<AppState>,
    Path(artist_id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    tracing::info!(artist_id, "handling artist request");

    let artist_service = ArtistService::new(&state.upstream);
    let artist = artist_service.get_artist(artist_id).await?;

    Ok((StatusCode::OK, Json(artist)))
}

/// Get the events an artist performs at
///
/// Does not check that the artist exists; an unknown artist yields an empty list.
///
/// # Responses
/// - 200 (Success): Events listing the artist, in upstream order
/// - 500 (Internal Server Error): The event feed is unavailable or failed, empty body
#[utoipa::path(
    get,
    path = "/artist/{id}/events",
    tag = ARTIST_TAG,
    params(
        ("id" = i64, Path, description = "Upstream artist ID")
    ),
    responses(
        (status = 200, description = "Events featuring the artist", body = Vec<EventDto>),
        (status = 500, description = "Upstream feed unavailable or failed")
    ),
)]
pub async fn get_artist_events(
    State(state): State<AppState>,
    Path(artist_id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    let artist_service = ArtistService::new(&state.upstream);
    let events = artist_service.get_events_for_artist(artist_id).await?;

    Ok((StatusCode::OK, Json(events)))
}
