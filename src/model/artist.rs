use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::serde_helpers::{lenient_id, null_as_default};

/// An artist as delivered by the upstream artist feed, with `events` populated only
/// once the artist has been composed by [`ArtistService`](crate::server::service::artist::ArtistService).
///
/// An entry without an `id` still decodes but never matches a lookup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArtistDto {
    #[serde(default, deserialize_with = "lenient_id::deserialize")]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub img_src: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// Ordering weight, not guaranteed unique; `null` decodes as 0
    #[serde(default, deserialize_with = "null_as_default")]
    pub rank: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub events: Vec<EventDto>,
}

/// An event from the upstream event feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    #[serde(default, deserialize_with = "lenient_id::deserialize")]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    /// Opaque date category such as `singleDate`, `multiDate` or `none`
    #[serde(default)]
    pub date_status: Option<String>,
    #[serde(default)]
    pub time_zone: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDateTime>,
    /// Artists performing at the event. Input only: stripped before an event is
    /// returned to API consumers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artists: Option<Vec<ArtistRefDto>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hidden_from_search: bool,
}

/// Partial artist reference embedded in an event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ArtistRefDto {
    #[serde(default, deserialize_with = "lenient_id::deserialize")]
    pub id: Option<i64>,
}

impl EventDto {
    /// Whether the artist with the provided ID is listed among this event's artists.
    /// References without an ID are ignored.
    pub fn features_artist(&self, artist_id: i64) -> bool {
        self.artists.as_deref().is_some_and(|artists| {
            artists
                .iter()
                .any(|artist| artist.id == Some(artist_id))
        })
    }
}
