//! Composition of artists with the events they perform at.

use crate::{
    model::artist::{ArtistDto, EventDto},
    server::{error::artist::ArtistError, error::Error, upstream::UpstreamClient},
};

/// Composes artists with the events that feature them.
///
/// Both collections are fetched in full from the upstream feeds on every call; nothing is
/// cached between requests.
pub struct ArtistService<'a> {
    upstream: &'a UpstreamClient,
}

impl<'a> ArtistService<'a> {
    /// Creates a new instance of [`ArtistService`]
    pub fn new(upstream: &'a UpstreamClient) -> Self {
        Self { upstream }
    }

    /// Resolves an artist by ID with its related events attached.
    ///
    /// The artist feed is fetched first and a failure there aborts the lookup before the
    /// event feed is contacted. The event feed is fetched even when no artist matched, and
    /// only then is the missing artist reported.
    ///
    /// # Arguments
    /// - `artist_id` - Upstream ID of the artist to resolve
    ///
    /// # Returns
    /// - `Ok(ArtistDto)` - The first artist matching `artist_id` with its events populated
    /// - `Err(Error::ArtistError(ArtistError::NotFound))` - No artist carries `artist_id`
    /// - `Err(Error::UpstreamError)` - Either feed failed to respond or decode
    pub async fn get_artist(&self, artist_id: i64) -> Result<ArtistDto, Error> {
        tracing::info!(artist_id, "fetching artist by id");

        let artists = self.upstream.fetch_artists().await?;
        let artist = select_artist(artists, artist_id);

        let events = self.get_events_for_artist(artist_id).await?;

        let Some(mut artist) = artist else {
            return Err(ArtistError::NotFound(artist_id).into());
        };
        artist.events = events;

        Ok(artist)
    }

    /// Retrieves the events featuring an artist, in upstream order.
    ///
    /// Does not check that the artist exists; an artist without events yields an empty list.
    /// The `artists` back-reference of every returned event is cleared.
    pub async fn get_events_for_artist(&self, artist_id: i64) -> Result<Vec<EventDto>, Error> {
        tracing::info!(artist_id, "fetching events by artist id");

        let events = self.upstream.fetch_events().await?;
        let events = events_for_artist(events, artist_id);

        tracing::debug!(artist_id, events = events.len(), "filtered events for artist");

        Ok(events)
    }
}

/// Selects the first artist carrying the provided ID; later duplicates and entries without
/// an ID are ignored
pub fn select_artist(artists: Vec<ArtistDto>, artist_id: i64) -> Option<ArtistDto> {
    artists
        .into_iter()
        .find(|artist| artist.id == Some(artist_id))
}

/// Keeps the events featuring the provided artist and strips their `artists` lists
pub fn events_for_artist(events: Vec<EventDto>, artist_id: i64) -> Vec<EventDto> {
    events
        .into_iter()
        .filter(|event| event.features_artist(artist_id))
        .map(|mut event| {
            event.artists = None;
            event
        })
        .collect()
}
