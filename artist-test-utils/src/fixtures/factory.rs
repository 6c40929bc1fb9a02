use serde_json::{json, Value};

/// Create an upstream artist object.
///
/// IDs are encoded as strings, the way the upstream feed delivers them.
pub fn mock_artist(artist_id: i64, name: &str, rank: i64) -> Value {
    let slug = name.to_lowercase().replace(' ', "-");

    json!({
        "name": name,
        "id": artist_id.to_string(),
        "imgSrc": format!("//some-base-url/{}.jpg", slug),
        "url": format!("/{}-tickets/artist/{}", slug, artist_id),
        "rank": rank,
    })
}

/// Create an upstream event object listing the provided artist IDs.
pub fn mock_event(event_id: i64, title: &str, artist_ids: &[i64]) -> Value {
    let artists: Vec<Value> = artist_ids
        .iter()
        .map(|id| json!({ "id": id.to_string() }))
        .collect();

    json!({
        "title": title,
        "id": event_id.to_string(),
        "dateStatus": "singleDate",
        "artists": artists,
        "venue": { "id": "41" },
        "hiddenFromSearch": false,
    })
}
