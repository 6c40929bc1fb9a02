//! Reference catalog of nine artists and thirteen events.
//!
//! Artist 21 (HRH Prog) is listed by events 1, 7 and 13. Artist 26 (Ozric Tentacles) is
//! listed by events 1 and 5. Event 8 lists artist 100, which is absent from the artist feed.
//! Event 7 omits `hiddenFromSearch`; events 3 to 13 carry no time zone or start date.

use serde_json::{json, Value};

/// Artists in upstream order
pub fn artists() -> Vec<Value> {
    vec![
        artist(21, "HRH Prog", "hrh-prog", 1),
        artist(22, "Colosseum", "colosseum", 2),
        artist(23, "Mostly Autumn", "mostly-autumn", 3),
        artist(24, "The Enid", "the-enid", 4),
        artist(25, "Threshold", "threshold", 5),
        artist(26, "Ozric Tentacles", "ozric-tentacles", 6),
        json!({
            "name": "The Crazy World of Arthur Brown",
            "id": "27",
            "imgSrc": "//some-base-url/arthur-brown.jpg",
            "url": "/the-crazy-world-of-arthur-brown-tickets/artist/27",
            "rank": 7
        }),
        artist(28, "Moon Safari", "moon-safari", 8),
        artist(29, "Magenta", "magenta", 9),
    ]
}

/// Events in upstream order
pub fn events() -> Vec<Value> {
    vec![
        json!({
            "title": "Fusion Prog", "id": "1", "dateStatus": "singleDate",
            "timeZone": "Europe/London", "startDate": "2020-10-17T00:00:00",
            "artists": [{"id": "21"}, {"id": "23"}, {"id": "26"}],
            "venue": {"id": "41"}, "hiddenFromSearch": false
        }),
        json!({
            "title": "Blues In Space", "id": "2", "dateStatus": "singleDate",
            "timeZone": "Europe/London", "startDate": "2020-10-18T00:00:00",
            "artists": [{"id": "22"}, {"id": "25"}, {"id": "27"}],
            "venue": {"id": "42"}, "hiddenFromSearch": false
        }),
        json!({
            "title": "Jazz Live", "id": "3", "dateStatus": "singleDate",
            "artists": [{"id": "24"}, {"id": "28"}, {"id": "29"}],
            "venue": {"id": "43"}, "hiddenFromSearch": true
        }),
        json!({
            "title": "Metal Event", "id": "4", "dateStatus": "multiDate",
            "artists": [{"id": "24"}], "venue": {"id": "44"}, "hiddenFromSearch": false
        }),
        json!({
            "title": "Pop Event", "id": "5", "dateStatus": "none",
            "artists": [{"id": "26"}], "venue": {"id": "42"}, "hiddenFromSearch": false
        }),
        json!({
            "title": "Dance Live", "id": "6", "dateStatus": "singleDate",
            "artists": [{"id": "28"}], "venue": {"id": "45"}, "hiddenFromSearch": false
        }),
        json!({
            "title": "A festival Live", "id": "7", "dateStatus": "singleDate",
            "artists": [{"id": "21"}, {"id": "22"}], "venue": {"id": "45"}
        }),
        json!({
            "title": "Trip Hop", "id": "8", "dateStatus": "singleDate",
            "artists": [{"id": "100"}], "venue": {"id": "41"}, "hiddenFromSearch": false
        }),
        json!({
            "title": "Another one", "id": "9", "dateStatus": "singleDate",
            "artists": [{"id": "25"}, {"id": "29"}, {"id": "29"}],
            "venue": {"id": "40"}, "hiddenFromSearch": false
        }),
        json!({
            "title": "An Event", "id": "10", "dateStatus": "multiDate",
            "artists": [{"id": "24"}], "venue": {"id": "42"}, "hiddenFromSearch": false
        }),
        json!({
            "title": "Harisson Live", "id": "11", "dateStatus": "singleDate",
            "artists": [{"id": "22"}, {"id": "23"}, {"id": "24"}],
            "venue": {"id": "44"}, "hiddenFromSearch": false
        }),
        json!({
            "title": "Paranoid Live", "id": "12", "dateStatus": "none",
            "artists": [{"id": "27"}], "venue": {"id": "45"}, "hiddenFromSearch": false
        }),
        json!({
            "title": "Huge Live", "id": "13", "dateStatus": "multiDate",
            "artists": [{"id": "21"}, {"id": "22"}, {"id": "24"}, {"id": "28"}, {"id": "29"}],
            "venue": {"id": "41"}, "hiddenFromSearch": false
        }),
    ]
}

fn artist(artist_id: i64, name: &str, slug: &str, rank: i64) -> Value {
    json!({
        "name": name,
        "id": artist_id.to_string(),
        "imgSrc": format!("//some-base-url/{}.jpg", slug),
        "url": format!("/{}-tickets/artist/{}", slug, artist_id),
        "rank": rank,
    })
}
