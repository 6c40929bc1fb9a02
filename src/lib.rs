//! Artist gateway: a read-only aggregation endpoint composing artist metadata with the
//! events that reference the artist, both fetched from upstream JSON feeds.

pub mod model;
pub mod server;
