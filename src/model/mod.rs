//! Wire-level data transfer objects shared by the upstream client and the HTTP API.

pub mod artist;
pub mod serde_helpers;
