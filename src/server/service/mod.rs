//! Service layer for business logic.
//!
//! Services coordinate requests to the upstream feeds and implement the composition of
//! artists with their events.

pub mod artist;
