//! Server application core modules.
//!
//! This module contains the server-side functionality of the artist gateway: HTTP routing,
//! request handlers, the aggregation service composing artists with their events, the
//! client used to reach the upstream JSON feeds, configuration and error handling.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod upstream;
