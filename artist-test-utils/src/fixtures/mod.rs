//! JSON fixtures shaped like the upstream feeds.

pub mod catalog;
pub mod factory;
