//! HTTP controller endpoints for the artist gateway API.
//!
//! Controllers extract request parameters, delegate to the service layer and turn results
//! into HTTP responses. Error-to-status mapping is handled by the error types themselves.
//! Endpoints are documented for OpenAPI through utoipa.

pub mod artist;
