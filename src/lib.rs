//! Rcurator - seed-based track curation from the Spotify catalog
//!
//! This library wraps the Spotify search and recommendation endpoints and
//! drives a small seed-picking session: search for up to three tracks, pick
//! one seed per search, then request recommendations similar to those seeds.

/// Client modules for interacting with the remote catalog
pub mod clients;
/// Plain-text rendering of search results and recommendations
pub mod render;
/// Session state machine for the curate flow
pub mod session;
