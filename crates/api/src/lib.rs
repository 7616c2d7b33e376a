//! HTTP API for the movie catalog.
//!
//! Handlers translate requests into repository calls and repository
//! results into JSON responses; all state flows through [`state::AppState`].

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
