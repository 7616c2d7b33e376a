//! Shared types and domain errors for the movie catalog service.

pub mod error;
pub mod types;
