//! Request handlers, one module per resource.

pub mod director;
pub mod genre;
pub mod movie;
