//! Entity model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//!   (the shape returned to clients on read)
//! - `Deserialize` DTOs for the write operations the entity supports

pub mod director;
pub mod genre;
pub mod movie;
