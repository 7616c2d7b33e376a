//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument. Absence is reported
//! as `Ok(None)` (or `Ok(false)` for deletes), never as an error, so
//! callers can tell "not found" apart from a storage failure.

pub mod director_repo;
pub mod genre_repo;
pub mod movie_repo;

pub use director_repo::DirectorRepo;
pub use genre_repo::GenreRepo;
pub use movie_repo::MovieRepo;
