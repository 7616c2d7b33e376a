/// All database primary keys are SQLite `INTEGER PRIMARY KEY` (rowid-backed).
pub type DbId = i64;
