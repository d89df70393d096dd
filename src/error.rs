//! Persistence errors
//!
//! None of these are fatal to a game: the learning bridge turns them into warnings and
//! keeps the in-memory model running.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("malformed frequency snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
    #[error("could not prepare the data directory: {0}")]
    Io(#[from] io::Error),
}
