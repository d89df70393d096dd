//! Durable record of completed games
//!
//! The store is an append-only log of `(word, frequency snapshot)` pairs. Replaying it
//! in insertion order reconstructs the learned model.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::error::StoreError;
use crate::model::FrequencySnapshot;

/// One completed game as persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    /// Completed word, original spelling
    pub word: String,
    /// Full learned table right after the game was folded in
    pub snapshot: FrequencySnapshot,
}

/// Storage backend for learned frequencies
pub trait FrequencyStore {
    /// Append a record
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the record cannot be written.
    fn append(&mut self, record: &GameRecord) -> Result<(), StoreError>;

    /// All records, oldest first
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the backend cannot be read.
    fn records(&self) -> Result<Vec<GameRecord>, StoreError>;

    /// Remove every record
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the backend cannot be written.
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// Enum wrapper for all store types
///
/// Allows runtime selection of the backend while maintaining static dispatch.
pub enum StoreType {
    /// SQLite file (default)
    Sqlite(SqliteStore),
    /// Process memory only, nothing survives the run
    Memory(MemoryStore),
}

impl FrequencyStore for StoreType {
    fn append(&mut self, record: &GameRecord) -> Result<(), StoreError> {
        match self {
            Self::Sqlite(s) => s.append(record),
            Self::Memory(s) => s.append(record),
        }
    }

    fn records(&self) -> Result<Vec<GameRecord>, StoreError> {
        match self {
            Self::Sqlite(s) => s.records(),
            Self::Memory(s) => s.records(),
        }
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        match self {
            Self::Sqlite(s) => s.clear(),
            Self::Memory(s) => s.clear(),
        }
    }
}

impl StoreType {
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Sqlite(_) => "sqlite",
            Self::Memory(_) => "memory",
        }
    }
}
