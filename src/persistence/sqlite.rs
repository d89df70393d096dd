use super::{FrequencyStore, GameRecord};
use crate::error::StoreError;
use crate::model::FrequencySnapshot;
use rusqlite::{Connection, params};
use std::path::Path;
use tracing::{debug, warn};

/// SQLite-backed store
///
/// One row per completed game; the snapshot is kept as JSON text.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database file and its table
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the parent directory cannot be created or the database
    /// cannot be opened.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        debug!(path = %path.display(), "opened learned-frequency database");
        Self::with_connection(conn)
    }

    /// Open a private in-memory database
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if SQLite cannot allocate the database.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute(
            r"
            CREATE TABLE IF NOT EXISTS games (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                word TEXT NOT NULL,
                frequencies TEXT NOT NULL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            ",
            [],
        )?;

        Ok(Self { conn })
    }

    /// Number of stored games
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the count query fails.
    pub fn count(&self) -> Result<usize, StoreError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM games", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or(0))
    }
}

impl FrequencyStore for SqliteStore {
    fn append(&mut self, record: &GameRecord) -> Result<(), StoreError> {
        let frequencies = serde_json::to_string(&record.snapshot)?;
        self.conn.execute(
            "INSERT INTO games (word, frequencies) VALUES (?1, ?2)",
            params![record.word, frequencies],
        )?;
        debug!(word = %record.word, "stored completed game");
        Ok(())
    }

    fn records(&self) -> Result<Vec<GameRecord>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, word, frequencies FROM games ORDER BY id")?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?;

        let mut records = Vec::new();
        for row in rows {
            let (id, word, frequencies) = row?;
            // A damaged row loses its snapshot but the word still counts as history
            let snapshot = match serde_json::from_str::<FrequencySnapshot>(&frequencies) {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    warn!(id, word = %word, error = %e, "ignoring malformed frequency snapshot");
                    FrequencySnapshot::new()
                }
            };
            records.push(GameRecord { word, snapshot });
        }

        Ok(records)
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.conn.execute("DELETE FROM games", [])?;
        Ok(())
    }
}
