use super::{FrequencyStore, GameRecord};
use crate::error::StoreError;

/// In-memory store for ephemeral runs and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<GameRecord>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrequencyStore for MemoryStore {
    fn append(&mut self, record: &GameRecord) -> Result<(), StoreError> {
        self.records.push(record.clone());
        Ok(())
    }

    fn records(&self) -> Result<Vec<GameRecord>, StoreError> {
        Ok(self.records.clone())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.records.clear();
        Ok(())
    }
}
