//! Bridge between finished games and the persistent store
//!
//! The in-memory `LearnedModel` is always updated first. The store only mirrors it, so a
//! failed write leaves the model ahead of the disk until the next successful append.

use crate::error::StoreError;
use crate::model::{LearnedModel, PositionalFrequencyTable};
use crate::persistence::{FrequencyStore, GameRecord};
use tracing::{info, warn};

/// Result of folding a completed game into the model
#[derive(Debug)]
pub enum PersistOutcome {
    /// The record reached the store
    Saved,
    /// The model was updated but the store rejected the record
    Volatile(StoreError),
}

impl PersistOutcome {
    #[inline]
    #[must_use]
    pub const fn is_saved(&self) -> bool {
        matches!(self, Self::Saved)
    }
}

pub struct LearningBridge<St: FrequencyStore> {
    store: St,
}

impl<St: FrequencyStore> LearningBridge<St> {
    pub const fn new(store: St) -> Self {
        Self { store }
    }

    pub const fn store(&self) -> &St {
        &self.store
    }

    /// Rebuild the learned model from every stored record
    ///
    /// Each record carries the full table as it was after that game, so the newest
    /// snapshot wins while every word goes into the history. A store that cannot be read
    /// yields an empty model.
    pub fn rehydrate(&self) -> LearnedModel {
        let records = match self.store.records() {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "could not load learned frequencies, starting empty");
                return LearnedModel::default();
            }
        };

        let mut model = LearnedModel::default();
        for record in &records {
            model.history.push(record.word.as_str());
        }
        if let Some(latest) = records.last() {
            model.table = PositionalFrequencyTable::from_snapshot(&latest.snapshot);
        }

        info!(
            games = model.history.len(),
            counts = model.table.total(),
            "loaded learned frequencies"
        );
        model
    }

    /// Fold a completed word into `model` and persist the resulting table
    ///
    /// Every position of the word is counted again even though its reveals were already
    /// counted during play.
    pub fn complete_game(&mut self, model: &mut LearnedModel, word: &str) -> PersistOutcome {
        model.table.record_word(word);
        model.history.push(word);

        let record = GameRecord {
            word: word.to_string(),
            snapshot: model.table.snapshot(),
        };

        match self.store.append(&record) {
            Ok(()) => {
                info!(word, games = model.history.len(), "learned from completed game");
                PersistOutcome::Saved
            }
            Err(e) => {
                warn!(word, error = %e, "could not persist learned frequencies");
                PersistOutcome::Volatile(e)
            }
        }
    }

    /// Drop every stored record
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the store cannot be cleared.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.store.clear()
    }
}
