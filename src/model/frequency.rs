//! Positional letter statistics
//!
//! Two tiers: fixed lists of letters typical for the start, middle and end of a
//! Portuguese word, and a learned table of how often each letter has occupied each
//! position in completed words. Learned counts only ever grow.

use crate::core::{Letter, accent};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Letters that commonly start a word
pub const START_LETTERS: &[u8] = b"capemdtsfr";

/// Letters that commonly appear inside a word
pub const MIDDLE_LETTERS: &[u8] = b"aeiorstndml";

/// Letters that commonly end a word
pub const END_LETTERS: &[u8] = b"aosremldiu";

/// Positions beyond this are never learned or restored
pub const MAX_POSITIONS: usize = 256;

/// Serializable form of the learned table: position -> letter -> count
///
/// Serializes to JSON as `{"0": {"c": 2, "p": 1}, "1": {"a": 3}}`.
pub type FrequencySnapshot = BTreeMap<usize, BTreeMap<char, u32>>;

/// Learned per-position letter counts
///
/// Positions are zero-based from the start of the word and independent of word length.
/// Unseen `(position, letter)` pairs count as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionalFrequencyTable {
    rows: Vec<[u32; 26]>,
}

impl PositionalFrequencyTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of `letter` at `position`
    pub fn increment(&mut self, position: usize, letter: Letter) {
        if position >= MAX_POSITIONS {
            debug!(position, "position out of range, not learned");
            return;
        }
        if self.rows.len() <= position {
            self.rows.resize(position + 1, [0; 26]);
        }
        let count = &mut self.rows[position][letter.index()];
        *count = count.saturating_add(1);
    }

    /// Count of `letter` at `position` (0 if never seen)
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize, letter: Letter) -> u32 {
        self.rows
            .get(position)
            .map_or(0, |row| row[letter.index()])
    }

    /// Add every letter of a word at its position
    ///
    /// The word is normalized first; characters that are not base letters after
    /// normalization are skipped but still occupy their position.
    pub fn record_word(&mut self, word: &str) {
        for (position, ch) in accent::normalize_word(word).chars().enumerate() {
            if let Some(letter) = Letter::new(ch) {
                self.increment(position, letter);
            }
        }
    }

    /// Number of positions that have a row (highest seen position + 1)
    #[inline]
    #[must_use]
    pub fn positions(&self) -> usize {
        self.rows.len()
    }

    /// Sum of all counts
    #[must_use]
    pub fn total(&self) -> u64 {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .map(|&c| u64::from(c))
            .sum()
    }

    /// Most frequent letter at a position
    ///
    /// Ties go to the alphabetically first letter. `None` if nothing was recorded there.
    #[must_use]
    pub fn most_common(&self, position: usize) -> Option<(Letter, u32)> {
        let row = self.rows.get(position)?;
        let mut best: Option<(Letter, u32)> = None;
        for letter in Letter::ALPHABET {
            let count = row[letter.index()];
            if count > 0 && best.is_none_or(|(_, c)| count > c) {
                best = Some((letter, count));
            }
        }
        best
    }

    /// Letters at a position sorted by count (descending), then alphabetically
    #[must_use]
    pub fn ranked_at(&self, position: usize) -> Vec<(Letter, u32)> {
        let Some(row) = self.rows.get(position) else {
            return Vec::new();
        };
        let mut ranked: Vec<(Letter, u32)> = Letter::ALPHABET
            .into_iter()
            .map(|letter| (letter, row[letter.index()]))
            .filter(|&(_, count)| count > 0)
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked
    }

    /// Export the non-zero counts
    #[must_use]
    pub fn snapshot(&self) -> FrequencySnapshot {
        let mut snapshot = FrequencySnapshot::new();
        for (position, row) in self.rows.iter().enumerate() {
            let letters: BTreeMap<char, u32> = Letter::ALPHABET
                .into_iter()
                .filter(|l| row[l.index()] > 0)
                .map(|l| (l.as_char(), row[l.index()]))
                .collect();
            if !letters.is_empty() {
                snapshot.insert(position, letters);
            }
        }
        snapshot
    }

    /// Rebuild a table from a snapshot
    ///
    /// Keys are normalized; anything that is not a base letter is dropped, and so is
    /// any position at or past [`MAX_POSITIONS`].
    #[must_use]
    pub fn from_snapshot(snapshot: &FrequencySnapshot) -> Self {
        let mut table = Self::new();
        for (&position, letters) in snapshot {
            if position >= MAX_POSITIONS {
                warn!(position, "ignoring out-of-range position in frequency snapshot");
                continue;
            }
            for (&ch, &count) in letters {
                let Some(letter) = Letter::new(accent::normalize_letter(ch)) else {
                    continue;
                };
                if count == 0 {
                    continue;
                }
                if table.rows.len() <= position {
                    table.rows.resize(position + 1, [0; 26]);
                }
                let slot = &mut table.rows[position][letter.index()];
                *slot = slot.saturating_add(count);
            }
        }
        table
    }
}

/// Process-wide learned state: the positional table plus every completed word
///
/// Owned by the caller and passed by reference into the solver and learning bridge.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LearnedModel {
    #[serde(with = "snapshot_serde")]
    pub table: PositionalFrequencyTable,
    pub history: super::WordHistory,
}

mod snapshot_serde {
    use super::{FrequencySnapshot, PositionalFrequencyTable};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(
        table: &PositionalFrequencyTable,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        table.snapshot().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<PositionalFrequencyTable, D::Error> {
        let snapshot = FrequencySnapshot::deserialize(deserializer)?;
        Ok(PositionalFrequencyTable::from_snapshot(&snapshot))
    }
}
