//! Frequency model
//!
//! Static positional priors and the learned positional table shared across games.

pub mod frequency;
mod history;

pub use frequency::{
    END_LETTERS, FrequencySnapshot, LearnedModel, MAX_POSITIONS, MIDDLE_LETTERS,
    PositionalFrequencyTable, START_LETTERS,
};
pub use history::WordHistory;
