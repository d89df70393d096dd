//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;
pub mod stats;

pub use analyze::{AnalysisResult, analyze_pattern};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark, select_words};
pub use simple::run_simple;
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
pub use stats::{StatsResult, collect_stats, reset_learning};

use crate::dictionary::{DictionaryLookup, Validity};
use crate::game::LearningBridge;
use crate::model::LearnedModel;
use crate::persistence::FrequencyStore;
use crate::solver::{Scorer, Solver, Strategy};

/// Everything an interactive front-end needs to play repeated games
pub struct PlayContext<S: Strategy, St: FrequencyStore, D: DictionaryLookup> {
    pub solver: Solver<S>,
    /// Used to show the ranking behind each guess
    pub scorer: Scorer,
    pub model: LearnedModel,
    pub bridge: LearningBridge<St>,
    pub dictionary: D,
    pub check_dictionary: bool,
}

impl<S: Strategy, St: FrequencyStore, D: DictionaryLookup> PlayContext<S, St, D> {
    /// Dictionary verdict for a secret word, `AssumedValid` when checks are off
    pub fn validate(&self, word: &str) -> Validity {
        if self.check_dictionary {
            self.dictionary.check(word)
        } else {
            Validity::AssumedValid
        }
    }
}
