//! Letter selection
//!
//! Pattern inference, scoring and the strategies built on them.

mod engine;
pub mod patterns;
pub mod scoring;
pub mod strategy;

pub use engine::Solver;
pub use patterns::PatternAnalyzer;
pub use scoring::{GuessContext, LetterScore, ScoreWeights, Scorer};
pub use strategy::{HeuristicStrategy, RandomStrategy, Strategy, StrategyType};
