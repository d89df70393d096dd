//! Letter selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::scoring::{GuessContext, Scorer, ScoreWeights};
use crate::core::Letter;

/// A strategy for picking the next letter to guess
pub trait Strategy {
    /// Select a letter that has not been guessed yet
    ///
    /// Returns `None` only when every letter has already been guessed.
    fn select_letter(&self, ctx: &GuessContext<'_>) -> Option<Letter>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Heuristic scoring (default)
    Heuristic(HeuristicStrategy),
    /// Uniformly random unused letter
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_letter(&self, ctx: &GuessContext<'_>) -> Option<Letter> {
        match self {
            Self::Heuristic(s) => s.select_letter(ctx),
            Self::Random(s) => s.select_letter(ctx),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "heuristic", "random".
    /// Defaults to heuristic (with the given weights) if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, weights: ScoreWeights) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            _ => Self::Heuristic(HeuristicStrategy::new(weights)),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Heuristic(_) => "heuristic",
            Self::Random(_) => "random",
        }
    }
}

/// Heuristic strategy
///
/// Picks the highest-scoring unused letter from static positional priors, learned
/// positional counts and pattern inference. Fully deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicStrategy {
    pub scorer: Scorer,
}

impl HeuristicStrategy {
    #[must_use]
    pub fn new(weights: ScoreWeights) -> Self {
        Self {
            scorer: Scorer {
                weights,
                ..Scorer::default()
            },
        }
    }
}

impl Strategy for HeuristicStrategy {
    fn select_letter(&self, ctx: &GuessContext<'_>) -> Option<Letter> {
        self.scorer.best(ctx).map(|score| score.letter)
    }
}

/// Random strategy
///
/// Picks any unused letter. Only useful as a benchmark baseline.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_letter(&self, ctx: &GuessContext<'_>) -> Option<Letter> {
        use rand::prelude::IndexedRandom;

        let unused: Vec<Letter> = ctx.unused().collect();
        unused.choose(&mut rand::rng()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterSet, RevealedWord};
    use crate::model::PositionalFrequencyTable;

    #[test]
    fn heuristic_picks_a_on_fresh_word() {
        let revealed = RevealedWord::unknown(6);
        let table = PositionalFrequencyTable::new();
        let ctx = GuessContext::new(&revealed, LetterSet::new(), &table);

        let strategy = HeuristicStrategy::default();
        assert_eq!(strategy.select_letter(&ctx), Letter::new('a'));
    }

    #[test]
    fn heuristic_is_deterministic() {
        let revealed = RevealedWord::parse("_o__o").unwrap();
        let mut table = PositionalFrequencyTable::new();
        table.record_word("morro");
        table.record_word("pomar");
        let guessed: LetterSet = "oa".chars().filter_map(Letter::new).collect();
        let ctx = GuessContext::new(&revealed, guessed, &table);

        let strategy = HeuristicStrategy::default();
        let first = strategy.select_letter(&ctx);
        for _ in 0..20 {
            assert_eq!(strategy.select_letter(&ctx), first);
        }
    }

    #[test]
    fn random_strategy_picks_unused_letter() {
        let revealed = RevealedWord::unknown(4);
        let table = PositionalFrequencyTable::new();
        let guessed: LetterSet = Letter::ALPHABET
            .into_iter()
            .filter(|l| l.as_char() != 'q')
            .collect();
        let ctx = GuessContext::new(&revealed, guessed, &table);

        assert_eq!(RandomStrategy.select_letter(&ctx), Letter::new('q'));
    }

    #[test]
    fn strategies_exhaust_together() {
        let revealed = RevealedWord::unknown(4);
        let table = PositionalFrequencyTable::new();
        let guessed: LetterSet = Letter::ALPHABET.into_iter().collect();
        let ctx = GuessContext::new(&revealed, guessed, &table);

        assert!(HeuristicStrategy::default().select_letter(&ctx).is_none());
        assert!(RandomStrategy.select_letter(&ctx).is_none());
    }

    #[test]
    fn from_name_defaults_to_heuristic() {
        let weights = ScoreWeights::default();
        assert_eq!(StrategyType::from_name("random", weights).name(), "random");
        assert_eq!(StrategyType::from_name("heuristic", weights).name(), "heuristic");
        assert_eq!(StrategyType::from_name("whatever", weights).name(), "heuristic");
    }
}
