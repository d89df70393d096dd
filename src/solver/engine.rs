//! Main solver interface

use super::strategy::Strategy;
use super::scoring::GuessContext;
use crate::core::Letter;
use crate::game::GameSession;
use crate::model::PositionalFrequencyTable;
use tracing::debug;

/// Hangman solver
///
/// Coordinates letter selection using a given strategy.
pub struct Solver<S: Strategy> {
    strategy: S,
}

impl<S: Strategy> Solver<S> {
    /// Create a new solver with the given strategy
    pub const fn new(strategy: S) -> Self {
        Self { strategy }
    }

    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Pick the next letter and mark it as guessed in the session
    ///
    /// Returns `None` once every letter of the alphabet has been guessed.
    pub fn next_guess(
        &self,
        session: &mut GameSession,
        table: &PositionalFrequencyTable,
    ) -> Option<Letter> {
        let letter = self.peek_guess(session, table)?;
        session.record_guess(letter);
        debug!(
            letter = %letter,
            revealed = %session.revealed(),
            attempts = session.attempts(),
            "selected letter"
        );
        Some(letter)
    }

    /// The letter `next_guess` would pick, without touching the session
    pub fn peek_guess(
        &self,
        session: &GameSession,
        table: &PositionalFrequencyTable,
    ) -> Option<Letter> {
        let ctx = GuessContext::new(session.revealed(), session.guessed(), table);
        self.strategy.select_letter(&ctx)
    }
}
