use super::GameSession;
use crate::core::Letter;
use crate::model::PositionalFrequencyTable;
use crate::solver::{Solver, Strategy};

/// What one turn produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub letter: Letter,
    /// Positions revealed by the guess, empty on a miss
    pub positions: Vec<usize>,
}

impl TurnOutcome {
    #[inline]
    #[must_use]
    pub fn is_hit(&self) -> bool {
        !self.positions.is_empty()
    }
}

/// Guess one letter, reveal it against the secret and feed the reveal to `table`
///
/// Returns `None` when no game is running, the game is already complete, or every letter
/// has been tried.
pub fn play_turn<S: Strategy>(
    solver: &Solver<S>,
    session: &mut GameSession,
    table: &mut PositionalFrequencyTable,
) -> Option<TurnOutcome> {
    if session.secret().is_none() || session.is_complete() {
        return None;
    }

    let letter = solver.next_guess(session, table)?;
    let positions = session.positions_of(letter);
    session.reveal(letter, &positions, table);

    Some(TurnOutcome { letter, positions })
}
