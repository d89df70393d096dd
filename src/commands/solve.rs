//! Word solving command
//!
//! Plays one game against a known secret and returns every turn.

use crate::core::{Letter, SecretWord};
use crate::game::{GameSession, LearningBridge, PersistOutcome, play_turn};
use crate::model::LearnedModel;
use crate::persistence::FrequencyStore;
use crate::solver::{GuessContext, LetterScore, Scorer, Solver, Strategy};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    /// Fold the finished game into the learned model and persist it
    pub learn: bool,
    /// How many ranked letters to keep per turn
    pub top: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            learn: true,
            top: 3,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub target: String,
    pub guesses: Vec<GuessStep>,
    pub attempts: usize,
    pub misses: usize,
    pub complete: bool,
    /// `None` when learning was disabled
    pub persisted: Option<PersistOutcome>,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub letter: Letter,
    pub positions: Vec<usize>,
    /// Revealed word after the guess, original glyphs
    pub revealed: String,
    /// Best-ranked letters before the guess, as the heuristic scorer sees them
    pub ranked: Vec<LetterScore>,
}

/// Solve a specific word using the given solver and strategy
///
/// Reveals feed `model.table` as they happen. With `config.learn` off the game is played
/// against a copy so the model is left untouched.
///
/// # Errors
///
/// Returns an error if the target word is empty or contains unsupported characters.
pub fn solve_word<S: Strategy, St: FrequencyStore>(
    config: SolveConfig,
    solver: &Solver<S>,
    scorer: &Scorer,
    model: &mut LearnedModel,
    bridge: &mut LearningBridge<St>,
) -> Result<SolveResult, String> {
    let secret =
        SecretWord::new(config.target.as_str()).map_err(|e| format!("Invalid target word: {e}"))?;

    let mut scratch;
    let table = if config.learn {
        &mut model.table
    } else {
        scratch = model.table.clone();
        &mut scratch
    };

    let mut session = GameSession::started(secret);
    let mut guesses = Vec::new();

    loop {
        let ranked: Vec<LetterScore> = {
            let ctx = GuessContext::new(session.revealed(), session.guessed(), table);
            scorer.rank(&ctx).into_iter().take(config.top).collect()
        };

        let Some(outcome) = play_turn(solver, &mut session, table) else {
            break;
        };

        guesses.push(GuessStep {
            letter: outcome.letter,
            positions: outcome.positions,
            revealed: session.display_revealed(),
            ranked,
        });
    }

    let complete = session.is_complete();
    let persisted = (config.learn && complete).then(|| {
        let word = session.secret().map_or("", SecretWord::original).to_string();
        bridge.complete_game(model, &word)
    });

    Ok(SolveResult {
        target: config.target,
        attempts: session.attempts(),
        misses: session.misses().len(),
        guesses,
        complete,
        persisted,
    })
}
