//! Single-game state
//!
//! Tracks the secret word, what has been revealed so far, the letters already guessed
//! and the attempt counter. A session never owns the learned model; it only reports
//! reveals into a table passed in by the caller.

use crate::core::{Letter, LetterSet, RevealedWord, SecretWord};
use crate::model::PositionalFrequencyTable;

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    NotStarted,
    InProgress,
    Complete,
}

/// State of the game in progress
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    secret: Option<SecretWord>,
    revealed: RevealedWord,
    guessed: LetterSet,
    attempts: usize,
}

impl GameSession {
    /// Create a session with no game started
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session and start a game right away
    #[must_use]
    pub fn started(secret: SecretWord) -> Self {
        let mut session = Self::new();
        session.start(secret);
        session
    }

    /// Start a new game, discarding any previous one
    pub fn start(&mut self, secret: SecretWord) {
        self.revealed = RevealedWord::unknown(secret.len());
        self.secret = Some(secret);
        self.guessed = LetterSet::new();
        self.attempts = 0;
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        match self.secret {
            None => GameState::NotStarted,
            Some(_) if self.is_complete() => GameState::Complete,
            Some(_) => GameState::InProgress,
        }
    }

    /// Mark a letter as guessed
    ///
    /// Returns `false` (and leaves the attempt counter alone) if it was already guessed.
    pub fn record_guess(&mut self, letter: Letter) -> bool {
        let fresh = self.guessed.insert(letter);
        if fresh {
            self.attempts += 1;
        }
        fresh
    }

    /// Reveal `letter` at every given position and count each reveal in `table`
    ///
    /// `positions` is expected to be exactly the positions of `letter` in the
    /// normalized secret; positions outside the word are ignored. Reapplying the same
    /// reveal is harmless for the revealed word.
    pub fn reveal(
        &mut self,
        letter: Letter,
        positions: &[usize],
        table: &mut PositionalFrequencyTable,
    ) {
        for &position in positions {
            if self.revealed.set(position, letter) {
                table.increment(position, letter);
            }
        }
    }

    /// True iff the revealed word equals the normalized secret letter for letter
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.secret
            .as_ref()
            .is_some_and(|secret| self.revealed.matches(secret.letters()))
    }

    #[must_use]
    pub const fn secret(&self) -> Option<&SecretWord> {
        self.secret.as_ref()
    }

    #[must_use]
    pub const fn revealed(&self) -> &RevealedWord {
        &self.revealed
    }

    #[must_use]
    pub const fn guessed(&self) -> LetterSet {
        self.guessed
    }

    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    /// Positions of a letter in the normalized secret (empty before a game starts)
    #[must_use]
    pub fn positions_of(&self, letter: Letter) -> Vec<usize> {
        self.secret
            .as_ref()
            .map(|secret| secret.positions_of(letter).to_vec())
            .unwrap_or_default()
    }

    /// Guessed letters that are not in the secret
    #[must_use]
    pub fn misses(&self) -> LetterSet {
        self.guessed
            .iter()
            .filter(|&letter| !self.secret.as_ref().is_some_and(|s| s.has_letter(letter)))
            .collect()
    }

    /// Revealed word using the secret's original glyphs, e.g. `c__é`
    #[must_use]
    pub fn display_revealed(&self) -> String {
        match &self.secret {
            Some(secret) => self.revealed.render_with(secret),
            None => self.revealed.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    fn reveal_letter(session: &mut GameSession, table: &mut PositionalFrequencyTable, ch: char) {
        let l = letter(ch);
        session.record_guess(l);
        let positions = session.positions_of(l);
        session.reveal(l, &positions, table);
    }

    #[test]
    fn lifecycle() {
        let mut session = GameSession::new();
        assert_eq!(session.state(), GameState::NotStarted);
        assert!(!session.is_complete());

        let mut table = PositionalFrequencyTable::new();
        session.start(SecretWord::new("ovo").unwrap());
        assert_eq!(session.state(), GameState::InProgress);
        assert_eq!(session.revealed().to_string(), "___");

        reveal_letter(&mut session, &mut table, 'o');
        assert_eq!(session.state(), GameState::InProgress);
        reveal_letter(&mut session, &mut table, 'v');
        assert_eq!(session.state(), GameState::Complete);
        assert_eq!(session.attempts(), 2);
    }

    #[test]
    fn reveal_updates_word_and_table() {
        let mut table = PositionalFrequencyTable::new();
        let mut session = GameSession::started(SecretWord::new("banana").unwrap());

        reveal_letter(&mut session, &mut table, 'a');
        assert_eq!(session.revealed().to_string(), "_a_a_a");
        for pos in [1, 3, 5] {
            assert_eq!(table.get(pos, letter('a')), 1);
        }
        assert_eq!(table.get(0, letter('a')), 0);
    }

    #[test]
    fn reveal_ignores_out_of_range_positions() {
        let mut table = PositionalFrequencyTable::new();
        let mut session = GameSession::started(SecretWord::new("sol").unwrap());
        session.reveal(letter('s'), &[0, 7], &mut table);
        assert_eq!(session.revealed().to_string(), "s__");
        assert_eq!(table.total(), 1);
    }

    #[test]
    fn guesses_are_counted_once() {
        let mut session = GameSession::started(SecretWord::new("sol").unwrap());
        assert!(session.record_guess(letter('x')));
        assert!(!session.record_guess(letter('x')));
        assert_eq!(session.attempts(), 1);
        assert_eq!(session.guessed().len(), 1);
    }

    #[test]
    fn misses_only_contain_absent_letters() {
        let mut table = PositionalFrequencyTable::new();
        let mut session = GameSession::started(SecretWord::new("sol").unwrap());
        reveal_letter(&mut session, &mut table, 'a');
        reveal_letter(&mut session, &mut table, 's');
        reveal_letter(&mut session, &mut table, 'e');
        assert_eq!(session.misses().to_string(), "a, e");
    }

    #[test]
    fn complete_iff_revealed_equals_normalized_secret() {
        let mut table = PositionalFrequencyTable::new();
        let mut session = GameSession::started(SecretWord::new("café").unwrap());
        for ch in ['c', 'a', 'f'] {
            reveal_letter(&mut session, &mut table, ch);
            assert!(!session.is_complete());
        }
        reveal_letter(&mut session, &mut table, 'e');
        assert!(session.is_complete());
        assert_eq!(session.revealed().to_string(), "cafe");
        assert_eq!(session.display_revealed(), "café");
    }

    #[test]
    fn start_resets_previous_game() {
        let mut table = PositionalFrequencyTable::new();
        let mut session = GameSession::started(SecretWord::new("sol").unwrap());
        reveal_letter(&mut session, &mut table, 's');

        session.start(SecretWord::new("lua").unwrap());
        assert_eq!(session.revealed().to_string(), "___");
        assert!(session.guessed().is_empty());
        assert_eq!(session.attempts(), 0);
    }
}
