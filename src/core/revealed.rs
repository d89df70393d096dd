//! Partially revealed word
//!
//! One cell per position of the normalized secret word. A cell is either unknown or
//! holds the letter revealed there. The length is fixed when the game starts.

use super::{Letter, SecretWord};
use std::fmt;

/// Placeholder rendered for unknown cells
pub const PLACEHOLDER: char = '_';

/// The secret word as known to the guessing side
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RevealedWord {
    cells: Vec<Option<Letter>>,
}

impl RevealedWord {
    /// Create an all-unknown word of the given length
    #[must_use]
    pub fn unknown(len: usize) -> Self {
        Self {
            cells: vec![None; len],
        }
    }

    /// Parse a pattern such as `_a_a_a`
    ///
    /// `_`, `.` and `?` mark unknown cells; accented glyphs are normalized.
    /// Returns `None` if any other character is not a supported letter.
    ///
    /// # Examples
    /// ```
    /// use forca_solver::core::RevealedWord;
    ///
    /// let revealed = RevealedWord::parse("_a_a_a").unwrap();
    /// assert_eq!(revealed.len(), 6);
    /// assert_eq!(revealed.unknown_count(), 3);
    /// assert!(RevealedWord::parse("a1").is_none());
    /// ```
    #[must_use]
    pub fn parse(pattern: &str) -> Option<Self> {
        pattern
            .chars()
            .flat_map(char::to_lowercase)
            .map(|ch| match ch {
                PLACEHOLDER | '.' | '?' => Some(None),
                _ => Letter::new(super::accent::normalize_letter(ch)).map(Some),
            })
            .collect::<Option<Vec<_>>>()
            .map(|cells| Self { cells })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell contents, `None` for unknown
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Option<Letter>] {
        &self.cells
    }

    /// Get the letter at a position, if revealed
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<Letter> {
        self.cells.get(position).copied().flatten()
    }

    /// Reveal a letter at a position
    ///
    /// Returns `false` if the position is outside the word.
    pub fn set(&mut self, position: usize, letter: Letter) -> bool {
        match self.cells.get_mut(position) {
            Some(cell) => {
                *cell = Some(letter);
                true
            }
            None => false,
        }
    }

    /// Positions that are still unknown
    pub fn unknown_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.is_none().then_some(i))
    }

    #[must_use]
    pub fn unknown_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    #[inline]
    #[must_use]
    pub fn has_unknown(&self) -> bool {
        self.cells.iter().any(Option::is_none)
    }

    /// Check whether a letter is revealed anywhere
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.cells.contains(&Some(letter))
    }

    /// True iff every cell equals the corresponding letter of `letters`
    #[must_use]
    pub fn matches(&self, letters: &[Letter]) -> bool {
        self.cells.len() == letters.len()
            && self
                .cells
                .iter()
                .zip(letters)
                .all(|(cell, letter)| *cell == Some(*letter))
    }

    /// Render with the secret's original glyphs in the revealed cells
    ///
    /// Unknown cells stay as the placeholder.
    #[must_use]
    pub fn render_with(&self, secret: &SecretWord) -> String {
        self.cells
            .iter()
            .zip(secret.glyphs())
            .map(|(cell, &glyph)| if cell.is_some() { glyph } else { PLACEHOLDER })
            .collect()
    }
}

impl fmt::Display for RevealedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.map_or(PLACEHOLDER, Letter::as_char))?;
        }
        Ok(())
    }
}
