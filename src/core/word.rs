//! Secret word representation
//!
//! A `SecretWord` keeps the word exactly as typed, its lowercased glyphs (one per
//! position) and the normalized letters used for all matching.

use super::{Letter, accent};
use rustc_hash::FxHashMap;
use std::fmt;

/// The word the human player is holding
///
/// Matching always uses the normalized letters; the original glyphs are only kept to
/// show the accented spelling back to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    original: String,
    glyphs: Vec<char>,
    letters: Vec<Letter>,
    letter_positions: FxHashMap<Letter, Vec<usize>>,
}

/// Error type for invalid secret words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    UnsupportedCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::UnsupportedCharacter(ch) => {
                write!(f, "Unsupported character '{ch}': use only letters, with or without accents")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl SecretWord {
    /// Create a secret word from user input
    ///
    /// Surrounding whitespace is ignored and the word is lowercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty
    /// - It contains anything other than `a`-`z` and the supported accented glyphs
    ///
    /// # Examples
    /// ```
    /// use forca_solver::core::SecretWord;
    ///
    /// let word = SecretWord::new("Café").unwrap();
    /// assert_eq!(word.normalized(), "cafe");
    /// assert_eq!(word.original(), "Café");
    ///
    /// assert!(SecretWord::new("").is_err());
    /// assert!(SecretWord::new("r2d2").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let original: String = text.into().trim().to_string();

        let glyphs: Vec<char> = original.chars().flat_map(char::to_lowercase).collect();
        if glyphs.is_empty() {
            return Err(WordError::Empty);
        }

        let mut letters = Vec::with_capacity(glyphs.len());
        for &glyph in &glyphs {
            let letter = Letter::new(accent::normalize_letter(glyph))
                .ok_or(WordError::UnsupportedCharacter(glyph))?;
            letters.push(letter);
        }

        // Build position map for fast lookup
        let mut letter_positions: FxHashMap<Letter, Vec<usize>> = FxHashMap::default();
        for (i, &letter) in letters.iter().enumerate() {
            letter_positions.entry(letter).or_default().push(i);
        }

        Ok(Self {
            original,
            glyphs,
            letters,
            letter_positions,
        })
    }

    /// The word exactly as typed
    #[inline]
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Lowercased glyph at each position, accents intact
    #[inline]
    #[must_use]
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// Normalized letters at each position
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Normalized word as a string
    #[must_use]
    pub fn normalized(&self) -> String {
        self.letters.iter().map(|l| l.as_char()).collect()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: Letter) -> bool {
        self.letter_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears in the normalized word
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    #[must_use]
    pub fn positions_of(&self, letter: Letter) -> &[usize] {
        self.letter_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    #[test]
    fn plain_word() {
        let word = SecretWord::new("banana").unwrap();
        assert_eq!(word.normalized(), "banana");
        assert_eq!(word.len(), 6);
        assert_eq!(word.positions_of(letter('a')), &[1, 3, 5]);
        assert_eq!(word.positions_of(letter('n')), &[2, 4]);
        assert!(word.positions_of(letter('z')).is_empty());
    }

    #[test]
    fn accented_word_keeps_original() {
        let word = SecretWord::new("café").unwrap();
        assert_eq!(word.normalized(), "cafe");
        assert_eq!(word.original(), "café");
        assert_eq!(word.glyphs(), &['c', 'a', 'f', 'é']);
        assert_eq!(word.positions_of(letter('e')), &[3]);
    }

    #[test]
    fn uppercase_input_is_folded() {
        let word = SecretWord::new("  CORAÇÃO ").unwrap();
        assert_eq!(word.normalized(), "coracao");
        assert_eq!(word.original(), "CORAÇÃO");
        assert_eq!(word.glyphs()[4], 'ç');
        assert!(word.has_letter(letter('c')));
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(SecretWord::new(""), Err(WordError::Empty));
        assert_eq!(SecretWord::new("   "), Err(WordError::Empty));
    }

    #[test]
    fn rejects_unsupported_characters() {
        assert_eq!(
            SecretWord::new("guarda-chuva"),
            Err(WordError::UnsupportedCharacter('-'))
        );
        assert_eq!(
            SecretWord::new("dois 2"),
            Err(WordError::UnsupportedCharacter(' '))
        );
        assert!(SecretWord::new("straße").is_err());
    }

    #[test]
    fn display_shows_original() {
        let word = SecretWord::new("Maçã").unwrap();
        assert_eq!(format!("{word}"), "Maçã");
    }
}
