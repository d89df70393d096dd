//! Base letters and compact letter sets
//!
//! A `Letter` is a single lowercase ASCII character `a`-`z`. Accented glyphs never
//! appear here; they are normalized to their base letter first.

use std::fmt;

/// A lowercase base letter (`a`-`z`)
///
/// Ordering follows the alphabet, which is also the tie-break order used when
/// several letters share the best score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// All 26 letters in alphabetical order
    pub const ALPHABET: [Self; 26] = {
        let mut letters = [Self(b'a'); 26];
        let mut i = 0;
        while i < 26 {
            letters[i] = Self(b'a' + i as u8);
            i += 1;
        }
        letters
    };

    /// Create a letter from a character
    ///
    /// Returns `None` for anything outside `a`-`z`. Uppercase input is not folded;
    /// callers normalize first.
    ///
    /// # Examples
    /// ```
    /// use forca_solver::core::Letter;
    ///
    /// assert_eq!(Letter::new('a').map(Letter::as_char), Some('a'));
    /// assert!(Letter::new('á').is_none());
    /// assert!(Letter::new('A').is_none());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(ch: char) -> Option<Self> {
        if ch.is_ascii_lowercase() {
            Some(Self(ch as u8))
        } else {
            None
        }
    }

    /// Create a letter from an ASCII byte
    #[inline]
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        if byte.is_ascii_lowercase() {
            Some(Self(byte))
        } else {
            None
        }
    }

    /// Get the letter as a byte
    #[inline]
    #[must_use]
    pub const fn byte(self) -> u8 {
        self.0
    }

    /// Get the letter as a char
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Zero-based index in the alphabet (0-25)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'a') as usize
    }

    /// Check whether this letter is one of `a e i o u`
    #[inline]
    #[must_use]
    pub const fn is_vowel(self) -> bool {
        matches!(self.0, b'a' | b'e' | b'i' | b'o' | b'u')
    }

    /// Check membership in a byte string table such as `b"aeiou"`
    #[inline]
    #[must_use]
    pub fn is_in(self, table: &[u8]) -> bool {
        table.contains(&self.0)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A set of letters stored as a 26-bit mask
///
/// Iteration is always alphabetical.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The five vowels
    pub const VOWELS: Self = Self::from_table(b"aeiou");

    const FULL: u32 = (1 << 26) - 1;

    /// Create an empty set
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Build a set from a byte string table; non-letters are ignored
    #[must_use]
    pub const fn from_table(table: &[u8]) -> Self {
        let mut mask = 0;
        let mut i = 0;
        while i < table.len() {
            if table[i].is_ascii_lowercase() {
                mask |= 1 << (table[i] - b'a');
            }
            i += 1;
        }
        Self(mask)
    }

    /// Insert a letter, returning `true` if it was not already present
    #[inline]
    pub fn insert(&mut self, letter: Letter) -> bool {
        let bit = 1 << letter.index();
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    /// Add every letter of another set
    #[inline]
    pub fn extend_from(&mut self, other: Self) {
        self.0 |= other.0;
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: Letter) -> bool {
        self.0 & (1 << letter.index()) != 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True once all 26 letters are in the set
    #[inline]
    #[must_use]
    pub const fn is_full(self) -> bool {
        self.0 == Self::FULL
    }

    /// Iterate the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = Letter> {
        Letter::ALPHABET
            .into_iter()
            .filter(move |&letter| self.contains(letter))
    }

    /// Iterate the letters NOT in the set, alphabetically
    pub fn complement(self) -> impl Iterator<Item = Letter> {
        Letter::ALPHABET
            .into_iter()
            .filter(move |&letter| !self.contains(letter))
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: Vec<String> = self.iter().map(|l| l.to_string()).collect();
        write!(f, "{}", letters.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_is_ordered() {
        assert_eq!(Letter::ALPHABET[0].as_char(), 'a');
        assert_eq!(Letter::ALPHABET[25].as_char(), 'z');
        assert!(Letter::ALPHABET.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn letter_rejects_non_base_characters() {
        assert!(Letter::new('ç').is_none());
        assert!(Letter::new('Z').is_none());
        assert!(Letter::new('1').is_none());
        assert!(Letter::from_byte(b'_').is_none());
    }

    #[test]
    fn letter_index_and_vowels() {
        let e = Letter::new('e').unwrap();
        assert_eq!(e.index(), 4);
        assert!(e.is_vowel());
        assert!(!Letter::new('y').unwrap().is_vowel());
    }

    #[test]
    fn set_insert_reports_new_letters() {
        let mut set = LetterSet::new();
        let a = Letter::new('a').unwrap();
        assert!(set.insert(a));
        assert!(!set.insert(a));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn set_iterates_alphabetically() {
        let set: LetterSet = "zebra".chars().filter_map(Letter::new).collect();
        let letters: String = set.iter().map(Letter::as_char).collect();
        assert_eq!(letters, "aberz");
        assert_eq!(set.complement().count(), 21);
    }

    #[test]
    fn set_full_after_whole_alphabet() {
        let set: LetterSet = Letter::ALPHABET.into_iter().collect();
        assert!(set.is_full());
        assert_eq!(set.complement().count(), 0);
    }

    #[test]
    fn vowel_set() {
        assert_eq!(LetterSet::VOWELS.to_string(), "a, e, i, o, u");
    }
}
