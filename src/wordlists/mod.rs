//! Word lists
//!
//! Provides the embedded Portuguese word list compiled into the binary.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SecretWord;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_playable() {
        for &word in WORDS {
            assert!(SecretWord::new(word).is_ok(), "Word '{word}' is not playable");
            assert_eq!(word, word.to_lowercase(), "Word '{word}' is not lowercase");
        }
    }

    #[test]
    fn words_are_unique() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn list_contains_accented_words() {
        assert!(WORDS.contains(&"café"));
        assert!(WORDS.iter().any(|w| w.chars().any(|c| !c.is_ascii())));
    }
}
