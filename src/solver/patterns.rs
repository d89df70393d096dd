//! Pattern-based candidate inference
//!
//! Proposes letters that are structurally plausible for the current revealed word,
//! without looking at any frequency statistics:
//! - **Bigrams**: a revealed letter next to an unknown cell suggests the other half of
//!   a common two-letter sequence.
//! - **Syllables**: a revealed letter suggests its partner in common consonant+vowel
//!   syllables.
//! - **Vowel exposure**: any revealed consonant makes every vowel likely.

use crate::core::{Letter, LetterSet, RevealedWord};

/// Common Portuguese two-letter sequences
pub const BIGRAMS: &[[u8; 2]] = &[
    *b"ar", *b"er", *b"os", *b"as", *b"do", *b"es", *b"de", *b"ra", *b"ao",
];

/// Common Portuguese consonant+vowel syllables
pub const SYLLABLES: &[[u8; 2]] = &[
    *b"ca", *b"co", *b"ce", *b"ci", *b"ta", *b"to", *b"te", *b"ti", //
    *b"pa", *b"po", *b"pe", *b"pi", *b"ma", *b"mo", *b"me", *b"mi", //
    *b"da", *b"do", *b"de", *b"di", *b"ra", *b"ro", *b"re", *b"ri",
];

/// Candidate-letter inference over a revealed word
#[derive(Debug, Clone, Copy)]
pub struct PatternAnalyzer {
    bigrams: &'static [[u8; 2]],
    syllables: &'static [[u8; 2]],
}

impl Default for PatternAnalyzer {
    fn default() -> Self {
        Self::new(BIGRAMS, SYLLABLES)
    }
}

impl PatternAnalyzer {
    /// Create an analyzer over custom tables
    #[must_use]
    pub const fn new(bigrams: &'static [[u8; 2]], syllables: &'static [[u8; 2]]) -> Self {
        Self { bigrams, syllables }
    }

    /// All candidate letters for the revealed word
    ///
    /// Never fails; an all-unknown word yields an empty set.
    #[must_use]
    pub fn candidates(&self, revealed: &RevealedWord) -> LetterSet {
        let mut candidates = self.bigram_candidates(revealed);
        candidates.extend_from(self.syllable_candidates(revealed));
        candidates.extend_from(Self::vowel_exposure(revealed));
        candidates
    }

    /// Letters completing a common bigram with a revealed neighbor
    #[must_use]
    pub fn bigram_candidates(&self, revealed: &RevealedWord) -> LetterSet {
        let mut candidates = LetterSet::new();

        for pair in revealed.cells().windows(2) {
            match (pair[0], pair[1]) {
                (Some(left), None) => {
                    for bigram in self.bigrams.iter().filter(|b| b[0] == left.byte()) {
                        insert_byte(&mut candidates, bigram[1]);
                    }
                }
                (None, Some(right)) => {
                    for bigram in self.bigrams.iter().filter(|b| b[1] == right.byte()) {
                        insert_byte(&mut candidates, bigram[0]);
                    }
                }
                _ => {}
            }
        }

        candidates
    }

    /// Partners of revealed letters in common syllables
    ///
    /// When both halves of a syllable are already revealed only the second half is
    /// proposed. Nothing is proposed once the word has no unknown cells.
    #[must_use]
    pub fn syllable_candidates(&self, revealed: &RevealedWord) -> LetterSet {
        let mut candidates = LetterSet::new();
        if !revealed.has_unknown() {
            return candidates;
        }

        let present: LetterSet = revealed.cells().iter().flatten().copied().collect();
        let is_present = |byte: u8| Letter::from_byte(byte).is_some_and(|l| present.contains(l));

        for syllable in self.syllables {
            if is_present(syllable[0]) {
                insert_byte(&mut candidates, syllable[1]);
            } else if is_present(syllable[1]) {
                insert_byte(&mut candidates, syllable[0]);
            }
        }

        candidates
    }

    /// All vowels if any consonant is revealed, otherwise nothing
    #[must_use]
    pub fn vowel_exposure(revealed: &RevealedWord) -> LetterSet {
        let consonant_revealed = revealed
            .cells()
            .iter()
            .flatten()
            .any(|letter| !letter.is_vowel());

        if consonant_revealed {
            LetterSet::VOWELS
        } else {
            LetterSet::new()
        }
    }
}

fn insert_byte(set: &mut LetterSet, byte: u8) {
    if let Some(letter) = Letter::from_byte(byte) {
        set.insert(letter);
    }
}
