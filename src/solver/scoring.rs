//! Letter scoring
//!
//! Each unused letter is scored once per unknown position of the revealed word and the
//! per-position scores are summed:
//!
//! ```text
//! +3        first position and letter in START, or last position and letter in END
//! +2        otherwise, letter in MIDDLE
//! +2 × n    n = learned count for (position, letter)
//! +4        letter proposed by the pattern analyzer
//! +2        vowel in a word longer than 8 letters
//! +1        letter that can carry an accent
//! ```
//!
//! The highest total wins; ties go to the alphabetically first letter.

use super::patterns::PatternAnalyzer;
use crate::core::{Letter, LetterSet, RevealedWord, accent};
use crate::model::{END_LETTERS, MIDDLE_LETTERS, PositionalFrequencyTable, START_LETTERS};
use serde::{Deserialize, Serialize};

/// Bonus weights for each scoring rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Letter fits the first or last position (default: 3)
    pub edge: u64,
    /// Letter is typical inside a word (default: 2)
    pub middle: u64,
    /// Multiplier for the learned count (default: 2)
    pub learned: u64,
    /// Letter is a pattern candidate (default: 4)
    pub pattern: u64,
    /// Vowel in a long word (default: 2)
    pub long_word_vowel: u64,
    /// Words longer than this get the vowel bonus (default: 8)
    pub long_word_threshold: usize,
    /// Letter can carry an accent (default: 1)
    pub accent: u64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            edge: 3,
            middle: 2,
            learned: 2,
            pattern: 4,
            long_word_vowel: 2,
            long_word_threshold: 8,
            accent: 1,
        }
    }
}

/// Everything the scorer looks at for one turn
#[derive(Debug, Clone, Copy)]
pub struct GuessContext<'a> {
    pub revealed: &'a RevealedWord,
    pub guessed: LetterSet,
    pub table: &'a PositionalFrequencyTable,
}

impl<'a> GuessContext<'a> {
    #[must_use]
    pub const fn new(
        revealed: &'a RevealedWord,
        guessed: LetterSet,
        table: &'a PositionalFrequencyTable,
    ) -> Self {
        Self {
            revealed,
            guessed,
            table,
        }
    }

    /// Letters not guessed yet, alphabetically
    pub fn unused(&self) -> impl Iterator<Item = Letter> {
        self.guessed.complement()
    }
}

/// Score of one letter, broken down by rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterScore {
    pub letter: Letter,
    pub positional: u64,
    pub learned: u64,
    pub pattern: u64,
    pub vowel: u64,
    pub accent: u64,
}

impl LetterScore {
    fn zero(letter: Letter) -> Self {
        Self {
            letter,
            positional: 0,
            learned: 0,
            pattern: 0,
            vowel: 0,
            accent: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.positional + self.learned + self.pattern + self.vowel + self.accent
    }
}

/// Heuristic scorer combining static priors, learned counts and pattern inference
#[derive(Debug, Clone, Copy, Default)]
pub struct Scorer {
    pub weights: ScoreWeights,
    pub analyzer: PatternAnalyzer,
}

impl Scorer {
    #[must_use]
    pub const fn new(weights: ScoreWeights, analyzer: PatternAnalyzer) -> Self {
        Self { weights, analyzer }
    }

    /// Score a single letter against a precomputed candidate set
    #[must_use]
    pub fn score_letter(
        &self,
        letter: Letter,
        ctx: &GuessContext<'_>,
        candidates: LetterSet,
    ) -> LetterScore {
        let w = &self.weights;
        let len = ctx.revealed.len();
        let last = len.saturating_sub(1);

        let is_candidate = candidates.contains(letter);
        let long_vowel = letter.is_vowel() && len > w.long_word_threshold;
        let accentable = accent::is_accentable(letter);

        let mut score = LetterScore::zero(letter);
        for position in ctx.revealed.unknown_positions() {
            if (position == 0 && letter.is_in(START_LETTERS))
                || (position == last && letter.is_in(END_LETTERS))
            {
                score.positional += w.edge;
            } else if letter.is_in(MIDDLE_LETTERS) {
                score.positional += w.middle;
            }

            let count = u64::from(ctx.table.get(position, letter));
            score.learned += count * w.learned;

            if is_candidate {
                score.pattern += w.pattern;
            }
            if long_vowel {
                score.vowel += w.long_word_vowel;
            }
            if accentable {
                score.accent += w.accent;
            }
        }

        score
    }

    /// Score every unused letter, alphabetically
    #[must_use]
    pub fn score_all(&self, ctx: &GuessContext<'_>) -> Vec<LetterScore> {
        let candidates = self.analyzer.candidates(ctx.revealed);
        ctx.unused()
            .map(|letter| self.score_letter(letter, ctx, candidates))
            .collect()
    }

    /// Every unused letter sorted best-first (ties alphabetical)
    #[must_use]
    pub fn rank(&self, ctx: &GuessContext<'_>) -> Vec<LetterScore> {
        let mut scores = self.score_all(ctx);
        // Stable sort keeps alphabetical order within equal totals
        scores.sort_by(|a, b| b.total().cmp(&a.total()));
        scores
    }

    /// The best unused letter, or `None` once the alphabet is exhausted
    ///
    /// Only a strictly higher total replaces the current best, so the alphabetically
    /// first letter wins ties.
    #[must_use]
    pub fn best(&self, ctx: &GuessContext<'_>) -> Option<LetterScore> {
        self.score_all(ctx)
            .into_iter()
            .fold(None, |best: Option<LetterScore>, score| match best {
                Some(b) if score.total() <= b.total() => Some(b),
                _ => Some(score),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    fn score_of(scorer: &Scorer, ctx: &GuessContext<'_>, ch: char) -> LetterScore {
        scorer
            .score_all(ctx)
            .into_iter()
            .find(|s| s.letter == letter(ch))
            .unwrap()
    }

    #[test]
    fn fresh_banana_scores() {
        let revealed = RevealedWord::unknown(6);
        let table = PositionalFrequencyTable::new();
        let ctx = GuessContext::new(&revealed, LetterSet::new(), &table);
        let scorer = Scorer::default();

        // a: start(3) + 4×middle(2) + end(3) + 6×accent(1)
        let a = score_of(&scorer, &ctx, 'a');
        assert_eq!(a.positional, 14);
        assert_eq!(a.accent, 6);
        assert_eq!(a.total(), 20);

        // o: not a start letter so position 0 falls back to middle
        assert_eq!(score_of(&scorer, &ctx, 'o').total(), 19);

        // b: no bonus at all
        assert_eq!(score_of(&scorer, &ctx, 'b').total(), 0);
    }

    #[test]
    fn tie_goes_to_alphabetically_first() {
        let revealed = RevealedWord::unknown(6);
        let table = PositionalFrequencyTable::new();
        let ctx = GuessContext::new(&revealed, LetterSet::new(), &table);
        let scorer = Scorer::default();

        // 'a' and 'e' both total 20
        assert_eq!(score_of(&scorer, &ctx, 'e').total(), 20);
        assert_eq!(scorer.best(&ctx).unwrap().letter, letter('a'));
        assert_eq!(scorer.rank(&ctx)[1].letter, letter('e'));
    }

    #[test]
    fn learned_counts_are_doubled() {
        let revealed = RevealedWord::unknown(3);
        let mut table = PositionalFrequencyTable::new();
        table.increment(1, letter('x'));
        table.increment(1, letter('x'));
        table.increment(2, letter('x'));
        let ctx = GuessContext::new(&revealed, LetterSet::new(), &table);

        let x = score_of(&Scorer::default(), &ctx, 'x');
        assert_eq!(x.learned, 6);
        assert_eq!(x.total(), 6);
    }

    #[test]
    fn learned_counts_only_on_unknown_positions() {
        let mut revealed = RevealedWord::unknown(3);
        revealed.set(1, letter('a'));
        let mut table = PositionalFrequencyTable::new();
        table.increment(1, letter('x'));
        let ctx = GuessContext::new(&revealed, LetterSet::new(), &table);

        assert_eq!(score_of(&Scorer::default(), &ctx, 'x').learned, 0);
    }

    #[test]
    fn pattern_bonus_per_unknown_position() {
        let revealed = RevealedWord::parse("_a_a_a").unwrap();
        let table = PositionalFrequencyTable::new();
        let ctx = GuessContext::new(&revealed, LetterSet::new(), &table);

        // r: start(3) + pattern(4) at 0; middle(2) + pattern(4) at 2 and 4
        let r = score_of(&Scorer::default(), &ctx, 'r');
        assert_eq!(r.pattern, 12);
        assert_eq!(r.total(), 19);
    }

    #[test]
    fn long_word_vowel_bonus() {
        let revealed = RevealedWord::unknown(9);
        let table = PositionalFrequencyTable::new();
        let ctx = GuessContext::new(&revealed, LetterSet::new(), &table);
        assert_eq!(score_of(&Scorer::default(), &ctx, 'u').vowel, 18);

        let short = RevealedWord::unknown(8);
        let ctx = GuessContext::new(&short, LetterSet::new(), &table);
        assert_eq!(score_of(&Scorer::default(), &ctx, 'u').vowel, 0);
    }

    #[test]
    fn guessed_letters_are_not_scored() {
        let revealed = RevealedWord::unknown(4);
        let table = PositionalFrequencyTable::new();
        let guessed: LetterSet = "ae".chars().filter_map(Letter::new).collect();
        let ctx = GuessContext::new(&revealed, guessed, &table);
        let scorer = Scorer::default();

        let scores = scorer.score_all(&ctx);
        assert_eq!(scores.len(), 24);
        assert!(scores.iter().all(|s| !guessed.contains(s.letter)));
        assert_ne!(scorer.best(&ctx).unwrap().letter, letter('a'));
    }

    #[test]
    fn complete_word_still_offers_letters() {
        let revealed = RevealedWord::parse("sol").unwrap();
        let table = PositionalFrequencyTable::new();
        let ctx = GuessContext::new(&revealed, LetterSet::new(), &table);

        let best = Scorer::default().best(&ctx).unwrap();
        assert_eq!(best.letter, letter('a'));
        assert_eq!(best.total(), 0);
    }

    #[test]
    fn exhausted_alphabet_has_no_best() {
        let revealed = RevealedWord::unknown(4);
        let table = PositionalFrequencyTable::new();
        let guessed: LetterSet = Letter::ALPHABET.into_iter().collect();
        let ctx = GuessContext::new(&revealed, guessed, &table);

        assert!(Scorer::default().best(&ctx).is_none());
        assert!(Scorer::default().rank(&ctx).is_empty());
    }

    #[test]
    fn custom_weights() {
        let weights = ScoreWeights {
            accent: 0,
            ..ScoreWeights::default()
        };
        let scorer = Scorer::new(weights, PatternAnalyzer::default());
        let revealed = RevealedWord::unknown(6);
        let table = PositionalFrequencyTable::new();
        let ctx = GuessContext::new(&revealed, LetterSet::new(), &table);

        assert_eq!(score_of(&scorer, &ctx, 'a').total(), 14);
    }

    #[test]
    fn weights_deserialize_with_defaults() {
        let weights: ScoreWeights = serde_json::from_str(r#"{"pattern": 10}"#).unwrap();
        assert_eq!(weights.pattern, 10);
        assert_eq!(weights.edge, 3);
        assert_eq!(weights.long_word_threshold, 8);
    }
}
