//! Pattern analysis command
//!
//! Shows how the scorer sees a revealed pattern: inferred candidates and the full score
//! breakdown of every unused letter.

use crate::core::{Letter, LetterSet, RevealedWord, accent};
use crate::model::PositionalFrequencyTable;
use crate::solver::{GuessContext, LetterScore, PatternAnalyzer, Scorer};

/// Result of analyzing a pattern
pub struct AnalysisResult {
    pub pattern: RevealedWord,
    pub guessed: LetterSet,
    pub bigram_candidates: LetterSet,
    pub syllable_candidates: LetterSet,
    /// Every vowel once a consonant is visible
    pub vowel_candidates: LetterSet,
    /// Unused letters, best first
    pub scores: Vec<LetterScore>,
}

impl AnalysisResult {
    #[must_use]
    pub fn best(&self) -> Option<Letter> {
        self.scores.first().map(|s| s.letter)
    }
}

/// Analyze a revealed pattern such as `_a_a_a`
///
/// Letters visible in the pattern count as guessed, on top of `guessed`.
///
/// # Errors
///
/// Returns an error if the pattern or the guessed letters contain anything other than
/// letters and placeholders.
pub fn analyze_pattern(
    pattern: &str,
    guessed: &str,
    scorer: &Scorer,
    analyzer: &PatternAnalyzer,
    table: &PositionalFrequencyTable,
) -> Result<AnalysisResult, String> {
    let revealed = RevealedWord::parse(pattern)
        .filter(|r| !r.is_empty())
        .ok_or_else(|| format!("Invalid pattern '{pattern}': use letters and '_'"))?;

    let mut guessed_set = parse_letters(guessed)?;
    guessed_set.extend_from(revealed.cells().iter().flatten().copied().collect());

    let ctx = GuessContext::new(&revealed, guessed_set, table);
    let scores = scorer.rank(&ctx);

    Ok(AnalysisResult {
        bigram_candidates: analyzer.bigram_candidates(&revealed),
        syllable_candidates: analyzer.syllable_candidates(&revealed),
        vowel_candidates: PatternAnalyzer::vowel_exposure(&revealed),
        guessed: guessed_set,
        pattern: revealed,
        scores,
    })
}

/// Parse a list of letters like `"e, s t"`, accents allowed
fn parse_letters(input: &str) -> Result<LetterSet, String> {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| {
            let lower = c.to_lowercase().next().unwrap_or(c);
            Letter::new(accent::normalize_letter(lower))
                .ok_or_else(|| format!("Invalid guessed letter '{c}'"))
        })
        .collect()
}
