//! Benchmark command
//!
//! Plays the solver against many words and reports attempts and misses.
//!
//! In frozen mode every game starts from the same learned table and games run in
//! parallel. In learning mode games run in order and each finished game is folded into
//! the model before the next one starts.

use crate::core::SecretWord;
use crate::game::{GameSession, LearningBridge, play_turn};
use crate::model::{LearnedModel, PositionalFrequencyTable};
use crate::persistence::FrequencyStore;
use crate::solver::{Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// How a benchmark is run
#[derive(Debug, Clone, Copy, Default)]
pub struct BenchmarkConfig {
    /// Learn from each game in turn (sequential) instead of using a frozen table
    pub learn: bool,
    pub show_progress: bool,
}

/// Result of one benchmarked game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordOutcome {
    pub word: String,
    pub attempts: usize,
    pub misses: usize,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub total_attempts: usize,
    pub average_attempts: f64,
    pub average_misses: f64,
    pub min_attempts: usize,
    pub max_attempts: usize,
    /// Games without a single miss
    pub flawless: usize,
    /// Misses per game → number of games
    pub distribution: BTreeMap<usize, usize>,
    /// Words with the most misses, worst first
    pub hardest: Vec<WordOutcome>,
    pub duration: Duration,
    pub words_per_second: f64,
    pub learned: bool,
}

/// Pick the benchmark words: optionally shuffled with a fixed seed, then truncated
#[must_use]
pub fn select_words(
    words: &[SecretWord],
    limit: Option<usize>,
    seed: Option<u64>,
) -> Vec<SecretWord> {
    let mut selected = words.to_vec();
    if let Some(seed) = seed {
        let mut rng = StdRng::seed_from_u64(seed);
        selected.shuffle(&mut rng);
    }
    if let Some(limit) = limit {
        selected.truncate(limit);
    }
    selected
}

/// Run benchmark on a set of target words
pub fn run_benchmark<S, St>(
    solver: &Solver<S>,
    words: &[SecretWord],
    model: &mut LearnedModel,
    bridge: &mut LearningBridge<St>,
    config: BenchmarkConfig,
) -> BenchmarkResult
where
    S: Strategy + Sync,
    St: FrequencyStore,
{
    let pb = progress_bar(words.len(), config.show_progress);
    let start = Instant::now();

    let outcomes: Vec<WordOutcome> = if config.learn {
        words
            .iter()
            .map(|word| {
                let outcome = play_word(solver, word, &mut model.table);
                bridge.complete_game(model, word.original());
                pb.inc(1);
                outcome
            })
            .collect()
    } else {
        let frozen = &model.table;
        words
            .par_iter()
            .map(|word| {
                let mut table = frozen.clone();
                let outcome = play_word(solver, word, &mut table);
                pb.inc(1);
                outcome
            })
            .collect()
    };

    pb.finish_with_message("Complete!");
    summarize(outcomes, start.elapsed(), config.learn)
}

fn play_word<S: Strategy>(
    solver: &Solver<S>,
    word: &SecretWord,
    table: &mut PositionalFrequencyTable,
) -> WordOutcome {
    let mut session = GameSession::started(word.clone());
    while play_turn(solver, &mut session, table).is_some() {}

    WordOutcome {
        word: word.original().to_string(),
        attempts: session.attempts(),
        misses: session.misses().len(),
    }
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

fn summarize(outcomes: Vec<WordOutcome>, duration: Duration, learned: bool) -> BenchmarkResult {
    let total_words = outcomes.len();
    let total_attempts: usize = outcomes.iter().map(|o| o.attempts).sum();
    let total_misses: usize = outcomes.iter().map(|o| o.misses).sum();

    let mut distribution = BTreeMap::new();
    for outcome in &outcomes {
        *distribution.entry(outcome.misses).or_insert(0) += 1;
    }

    let mut hardest = outcomes.clone();
    hardest.sort_by(|a, b| b.misses.cmp(&a.misses).then_with(|| a.word.cmp(&b.word)));
    hardest.truncate(5);

    let per_word = |total: usize| {
        if total_words == 0 {
            0.0
        } else {
            total as f64 / total_words as f64
        }
    };

    BenchmarkResult {
        total_words,
        total_attempts,
        average_attempts: per_word(total_attempts),
        average_misses: per_word(total_misses),
        min_attempts: outcomes.iter().map(|o| o.attempts).min().unwrap_or(0),
        max_attempts: outcomes.iter().map(|o| o.attempts).max().unwrap_or(0),
        flawless: outcomes.iter().filter(|o| o.misses == 0).count(),
        distribution,
        hardest,
        duration,
        words_per_second: if duration.is_zero() {
            0.0
        } else {
            total_words as f64 / duration.as_secs_f64()
        },
        learned,
    }
}
