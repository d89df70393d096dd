//! Display functions for command results

use super::formatters::{create_progress_bar, format_positions};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult, StatsResult};
use crate::game::PersistOutcome;
use crate::solver::LetterScore;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        let verdict = if step.positions.is_empty() {
            "miss".red()
        } else {
            format!("at {}", format_positions(&step.positions)).green()
        };
        println!(
            "\nTurn {turn:2}: {}  {:<14} {verdict}",
            step.letter.as_char().to_ascii_uppercase().to_string().bold(),
            step.revealed
        );

        if verbose {
            for score in &step.ranked {
                println!("         {}", format_score(score).bright_black());
            }
        }
    }

    println!();
    if result.complete {
        println!(
            "{}",
            format!(
                "✅ Solved in {} guesses ({} misses)",
                result.attempts, result.misses
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Ran out of letters after {} guesses", result.attempts)
                .red()
                .bold()
        );
    }

    match &result.persisted {
        Some(PersistOutcome::Saved) => println!("   Learned from this game."),
        Some(PersistOutcome::Volatile(e)) => {
            println!("   {}", format!("Not saved: {e}").yellow());
        }
        None => {}
    }
}

/// Print the result of pattern analysis
pub fn print_analysis_result(result: &AnalysisResult, top: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PATTERN ANALYSIS:".bright_cyan().bold(),
        result.pattern.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let show = |set: crate::core::LetterSet| {
        if set.is_empty() {
            "-".to_string()
        } else {
            set.to_string()
        }
    };

    println!("\n🔎 {}", "Inferred candidates:".bright_cyan().bold());
    println!("   Guessed:    {}", show(result.guessed));
    println!("   Bigrams:    {}", show(result.bigram_candidates));
    println!("   Syllables:  {}", show(result.syllable_candidates));
    println!("   Vowels:     {}", show(result.vowel_candidates));

    let Some(best) = result.scores.first() else {
        println!("\nEvery letter has been guessed.");
        return;
    };

    println!("\n📊 {}", "Scores:".bright_cyan().bold());
    let max = best.total() as f64;
    for score in result.scores.iter().take(top) {
        let bar = create_progress_bar(score.total() as f64, max, 20);
        println!("   [{}] {}", bar.green(), format_score(score));
    }

    println!(
        "\n💡 Suggested guess: {}",
        best.letter.as_char().to_ascii_uppercase().to_string().bright_yellow().bold()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let mode = if result.learned { "learning" } else { "frozen model" };

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {} ({mode})", result.total_words);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_attempts).bright_yellow().bold()
    );
    println!(
        "   Average misses:   {}",
        format!("{:.2}", result.average_misses).bright_yellow()
    );
    println!("   Best case:        {}", result.min_attempts.to_string().green());
    println!("   Worst case:       {}", result.max_attempts.to_string().yellow());
    println!("   Flawless games:   {}", result.flawless);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.total_words == 0 {
        return;
    }

    println!("\n📈 {}", "Misses per game:".bright_cyan().bold());
    for (&misses, &count) in &result.distribution {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
        );
        println!("   {misses:2}: {bar} {count:4} ({pct:5.1}%)");
    }

    println!("\n🧱 {}", "Hardest words:".bright_cyan().bold());
    for outcome in &result.hardest {
        println!(
            "   {:<16} {} guesses, {} misses",
            outcome.word, outcome.attempts, outcome.misses
        );
    }
}

/// Print what has been learned so far
pub fn print_stats(stats: &StatsResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "LEARNED FREQUENCIES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Games learned:    {}", stats.games.to_string().bright_yellow().bold());
    if let Some(last) = &stats.last_word {
        println!("   Last word:        {last}");
    }
    println!("   Total counts:     {}", stats.total_counts);

    if stats.positions.is_empty() {
        println!("\n   Nothing learned yet. Play a game first.");
        return;
    }

    println!("\n📍 {}", "Top letters by position:".bright_cyan().bold());
    for (position, ranked) in &stats.positions {
        let letters = ranked
            .iter()
            .map(|(letter, count)| format!("{letter}:{count}"))
            .collect::<Vec<_>>()
            .join("  ");
        println!("   {:>2}: {letters}", position + 1);
    }
}

fn format_score(score: &LetterScore) -> String {
    format!(
        "{} {:>4}  (pos {} learned {} pattern {} vowel {} accent {})",
        score.letter,
        score.total(),
        score.positional,
        score.learned,
        score.pattern,
        score.vowel,
        score.accent
    )
}
