//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI: the user types a secret word and the solver guesses
//! it one letter at a time.

use super::PlayContext;
use super::stats::collect_stats;
use crate::core::SecretWord;
use crate::dictionary::DictionaryLookup;
use crate::game::{GameSession, PersistOutcome, play_turn};
use crate::output::formatters::format_positions;
use crate::persistence::FrequencyStore;
use crate::solver::Strategy;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple<S, St, D>(ctx: &mut PlayContext<S, St, D>) -> Result<(), String>
where
    S: Strategy,
    St: FrequencyStore,
    D: DictionaryLookup,
{
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    play_loop(ctx, &mut input, &mut output).map_err(|e| e.to_string())
}

enum Step {
    Next,
    Auto,
    GiveUp,
    Quit,
}

fn play_loop<S, St, D>(
    ctx: &mut PlayContext<S, St, D>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<()>
where
    S: Strategy,
    St: FrequencyStore,
    D: DictionaryLookup,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║               Forca Solver - Interactive Mode                ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Think of a Portuguese word and type it in. I'll guess it letter by letter.")?;
    writeln!(out, "Accents are fine: ç, á, ã, é, ô... all count as their base letter.\n")?;

    let mut solved = 0usize;

    loop {
        let Some(line) = prompt(input, out, "Secret word ('quit' to exit)")? else {
            break;
        };
        match line.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => break,
            _ => {}
        }

        let secret = match SecretWord::new(line.as_str()) {
            Ok(secret) => secret,
            Err(e) => {
                writeln!(out, "{} {e}\n", "❌".red())?;
                continue;
            }
        };
        if ctx.validate(secret.original()).is_known_invalid() {
            writeln!(
                out,
                "{}",
                format!("⚠ '{secret}' is not in the dictionary, playing anyway").yellow()
            )?;
        }

        let word = secret.original().to_string();
        let mut session = GameSession::started(secret);
        writeln!(
            out,
            "\nThe word has {} letters: {}\n",
            session.revealed().len(),
            session.display_revealed().bright_white().bold()
        )?;

        let mut auto = false;
        let mut gave_up = false;

        while let Some(outcome) = play_turn(&ctx.solver, &mut session, &mut ctx.model.table) {
            let verdict = if outcome.is_hit() {
                format!("hit at {}", format_positions(&outcome.positions)).green()
            } else {
                "miss".red()
            };
            writeln!(
                out,
                "Turn {:2}: I guess {} → {verdict}   {}",
                session.attempts(),
                outcome.letter.as_char().to_uppercase().to_string().bright_yellow().bold(),
                session.display_revealed().bright_white()
            )?;

            if session.is_complete() || auto {
                continue;
            }
            match next_step(input, out)? {
                Step::Next => {}
                Step::Auto => auto = true,
                Step::GiveUp => {
                    gave_up = true;
                    break;
                }
                Step::Quit => return farewell(out, solved),
            }
        }

        if gave_up || !session.is_complete() {
            writeln!(out, "\n{}\n", format!("The word was '{word}'.").bright_black())?;
            continue;
        }

        solved += 1;
        writeln!(
            out,
            "\n{} {} in {} guesses ({} misses)",
            "✅ Solved".green().bold(),
            word.bright_white().bold(),
            session.attempts(),
            session.misses().len()
        )?;

        match ctx.bridge.complete_game(&mut ctx.model, &word) {
            PersistOutcome::Saved => writeln!(
                out,
                "   Learned from {} games so far.",
                ctx.model.history.len()
            )?,
            PersistOutcome::Volatile(e) => writeln!(
                out,
                "   {}",
                format!("Learned for this session only: {e}").yellow()
            )?,
        }
        writeln!(out, "   Most common letters by position: {}\n", most_common_line(ctx))?;
    }

    farewell(out, solved)
}

/// Top learned letter at each position, e.g. `1:C 2:A 3:S 4:A`
fn most_common_line<S: Strategy, St: FrequencyStore, D: DictionaryLookup>(
    ctx: &PlayContext<S, St, D>,
) -> String {
    collect_stats(&ctx.model, 1)
        .positions
        .iter()
        .filter_map(|(position, ranked)| {
            ranked.first().map(|(letter, _)| {
                format!("{}:{}", position + 1, letter.as_char().to_ascii_uppercase())
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn next_step(input: &mut impl BufRead, out: &mut impl Write) -> io::Result<Step> {
    let Some(line) = prompt(input, out, "Enter for next guess, 'a' to auto-play, 'g' to give up")?
    else {
        return Ok(Step::Quit);
    };
    Ok(match line.to_lowercase().as_str() {
        "a" | "auto" => Step::Auto,
        "g" | "give up" => Step::GiveUp,
        "q" | "quit" => Step::Quit,
        _ => Step::Next,
    })
}

fn farewell(out: &mut impl Write, solved: usize) -> io::Result<()> {
    writeln!(out, "\n👋 Thanks for playing! Words solved: {solved}\n")
}

/// Get user input with a prompt, `None` on end of input
fn prompt(
    input: &mut impl BufRead,
    out: &mut impl Write,
    text: &str,
) -> io::Result<Option<String>> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListDictionary;
    use crate::game::LearningBridge;
    use crate::model::LearnedModel;
    use crate::persistence::MemoryStore;
    use crate::solver::{HeuristicStrategy, Scorer, Solver};

    fn context() -> TestContext {
        PlayContext {
            solver: Solver::new(HeuristicStrategy::default()),
            scorer: Scorer::default(),
            model: LearnedModel::default(),
            bridge: LearningBridge::new(MemoryStore::new()),
            dictionary: WordListDictionary::embedded(),
            check_dictionary: true,
        }
    }

    type TestContext = PlayContext<HeuristicStrategy, MemoryStore, WordListDictionary>;

    fn play(ctx: &mut TestContext, script: &str) -> String {
        colored::control::set_override(false);
        let mut input = script.as_bytes();
        let mut output = Vec::new();
        play_loop(ctx, &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn auto_play_solves_and_learns() {
        let mut ctx = context();
        let output = play(&mut ctx, "banana\na\nquit\n");

        assert!(output.contains("_a_a_a"));
        assert!(output.contains("Solved banana"));
        assert!(output.contains("Words solved: 1"));
        assert!(output.contains("Most common letters by position: 1:B 2:A 3:N 4:A 5:N 6:A"));
        assert_eq!(ctx.model.history.last(), Some("banana"));
    }

    #[test]
    fn accented_word_is_shown_with_accents() {
        let mut ctx = context();
        let output = play(&mut ctx, "café\na\n");

        assert!(output.contains("Solved café"));
        assert_eq!(ctx.model.history.last(), Some("café"));
    }

    #[test]
    fn invalid_word_is_rejected() {
        let mut ctx = context();
        let output = play(&mut ctx, "guarda-chuva\nquit\n");

        assert!(output.contains("Unsupported character '-'"));
        assert!(ctx.model.history.is_empty());
    }

    #[test]
    fn unknown_word_only_warns() {
        let mut ctx = context();
        let output = play(&mut ctx, "zzz\na\n");

        assert!(output.contains("not in the dictionary"));
        assert!(output.contains("Solved zzz"));
    }

    #[test]
    fn giving_up_does_not_record_history() {
        let mut ctx = context();
        let output = play(&mut ctx, "janela\ng\n");

        assert!(output.contains("The word was 'janela'"));
        assert!(ctx.model.history.is_empty());
    }
}
