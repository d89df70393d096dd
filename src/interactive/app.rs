//! TUI application state and logic

use crate::commands::PlayContext;
use crate::core::SecretWord;
use crate::dictionary::DictionaryLookup;
use crate::game::{GameSession, PersistOutcome, TurnOutcome, play_turn};
use crate::output::formatters::format_positions;
use crate::persistence::FrequencyStore;
use crate::solver::{GuessContext, LetterScore, Strategy};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Ranked letters kept for the score panel
const RANKING_SIZE: usize = 8;

/// Application state
pub struct App<S: Strategy, St: FrequencyStore, D: DictionaryLookup> {
    pub ctx: PlayContext<S, St, D>,
    pub session: GameSession,
    pub input_mode: InputMode,
    pub secret_buffer: String,
    /// Show the secret while typing it
    pub show_secret: bool,
    pub turns: Vec<TurnOutcome>,
    /// Scores behind the next guess, best first
    pub ranking: Vec<LetterScore>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    SecretEntry,
    Guessing,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Warning,
    Error,
}

/// Session scoreboard
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_started: usize,
    pub words_solved: usize,
    pub total_attempts: usize,
    pub total_misses: usize,
}

impl Statistics {
    #[must_use]
    pub fn average_attempts(&self) -> f64 {
        if self.words_solved == 0 {
            0.0
        } else {
            self.total_attempts as f64 / self.words_solved as f64
        }
    }
}

impl<S: Strategy, St: FrequencyStore, D: DictionaryLookup> App<S, St, D> {
    #[must_use]
    pub fn new(ctx: PlayContext<S, St, D>) -> Self {
        let games = ctx.model.history.len();
        let mut app = Self {
            ctx,
            session: GameSession::new(),
            input_mode: InputMode::SecretEntry,
            secret_buffer: String::new(),
            show_secret: false,
            turns: Vec::new(),
            ranking: Vec::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.add_message(
            "Type a secret word and press Enter. I'll guess it letter by letter.",
            MessageStyle::Info,
        );
        if games > 0 {
            app.add_message(
                &format!("Loaded what I learned from {games} previous games."),
                MessageStyle::Info,
            );
        }
        app
    }

    /// Start a game with the typed secret
    pub fn submit_secret(&mut self) {
        let secret = match SecretWord::new(self.secret_buffer.as_str()) {
            Ok(secret) => secret,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        if self.ctx.validate(secret.original()).is_known_invalid() {
            self.add_message(
                &format!("'{secret}' is not in the dictionary, playing anyway"),
                MessageStyle::Warning,
            );
        }

        self.add_message(
            &format!("New word with {} letters. Enter/Space: next guess, a: auto", secret.len()),
            MessageStyle::Info,
        );
        self.session.start(secret);
        self.secret_buffer.clear();
        self.turns.clear();
        self.stats.games_started += 1;
        self.input_mode = InputMode::Guessing;
        self.refresh_ranking();
    }

    /// Play one turn
    pub fn step(&mut self) {
        if self.input_mode != InputMode::Guessing {
            return;
        }

        let Some(outcome) = play_turn(&self.ctx.solver, &mut self.session, &mut self.ctx.model.table)
        else {
            self.finish_game();
            return;
        };

        let text = if outcome.is_hit() {
            format!(
                "{} at {}",
                outcome.letter.as_char().to_ascii_uppercase(),
                format_positions(&outcome.positions)
            )
        } else {
            format!("{} is not in the word", outcome.letter.as_char().to_ascii_uppercase())
        };
        let style = if outcome.is_hit() {
            MessageStyle::Success
        } else {
            MessageStyle::Info
        };
        self.add_message(&text, style);
        self.turns.push(outcome);

        if self.session.is_complete() {
            self.finish_game();
        } else {
            self.refresh_ranking();
        }
    }

    /// Play turns until the word is complete
    pub fn auto_play(&mut self) {
        while self.input_mode == InputMode::Guessing {
            self.step();
        }
    }

    /// Stop the current game without learning from it
    pub fn give_up(&mut self) {
        if self.input_mode != InputMode::Guessing {
            return;
        }
        let word = self
            .session
            .secret()
            .map(|s| s.original().to_string())
            .unwrap_or_default();
        self.add_message(&format!("Gave up. The word was '{word}'."), MessageStyle::Warning);
        self.ranking.clear();
        self.input_mode = InputMode::Finished;
    }

    fn finish_game(&mut self) {
        self.ranking.clear();
        self.input_mode = InputMode::Finished;

        if !self.session.is_complete() {
            self.add_message("Ran out of letters!", MessageStyle::Error);
            return;
        }

        let word = self
            .session
            .secret()
            .map(|s| s.original().to_string())
            .unwrap_or_default();
        let attempts = self.session.attempts();
        let misses = self.session.misses().len();

        self.stats.words_solved += 1;
        self.stats.total_attempts += attempts;
        self.stats.total_misses += misses;

        self.add_message(
            &format!("🎉 Solved '{word}' in {attempts} guesses ({misses} misses)!"),
            MessageStyle::Success,
        );

        match self.ctx.bridge.complete_game(&mut self.ctx.model, &word) {
            PersistOutcome::Saved => {}
            PersistOutcome::Volatile(e) => {
                self.add_message(
                    &format!("Learned for this session only: {e}"),
                    MessageStyle::Warning,
                );
            }
        }
        self.add_message("Press 'n' for a new word or 'q' to quit.", MessageStyle::Info);
    }

    /// Back to secret entry
    pub fn new_game(&mut self) {
        self.session = GameSession::new();
        self.turns.clear();
        self.ranking.clear();
        self.secret_buffer.clear();
        self.input_mode = InputMode::SecretEntry;
        self.add_message("Type the next secret word.", MessageStyle::Info);
    }

    fn refresh_ranking(&mut self) {
        let ctx = GuessContext::new(
            self.session.revealed(),
            self.session.guessed(),
            &self.ctx.model.table,
        );
        self.ranking = self
            .ctx
            .scorer
            .rank(&ctx)
            .into_iter()
            .take(RANKING_SIZE)
            .collect();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 8 messages
        if self.messages.len() > 8 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::SecretEntry => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab => self.show_secret = !self.show_secret,
                KeyCode::Enter => self.submit_secret(),
                KeyCode::Backspace => {
                    self.secret_buffer.pop();
                }
                KeyCode::Char(c) => self.secret_buffer.push(c),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Enter | KeyCode::Char(' ') => self.step(),
                KeyCode::Char('a') => self.auto_play(),
                KeyCode::Char('g') => self.give_up(),
                _ => {}
            },
            InputMode::Finished => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S, St, D>(app: App<S, St, D>) -> Result<()>
where
    S: Strategy,
    St: FrequencyStore,
    D: DictionaryLookup,
{
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B, S, St, D>(terminal: &mut Terminal<B>, mut app: App<S, St, D>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: Strategy,
    St: FrequencyStore,
    D: DictionaryLookup,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
