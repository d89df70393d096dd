//! TUI rendering with ratatui
//!
//! Layout for the hangman solver interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Letter;
use crate::dictionary::DictionaryLookup;
use crate::persistence::FrequencyStore;
use crate::solver::Strategy;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S, St, D>(f: &mut Frame, app: &App<S, St, D>)
where
    S: Strategy,
    St: FrequencyStore,
    D: DictionaryLookup,
{
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 FORCA SOLVER - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel<S, St, D>(f: &mut Frame, app: &App<S, St, D>, area: Rect)
where
    S: Strategy,
    St: FrequencyStore,
    D: DictionaryLookup,
{
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Word
            Constraint::Length(3), // Alphabet
            Constraint::Min(5),    // Scores
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_alphabet(f, app, chunks[1]);
    render_scores(f, app, chunks[2]);
}

fn render_word<S, St, D>(f: &mut Frame, app: &App<S, St, D>, area: Rect)
where
    S: Strategy,
    St: FrequencyStore,
    D: DictionaryLookup,
{
    let word = if app.session.secret().is_some() {
        app.session
            .display_revealed()
            .chars()
            .map(|c| c.to_uppercase().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        "waiting for a word".to_string()
    };

    let content = vec![
        Line::from(Span::styled(
            word,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "Guesses: {}   Misses: {}",
            app.session.attempts(),
            app.session.misses().len()
        )),
    ];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_alphabet<S, St, D>(f: &mut Frame, app: &App<S, St, D>, area: Rect)
where
    S: Strategy,
    St: FrequencyStore,
    D: DictionaryLookup,
{
    let guessed = app.session.guessed();
    let misses = app.session.misses();

    let spans: Vec<Span> = Letter::ALPHABET
        .iter()
        .map(|&letter| {
            let style = if misses.contains(letter) {
                Style::default().fg(Color::Red).add_modifier(Modifier::CROSSED_OUT)
            } else if guessed.contains(letter) {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled(format!("{} ", letter.as_char().to_ascii_uppercase()), style)
        })
        .collect();

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_scores<S, St, D>(f: &mut Frame, app: &App<S, St, D>, area: Rect)
where
    S: Strategy,
    St: FrequencyStore,
    D: DictionaryLookup,
{
    let block = Block::default()
        .title(" Next Guess ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(best) = app.ranking.first() else {
        let text = match app.input_mode {
            InputMode::Finished => "Game over",
            _ => "No game in progress",
        };
        f.render_widget(Paragraph::new(text).block(block), area);
        return;
    };

    let max = best.total().max(1);
    let items: Vec<ListItem> = app
        .ranking
        .iter()
        .map(|score| {
            // Scaled to 18 cells
            let filled = usize::try_from(score.total() * 18 / max).unwrap_or(18);
            let bar = "█".repeat(filled) + &"░".repeat(18 - filled.min(18));
            let line = format!(
                "{}  [{bar}] {:>3}  pos {} lrn {} pat {} vow {} acc {}",
                score.letter.as_char().to_ascii_uppercase(),
                score.total(),
                score.positional,
                score.learned,
                score.pattern,
                score.vowel,
                score.accent
            );
            let style = if score.letter == best.letter {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

fn render_info_panel<S, St, D>(f: &mut Frame, app: &App<S, St, D>, area: Rect)
where
    S: Strategy,
    St: FrequencyStore,
    D: DictionaryLookup,
{
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Progress gauge
            Constraint::Length(6), // Learned model
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_progress(f, app, chunks[0]);
    render_learning(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_progress<S, St, D>(f: &mut Frame, app: &App<S, St, D>, area: Rect)
where
    S: Strategy,
    St: FrequencyStore,
    D: DictionaryLookup,
{
    let revealed = app.session.revealed();
    let total = revealed.len();
    let known = total - revealed.unknown_count();
    let percent = if total == 0 {
        0
    } else {
        u16::try_from(known * 100 / total).unwrap_or(100)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Revealed ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{known}/{total} letters"));

    f.render_widget(gauge, area);
}

fn render_learning<S, St, D>(f: &mut Frame, app: &App<S, St, D>, area: Rect)
where
    S: Strategy,
    St: FrequencyStore,
    D: DictionaryLookup,
{
    let model = &app.ctx.model;
    let leaders = (0..model.table.positions().min(6))
        .filter_map(|position| model.table.most_common(position))
        .map(|(letter, _)| letter.as_char().to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ");

    let content = vec![
        Line::from(format!("Games learned: {}", model.history.len())),
        Line::from(format!("Last word:     {}", model.history.last().unwrap_or("-"))),
        Line::from(format!(
            "Top by pos:    {}",
            if leaders.is_empty() { "-" } else { leaders.as_str() }
        )),
        Line::from(format!(
            "Solved: {}/{}  avg {:.1} guesses",
            app.stats.words_solved,
            app.stats.games_started,
            app.stats.average_attempts()
        )),
    ];

    let paragraph = Paragraph::new(content)
        .block(Block::default().title(" Learning ").borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_messages<S, St, D>(f: &mut Frame, app: &App<S, St, D>, area: Rect)
where
    S: Strategy,
    St: FrequencyStore,
    D: DictionaryLookup,
{
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Warning => Style::default().fg(Color::Yellow),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<S, St, D>(f: &mut Frame, app: &App<S, St, D>, area: Rect)
where
    S: Strategy,
    St: FrequencyStore,
    D: DictionaryLookup,
{
    let masked;
    let (title, content, color) = match app.input_mode {
        InputMode::SecretEntry => {
            masked = if app.show_secret {
                app.secret_buffer.clone()
            } else {
                "•".repeat(app.secret_buffer.chars().count())
            };
            (
                " Secret Word | TAB to show/hide ",
                masked.as_str(),
                Color::Yellow,
            )
        }
        InputMode::Guessing => (
            " Guessing | Enter/Space: next  a: auto  g: give up ",
            "",
            Color::Cyan,
        ),
        InputMode::Finished => (
            " Game Over | Press 'n' for new word or 'q' to quit ",
            "",
            Color::Green,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<S, St, D>(f: &mut Frame, app: &App<S, St, D>, area: Rect)
where
    S: Strategy,
    St: FrequencyStore,
    D: DictionaryLookup,
{
    let help_text = match app.input_mode {
        InputMode::SecretEntry => "Enter: start | Esc: quit",
        InputMode::Guessing => "q: Quit | Ctrl-C: Quit",
        InputMode::Finished => "n: New Word | q: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
