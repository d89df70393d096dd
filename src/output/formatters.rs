//! Formatting utilities for terminal output

use crate::core::{Letter, LetterSet};

/// Format revealed positions 1-based, e.g. `2, 4, 6`
#[must_use]
pub fn format_positions(positions: &[usize]) -> String {
    positions
        .iter()
        .map(|p| (p + 1).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Alphabet with each letter marked by its state: uppercase hit, `·` miss, lowercase unused
#[must_use]
pub fn alphabet_strip(guessed: LetterSet, misses: LetterSet) -> String {
    Letter::ALPHABET
        .iter()
        .map(|&letter| {
            if misses.contains(letter) {
                '·'
            } else if guessed.contains(letter) {
                letter.as_char().to_ascii_uppercase()
            } else {
                letter.as_char()
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_are_one_based() {
        assert_eq!(format_positions(&[1, 3, 5]), "2, 4, 6");
        assert_eq!(format_positions(&[]), "");
    }

    #[test]
    fn alphabet_strip_marks_states() {
        let guessed: LetterSet = "aez".chars().filter_map(Letter::new).collect();
        let misses: LetterSet = "z".chars().filter_map(Letter::new).collect();
        let strip = alphabet_strip(guessed, misses);

        assert_eq!(strip.chars().count(), 26);
        assert!(strip.starts_with("AbcdE"));
        assert!(strip.ends_with('·'));
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
