//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark, Word};
use colored::{ColoredString, Colorize};

/// Render a guess as coloured letter tiles, e.g. " C  R  A  N  E "
#[must_use]
pub fn colored_guess(guess: &Word, feedback: Feedback) -> String {
    guess
        .chars()
        .iter()
        .zip(feedback.marks())
        .map(|(&letter, &mark)| tile(char::from(letter).to_ascii_uppercase(), mark).to_string())
        .collect()
}

fn tile(letter: char, mark: Mark) -> ColoredString {
    let text = format!(" {letter} ").as_str().bold();
    match mark {
        Mark::Correct => text.black().on_green(),
        Mark::Present => text.black().on_yellow(),
        Mark::Absent => text.white().on_bright_black(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Pluralize "guess"
#[must_use]
pub const fn guesses_word(count: usize) -> &'static str {
    if count == 1 { "guess" } else { "guesses" }
}
