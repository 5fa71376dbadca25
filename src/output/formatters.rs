//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterStatus, Word};
use colored::{ColoredString, Colorize};

/// Style one uppercase letter by its status
#[must_use]
pub fn colorize_letter(letter: char, status: LetterStatus) -> ColoredString {
    let letter = letter.to_ascii_uppercase().to_string();
    match status {
        LetterStatus::Correct => letter.green().bold(),
        LetterStatus::Present => letter.yellow().bold(),
        LetterStatus::Absent => letter.bright_black().bold(),
    }
}

/// Render a guess as space-separated colored capitals, e.g. "C R A N E"
#[must_use]
pub fn render_guess(guess: &Word, feedback: &Feedback) -> String {
    guess
        .text()
        .chars()
        .zip(feedback.statuses())
        .map(|(letter, &status)| colorize_letter(letter, status).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// One line of the end-of-game summary: "1. SLATE ⬜⬜🟩⬜🟩"
#[must_use]
pub fn history_line(turn: usize, guess: &Word, feedback: &Feedback) -> String {
    format!(
        "{}. {} {}",
        turn.to_string().bright_black(),
        guess.text().to_uppercase().bright_white().bold(),
        feedback.to_emoji()
    )
}
