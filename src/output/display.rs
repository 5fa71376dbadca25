//! Display functions for the interactive game

use super::formatters::history_line;
use crate::game::{Game, Outcome};
use colored::Colorize;
use std::io::{self, Write};

/// Print the greeting shown before the first prompt
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_welcome<W: Write>(out: &mut W, max_attempts: usize) -> io::Result<()> {
    writeln!(
        out,
        "Welcome to Wordle! Guess the 5-letter word in {max_attempts} attempts."
    )?;
    writeln!(out, "(Guesses must be valid words from the dictionary.)")?;
    writeln!(out)
}

/// Print the prompt for an attempt, without a trailing newline
///
/// # Errors
///
/// Returns an error if writing to or flushing `out` fails.
pub fn print_prompt<W: Write>(out: &mut W, attempt: usize, max_attempts: usize) -> io::Result<()> {
    write!(out, "Attempt {attempt}/{max_attempts} - enter guess: ")?;
    out.flush()
}

/// Print the final message and guess history for a finished game
///
/// An aborted game prints nothing.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_outcome<W: Write>(out: &mut W, game: &Game<'_>) -> io::Result<()> {
    let secret = game.secret().text();
    match game.outcome() {
        Some(Outcome::Won { attempts }) => {
            let message = format!("You win! The word was \"{secret}\".");
            writeln!(out, "{}", message.green().bold())?;
            let noun = if attempts == 1 { "guess" } else { "guesses" };
            writeln!(out, "Solved in {attempts} {noun}.")?;
        }
        Some(Outcome::Lost) => {
            let message = format!("Out of tries! The word was \"{secret}\".");
            writeln!(out, "{}", message.red().bold())?;
        }
        Some(Outcome::Aborted) | None => return Ok(()),
    }

    writeln!(out)?;
    for (i, turn) in game.history().iter().enumerate() {
        writeln!(out, "  {}", history_line(i + 1, &turn.guess, &turn.feedback))?;
    }
    Ok(())
}
