//! Interactive line-based game
//!
//! Reads guesses one line at a time until the game is won, lost, or input
//! runs out.

use crate::game::{Game, GameState, Outcome};
use crate::output::{print_outcome, print_prompt, print_welcome, render_guess};
use std::io::{self, BufRead, Write};

/// Run a game to completion over the given input and output
///
/// End of input while waiting for a guess aborts the game quietly. Lines
/// that are not valid UTF-8 are rejected like any other malformed guess.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R: BufRead, W: Write>(
    game: &mut Game<'_>,
    mut input: R,
    mut out: W,
) -> io::Result<Outcome> {
    print_welcome(&mut out, game.max_attempts())?;

    let mut line = Vec::new();
    while let GameState::AwaitingGuess { attempt } = game.state() {
        print_prompt(&mut out, attempt, game.max_attempts())?;

        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            game.abort();
            writeln!(out)?;
            break;
        }

        match game.submit(&String::from_utf8_lossy(&line)) {
            Ok(feedback) => {
                if let Some(turn) = game.history().last() {
                    writeln!(out, "{}", render_guess(&turn.guess, &feedback))?;
                }
            }
            Err(e) => writeln!(out, "{e}")?,
        }
    }

    print_outcome(&mut out, game)?;
    out.flush()?;

    // The loop only exits once the game has finished
    Ok(game.outcome().unwrap_or(Outcome::Aborted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::Dictionary;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    const WORDS: &[&str] = &["crane", "slate", "glory", "point", "brown", "laugh", "baker"];

    fn play(game: &mut Game<'_>, input: impl AsRef<[u8]>) -> (Outcome, String) {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let outcome = run_play(game, Cursor::new(input.as_ref().to_vec()), &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn single_word_dictionary_wins_on_first_attempt() {
        let dict = Dictionary::from_words(words_from_slice(&["crane"]));
        let mut game = Game::random(&dict, &mut StdRng::seed_from_u64(11), 6).unwrap();
        assert_eq!(game.secret().text(), "crane");

        let (outcome, output) = play(&mut game, "crane\n");

        assert_eq!(outcome, Outcome::Won { attempts: 1 });
        assert!(output.contains("Attempt 1/6 - enter guess: "));
        assert!(output.contains("C R A N E"));
        assert!(output.contains("You win! The word was \"crane\"."));
        assert!(!output.contains("Attempt 2/6"));
    }

    #[test]
    fn six_wrong_guesses_reveal_the_secret() {
        let dict = Dictionary::from_words(words_from_slice(WORDS));
        let mut game = Game::new(&dict, Word::new("crane").unwrap(), 6);

        let (outcome, output) = play(&mut game, "slate\nglory\npoint\nbrown\nlaugh\nbaker\n");

        assert_eq!(outcome, Outcome::Lost);
        assert!(output.contains("Attempt 6/6 - enter guess: "));
        assert!(output.contains("Out of tries! The word was \"crane\"."));
        assert!(output.contains("6. BAKER"));
    }

    #[test]
    fn invalid_input_reprompts_same_attempt() {
        let dict = Dictionary::from_words(words_from_slice(WORDS));
        let mut game = Game::new(&dict, Word::new("crane").unwrap(), 6);

        let (outcome, output) = play(&mut game, "abc\ncr4ne\nzzzzz\n  CRANE  \n");

        assert_eq!(outcome, Outcome::Won { attempts: 1 });
        assert_eq!(output.matches("Attempt 1/6 - enter guess: ").count(), 4);
        assert!(output.contains("Please enter exactly 5 letters."));
        assert!(output.contains("Only letters please."));
        assert!(output.contains("Word not in allowed list. Try another."));
    }

    #[test]
    fn non_utf8_line_is_rejected_and_reprompted() {
        let dict = Dictionary::from_words(words_from_slice(WORDS));
        let mut game = Game::new(&dict, Word::new("crane").unwrap(), 6);

        // Latin-1 'é' is not valid UTF-8
        let (outcome, output) = play(&mut game, b"cr\xe9ne\ncrane\n");

        assert_eq!(outcome, Outcome::Won { attempts: 1 });
        assert!(output.contains("Only letters please."));
        assert_eq!(output.matches("Attempt 1/6 - enter guess: ").count(), 2);
    }

    #[test]
    fn end_of_input_aborts_quietly() {
        let dict = Dictionary::from_words(words_from_slice(WORDS));
        let mut game = Game::new(&dict, Word::new("crane").unwrap(), 6);

        let (outcome, output) = play(&mut game, "slate\n");

        assert_eq!(outcome, Outcome::Aborted);
        assert!(output.contains("Attempt 2/6 - enter guess: "));
        assert!(!output.contains("crane"));
        assert!(!output.contains("Out of tries"));
    }

    #[test]
    fn last_line_without_newline_still_counts() {
        let dict = Dictionary::from_words(words_from_slice(WORDS));
        let mut game = Game::new(&dict, Word::new("crane").unwrap(), 6);

        let (outcome, _) = play(&mut game, "slate\ncrane");
        assert_eq!(outcome, Outcome::Won { attempts: 2 });
    }

    #[test]
    fn feedback_rows_follow_each_guess() {
        let dict = Dictionary::from_words(words_from_slice(WORDS));
        let mut game = Game::new(&dict, Word::new("crane").unwrap(), 3);

        let (outcome, output) = play(&mut game, "slate\nglory\npoint\n");

        assert_eq!(outcome, Outcome::Lost);
        for row in ["S L A T E", "G L O R Y", "P O I N T"] {
            assert!(output.contains(row), "missing row {row}");
        }
        assert!(output.contains("Attempt 3/3"));
    }
}
