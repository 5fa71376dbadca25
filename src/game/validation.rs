//! Guess validation at the input boundary

use crate::core::{Word, WordError};
use crate::wordlists::Dictionary;
use thiserror::Error;

/// Why a guess was not accepted
///
/// None of these consume an attempt; the messages are shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Please enter exactly 5 letters.")]
    InvalidLength(usize),
    #[error("Only letters please.")]
    NotAlphabetic,
    #[error("Word not in allowed list. Try another.")]
    NotInDictionary(String),
    #[error("The game is already over.")]
    GameOver,
}

impl From<WordError> for GuessError {
    fn from(err: WordError) -> Self {
        match err {
            WordError::InvalidLength(len) => Self::InvalidLength(len),
            WordError::NonAlphabetic => Self::NotAlphabetic,
        }
    }
}

/// Turn raw input into an accepted guess
///
/// The input is trimmed and lowercased, then must be five letters long,
/// alphabetic, and present in `dictionary`, checked in that order.
///
/// # Errors
///
/// Returns the first rule the input breaks.
///
/// # Examples
/// ```
/// use wordle_game::core::Word;
/// use wordle_game::game::{GuessError, validate_guess};
/// use wordle_game::wordlists::Dictionary;
///
/// let dictionary = Dictionary::from_words([Word::new("crane").unwrap()]);
/// assert!(validate_guess("  CRANE\n", &dictionary).is_ok());
/// assert_eq!(validate_guess("cran", &dictionary), Err(GuessError::InvalidLength(4)));
/// ```
pub fn validate_guess(raw: &str, dictionary: &Dictionary) -> Result<Word, GuessError> {
    let word = Word::new(raw.trim())?;
    if dictionary.contains(&word) {
        Ok(word)
    } else {
        Err(GuessError::NotInDictionary(word.text().to_string()))
    }
}
