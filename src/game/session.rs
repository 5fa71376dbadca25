//! Game session state machine
//!
//! A session starts awaiting guess 1. Each accepted guess is evaluated and
//! either ends the game or advances the attempt counter; rejected guesses
//! leave the state untouched.

use super::validation::{GuessError, validate_guess};
use crate::core::{Feedback, Word};
use crate::wordlists::Dictionary;
use log::debug;
use rand::Rng;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Solved on the given attempt
    Won { attempts: usize },
    /// Every attempt used without solving
    Lost,
    /// Input ended before the game finished
    Aborted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for a guess for this attempt (1-based)
    AwaitingGuess { attempt: usize },
    Finished(Outcome),
}

/// One evaluated guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub feedback: Feedback,
}

/// A single game against a fixed secret
pub struct Game<'a> {
    dictionary: &'a Dictionary,
    secret: Word,
    max_attempts: usize,
    state: GameState,
    history: Vec<Turn>,
}

impl<'a> Game<'a> {
    /// Start a game with a known secret
    ///
    /// Guesses are checked against `dictionary`; the secret itself need not
    /// be a member.
    ///
    /// # Panics
    /// Panics in debug mode if `max_attempts` is 0
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, secret: Word, max_attempts: usize) -> Self {
        debug_assert!(max_attempts > 0, "a game needs at least one attempt");
        Self {
            dictionary,
            secret,
            max_attempts,
            state: GameState::AwaitingGuess { attempt: 1 },
            history: Vec::new(),
        }
    }

    /// Start a game with a secret drawn from the dictionary
    ///
    /// Returns `None` if the dictionary is empty.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordle_game::core::Word;
    /// use wordle_game::game::Game;
    /// use wordle_game::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words([Word::new("crane").unwrap()]);
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let game = Game::random(&dictionary, &mut rng, 6).unwrap();
    /// assert_eq!(game.secret().text(), "crane");
    /// ```
    pub fn random<R: Rng + ?Sized>(
        dictionary: &'a Dictionary,
        rng: &mut R,
        max_attempts: usize,
    ) -> Option<Self> {
        let secret = dictionary.choose(rng)?.clone();
        debug!("secret chosen from {} words", dictionary.len());
        Some(Self::new(dictionary, secret, max_attempts))
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Guesses evaluated so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        match self.state {
            GameState::Finished(outcome) => Some(outcome),
            GameState::AwaitingGuess { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.state, GameState::Finished(_))
    }

    /// Validate and evaluate a raw guess
    ///
    /// # Errors
    ///
    /// Returns a `GuessError` without consuming an attempt if the input is
    /// not an accepted word, or `GuessError::GameOver` once the game has
    /// finished.
    pub fn submit(&mut self, raw: &str) -> Result<Feedback, GuessError> {
        let GameState::AwaitingGuess { attempt } = self.state else {
            return Err(GuessError::GameOver);
        };

        let guess = validate_guess(raw, self.dictionary)?;
        let feedback = Feedback::evaluate(&self.secret, &guess);
        debug!("attempt {attempt}: {guess} -> {feedback}");
        self.history.push(Turn { guess, feedback });

        self.state = if feedback.is_win() {
            GameState::Finished(Outcome::Won { attempts: attempt })
        } else if attempt >= self.max_attempts {
            GameState::Finished(Outcome::Lost)
        } else {
            GameState::AwaitingGuess {
                attempt: attempt + 1,
            }
        };

        Ok(feedback)
    }

    /// End the game because input ran out
    ///
    /// Has no effect on a game that already finished.
    pub fn abort(&mut self) {
        if !self.is_over() {
            self.state = GameState::Finished(Outcome::Aborted);
        }
    }
}
