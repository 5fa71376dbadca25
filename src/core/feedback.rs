//! Per-letter feedback for a guess
//!
//! Each position of a guess is classified against the secret:
//! - Correct: same letter in the same position
//! - Present: letter occurs elsewhere in the secret and is not yet claimed
//! - Absent: no unclaimed occurrence left
//!
//! Exact matches are claimed first; misplaced letters then claim what is left,
//! scanning the guess from left to right.

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Classification of a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    /// Right letter, right position (green)
    Correct,
    /// Right letter, wrong position (yellow)
    Present,
    /// Letter has no unclaimed match in the secret (gray)
    Absent,
}

impl LetterStatus {
    /// Emoji square for sharing results
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for one guess, in guess-index order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterStatus; WORD_LENGTH]);

impl Feedback {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([LetterStatus::Correct; WORD_LENGTH]);

    /// Evaluate `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and consume those secret letters
    /// 2. Count the secret letters that were not consumed
    /// 3. Second pass, left to right: a non-green letter is yellow while the
    ///    remaining count for it is positive, gray otherwise
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Word};
    ///
    /// let secret = Word::new("slate").unwrap();
    /// let guess = Word::new("crane").unwrap();
    ///
    /// // C(gray) R(gray) A(green) N(gray) E(green)
    /// let feedback = Feedback::evaluate(&secret, &guess);
    /// assert_eq!(feedback.to_string(), "--G-G");
    /// ```
    #[must_use]
    pub fn evaluate(secret: &Word, guess: &Word) -> Self {
        let mut result = [LetterStatus::Absent; WORD_LENGTH];
        let mut consumed = [false; WORD_LENGTH];

        for (i, (g, s)) in guess.chars().iter().zip(secret.chars()).enumerate() {
            if g == s {
                result[i] = LetterStatus::Correct;
                consumed[i] = true;
            }
        }

        let mut remaining = [0u8; 26];
        for (&letter, _) in secret
            .chars()
            .iter()
            .zip(consumed)
            .filter(|&(_, used)| !used)
        {
            remaining[letter_index(letter)] += 1;
        }

        for (status, &letter) in result.iter_mut().zip(guess.chars()) {
            if *status == LetterStatus::Correct {
                continue;
            }
            let count = &mut remaining[letter_index(letter)];
            if *count > 0 {
                *status = LetterStatus::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Statuses in guess-index order
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// True when every position is Correct
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count the number of green positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0
            .iter()
            .filter(|&&s| s == LetterStatus::Correct)
            .count()
    }

    /// Render as a row of emoji squares, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.to_emoji()).collect()
    }
}

#[inline]
fn letter_index(letter: u8) -> usize {
    usize::from(letter - b'a')
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in self.0 {
            let ch = match status {
                LetterStatus::Correct => 'G',
                LetterStatus::Present => 'Y',
                LetterStatus::Absent => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn eval(secret: &str, guess: &str) -> Feedback {
        Feedback::evaluate(&Word::new(secret).unwrap(), &Word::new(guess).unwrap())
    }

    /// Parse "GY-G-" style rows: G green, Y yellow, anything else gray
    fn fb(s: &str) -> Feedback {
        let mut statuses = [LetterStatus::Absent; WORD_LENGTH];
        for (slot, ch) in statuses.iter_mut().zip(s.chars()) {
            *slot = match ch {
                'G' => LetterStatus::Correct,
                'Y' => LetterStatus::Present,
                _ => LetterStatus::Absent,
            };
        }
        Feedback(statuses)
    }

    #[test]
    fn perfect_constant() {
        assert!(Feedback::PERFECT.is_win());
        assert_eq!(fb("GGGGG"), Feedback::PERFECT);
        assert_eq!(Feedback::PERFECT.count_correct(), 5);
    }

    #[test]
    fn all_gray() {
        let feedback = eval("fghij", "abcde");
        assert_eq!(feedback, fb("-----"));
        assert_eq!(feedback.count_correct(), 0);
    }

    #[test]
    fn identical_words_win() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            assert!(eval(word, word).is_win());
        }
    }

    #[test]
    fn real_wordle_example() {
        // SLATE has no R, so CRANE only scores A and E
        assert_eq!(eval("slate", "crane"), fb("--G-G"));
    }

    #[test]
    fn greens_are_claimed_before_yellows() {
        // The L and O of IGLOO sit on ALLOT's L and O; the second O finds no O left
        assert_eq!(eval("allot", "igloo"), fb("--GG-"));
    }

    #[test]
    fn duplicate_guess_letters_claim_every_remaining_copy() {
        // SPEED holds two unclaimed E's, so both E's in ERASE are yellow
        let feedback = eval("speed", "erase");
        assert_eq!(feedback, fb("Y--YY"));
        assert_eq!(feedback.count_correct(), 0);
    }

    #[test]
    fn excess_duplicates_beyond_supply_are_gray() {
        // CREEP's E at index 2 is green; one E remains for the other three
        assert_eq!(eval("creep", "geese"), fb("-YG--"));
    }

    #[test]
    fn misplaced_then_exact_duplicate() {
        // First O is yellow (FLOOR's other O), second O is green
        assert_eq!(eval("floor", "robot"), fb("YY-G-"));
    }

    #[test]
    fn later_green_is_not_stolen_by_earlier_yellow() {
        // Only one E in the secret and it is matched exactly at index 4
        assert_eq!(eval("crane", "eerie"), fb("--Y-G"));
    }

    #[test]
    fn display_uses_letter_codes() {
        assert_eq!(eval("floor", "robot").to_string(), "YY-G-");
    }

    #[test]
    fn to_emoji_row() {
        assert_eq!(fb("GY-GY").to_emoji(), "🟩🟨⬜🟩🟨");
    }

    fn word_strategy() -> impl Strategy<Value = Word> {
        "[a-e]{5}".prop_map(|s| Word::new(s).unwrap())
    }

    proptest! {
        #[test]
        fn correct_count_equals_exact_matches(secret in word_strategy(), guess in word_strategy()) {
            let feedback = Feedback::evaluate(&secret, &guess);
            let exact = secret.chars().iter().zip(guess.chars()).filter(|(s, g)| s == g).count();
            prop_assert_eq!(feedback.statuses().len(), WORD_LENGTH);
            prop_assert_eq!(feedback.count_correct(), exact);
        }

        #[test]
        fn evaluation_is_deterministic(secret in word_strategy(), guess in word_strategy()) {
            prop_assert_eq!(
                Feedback::evaluate(&secret, &guess),
                Feedback::evaluate(&secret, &guess)
            );
        }

        #[test]
        fn win_iff_guess_equals_secret(secret in word_strategy(), guess in word_strategy()) {
            prop_assert_eq!(Feedback::evaluate(&secret, &guess).is_win(), secret == guess);
        }

        #[test]
        fn colored_letters_never_exceed_secret_supply(secret in word_strategy(), guess in word_strategy()) {
            let feedback = Feedback::evaluate(&secret, &guess);
            for letter in b'a'..=b'e' {
                let in_secret = secret.chars().iter().filter(|&&c| c == letter).count();
                let scored = guess
                    .chars()
                    .iter()
                    .zip(feedback.statuses())
                    .filter(|&(&c, &s)| c == letter && s != LetterStatus::Absent)
                    .count();
                prop_assert!(scored <= in_secret);
            }
        }
    }
}
