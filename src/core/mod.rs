//! Core domain types for the game
//!
//! Pure types with no I/O: the validated word and the feedback engine.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterStatus};
pub use word::{WORD_LENGTH, Word, WordError};
