//! Game session logic
//!
//! Input validation and the attempt state machine around the feedback engine.

mod session;
mod validation;

pub use session::{Game, GameState, Outcome, Turn};
pub use validation::{GuessError, validate_guess};
