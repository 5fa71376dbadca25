//! Terminal output formatting
//!
//! Colored feedback rows and the game's fixed messages.

pub mod display;
pub mod formatters;

pub use display::{print_outcome, print_prompt, print_welcome};
pub use formatters::render_guess;
