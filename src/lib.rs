//! Terminal Wordle
//!
//! Guess a hidden five-letter word in six attempts, with per-letter feedback
//! after each guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Feedback, Word};
//!
//! let secret = Word::new("allot").unwrap();
//! let guess = Word::new("igloo").unwrap();
//!
//! let feedback = Feedback::evaluate(&secret, &guess);
//! assert_eq!(feedback.to_string(), "--GG-");
//! ```

// Core domain types
pub mod core;

// Game session state machine and guess validation
pub mod game;

// Word lists
pub mod wordlists;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
