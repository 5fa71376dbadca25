//! Word lists for the game
//!
//! Loading from files, the embedded fallback list and the dictionary type.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{BUILTIN, BUILTIN_COUNT};
