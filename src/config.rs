//! Game configuration
//!
//! Everything that used to be a hidden constant: where words come from,
//! how many attempts a game allows and how the secret is drawn.

use crate::wordlists::loader::resolve_dictionary;
use crate::wordlists::{BUILTIN, Dictionary};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

/// Attempts allowed per game unless configured otherwise
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Dictionary file named on the command line
    pub dictionary: Option<PathBuf>,
    /// Dictionary file tried when the explicit one is absent or unusable
    pub default_dictionary: Option<PathBuf>,
    /// Last-resort word list
    pub builtin_words: Vec<String>,
    pub max_attempts: usize,
    /// Fixed seed for the secret; drawn from the OS when unset
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dictionary: None,
            default_dictionary: None,
            builtin_words: BUILTIN.iter().map(|&w| w.to_string()).collect(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Dictionary files in the order they are tried
    #[must_use]
    pub fn dictionary_sources(&self) -> Vec<&Path> {
        self.dictionary
            .iter()
            .chain(&self.default_dictionary)
            .map(PathBuf::as_path)
            .collect()
    }

    /// Resolve the dictionary, falling back to the built-in list
    #[must_use]
    pub fn load_dictionary(&self) -> Dictionary {
        resolve_dictionary(&self.dictionary_sources(), &self.builtin_words)
    }

    /// Random generator for choosing the secret
    #[must_use]
    pub fn rng(&self) -> StdRng {
        if let Some(seed) = self.seed {
            debug!("seeding secret selection with {seed}");
            StdRng::seed_from_u64(seed)
        } else {
            StdRng::from_os_rng()
        }
    }
}
