//! The set of words a game may use
//!
//! A dictionary is both the pool the secret is drawn from and the
//! membership test for guesses.

use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;

/// Unique words in first-seen order
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary, dropping repeated words
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::wordlists::Dictionary;
    ///
    /// let words = ["crane", "CRANE", "slate"].map(|w| Word::new(w).unwrap());
    /// let dictionary = Dictionary::from_words(words);
    /// assert_eq!(dictionary.len(), 2);
    /// ```
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let mut dictionary = Self::default();
        for word in words {
            if dictionary.index.insert(word.clone()) {
                dictionary.words.push(word);
            }
        }
        dictionary
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check whether a word is an accepted guess
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// All words in first-seen order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Pick a uniformly random word, or `None` if empty
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }
}
