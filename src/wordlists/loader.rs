//! Word list loading utilities
//!
//! Loads word files and resolves the dictionary for a game by trying each
//! configured source in turn, ending with the built-in list.

use super::Dictionary;
use crate::core::Word;
use log::{debug, info, warn};
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Surrounding whitespace is trimmed. Lines that are not five ASCII letters,
/// including lines that are not valid UTF-8, are skipped without error.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read(path)?;

    let mut skipped = 0usize;
    let words: Vec<Word> = content
        .split(|&b| b == b'\n')
        .filter_map(|line| {
            let Ok(line) = std::str::from_utf8(line) else {
                skipped += 1;
                return None;
            };
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            let word = Word::new(line).ok();
            if word.is_none() {
                skipped += 1;
            }
            word
        })
        .collect();

    debug!(
        "read {} words from {} ({skipped} lines skipped)",
        words.len(),
        path.display()
    );
    Ok(words)
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::BUILTIN;
///
/// let words = words_from_slice(BUILTIN);
/// assert_eq!(words.len(), BUILTIN.len());
/// ```
#[must_use]
pub fn words_from_slice<S: AsRef<str>>(slice: &[S]) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|s| Word::new(s.as_ref().trim()).ok())
        .collect()
}

/// Build the game dictionary from the first source that yields any words
///
/// Each path is tried in order; a missing, unreadable or empty file is
/// logged and skipped. When none succeed the `builtin` list is used.
pub fn resolve_dictionary<P, S>(paths: &[P], builtin: &[S]) -> Dictionary
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    for path in paths {
        let path = path.as_ref();
        match load_from_file(path) {
            Ok(words) if !words.is_empty() => {
                let dictionary = Dictionary::from_words(words);
                info!(
                    "using {} words from {}",
                    dictionary.len(),
                    path.display()
                );
                return dictionary;
            }
            Ok(_) => warn!(
                "no valid five-letter words in {}, trying next source",
                path.display()
            ),
            Err(e) => warn!("couldn't load words from {}: {e}", path.display()),
        }
    }

    let dictionary = Dictionary::from_words(words_from_slice(builtin));
    info!("using built-in list of {} words", dictionary.len());
    dictionary
}
