//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// One word per line. Lines are trimmed and lowercased; blank lines and `#`
/// comments are skipped, as is anything that is not a 5-letter word (logged at
/// `warn`). Duplicates keep their first occurrence.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_search::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/five_letter_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_word_list(&content);

    log::info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse newline-separated words, with the same rules as [`load_from_file`]
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<Word> {
    let words = content
        .lines()
        .enumerate()
        .filter_map(|(number, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    log::warn!("skipping line {}: '{trimmed}' ({e})", number + 1);
                    None
                }
            }
        })
        .collect();

    dedup_words(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_search::wordlists::loader::words_from_slice;
/// use wordle_search::wordlists::VOCABULARY;
///
/// let words = words_from_slice(VOCABULARY);
/// assert_eq!(words.len(), VOCABULARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Drop repeated words, keeping the first occurrence and the original order
#[must_use]
pub fn dedup_words(words: Vec<Word>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    words
        .into_iter()
        .filter(|word| seen.insert(word.text().to_string()))
        .collect()
}
