//! Letter frequency model and informativeness heuristic
//!
//! Frequencies use document counting: a letter scores one per vocabulary word that
//! contains it, however many times it appears there, divided by the vocabulary size.
//! Every frequency therefore lies in `[0, 1]`. Only the ordering these values induce
//! matters to the strategies.

use crate::core::{ALPHABET_SIZE, Word, letter_index};

/// Per-letter document frequency over one vocabulary snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct LetterFrequencies {
    frequencies: [f64; ALPHABET_SIZE],
}

impl LetterFrequencies {
    /// Count letters across `vocabulary`
    ///
    /// An empty vocabulary yields all-zero frequencies.
    #[must_use]
    pub fn build(vocabulary: &[Word]) -> Self {
        let mut counts = [0usize; ALPHABET_SIZE];
        for word in vocabulary {
            for letter in word.distinct_letters() {
                counts[letter_index(letter)] += 1;
            }
        }

        let total = vocabulary.len().max(1) as f64;
        Self {
            frequencies: counts.map(|count| count as f64 / total),
        }
    }

    /// Frequency of a lowercase ASCII letter; 0.0 for anything else
    #[must_use]
    pub fn frequency(&self, letter: u8) -> f64 {
        if letter.is_ascii_lowercase() {
            self.frequencies[letter_index(letter)]
        } else {
            0.0
        }
    }

    /// Letters ordered from most to least frequent (alphabetical on ties)
    #[must_use]
    pub fn ranked(&self) -> Vec<(char, f64)> {
        let mut ranked: Vec<(char, f64)> = (b'a'..=b'z')
            .map(|letter| (char::from(letter), self.frequency(letter)))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}

/// Informativeness score of `word`: the summed frequency of its distinct letters
///
/// Higher is more informative. Repeated letters count once, so a word with five
/// distinct common letters outranks one that repeats a common letter.
#[must_use]
pub fn score(word: &Word, frequencies: &LetterFrequencies) -> f64 {
    word.distinct_letters()
        .map(|letter| frequencies.frequency(letter))
        .sum()
}
