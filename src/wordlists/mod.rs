//! Vocabularies for Wordle solving
//!
//! Provides the embedded default vocabulary and loaders for custom word lists.

mod embedded;
pub mod loader;

pub use embedded::{VOCABULARY, VOCABULARY_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_count_matches_const() {
        assert_eq!(VOCABULARY.len(), VOCABULARY_COUNT);
    }

    #[test]
    fn vocabulary_words_are_valid() {
        for &word in VOCABULARY {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn vocabulary_has_no_duplicates() {
        let unique: std::collections::HashSet<_> = VOCABULARY.iter().collect();
        assert_eq!(unique.len(), VOCABULARY.len());
    }

    #[test]
    fn vocabulary_contains_scenario_words() {
        for word in ["crate", "crane", "slate", "plate", "grate"] {
            assert!(VOCABULARY.contains(&word), "missing {word}");
        }
    }
}
