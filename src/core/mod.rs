//! Core domain types for Wordle
//!
//! Words and the feedback oracle. Everything here is pure and deterministic.

mod feedback;
mod word;

pub use feedback::{Feedback, Mark, evaluate_words};
pub use word::{ALPHABET_SIZE, WORD_LENGTH, Word};
pub(crate) use word::letter_index;
