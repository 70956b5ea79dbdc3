//! Word solving command
//!
//! Solves a specific secret with one strategy and returns the guess log.

use crate::core::Word;
use crate::error::SolveError;
use crate::solver::{Solution, Strategy, StrategyType};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Configuration for solving a word
pub struct SolveConfig {
    pub secret: String,
    pub strategy: StrategyType,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String, strategy: StrategyType) -> Self {
        Self { secret, strategy }
    }
}

/// Solve `config.secret` against `vocabulary`
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not a valid 5-letter word
/// - The secret is not in the vocabulary
/// - The strategy runs out of candidates
pub fn solve_word(config: &SolveConfig, vocabulary: &[Word]) -> Result<Solution, SolveError> {
    let secret = find_secret(&config.secret, vocabulary)?;
    let solution = config.strategy.solve(vocabulary, secret)?;

    log::info!(
        "{} {:?} {} in {} guesses",
        solution.strategy,
        solution.outcome,
        secret,
        solution.guess_count()
    );
    Ok(solution)
}

/// Validate `secret` and look it up in `vocabulary`
///
/// # Errors
///
/// Returns `InvalidWord` or `SecretNotInVocabulary`.
pub fn find_secret<'a>(secret: &str, vocabulary: &'a [Word]) -> Result<&'a Word, SolveError> {
    let word = Word::new(secret)?;
    vocabulary
        .iter()
        .find(|w| **w == word)
        .ok_or_else(|| SolveError::SecretNotInVocabulary(word.text().to_string()))
}

/// Choose a random secret from the vocabulary
pub fn pick_secret<'a, R: Rng + ?Sized>(vocabulary: &'a [Word], rng: &mut R) -> Option<&'a Word> {
    vocabulary.choose(rng)
}
