//! Wordle solving algorithms
//!
//! The letter-frequency heuristic, candidate narrowing, and the four search
//! strategies built on top of them.

pub mod accumulating;
pub mod astar;
pub mod best_first;
pub mod depth_first;
pub mod engine;
pub mod filter;
pub mod frequency;
pub mod queue;
pub mod strategy;

pub use accumulating::AoStarSearch;
pub use astar::AStarSearch;
pub use best_first::BestFirstSearch;
pub use depth_first::DepthFirstSearch;
pub use engine::{Game, GameState, MAX_GUESSES, Outcome, Solution, Step};
pub use frequency::{LetterFrequencies, score};
pub use strategy::{Strategy, StrategyType};

use crate::core::Word;
use crate::error::SolveError;

/// Solve for `secret` with the chosen strategy
///
/// # Errors
/// See [`Strategy::solve`].
pub fn solve(
    strategy: StrategyType,
    vocabulary: &[Word],
    secret: &Word,
) -> Result<Solution, SolveError> {
    strategy.solve(vocabulary, secret)
}

/// Validate raw strings, then solve
///
/// # Errors
/// Returns `SolveError::InvalidWord` if the secret or any vocabulary entry is not a
/// valid 5-letter word, otherwise as [`solve`].
pub fn solve_words(
    strategy: StrategyType,
    vocabulary: &[&str],
    secret: &str,
) -> Result<Solution, SolveError> {
    let vocabulary = vocabulary
        .iter()
        .map(|&w| Word::new(w))
        .collect::<Result<Vec<_>, _>>()?;
    let secret = Word::new(secret)?;
    solve(strategy, &vocabulary, &secret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WordError;

    #[test]
    fn solve_words_validates_input() {
        assert_eq!(
            solve_words(StrategyType::BestFirst, &["crane"], "cranes"),
            Err(SolveError::InvalidWord(WordError::InvalidLength(6)))
        );
        assert_eq!(
            solve_words(StrategyType::AStar, &["cr4ne"], "crane"),
            Err(SolveError::InvalidWord(WordError::InvalidCharacters))
        );
    }

    #[test]
    fn solve_words_runs_strategy() {
        let solution = solve_words(StrategyType::AoStar, &["crate", "crane"], "crane").unwrap();
        assert!(solution.is_solved());
        assert_eq!(solution.strategy, "AO* Search");
    }
}
