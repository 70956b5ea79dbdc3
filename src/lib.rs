//! Wordle Search
//!
//! Solves Wordle-style games against a fixed vocabulary with four classic search
//! strategies: greedy best-first, A*-like, depth-first backtracking and an
//! accumulating-cost variant labelled AO*.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_search::core::{Feedback, Word};
//! use wordle_search::solver::{StrategyType, solve};
//! use wordle_search::wordlists::loader::words_from_slice;
//!
//! let vocabulary = words_from_slice(&["crate", "crane", "slate", "plate", "grate"]);
//! let secret = Word::new("crane").unwrap();
//!
//! let solution = solve(StrategyType::BestFirst, &vocabulary, &secret).unwrap();
//! assert!(solution.is_solved());
//!
//! // Re-render feedback for any guess in the log
//! let first = solution.guesses().next().unwrap();
//! println!("{first}: {}", Feedback::evaluate(&secret, first));
//! ```

// Core domain types
pub mod core;

// Error taxonomy
pub mod error;

// Search strategies
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{SolveError, WordError};
