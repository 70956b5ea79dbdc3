//! Error types shared by the core and the commands

use thiserror::Error;

/// A word that cannot take part in a game
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

/// Failure of a solve run
///
/// Running out of guesses is not an error; see [`crate::solver::Outcome`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),
    /// The candidate set emptied mid-run. `guesses` is the log up to that point.
    #[error("no candidates remain after {} guesses ({})", .guesses.len(), .guesses.join(", "))]
    NoCandidates { guesses: Vec<String> },
    #[error("'{0}' is not in the vocabulary")]
    SecretNotInVocabulary(String),
    #[error("unknown strategy '{0}' (expected one of: best-first, astar, dfs, aostar)")]
    UnknownStrategy(String),
}
