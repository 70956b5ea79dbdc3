//! Search strategies
//!
//! Defines the Strategy trait and the enum used to pick one at runtime.

use super::accumulating::AoStarSearch;
use super::astar::AStarSearch;
use super::best_first::BestFirstSearch;
use super::depth_first::DepthFirstSearch;
use super::engine::Solution;
use crate::core::Word;
use crate::error::SolveError;
use std::str::FromStr;

/// A complete policy for playing one game against a secret
pub trait Strategy {
    /// Human-readable label
    fn name(&self) -> &'static str;

    /// Play a full game against `secret` using only words from `vocabulary`
    ///
    /// # Errors
    /// Returns `SolveError::NoCandidates` if the candidate set empties before the
    /// game ends.
    fn solve(&self, vocabulary: &[Word], secret: &Word) -> Result<Solution, SolveError>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    BestFirst,
    AStar,
    DepthFirst,
    AoStar,
}

impl StrategyType {
    /// Every strategy, in the order comparisons list them
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::BestFirst, Self::AStar, Self::AoStar, Self::DepthFirst]
    }

    /// Create strategy from name string
    ///
    /// Supported names: "best-first", "astar", "aostar", "dfs" plus a few aliases.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "best-first" | "bestfirst" | "best" | "greedy" => Some(Self::BestFirst),
            "astar" | "a*" | "a-star" => Some(Self::AStar),
            "dfs" | "depth-first" => Some(Self::DepthFirst),
            "aostar" | "ao*" | "ao-star" | "accumulating" => Some(Self::AoStar),
            _ => None,
        }
    }

    /// Short CLI name
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::BestFirst => "best-first",
            Self::AStar => "astar",
            Self::DepthFirst => "dfs",
            Self::AoStar => "aostar",
        }
    }
}

impl Strategy for StrategyType {
    fn name(&self) -> &'static str {
        match self {
            Self::BestFirst => BestFirstSearch.name(),
            Self::AStar => AStarSearch.name(),
            Self::DepthFirst => DepthFirstSearch.name(),
            Self::AoStar => AoStarSearch.name(),
        }
    }

    fn solve(&self, vocabulary: &[Word], secret: &Word) -> Result<Solution, SolveError> {
        match self {
            Self::BestFirst => BestFirstSearch.solve(vocabulary, secret),
            Self::AStar => AStarSearch.solve(vocabulary, secret),
            Self::DepthFirst => DepthFirstSearch.solve(vocabulary, secret),
            Self::AoStar => AoStarSearch.solve(vocabulary, secret),
        }
    }
}

impl FromStr for StrategyType {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| SolveError::UnknownStrategy(s.to_string()))
    }
}
