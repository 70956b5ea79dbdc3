//! A*-like search
//!
//! Priority is `path_cost - score`, where the path cost grows with the number of
//! guesses already placed. Like best-first, the queue is rebuilt from the live
//! candidates every round and the lowest priority is guessed.

use super::engine::{self, GuessPolicy, Solution};
use super::frequency::{LetterFrequencies, score};
use super::queue::CandidateQueue;
use super::strategy::Strategy;
use crate::core::Word;
use crate::error::SolveError;

/// Cost charged per guess already in the log
pub const DEPTH_PENALTY: f64 = 1.0;

pub struct AStarSearch;

impl AStarSearch {
    pub const NAME: &'static str = "A* Search";
}

/// Cost of the path so far: `depth` guesses placed
#[must_use]
pub fn path_cost(depth: usize) -> f64 {
    depth as f64 * DEPTH_PENALTY
}

struct AStarPolicy {
    frequencies: LetterFrequencies,
}

impl<'a> GuessPolicy<'a> for AStarPolicy {
    fn select(&mut self, candidates: &[&'a Word], depth: usize) -> Option<&'a Word> {
        let g = path_cost(depth);
        let mut queue =
            CandidateQueue::from_candidates(candidates, |word| g - score(word, &self.frequencies));

        let entry = queue.pop()?;
        log::trace!("A*: {} at f = {:.3} (g = {g})", entry.word, entry.priority);
        Some(entry.word)
    }
}

impl Strategy for AStarSearch {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn solve(&self, vocabulary: &[Word], secret: &Word) -> Result<Solution, SolveError> {
        let policy = AStarPolicy {
            frequencies: LetterFrequencies::build(vocabulary),
        };
        engine::run(Self::NAME, vocabulary, secret, policy)
    }
}
