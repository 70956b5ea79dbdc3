//! Greedy best-first search
//!
//! Every round the queue is discarded and rebuilt over the whole live candidate set,
//! keyed by the negated informativeness score, and the minimum is popped. The most
//! informative candidate therefore goes first.

use super::engine::{self, GuessPolicy};
use super::frequency::{LetterFrequencies, score};
use super::queue::CandidateQueue;
use super::strategy::Strategy;
use crate::core::Word;
use crate::error::SolveError;

pub struct BestFirstSearch;

impl BestFirstSearch {
    pub const NAME: &'static str = "Best First Search";
}

struct BestFirstPolicy {
    frequencies: LetterFrequencies,
}

impl<'a> GuessPolicy<'a> for BestFirstPolicy {
    fn select(&mut self, candidates: &[&'a Word], _depth: usize) -> Option<&'a Word> {
        let mut queue =
            CandidateQueue::from_candidates(candidates, |word| -score(word, &self.frequencies));
        queue.pop().map(|entry| entry.word)
    }
}

impl Strategy for BestFirstSearch {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn solve(&self, vocabulary: &[Word], secret: &Word) -> Result<engine::Solution, SolveError> {
        let policy = BestFirstPolicy {
            frequencies: LetterFrequencies::build(vocabulary),
        };
        engine::run(Self::NAME, vocabulary, secret, policy)
    }
}
