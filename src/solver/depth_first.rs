//! Depth-first backtracking search
//!
//! Candidates are tried in list order, recursing into the narrowed set after each
//! miss, never deeper than the guess budget. A branch is fully explored once six
//! guesses sit on the path or narrowing leaves nothing to try; the search then pops
//! the latest guess and moves to the next sibling.
//!
//! On success the log is the winning path. If every branch fails the log is the last
//! fully explored branch rather than an empty list.

use super::engine::{Game, MAX_GUESSES, Solution};
use super::filter::narrow;
use super::strategy::Strategy;
use crate::core::{Feedback, Word};
use crate::error::SolveError;

pub struct DepthFirstSearch;

impl DepthFirstSearch {
    pub const NAME: &'static str = "Depth First Search";
}

struct Explorer<'a> {
    secret: &'a Word,
    path: Vec<&'a Word>,
    last_branch: Vec<&'a Word>,
    branches: usize,
}

impl<'a> Explorer<'a> {
    /// Returns true once a guess on the current path solves the game
    fn explore(&mut self, candidates: &[&'a Word]) -> bool {
        if self.path.len() >= MAX_GUESSES {
            return false;
        }

        for &word in candidates {
            self.path.push(word);

            let feedback = Feedback::evaluate(self.secret, word);
            if feedback.is_solved() {
                return true;
            }

            let remaining = narrow(candidates, word, feedback);
            if remaining.is_empty() || self.path.len() >= MAX_GUESSES {
                self.last_branch.clone_from(&self.path);
                self.branches += 1;
            } else if self.explore(&remaining) {
                return true;
            }

            log::trace!("DFS: backtrack from {word} at depth {}", self.path.len());
            self.path.pop();
        }

        false
    }
}

impl Strategy for DepthFirstSearch {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    /// # Errors
    /// Returns `SolveError::NoCandidates` for an empty vocabulary.
    fn solve(&self, vocabulary: &[Word], secret: &Word) -> Result<Solution, SolveError> {
        if vocabulary.is_empty() {
            return Err(SolveError::NoCandidates { guesses: vec![] });
        }

        let candidates: Vec<&Word> = vocabulary.iter().collect();
        let mut explorer = Explorer {
            secret,
            path: Vec::with_capacity(MAX_GUESSES),
            last_branch: Vec::new(),
            branches: 0,
        };

        let kept = if explorer.explore(&candidates) {
            explorer.path
        } else {
            log::debug!(
                "DFS: all {} branches failed, keeping the last one",
                explorer.branches
            );
            explorer.last_branch
        };

        // Replay to recover feedback and candidate counts along the kept path
        let mut game = Game::new(vocabulary, secret);
        for guess in kept {
            game.play(guess);
        }
        Ok(game.into_solution(Self::NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn first_word_wins_immediately() {
        let words = words_from_slice(&["crane", "crate", "slate"]);
        let solution = DepthFirstSearch.solve(&words, &words[0]).unwrap();
        assert_eq!(solution.guess_texts(), ["crane"]);
        assert!(solution.is_solved());
    }

    #[test]
    fn follows_list_order_down_the_tree() {
        let words = words_from_slice(&["crate", "crane", "slate", "plate", "grate"]);
        let solution = DepthFirstSearch.solve(&words, &words[1]).unwrap();

        // CRATE leaves only CRANE
        assert_eq!(solution.guess_texts(), ["crate", "crane"]);
        assert_eq!(solution.steps[0].feedback.to_string(), "gggbg");
        assert_eq!(solution.steps[0].candidates_after, 1);
    }

    #[test]
    fn total_failure_keeps_last_explored_branch() {
        // ZILLS is not in the vocabulary; every ?ILLS guess is green apart from its
        // first letter, so each miss only removes the word guessed
        let words = words_from_slice(&["bills", "fills", "gills", "hills", "kills", "mills", "pills"]);
        let secret = Word::new("zills").unwrap();

        let solution = DepthFirstSearch.solve(&words, &secret).unwrap();

        assert!(!solution.is_solved());
        assert_eq!(solution.guess_count(), MAX_GUESSES);
        assert_eq!(
            solution.guess_texts(),
            ["pills", "mills", "kills", "hills", "gills", "fills"]
        );
    }

    #[test]
    fn short_dead_ends_are_recorded_too() {
        // Two words, neither the secret: each branch ends when narrowing empties it
        let words = words_from_slice(&["crate", "fuzzy"]);
        let secret = Word::new("zzzzz").unwrap();

        let solution = DepthFirstSearch.solve(&words, &secret).unwrap();
        assert_eq!(solution.guess_texts(), ["fuzzy"]);
        assert!(!solution.is_solved());
    }

    #[test]
    fn empty_vocabulary_is_an_error() {
        let secret = Word::new("crane").unwrap();
        assert!(matches!(
            DepthFirstSearch.solve(&[], &secret),
            Err(SolveError::NoCandidates { .. })
        ));
    }
}
