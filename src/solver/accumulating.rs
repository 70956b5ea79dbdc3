//! Accumulating-cost search, labelled AO*
//!
//! Not an AND-OR decomposition: a greedy strategy whose cost estimates only ever grow.
//! Each word's cost is cached the first time it is looked at, starting from its negated
//! informativeness score. At the start of every later round each live candidate's
//! cached cost is raised by the number of guesses made so far, and the cheapest live
//! candidate is guessed.

use super::engine::{self, GuessPolicy, Solution};
use super::frequency::{LetterFrequencies, score};
use super::strategy::Strategy;
use crate::core::Word;
use crate::error::SolveError;
use rustc_hash::{FxHashMap, FxHashSet};

pub struct AoStarSearch;

impl AoStarSearch {
    pub const NAME: &'static str = "AO* Search";
}

/// Cost cache owned by a single solve call
struct CostMap<'a> {
    frequencies: LetterFrequencies,
    costs: FxHashMap<&'a str, f64>,
}

impl<'a> CostMap<'a> {
    fn new(frequencies: LetterFrequencies) -> Self {
        Self {
            frequencies,
            costs: FxHashMap::default(),
        }
    }

    /// Cached cost, computed on first reference
    fn cost(&mut self, word: &'a Word) -> &mut f64 {
        let frequencies = &self.frequencies;
        self.costs
            .entry(word.text())
            .or_insert_with(|| -score(word, frequencies))
    }
}

impl<'a> GuessPolicy<'a> for CostMap<'a> {
    fn select(&mut self, candidates: &[&'a Word], depth: usize) -> Option<&'a Word> {
        if depth > 0 {
            // Duplicate entries share one cost and are charged once per round
            let penalty = depth as f64;
            let mut charged = FxHashSet::default();
            for &word in candidates {
                if charged.insert(word.text()) {
                    *self.cost(word) += penalty;
                }
            }
        }

        let mut best: Option<(&'a Word, f64)> = None;
        for &word in candidates {
            let cost = *self.cost(word);
            // Strict comparison keeps the first of equal costs
            if best.is_none_or(|(_, lowest)| cost < lowest) {
                best = Some((word, cost));
            }
        }

        best.map(|(word, cost)| {
            log::trace!("AO*: {word} at cost {cost:.3}");
            word
        })
    }
}

impl Strategy for AoStarSearch {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn solve(&self, vocabulary: &[Word], secret: &Word) -> Result<Solution, SolveError> {
        let costs = CostMap::new(LetterFrequencies::build(vocabulary));
        engine::run(Self::NAME, vocabulary, secret, costs)
    }
}
