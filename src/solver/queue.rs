//! Min-priority queue of candidate words
//!
//! Entries compare on their numeric priority only. Among equal priorities the entry
//! pushed first pops first, so ties resolve in candidate-set enumeration order. The
//! word payload never takes part in ordering.

use crate::core::Word;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A priority key paired with an opaque word payload
#[derive(Debug, Clone, Copy)]
pub struct PriorityEntry<'a> {
    pub priority: f64,
    sequence: usize,
    pub word: &'a Word,
}

impl PartialEq for PriorityEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PriorityEntry<'_> {}

impl PartialOrd for PriorityEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PriorityEntry<'_> {
    /// Reversed so that `BinaryHeap`, a max-heap, yields the lowest priority first
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Min-queue rebuilt from scratch every decision round
#[derive(Debug, Default)]
pub struct CandidateQueue<'a> {
    heap: BinaryHeap<PriorityEntry<'a>>,
    pushed: usize,
}

impl<'a> CandidateQueue<'a> {
    /// Build a queue over `candidates`, keying each with `priority`
    pub fn from_candidates<F>(candidates: &[&'a Word], mut priority: F) -> Self
    where
        F: FnMut(&Word) -> f64,
    {
        let mut queue = Self {
            heap: BinaryHeap::with_capacity(candidates.len()),
            pushed: 0,
        };
        for &word in candidates {
            queue.push(priority(word), word);
        }
        queue
    }

    pub fn push(&mut self, priority: f64, word: &'a Word) {
        self.heap.push(PriorityEntry {
            priority,
            sequence: self.pushed,
            word,
        });
        self.pushed += 1;
    }

    /// Remove and return the entry with the lowest priority
    pub fn pop(&mut self) -> Option<PriorityEntry<'a>> {
        self.heap.pop()
    }
}
