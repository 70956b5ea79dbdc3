//! Test all secrets - whole-vocabulary strategy evaluation
//!
//! Runs a strategy with every vocabulary word as the secret and collects statistics.
//! Runs are independent, so they are spread across threads with rayon.

use crate::core::Word;
use crate::solver::{MAX_GUESSES, Outcome, Strategy, StrategyType};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;

/// Result from solving a single secret
#[derive(Debug, Clone)]
pub struct WordTestResult {
    pub word: String,
    pub guesses: Vec<String>,
    pub outcome: Option<Outcome>,
}

impl WordTestResult {
    fn is_solved(&self) -> bool {
        self.outcome == Some(Outcome::Solved)
    }
}

/// Statistics from testing all words
#[derive(Debug)]
pub struct TestAllStatistics {
    pub strategy: &'static str,
    pub total_words: usize,
    pub solved: usize,
    pub exhausted: usize,
    /// Runs that ended with an error instead of an outcome
    pub errors: usize,
    pub guess_distribution: HashMap<usize, usize>,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub hardest_words: Vec<String>,
    pub first_guess_used: HashMap<String, usize>,
}

/// Run `strategy` with each of the first `limit` vocabulary words as the secret
///
/// Every run sees the full vocabulary.
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
pub fn run_test_all(
    strategy: StrategyType,
    vocabulary: &[Word],
    limit: Option<usize>,
    show_progress: bool,
) -> TestAllStatistics {
    let secrets = &vocabulary[..limit.unwrap_or(vocabulary.len()).min(vocabulary.len())];

    let pb = if show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("static progress template")
            .progress_chars("█▓▒░"),
    );
    pb.set_message(strategy.name());

    let results: Vec<WordTestResult> = secrets
        .par_iter()
        .map(|secret| {
            let result = match strategy.solve(vocabulary, secret) {
                Ok(solution) => WordTestResult {
                    word: secret.text().to_string(),
                    guesses: solution.guess_texts(),
                    outcome: Some(solution.outcome),
                },
                Err(e) => {
                    log::warn!("{}: {secret}: {e}", strategy.name());
                    WordTestResult {
                        word: secret.text().to_string(),
                        guesses: Vec::new(),
                        outcome: None,
                    }
                }
            };
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_with_message("Complete!");

    summarize(strategy.name(), &results)
}

fn summarize(strategy: &'static str, results: &[WordTestResult]) -> TestAllStatistics {
    let mut guess_distribution: HashMap<usize, usize> = HashMap::new();
    let mut first_guess_used: HashMap<String, usize> = HashMap::new();

    for result in results {
        if result.is_solved() {
            *guess_distribution.entry(result.guesses.len()).or_insert(0) += 1;
        }
        if let Some(first) = result.guesses.first() {
            *first_guess_used.entry(first.clone()).or_insert(0) += 1;
        }
    }

    let solved_lengths: Vec<usize> = results
        .iter()
        .filter(|r| r.is_solved())
        .map(|r| r.guesses.len())
        .collect();
    let solved = solved_lengths.len();
    let errors = results.iter().filter(|r| r.outcome.is_none()).count();

    let average_guesses = if solved > 0 {
        solved_lengths.iter().sum::<usize>() as f64 / solved as f64
    } else {
        0.0
    };

    let hardest_words = results
        .iter()
        .filter(|r| !r.is_solved() || r.guesses.len() == MAX_GUESSES)
        .map(|r| r.word.clone())
        .collect();

    TestAllStatistics {
        strategy,
        total_words: results.len(),
        solved,
        exhausted: results.len() - solved - errors,
        errors,
        guess_distribution,
        average_guesses,
        max_guesses: solved_lengths.iter().copied().max().unwrap_or(0),
        min_guesses: solved_lengths.iter().copied().min().unwrap_or(0),
        hardest_words,
        first_guess_used,
    }
}
