//! Strategy comparison command
//!
//! Runs every strategy against the same secret so their guess logs can be read
//! side by side.

use super::solve::find_secret;
use crate::core::Word;
use crate::error::SolveError;
use crate::solver::{Solution, Strategy, StrategyType};

/// One strategy's attempt
pub struct StrategyRun {
    pub strategy: StrategyType,
    pub result: Result<Solution, SolveError>,
}

/// Every strategy's attempt at one secret
pub struct Comparison {
    pub secret: String,
    pub runs: Vec<StrategyRun>,
}

impl Comparison {
    /// Strategies that solved, with the fewest guesses first
    #[must_use]
    pub fn ranking(&self) -> Vec<(StrategyType, usize)> {
        let mut ranked: Vec<(StrategyType, usize)> = self
            .runs
            .iter()
            .filter_map(|run| match &run.result {
                Ok(solution) if solution.is_solved() => {
                    Some((run.strategy, solution.guess_count()))
                }
                _ => None,
            })
            .collect();
        ranked.sort_by_key(|&(_, guesses)| guesses);
        ranked
    }
}

/// Run all strategies on `secret`
///
/// A failing strategy is reported in its own run and does not stop the others.
///
/// # Errors
///
/// Returns an error if the secret is invalid or not in the vocabulary.
pub fn compare_strategies(secret: &str, vocabulary: &[Word]) -> Result<Comparison, SolveError> {
    let secret = find_secret(secret, vocabulary)?;

    let runs = StrategyType::all()
        .into_iter()
        .map(|strategy| {
            let result = strategy.solve(vocabulary, secret);
            if let Err(e) = &result {
                log::warn!("{}: {e}", strategy.name());
            }
            StrategyRun { strategy, result }
        })
        .collect();

    Ok(Comparison {
        secret: secret.text().to_string(),
        runs,
    })
}
