//! Command implementations

pub mod analyze;
pub mod compare;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, analyze_word};
pub use compare::{Comparison, StrategyRun, compare_strategies};
pub use solve::{SolveConfig, pick_secret, solve_word};
pub use test_all::{TestAllStatistics, run_test_all};
