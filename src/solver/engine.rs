//! Shared guess → feedback → narrow state machine
//!
//! A [`Game`] owns the candidate set and guess log of one run. Strategies that pick
//! one guess per round plug a [`GuessPolicy`] into [`run`]; depth-first search drives
//! its own exploration and replays the result through a `Game` afterwards.

use super::filter::narrow;
use crate::core::{Feedback, Word};
use crate::error::SolveError;

/// Maximum number of guesses in a run
pub const MAX_GUESSES: usize = 6;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Guessing,
    Solved,
    Exhausted,
}

/// Terminal state of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved,
    Exhausted,
}

/// One guess of a run together with its effect on the candidate set
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub guess: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Result of a solve run
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub strategy: &'static str,
    pub steps: Vec<Step>,
    pub outcome: Outcome,
}

impl Solution {
    /// The guess log, in order
    pub fn guesses(&self) -> impl Iterator<Item = &Word> {
        self.steps.iter().map(|step| &step.guess)
    }

    #[must_use]
    pub fn guess_texts(&self) -> Vec<String> {
        self.guesses().map(|w| w.text().to_string()).collect()
    }

    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.steps.len()
    }

    /// True only if the final feedback was all-Correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.outcome == Outcome::Solved
    }
}

/// One run against a fixed secret
pub struct Game<'a> {
    secret: &'a Word,
    candidates: Vec<&'a Word>,
    steps: Vec<Step>,
    state: GameState,
}

impl<'a> Game<'a> {
    /// Start with the whole vocabulary as candidates and an empty log
    #[must_use]
    pub fn new(vocabulary: &'a [Word], secret: &'a Word) -> Self {
        Self {
            secret,
            candidates: vocabulary.iter().collect(),
            steps: Vec::with_capacity(MAX_GUESSES),
            state: GameState::Guessing,
        }
    }

    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        &self.candidates
    }

    /// Number of guesses made so far
    #[must_use]
    pub fn depth(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn guess_texts(&self) -> Vec<String> {
        self.steps.iter().map(|s| s.guess.text().to_string()).collect()
    }

    /// Play `guess` and advance the state machine
    ///
    /// Once the game is over further guesses are ignored.
    pub fn play(&mut self, guess: &Word) -> GameState {
        if self.state != GameState::Guessing {
            return self.state;
        }

        let feedback = Feedback::evaluate(self.secret, guess);
        let candidates_before = self.candidates.len();

        if feedback.is_solved() {
            self.state = GameState::Solved;
            self.candidates.retain(|&word| word == guess);
        } else {
            self.candidates = narrow(&self.candidates, guess, feedback);
        }

        self.steps.push(Step {
            guess: guess.clone(),
            feedback,
            candidates_before,
            candidates_after: self.candidates.len(),
        });

        log::debug!(
            "guess {}: {guess} -> {feedback} ({candidates_before} -> {} candidates)",
            self.steps.len(),
            self.candidates.len()
        );

        if self.state == GameState::Guessing && self.steps.len() >= MAX_GUESSES {
            self.state = GameState::Exhausted;
        }
        self.state
    }

    /// Finish the run
    ///
    /// A game abandoned mid-run counts as exhausted.
    #[must_use]
    pub fn into_solution(self, strategy: &'static str) -> Solution {
        let outcome = match self.state {
            GameState::Solved => Outcome::Solved,
            GameState::Guessing | GameState::Exhausted => Outcome::Exhausted,
        };
        Solution {
            strategy,
            steps: self.steps,
            outcome,
        }
    }
}

/// Per-round guess selection for the single-path strategies
pub trait GuessPolicy<'a> {
    /// Choose the next guess from the live candidates
    ///
    /// `depth` is the number of guesses already made. Returns `None` only for an
    /// empty candidate set.
    fn select(&mut self, candidates: &[&'a Word], depth: usize) -> Option<&'a Word>;
}

/// Drive `policy` until the game is solved or the budget is spent
///
/// # Errors
/// Returns `SolveError::NoCandidates` if a round starts with nothing left to guess.
pub fn run<'a, P: GuessPolicy<'a>>(
    strategy: &'static str,
    vocabulary: &'a [Word],
    secret: &'a Word,
    mut policy: P,
) -> Result<Solution, SolveError> {
    let mut game = Game::new(vocabulary, secret);

    while game.state() == GameState::Guessing {
        let guess = policy
            .select(game.candidates(), game.depth())
            .ok_or_else(|| SolveError::NoCandidates {
                guesses: game.guess_texts(),
            })?;
        game.play(guess);
    }

    log::debug!("{strategy}: {:?} after {} guesses", game.state(), game.depth());
    Ok(game.into_solution(strategy))
}
