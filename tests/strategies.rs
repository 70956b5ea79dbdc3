use test_case::test_case;
use wordle_search::core::{Feedback, Word, evaluate_words};
use wordle_search::solver::filter::narrow;
use wordle_search::solver::{MAX_GUESSES, Outcome, Strategy, StrategyType, solve};
use wordle_search::wordlists::VOCABULARY;
use wordle_search::wordlists::loader::words_from_slice;
use wordle_search::SolveError;

fn scenario_vocabulary() -> Vec<Word> {
    words_from_slice(&["crate", "crane", "slate", "plate", "grate"])
}

#[test]
fn crate_against_crane_is_gggbg() {
    assert_eq!(evaluate_words("crane", "crate").unwrap().to_string(), "gggbg");
}

#[test]
fn narrowing_with_scenario_feedback() {
    let words = scenario_vocabulary();
    let candidates: Vec<&Word> = words.iter().collect();
    let guess = Word::new("crate").unwrap();
    let feedback = evaluate_words("crane", "crate").unwrap();

    let remaining = narrow(&candidates, &guess, feedback);

    assert!(!remaining.iter().any(|w| w.text() == "crate"));
    assert!(remaining.iter().any(|w| w.text() == "crane"));
}

#[test]
fn secret_survives_narrowing_over_embedded_vocabulary() {
    let words = words_from_slice(&VOCABULARY[..150]);
    let candidates: Vec<&Word> = words.iter().collect();

    for secret in words.iter().step_by(7) {
        for guess in words.iter().step_by(11) {
            let remaining = narrow(&candidates, guess, Feedback::evaluate(secret, guess));
            assert!(remaining.contains(&secret), "{secret} lost after {guess}");
        }
    }
}

#[test_case(StrategyType::BestFirst ; "best first")]
#[test_case(StrategyType::AStar ; "a star")]
#[test_case(StrategyType::DepthFirst ; "depth first")]
#[test_case(StrategyType::AoStar ; "ao star")]
fn solves_scenario_secret(strategy: StrategyType) {
    let words = scenario_vocabulary();
    let secret = Word::new("crane").unwrap();

    let solution = solve(strategy, &words, &secret).unwrap();

    assert_eq!(solution.outcome, Outcome::Solved);
    assert_eq!(solution.guesses().last(), Some(&secret));
    assert!(solution.steps.last().unwrap().feedback.is_solved());
}

#[test_case(StrategyType::BestFirst ; "best first")]
#[test_case(StrategyType::AStar ; "a star")]
#[test_case(StrategyType::DepthFirst ; "depth first")]
#[test_case(StrategyType::AoStar ; "ao star")]
fn stays_within_budget_on_embedded_vocabulary(strategy: StrategyType) {
    let words = words_from_slice(&VOCABULARY[..120]);

    for secret in words.iter().step_by(5) {
        let solution = strategy.solve(&words, secret).unwrap();
        assert!(solution.guess_count() <= MAX_GUESSES);

        // Success is read from the final feedback, not the log length
        let last = solution.steps.last().unwrap();
        assert_eq!(solution.is_solved(), last.feedback.is_solved());
        if solution.is_solved() {
            assert_eq!(&last.guess, secret);
        }
    }
}

#[test_case(StrategyType::BestFirst ; "best first")]
#[test_case(StrategyType::AStar ; "a star")]
#[test_case(StrategyType::DepthFirst ; "depth first")]
#[test_case(StrategyType::AoStar ; "ao star")]
fn runs_are_deterministic(strategy: StrategyType) {
    let words = words_from_slice(&VOCABULARY[..200]);
    let secret = &words[137];

    let first = strategy.solve(&words, secret).unwrap();
    let second = strategy.solve(&words, secret).unwrap();

    assert_eq!(first.guess_texts(), second.guess_texts());
}

#[test_case(StrategyType::BestFirst ; "best first")]
#[test_case(StrategyType::AStar ; "a star")]
#[test_case(StrategyType::AoStar ; "ao star")]
fn secret_outside_vocabulary_surfaces_no_candidates(strategy: StrategyType) {
    let words = scenario_vocabulary();
    let secret = Word::new("zzzzz").unwrap();

    let err = strategy.solve(&words, &secret).unwrap_err();
    assert!(matches!(err, SolveError::NoCandidates { ref guesses } if guesses.len() == 1));
}

#[test]
fn depth_first_total_failure_returns_last_branch() {
    let words = words_from_slice(&["bills", "fills", "gills", "hills", "kills", "mills", "pills"]);
    let secret = Word::new("zills").unwrap();

    let solution = StrategyType::DepthFirst.solve(&words, &secret).unwrap();

    assert_eq!(solution.outcome, Outcome::Exhausted);
    assert_eq!(solution.guess_count(), MAX_GUESSES);
    assert_eq!(
        solution.guess_texts(),
        ["pills", "mills", "kills", "hills", "gills", "fills"]
    );
    assert!(solution.steps.iter().all(|s| s.feedback.to_string() == "bgggg"));
}

#[test]
fn strategies_share_no_state_between_calls() {
    let words = scenario_vocabulary();
    for strategy in StrategyType::all() {
        let a = strategy.solve(&words, &words[4]).unwrap();
        let _ = strategy.solve(&words, &words[0]).unwrap();
        let b = strategy.solve(&words, &words[4]).unwrap();
        assert_eq!(a, b, "{}", strategy.name());
    }
}
