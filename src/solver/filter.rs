//! Candidate narrowing
//!
//! A word stays a candidate only if, had it been the secret, the guess would have
//! produced exactly the observed feedback. The real secret always passes this test
//! against its own feedback, so it is never filtered out.

use crate::core::{Feedback, Word};

/// Keep the candidates consistent with `feedback` for `guess`
///
/// Returns a fresh collection; `candidates` is left untouched and order is preserved.
///
/// # Examples
/// ```
/// use wordle_search::core::{Feedback, Word};
/// use wordle_search::solver::filter::narrow;
///
/// let words: Vec<Word> = ["crate", "crane", "slate"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let candidates: Vec<&Word> = words.iter().collect();
///
/// let guess = &words[0];
/// let feedback = Feedback::evaluate(&words[1], guess);
/// let remaining = narrow(&candidates, guess, feedback);
/// assert_eq!(remaining, vec![&words[1]]);
/// ```
#[must_use]
pub fn narrow<'a>(candidates: &[&'a Word], guess: &Word, feedback: Feedback) -> Vec<&'a Word> {
    candidates
        .iter()
        .copied()
        .filter(|&candidate| Feedback::evaluate(candidate, guess) == feedback)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn vocabulary() -> Vec<Word> {
        words_from_slice(&["crate", "crane", "slate", "plate", "grate"])
    }

    #[test]
    fn crane_survives_and_crate_is_removed() {
        let words = vocabulary();
        let candidates: Vec<&Word> = words.iter().collect();
        let guess = Word::new("crate").unwrap();
        let feedback: Feedback = "gggbg".parse().unwrap();

        let remaining = narrow(&candidates, &guess, feedback);
        let texts: Vec<&str> = remaining.iter().map(|w| w.text()).collect();

        assert_eq!(texts, ["crane"]);
    }

    #[test]
    fn secret_always_survives_its_own_feedback() {
        let words = vocabulary();
        let candidates: Vec<&Word> = words.iter().collect();

        for secret in &words {
            for guess in &words {
                let feedback = Feedback::evaluate(secret, guess);
                let remaining = narrow(&candidates, guess, feedback);
                assert!(remaining.contains(&secret), "{secret} lost after {guess}");
            }
        }
    }

    #[test]
    fn narrowing_never_grows() {
        let words = vocabulary();
        let candidates: Vec<&Word> = words.iter().collect();
        let guess = Word::new("slate").unwrap();
        let feedback = Feedback::evaluate(&words[4], &guess);

        let once = narrow(&candidates, &guess, feedback);
        let twice = narrow(&once, &guess, feedback);

        assert!(once.len() <= candidates.len());
        assert_eq!(once, twice);
    }

    #[test]
    fn contradictory_feedback_empties_the_set() {
        let words = vocabulary();
        let candidates: Vec<&Word> = words.iter().collect();
        let guess = Word::new("crate").unwrap();

        // No vocabulary word lacks every letter of CRATE
        let remaining = narrow(&candidates, &guess, "bbbbb".parse().unwrap());
        assert!(remaining.is_empty());
    }

    #[test]
    fn preserves_candidate_order() {
        let words = vocabulary();
        let candidates: Vec<&Word> = words.iter().rev().collect();
        let guess = Word::new("slate").unwrap();
        let feedback: Feedback = "bbggg".parse().unwrap();

        let remaining = narrow(&candidates, &guess, feedback);
        let texts: Vec<&str> = remaining.iter().map(|w| w.text()).collect();

        assert_eq!(texts, ["grate", "crate"]);
    }
}
