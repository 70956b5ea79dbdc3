//! Word analysis command
//!
//! Reports how informative a word is as a guess against a vocabulary.

use crate::core::Word;
use crate::solver::{LetterFrequencies, score};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub score: f64,
    /// 1-based position among vocabulary words by descending score
    pub rank: usize,
    pub total_words: usize,
    /// Frequency of each distinct letter of the word, in word order
    pub letters: Vec<(char, f64)>,
    /// The vocabulary's highest-scoring word
    pub best: Option<(String, f64)>,
    /// The vocabulary's most frequent letters and whether the word uses each
    pub top_letters: Vec<(char, f64, bool)>,
}

/// How many of the most frequent letters an analysis reports
pub const TOP_LETTERS: usize = 5;

/// Analyze the informativeness of a word against `vocabulary`
///
/// # Errors
///
/// Returns an error if the word is invalid or not in the vocabulary.
pub fn analyze_word(word: &str, vocabulary: &[Word]) -> Result<AnalysisResult, String> {
    let word_obj = Word::new(word).map_err(|e| format!("Invalid word: {e}"))?;

    if !vocabulary.contains(&word_obj) {
        return Err(format!("Word '{word}' not in word list"));
    }

    let frequencies = LetterFrequencies::build(vocabulary);
    let word_score = score(&word_obj, &frequencies);

    let rank = 1 + vocabulary
        .iter()
        .filter(|w| score(w, &frequencies) > word_score)
        .count();

    let best = vocabulary
        .iter()
        .map(|w| (w, score(w, &frequencies)))
        .fold(None, |best: Option<(&Word, f64)>, (w, s)| match best {
            Some((_, top)) if top >= s => best,
            _ => Some((w, s)),
        })
        .map(|(w, s)| (w.text().to_string(), s));

    let letters = word_obj
        .distinct_letters()
        .map(|letter| (char::from(letter), frequencies.frequency(letter)))
        .collect();

    let top_letters = frequencies
        .ranked()
        .into_iter()
        .take(TOP_LETTERS)
        .map(|(letter, frequency)| {
            let used = u8::try_from(letter).is_ok_and(|b| word_obj.has_letter(b));
            (letter, frequency, used)
        })
        .collect();

    Ok(AnalysisResult {
        word: word_obj.text().to_string(),
        score: word_score,
        rank,
        total_words: vocabulary.len(),
        letters,
        best,
        top_letters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn vocabulary() -> Vec<Word> {
        words_from_slice(&["crate", "crane", "slate", "plate", "grate"])
    }

    #[test]
    fn analyze_top_word() {
        let result = analyze_word("crate", &vocabulary()).unwrap();

        assert_eq!(result.rank, 1);
        assert_eq!(result.total_words, 5);
        assert_eq!(result.best.unwrap().0, "crate");
        assert_eq!(result.letters.len(), 5);
    }

    #[test]
    fn top_letters_flag_the_ones_the_word_uses() {
        let result = analyze_word("crane", &vocabulary()).unwrap();

        assert_eq!(result.top_letters.len(), TOP_LETTERS);
        // a and e are in every word, t in four of them
        assert_eq!(result.top_letters[0], ('a', 1.0, true));
        assert_eq!(result.top_letters[1], ('e', 1.0, true));
        assert_eq!(result.top_letters[2].0, 't');
        assert!(!result.top_letters[2].2);
    }

    #[test]
    fn analyze_lower_ranked_word() {
        let result = analyze_word("crane", &vocabulary()).unwrap();

        // crate, grate, slate and plate all outscore it
        assert_eq!(result.rank, 5);
        assert!(result.score > 0.0);
    }

    #[test]
    fn analyze_rejects_unknown_and_invalid_words() {
        assert!(analyze_word("zebra", &vocabulary()).is_err());
        assert!(analyze_word("xyz", &vocabulary()).is_err());
    }
}
