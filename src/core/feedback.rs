//! Per-letter feedback for a guess against a secret
//!
//! Feedback is rendered on the wire as one character per position, left to right:
//! - `g` = Correct (right letter, right position)
//! - `y` = Present (letter elsewhere in the secret)
//! - `b` = Absent (letter not in the secret, or all its copies already accounted for)

use super::word::{ALPHABET_SIZE, WORD_LENGTH, Word, letter_index};
use crate::error::WordError;
use std::fmt;

/// Outcome for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Correct,
    Present,
    Absent,
}

impl Mark {
    /// Wire character for this mark
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'g',
            Self::Present => 'y',
            Self::Absent => 'b',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }

    fn from_char(ch: char) -> Option<Self> {
        match ch {
            'g' | 'G' | '🟩' => Some(Self::Correct),
            'y' | 'Y' | '🟨' => Some(Self::Present),
            'b' | 'B' | '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

impl Feedback {
    /// All positions correct
    pub const SOLVED: Self = Self([Mark::Correct; WORD_LENGTH]);

    #[must_use]
    pub const fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    /// Compute the feedback shown when `guess` is played against `secret`
    ///
    /// # Algorithm
    /// 1. Mark exact matches Correct and remove them from the secret's letter pool
    /// 2. For the remaining positions, mark Present while the pool still holds the
    ///    letter (consuming one copy), otherwise Absent
    ///
    /// # Examples
    /// ```
    /// use wordle_search::core::{Feedback, Word};
    ///
    /// let secret = Word::new("crane").unwrap();
    /// let guess = Word::new("crate").unwrap();
    /// assert_eq!(Feedback::evaluate(&secret, &guess).to_string(), "gggbg");
    /// ```
    #[must_use]
    pub fn evaluate(secret: &Word, guess: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut available = secret.letter_counts();

        for (i, mark) in marks.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            if letter == secret.char_at(i) {
                *mark = Mark::Correct;
                available[letter_index(letter)] -= 1;
            }
        }

        for (i, mark) in marks.iter_mut().enumerate() {
            if *mark == Mark::Correct {
                continue;
            }
            let count = &mut available[letter_index(guess.char_at(i))];
            if *count > 0 {
                *mark = Mark::Present;
                *count -= 1;
            }
        }

        Self(marks)
    }

    #[inline]
    #[must_use]
    pub fn is_solved(self) -> bool {
        self == Self::SOLVED
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Correct + Present marks per letter of `guess`, indexed by `letter - b'a'`
    #[must_use]
    pub fn credited_letters(self, guess: &Word) -> [u8; ALPHABET_SIZE] {
        let mut credited = [0u8; ALPHABET_SIZE];
        for (&mark, &letter) in self.0.iter().zip(guess.chars()) {
            if mark != Mark::Absent {
                credited[letter_index(letter)] += 1;
            }
        }
        credited
    }

    /// Render as coloured squares, e.g. "🟩🟩🟩⬛🟩"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

/// Validate both words, then evaluate
///
/// # Errors
/// Returns `WordError` if either argument is not a valid 5-letter word.
pub fn evaluate_words(secret: &str, guess: &str) -> Result<Feedback, WordError> {
    let secret = Word::new(secret)?;
    let guess = Word::new(guess)?;
    Ok(Feedback::evaluate(&secret, &guess))
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.code())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    /// Parse "ggbyg"; also accepts upper case, `-`/`_` for Absent and the emoji squares
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut chars = s.trim().chars();

        for mark in &mut marks {
            *mark = chars
                .next()
                .and_then(Mark::from_char)
                .ok_or_else(|| format!("invalid feedback string: {s}"))?;
        }

        if chars.next().is_some() {
            return Err(format!("invalid feedback string: {s}"));
        }

        Ok(Self(marks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(secret: &str, guess: &str) -> String {
        evaluate_words(secret, guess).unwrap().to_string()
    }

    #[test]
    fn self_evaluation_is_solved() {
        for word in ["crane", "slate", "audio", "zzzzz", "speed"] {
            let w = Word::new(word).unwrap();
            assert!(Feedback::evaluate(&w, &w).is_solved());
        }
    }

    #[test]
    fn crate_against_crane() {
        assert_eq!(eval("crane", "crate"), "gggbg");
    }

    #[test]
    fn all_absent() {
        assert_eq!(eval("fghij", "abcde"), "bbbbb");
    }

    #[test]
    fn duplicate_guess_letters_credit_only_secret_copies() {
        // ERASE holds two E's and one S
        assert_eq!(eval("erase", "speed"), "ybyyb");
        // ABBEY holds one E; the green E consumes it
        assert_eq!(eval("abbey", "keyed"), "bbygb");
    }

    #[test]
    fn correct_takes_priority_over_present() {
        // FLOOR: the O at position 3 is green, the one at position 1 is yellow
        assert_eq!(eval("floor", "robot"), "yybgb");
    }

    #[test]
    fn credited_letters_never_exceed_secret_counts() {
        let words = ["speed", "erase", "keyed", "abbey", "llama", "level", "crane"];
        for secret in words {
            for guess in words {
                let s = Word::new(secret).unwrap();
                let g = Word::new(guess).unwrap();
                let credited = Feedback::evaluate(&s, &g).credited_letters(&g);
                let counts = s.letter_counts();
                for (c, n) in credited.iter().zip(counts.iter()) {
                    assert!(c <= n, "{guess} vs {secret}");
                }
            }
        }
    }

    #[test]
    fn evaluate_words_rejects_mismatched_length() {
        assert_eq!(
            evaluate_words("crane", "cranes"),
            Err(WordError::InvalidLength(6))
        );
        assert!(evaluate_words("cr4ne", "crane").is_err());
    }

    #[test]
    fn parse_wire_format() {
        let feedback: Feedback = "gggbg".parse().unwrap();
        assert_eq!(feedback.marks()[3], Mark::Absent);
        assert_eq!(feedback.marks().iter().filter(|&&m| m == Mark::Correct).count(), 4);
        assert_eq!(feedback.to_string(), "gggbg");
    }

    #[test]
    fn parse_aliases() {
        let a: Feedback = "GY-_b".parse().unwrap();
        let b: Feedback = "🟩🟨⬛⬜⬛".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "gybbb");
    }

    #[test]
    fn parse_invalid() {
        assert!("gggg".parse::<Feedback>().is_err());
        assert!("ggggbb".parse::<Feedback>().is_err());
        assert!("ggxgg".parse::<Feedback>().is_err());
        assert!("".parse::<Feedback>().is_err());
    }

    #[test]
    fn emoji_rendering() {
        assert_eq!(Feedback::SOLVED.to_emoji(), "🟩🟩🟩🟩🟩");
        let feedback: Feedback = "gybbb".parse().unwrap();
        assert_eq!(feedback.to_emoji(), "🟩🟨⬛⬛⬛");
    }
}
