//! Letter-by-letter scoring of a guess against a target word.
//!
//! Two passes over the letters:
//!
//! 1. Exact matches are marked `CorrectPosition` and taken out of play.
//! 2. Each remaining target letter, left to right, claims the first
//!    unmatched guess letter with the same value as `CorrectLetter`.
//!
//! Whatever is left is `IncorrectLetter`. Because letters are consumed as
//! they match, a letter guessed twice but present once is credited once.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::error::EvaluateError;

/// How a guessed letter relates to the target.
///
/// Ordered by strength: `IncorrectLetter < CorrectLetter < CorrectPosition`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Classification {
    /// Not in the target (or all occurrences already accounted for).
    IncorrectLetter,
    /// In the target, elsewhere.
    CorrectLetter,
    /// In the target at this position.
    CorrectPosition,
}

/// Result for one letter of a guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterEvaluation {
    /// Position in the guess.
    pub index: usize,
    /// The guessed letter.
    pub letter: char,
    /// Its classification.
    pub classification: Classification,
}

/// Classify every letter of `attempt` against `target`.
///
/// Output is ordered by position in the attempt. Both words must have the
/// same number of letters.
///
/// ```
/// use word_engine::guess::{evaluate, Classification::*};
///
/// let result: Vec<_> = evaluate("baboo", "abbey")
///     .unwrap()
///     .into_iter()
///     .map(|e| e.classification)
///     .collect();
///
/// assert_eq!(result, [CorrectLetter, CorrectLetter, CorrectPosition, IncorrectLetter, IncorrectLetter]);
/// ```
pub fn evaluate(attempt: &str, target: &str) -> Result<Vec<LetterEvaluation>, EvaluateError> {
    let guess: SmallVec<[char; 8]> = attempt.chars().collect();
    let secret: SmallVec<[char; 8]> = target.chars().collect();

    if guess.len() != secret.len() {
        return Err(EvaluateError::LengthMismatch {
            attempt: guess.len(),
            target: secret.len(),
        });
    }

    let mut marks: SmallVec<[Option<Classification>; 8]> = smallvec![None; guess.len()];

    for (i, (g, s)) in guess.iter().zip(&secret).enumerate() {
        if g == s {
            marks[i] = Some(Classification::CorrectPosition);
        }
    }

    for (i, s) in secret.iter().enumerate() {
        if marks[i] == Some(Classification::CorrectPosition) {
            continue;
        }
        if let Some(j) = (0..guess.len()).find(|&j| marks[j].is_none() && guess[j] == *s) {
            marks[j] = Some(Classification::CorrectLetter);
        }
    }

    Ok(guess
        .iter()
        .zip(marks)
        .enumerate()
        .map(|(index, (&letter, mark))| LetterEvaluation {
            index,
            letter,
            classification: mark.unwrap_or(Classification::IncorrectLetter),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::Classification::*;
    use super::*;

    fn classes(attempt: &str, target: &str) -> Vec<Classification> {
        evaluate(attempt, target)
            .unwrap()
            .into_iter()
            .map(|e| e.classification)
            .collect()
    }

    #[test]
    fn test_exact_match() {
        assert_eq!(classes("speed", "speed"), vec![CorrectPosition; 5]);
    }

    #[test]
    fn test_no_overlap() {
        assert_eq!(classes("fjord", "quick"), vec![IncorrectLetter; 5]);
    }

    #[test]
    fn test_repeated_letters_consumed() {
        let result = evaluate("baboo", "abbey").unwrap();
        let expected = vec![
            LetterEvaluation { index: 0, letter: 'b', classification: CorrectLetter },
            LetterEvaluation { index: 1, letter: 'a', classification: CorrectLetter },
            LetterEvaluation { index: 2, letter: 'b', classification: CorrectPosition },
            LetterEvaluation { index: 3, letter: 'o', classification: IncorrectLetter },
            LetterEvaluation { index: 4, letter: 'o', classification: IncorrectLetter },
        ];
        assert_eq!(result, expected);
    }

    #[test]
    fn test_erase_against_speed() {
        // s-p-e-e-d vs e-r-a-s-e: no position matches; the two e's and the s
        // are each present once in the remaining target letters.
        assert_eq!(
            classes("erase", "speed"),
            vec![CorrectLetter, IncorrectLetter, IncorrectLetter, CorrectLetter, CorrectLetter]
        );
    }

    #[test]
    fn test_extra_occurrence_is_incorrect() {
        // One 'l' in the target: the first guessed 'l' claims it, the other two are spent.
        assert_eq!(
            classes("lolly", "plate"),
            vec![CorrectLetter, IncorrectLetter, IncorrectLetter, IncorrectLetter, IncorrectLetter]
        );
        // An exact match takes priority over an earlier misplaced copy.
        assert_eq!(
            classes("eerie", "crane"),
            vec![IncorrectLetter, IncorrectLetter, CorrectLetter, IncorrectLetter, CorrectPosition]
        );
    }

    #[test]
    fn test_length_mismatch() {
        assert_eq!(
            evaluate("cat", "horse"),
            Err(EvaluateError::LengthMismatch { attempt: 3, target: 5 })
        );
    }

    #[test]
    fn test_empty_words() {
        assert_eq!(evaluate("", ""), Ok(vec![]));
    }

    #[test]
    fn test_classification_order() {
        assert!(IncorrectLetter < CorrectLetter);
        assert!(CorrectLetter < CorrectPosition);
    }
}
