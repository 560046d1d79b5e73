//! Completion status and keyboard hints for a player's guesses.
//!
//! For every letter the player has typed, the keyboard shows the best
//! result seen against each target word. Once a target word is solved the
//! keyboard stops hinting for it.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::evaluate::{evaluate, Classification};
use super::game::{Game, GameState};
use crate::core::GameConfig;
use crate::error::EvaluateError;

/// Per-letter, per-target-word best classification.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyboardState {
    /// Number of target words; every letter entry has this length.
    pub number_of_words: usize,
    /// Letter → best classification per target word index, `None` if the
    /// letter has not been evaluated against that word.
    pub letter_evaluations: FxHashMap<char, Vec<Option<Classification>>>,
}

impl KeyboardState {
    /// Best classification of `letter` against target word `word_index`.
    #[must_use]
    pub fn get(&self, letter: char, word_index: usize) -> Option<Classification> {
        self.letter_evaluations
            .get(&letter)
            .and_then(|per_word| per_word.get(word_index).copied().flatten())
    }

    fn record(&mut self, letter: char, word_index: usize, classification: Classification, solved: bool) {
        let number_of_words = self.number_of_words;
        let slot = &mut self
            .letter_evaluations
            .entry(letter)
            .or_insert_with(|| vec![None; number_of_words])[word_index];

        *slot = if solved {
            Some(Classification::IncorrectLetter)
        } else {
            Some(slot.map_or(classification, |current| current.max(classification)))
        };
    }
}

/// Completion flag plus keyboard hints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluatedGameState {
    /// The player is done: out of attempts or every word solved.
    pub completed: bool,
    /// Hints for the keyboard.
    pub keyboard_state: KeyboardState,
}

/// Whether the player has used every attempt or solved every target word.
#[must_use]
pub fn is_completed(config: &GameConfig, game: &Game, state: &GameState) -> bool {
    state.attempts.len() >= game.max_attempts_with(config)
        || game.target_words.iter().all(|target| state.has_solved(target))
}

/// Summarize a player's state under the default configuration.
pub fn summarize(game: &Game, state: &GameState) -> Result<EvaluatedGameState, EvaluateError> {
    summarize_with(&GameConfig::default(), game, state)
}

/// Summarize a player's state.
///
/// Fails if any attempt differs in length from a target word.
pub fn summarize_with(
    config: &GameConfig,
    game: &Game,
    state: &GameState,
) -> Result<EvaluatedGameState, EvaluateError> {
    let mut keyboard_state = KeyboardState {
        number_of_words: game.target_words.len(),
        letter_evaluations: FxHashMap::default(),
    };

    for (word_index, target) in game.target_words.iter().enumerate() {
        let solved = state.has_solved(target);
        for attempt in &state.attempts {
            for evaluation in evaluate(&attempt.value, target)? {
                keyboard_state.record(evaluation.letter, word_index, evaluation.classification, solved);
            }
        }
    }

    let completed = is_completed(config, game, state);
    tracing::debug!(
        player = %state.creator_id,
        attempts = state.attempts.len(),
        completed,
        "summarized game state"
    );

    Ok(EvaluatedGameState {
        completed,
        keyboard_state,
    })
}
