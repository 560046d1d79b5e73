//! Guess game records: the game, a player's state and their attempts.

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, PlayerId, Timestamp};
use crate::error::EvaluateError;

/// A multi-word guessing game. Target words are fixed at creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    /// Secret words, in board order. All the same length.
    pub target_words: Vec<String>,
    /// User who created the game.
    pub creator_id: PlayerId,
    /// When the game was created.
    pub created_at: Timestamp,
}

impl Game {
    /// Create a game.
    pub fn new<S: Into<String>>(
        target_words: impl IntoIterator<Item = S>,
        creator_id: PlayerId,
        created_at: Timestamp,
    ) -> Self {
        Self {
            target_words: target_words.into_iter().map(Into::into).collect(),
            creator_id,
            created_at,
        }
    }

    /// Letters per word, taken from the first target word.
    #[must_use]
    pub fn word_length(&self) -> Option<usize> {
        self.target_words.first().map(|word| word.chars().count())
    }

    /// Attempt cap under the default configuration.
    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts_with(&GameConfig::default())
    }

    /// Attempt cap: one per target word plus the configured extra.
    #[must_use]
    pub fn max_attempts_with(&self, config: &GameConfig) -> usize {
        config.max_attempts(self.target_words.len())
    }
}

/// One submitted guess.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attempt {
    /// The guessed word.
    pub value: String,
    /// When the server received it.
    pub created_at: Timestamp,
}

impl Attempt {
    /// Create an attempt.
    pub fn new(value: impl Into<String>, created_at: Timestamp) -> Self {
        Self {
            value: value.into(),
            created_at,
        }
    }
}

/// A player's progress in one game. Grows only by appending attempts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// The game this state belongs to.
    pub game_id: String,
    /// Attempts in the order they were made.
    pub attempts: Vec<Attempt>,
    /// When the player joined.
    pub created_at: Timestamp,
    /// The player.
    pub creator_id: PlayerId,
}

impl GameState {
    /// A state with no attempts.
    pub fn new(game_id: impl Into<String>, creator_id: PlayerId, created_at: Timestamp) -> Self {
        Self {
            game_id: game_id.into(),
            attempts: Vec::new(),
            created_at,
            creator_id,
        }
    }

    /// Append a guess under the default configuration.
    pub fn record_attempt(&mut self, game: &Game, value: &str, created_at: Timestamp) -> Result<&Attempt, EvaluateError> {
        self.record_attempt_with(&GameConfig::default(), game, value, created_at)
    }

    /// Append a guess.
    ///
    /// The guess is lowercased, must not be empty, must be as long as the
    /// target words and is refused once the attempt cap is reached.
    pub fn record_attempt_with(
        &mut self,
        config: &GameConfig,
        game: &Game,
        value: &str,
        created_at: Timestamp,
    ) -> Result<&Attempt, EvaluateError> {
        let value = value.to_lowercase();
        if value.is_empty() {
            return Err(EvaluateError::EmptyAttempt);
        }

        if let Some(target) = game.word_length() {
            let attempt = value.chars().count();
            if attempt != target {
                return Err(EvaluateError::LengthMismatch { attempt, target });
            }
        }

        let max = game.max_attempts_with(config);
        if self.attempts.len() >= max {
            return Err(EvaluateError::AttemptLimitReached { max });
        }

        tracing::debug!(player = %self.creator_id, game = %self.game_id, attempt = self.attempts.len() + 1, "recording attempt");
        self.attempts.push(Attempt::new(value, created_at));
        Ok(&self.attempts[self.attempts.len() - 1])
    }

    /// 0-based index of the first attempt equal to `target`.
    #[must_use]
    pub fn first_match(&self, target: &str) -> Option<usize> {
        self.attempts.iter().position(|attempt| attempt.value == target)
    }

    /// Whether `target` has been guessed.
    #[must_use]
    pub fn has_solved(&self, target: &str) -> bool {
        self.first_match(target).is_some()
    }
}
