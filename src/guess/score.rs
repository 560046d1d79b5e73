//! Scores and standings.
//!
//! A player's score is the number of turns each target word took, summed.
//! While a word is still open and attempts remain it contributes `0`, which
//! also marks the score as incomplete. Once attempts run out, every unsolved
//! word costs the cap plus one.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::game::{Game, GameState};
use crate::core::{GameConfig, PlayerId, RankingOrder};

/// One player's score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameScore {
    /// Every target word is either solved or penalized.
    pub complete: bool,
    /// The player.
    pub user_id: PlayerId,
    /// Sum of `turns_per_word`.
    pub total_turns_taken: u32,
    /// Turns per target word: 1-based index of the first correct attempt,
    /// `max_attempts + 1` if unsolved with no attempts left, `0` if open.
    pub turns_per_word: Vec<u32>,
}

/// A player's standing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum GameResult {
    /// Finished, with a 1-based position.
    #[serde(rename_all = "camelCase")]
    Complete {
        /// Total turns taken.
        score: u32,
        /// 1-based position in the standings.
        position: usize,
        /// The player.
        user_id: PlayerId,
    },
    /// Still playing; no position yet.
    #[serde(rename_all = "camelCase")]
    Incomplete {
        /// Turns taken so far.
        score: u32,
        /// The player.
        user_id: PlayerId,
    },
}

impl GameResult {
    /// Whether the player has finished.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, GameResult::Complete { .. })
    }

    /// Position, for finished players.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self {
            GameResult::Complete { position, .. } => Some(*position),
            GameResult::Incomplete { .. } => None,
        }
    }

    /// Turns taken.
    #[must_use]
    pub fn score(&self) -> u32 {
        match self {
            GameResult::Complete { score, .. } | GameResult::Incomplete { score, .. } => *score,
        }
    }

    /// The player.
    #[must_use]
    pub fn user_id(&self) -> &PlayerId {
        match self {
            GameResult::Complete { user_id, .. } | GameResult::Incomplete { user_id, .. } => user_id,
        }
    }
}

/// Standings for a whole game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Results {
    /// Standing per player.
    pub results_by_user_id: FxHashMap<PlayerId, GameResult>,
    /// Scores in ranking order.
    pub positions: Vec<GameScore>,
}

/// Score a player under the default configuration.
#[must_use]
pub fn score_of(game: &Game, state: &GameState) -> GameScore {
    score_of_with(&GameConfig::default(), game, state)
}

/// Score a player.
#[must_use]
pub fn score_of_with(config: &GameConfig, game: &Game, state: &GameState) -> GameScore {
    let max_attempts = game.max_attempts_with(config);
    let out_of_attempts = state.attempts.len() >= max_attempts;
    let penalty = u32::try_from(max_attempts + 1).unwrap_or(u32::MAX);

    let turns_per_word: Vec<u32> = game
        .target_words
        .iter()
        .map(|target| match state.first_match(target) {
            Some(index) => u32::try_from(index + 1).unwrap_or(u32::MAX),
            None if out_of_attempts => penalty,
            None => 0,
        })
        .collect();

    GameScore {
        complete: !turns_per_word.contains(&0),
        user_id: state.creator_id.clone(),
        total_turns_taken: turns_per_word.iter().sum(),
        turns_per_word,
    }
}

/// Rank every player under the default configuration.
///
/// The default ordering puts the highest total first, matching the shipped
/// game. Use `rank_all_with` and `RankingOrder::FewestTurnsFirst` for the
/// conventional order.
#[must_use]
pub fn rank_all(game: &Game, states: &[GameState]) -> Results {
    rank_all_with(&GameConfig::default(), game, states)
}

/// Rank every player.
///
/// Players are sorted by total turns (ties keep input order). A finished
/// player's position is their 1-based index in that list, so unfinished
/// players still occupy a slot.
#[must_use]
pub fn rank_all_with(config: &GameConfig, game: &Game, states: &[GameState]) -> Results {
    let mut positions: Vec<GameScore> = states
        .iter()
        .map(|state| score_of_with(config, game, state))
        .collect();

    match config.ranking {
        RankingOrder::MostTurnsFirst => positions.sort_by(|a, b| b.total_turns_taken.cmp(&a.total_turns_taken)),
        RankingOrder::FewestTurnsFirst => positions.sort_by(|a, b| a.total_turns_taken.cmp(&b.total_turns_taken)),
    }

    let results_by_user_id = positions
        .iter()
        .enumerate()
        .map(|(i, score)| {
            let result = if score.complete {
                GameResult::Complete {
                    score: score.total_turns_taken,
                    position: i + 1,
                    user_id: score.user_id.clone(),
                }
            } else {
                GameResult::Incomplete {
                    score: score.total_turns_taken,
                    user_id: score.user_id.clone(),
                }
            };
            (score.user_id.clone(), result)
        })
        .collect();

    tracing::debug!(players = positions.len(), ranking = ?config.ranking, "ranked players");

    Results {
        results_by_user_id,
        positions,
    }
}
