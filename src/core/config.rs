//! Game configuration.
//!
//! Attempt allowance, points per word and the letter alphabet live here so
//! callers can tune them without touching the reducers.
//! `GameConfig::default()` matches the shipped game.

use serde::{Deserialize, Serialize};

/// How `rank_all` orders players by total turns taken.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankingOrder {
    /// Highest total first. This is what the shipped game does, even though
    /// fewer turns is the better result in a guessing game.
    #[default]
    MostTurnsFirst,
    /// Lowest total first.
    FewestTurnsFirst,
}

/// Engine configuration shared by both game variants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Attempts allowed on top of one per target word (default: 5).
    pub extra_attempts: usize,

    /// Score awarded per discovered word in the grid game (default: 1).
    /// Provisional until there is a real point table.
    pub points_per_word: i64,

    /// Letters used for random boards and detonation refills.
    pub alphabet: Vec<char>,

    /// Ordering used when ranking finished players.
    pub ranking: RankingOrder,

    /// Seed for board generation. Each player draws from an independent
    /// stream derived from this seed and their id.
    pub grid_seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            extra_attempts: 5,
            points_per_word: 1,
            alphabet: ('a'..='z').collect(),
            ranking: RankingOrder::default(),
            grid_seed: 42,
        }
    }
}

impl GameConfig {
    /// Set the number of extra attempts.
    #[must_use]
    pub fn with_extra_attempts(mut self, extra: usize) -> Self {
        self.extra_attempts = extra;
        self
    }

    /// Set points per discovered word.
    #[must_use]
    pub fn with_points_per_word(mut self, points: i64) -> Self {
        self.points_per_word = points;
        self
    }

    /// Replace the alphabet.
    ///
    /// # Panics
    ///
    /// Panics if `alphabet` is empty.
    #[must_use]
    pub fn with_alphabet(mut self, alphabet: impl IntoIterator<Item = char>) -> Self {
        self.alphabet = alphabet.into_iter().collect();
        assert!(!self.alphabet.is_empty(), "Alphabet must not be empty");
        self
    }

    /// Set the ranking order.
    #[must_use]
    pub fn with_ranking(mut self, ranking: RankingOrder) -> Self {
        self.ranking = ranking;
        self
    }

    /// Set the board generation seed.
    #[must_use]
    pub fn with_grid_seed(mut self, seed: u64) -> Self {
        self.grid_seed = seed;
        self
    }

    /// Attempt cap for a game with `target_count` target words.
    #[must_use]
    pub fn max_attempts(&self, target_count: usize) -> usize {
        target_count + self.extra_attempts
    }
}
