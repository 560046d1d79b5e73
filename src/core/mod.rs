//! Core engine types: players, timestamps, RNG, configuration.
//!
//! This module contains the building blocks shared by both game variants.
//! Games tune behaviour via `GameConfig` rather than modifying the reducers.

pub mod player;
pub mod timestamp;
pub mod rng;
pub mod config;

pub use player::PlayerId;
pub use timestamp::Timestamp;
pub use rng::GameRng;
pub use config::{GameConfig, RankingOrder};
