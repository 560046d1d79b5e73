//! # word-engine
//!
//! Game-state engine for two word games whose state is derived from
//! append-only logs kept in a document store.
//!
//! ## Design Principles
//!
//! 1. **Event-Sourced**: Player state is never stored. It is rebuilt by
//!    folding the game's event log, ordered by server timestamp.
//!
//! 2. **Pure**: Every rollup, evaluation and score is a function of its
//!    inputs. Replaying the same log always yields the same state.
//!
//! 3. **Configuration Over Convention**: Attempt allowance, points per word,
//!    alphabet and ranking order live in `GameConfig`.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Boards and word lists use `im-rs`, so
//!   keeping the state after every event (`rollup_history`) is cheap.
//!
//! - **Schema-on-read**: Documents are decoded at the boundary
//!   (`documents`); the reducers only see typed events.
//!
//! ## Modules
//!
//! - `core`: Players, timestamps, RNG, configuration
//! - `rules`: `EventReducer` trait shared by event-sourced variants
//! - `grid`: Letter-grid game: boards, events, rollup, commands
//! - `guess`: Multi-word guessing game: evaluation, keyboard, scoring
//! - `documents`: Decoding store documents into model types
//! - `error`: Error types

pub mod core;
pub mod documents;
pub mod error;
pub mod grid;
pub mod guess;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, PlayerId, RankingOrder, Timestamp};

pub use crate::error::{CommandError, DecodeError, EvaluateError, RollupError, SnapshotError};

pub use crate::rules::EventReducer;
