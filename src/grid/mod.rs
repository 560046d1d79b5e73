//! Grid word-finding game.
//!
//! Each player gets a square board of letters and finds words by chaining
//! neighbouring cells. Every cell remembers how often it has been used;
//! detonating clears used cells and deals them new letters.
//!
//! Player state is never stored directly. It is rolled up from the game's
//! append-only event log:
//!
//! ```
//! use word_engine::core::{PlayerId, Timestamp};
//! use word_engine::grid::{rollup, CellCoordinate, Game, GameEvent};
//!
//! let alice = PlayerId::new("alice");
//! let game = Game::new("Lunch break", 2, alice.clone(), Timestamp::from_seconds(0));
//!
//! let events = vec![
//!     GameEvent::make_word(
//!         Timestamp::from_seconds(2),
//!         alice.clone(),
//!         "at",
//!         &[CellCoordinate::new(0, 1), CellCoordinate::new(1, 1)],
//!     ),
//!     GameEvent::init(Timestamp::from_seconds(1), alice.clone(), vec![vec!['c', 'a'], vec!['x', 't']]),
//! ];
//!
//! let state = rollup(&game, &alice, &events).unwrap();
//! assert_eq!(state.score, 1);
//! assert_eq!(state.grid.total_hits(), 2);
//! ```

mod action;
mod board;
mod commands;
mod path;
mod rollup;

pub use action::{Action, ActionType, Game, GameEvent, Replacement, WordPath};
pub use board::{random_grid, Board, Cell, CellCoordinate, Powerup};
pub use commands::{detonate, join, make_word, session, start, Session};
pub use path::{extend_path, validate_path, Dictionary};
pub use rollup::{
    resume, resume_with, rollup, rollup_history, rollup_history_with, rollup_with, GridPhase, GridReducer, GridState,
};
