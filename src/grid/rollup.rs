//! Event rollup for the grid game.
//!
//! A player's board is never stored as the source of truth; it is the fold
//! of the game's event log, ordered by server timestamp, starting from an
//! empty state:
//!
//! ```text
//! state = events.sorted_by(created_at).fold(GridState::new(game, player), apply)
//! ```
//!
//! ## Lifecycle
//!
//! `NotJoined` (empty grid) → `Initialized` (after `init`) → any number of
//! `make_word` / `detonate`. Completion is decided by the surrounding game,
//! not by the reducer; the reducer only accumulates.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::action::{Action, Game, GameEvent};
use super::board::Board;
use crate::core::{GameConfig, PlayerId, Timestamp};
use crate::error::{RollupError, SnapshotError};
use crate::rules::EventReducer;

/// Where a player is in the grid game lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GridPhase {
    /// No `init` seen yet.
    NotJoined,
    /// The player has a board.
    Initialized,
}

/// Derived per-player state of a grid game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridState {
    /// The player's board.
    pub grid: Board,
    /// Discovered words in discovery order.
    pub words: Vector<String>,
    /// Accumulated score.
    pub score: i64,
    /// The game being played.
    pub game: Game,
    /// Whose state this is.
    pub player: PlayerId,
    /// Timestamp of the latest event folded in, if any.
    pub last_event_at: Option<Timestamp>,
    /// Number of events folded in, including ones aimed at other players.
    pub events_seen: u32,
}

impl GridState {
    /// The empty state: no grid, no words, zero score.
    #[must_use]
    pub fn new(game: Game, player: PlayerId) -> Self {
        Self {
            grid: Board::empty(),
            words: Vector::new(),
            score: 0,
            game,
            player,
            last_event_at: None,
            events_seen: 0,
        }
    }

    /// Whether the player has received a board.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        !self.grid.is_empty()
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> GridPhase {
        if self.is_initialized() {
            GridPhase::Initialized
        } else {
            GridPhase::NotJoined
        }
    }

    /// Whether `word` has already been found.
    #[must_use]
    pub fn has_word(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Encode the state for use as a cache.
    pub fn to_snapshot(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a cached state.
    ///
    /// Fails if the board's cells do not fill a square of its size.
    pub fn from_snapshot(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let state: Self = bincode::deserialize(bytes)?;
        if !state.grid.is_consistent() {
            return Err(SnapshotError::InconsistentBoard {
                size: state.grid.size(),
                cells: state.grid.cell_count(),
            });
        }
        Ok(state)
    }
}

/// Reducer for the grid game.
#[derive(Clone, Debug)]
pub struct GridReducer {
    game: Game,
    config: GameConfig,
}

impl GridReducer {
    /// Reducer for `game` with the default configuration.
    #[must_use]
    pub fn new(game: Game) -> Self {
        Self::with_config(game, GameConfig::default())
    }

    /// Reducer for `game` with an explicit configuration.
    #[must_use]
    pub fn with_config(game: Game, config: GameConfig) -> Self {
        Self { game, config }
    }

    /// The game this reducer folds events for.
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    fn check_routing(event: &GameEvent) -> Result<(), RollupError> {
        if event.target_player_id.is_empty() {
            return Err(RollupError::MalformedEvent {
                field: "targetPlayerId",
                reason: "is empty".to_string(),
            });
        }
        if event.creator_id.is_empty() {
            return Err(RollupError::MalformedEvent {
                field: "creatorId",
                reason: "is empty".to_string(),
            });
        }
        Ok(())
    }
}

impl EventReducer for GridReducer {
    type State = GridState;
    type Event = GameEvent;
    type Error = RollupError;

    fn initial(&self, player: &PlayerId) -> GridState {
        GridState::new(self.game.clone(), player.clone())
    }

    fn ordering_key(&self, event: &GameEvent) -> Timestamp {
        event.created_at
    }

    fn applied_through(&self, state: &GridState) -> Option<Timestamp> {
        state.last_event_at
    }

    fn apply(&self, mut state: GridState, event: &GameEvent) -> Result<GridState, RollupError> {
        Self::check_routing(event)?;

        state.events_seen += 1;
        state.last_event_at = Some(state.last_event_at.map_or(event.created_at, |t| t.max(event.created_at)));

        if !event.targets(&state.player) {
            warn!(
                player = %state.player,
                target = %event.target_player_id,
                action = %event.action.action_type(),
                "skipping event aimed at another player"
            );
            return Ok(state);
        }

        if !state.is_initialized() && !matches!(event.action, Action::Init { .. }) {
            return Err(RollupError::UninitializedBoard {
                action: event.action.action_type(),
            });
        }

        match &event.action {
            Action::Init { grid } => {
                if state.is_initialized() {
                    return Err(RollupError::AlreadyInitialized);
                }
                state.grid = Board::from_letters(grid, self.game.board_size)?;
            }
            Action::MakeWord { word, letter_positions } => {
                for &pos in letter_positions {
                    state.grid.hit(pos)?;
                }
                state.words.push_back(word.clone());
                state.score += self.config.points_per_word;
            }
            Action::Detonate { replacements } => {
                for replacement in replacements {
                    state.grid.detonate(replacement.pos, replacement.letter)?;
                }
            }
            Action::GameStart { .. } | Action::Ignore => {}
        }

        debug!(
            player = %state.player,
            action = %event.action.action_type(),
            at = %event.created_at,
            score = state.score,
            "applied event"
        );

        Ok(state)
    }
}

/// Roll up `player`'s state from the game's event log with the default
/// configuration.
///
/// Events are sorted by server timestamp before folding; their position in
/// `events` does not matter.
pub fn rollup(game: &Game, player: &PlayerId, events: &[GameEvent]) -> Result<GridState, RollupError> {
    rollup_with(&GameConfig::default(), game, player, events)
}

/// Roll up with an explicit configuration.
pub fn rollup_with(
    config: &GameConfig,
    game: &Game,
    player: &PlayerId,
    events: &[GameEvent],
) -> Result<GridState, RollupError> {
    debug!(%player, events = events.len(), "rolling up grid events");
    let state = GridReducer::with_config(game.clone(), config.clone()).rollup_all(player, events)?;
    debug!(%player, words = state.words.len(), score = state.score, "rollup complete");
    Ok(state)
}

/// Continue a cached state with events it has not seen yet.
///
/// Events at or before the state's `last_event_at` are skipped, so a batch
/// that overlaps the cache does not fold anything twice.
pub fn resume(state: GridState, events: &[GameEvent]) -> Result<GridState, RollupError> {
    resume_with(&GameConfig::default(), state, events)
}

/// Continue a cached state with an explicit configuration.
pub fn resume_with(config: &GameConfig, state: GridState, events: &[GameEvent]) -> Result<GridState, RollupError> {
    GridReducer::with_config(state.game.clone(), config.clone()).resume(state, events)
}

/// The state after each event of the log, in timestamp order.
pub fn rollup_history(game: &Game, player: &PlayerId, events: &[GameEvent]) -> Result<Vec<GridState>, RollupError> {
    rollup_history_with(&GameConfig::default(), game, player, events)
}

/// Per-event history with an explicit configuration.
pub fn rollup_history_with(
    config: &GameConfig,
    game: &Game,
    player: &PlayerId,
    events: &[GameEvent],
) -> Result<Vec<GridState>, RollupError> {
    GridReducer::with_config(game.clone(), config.clone()).rollup_history(player, events)
}
