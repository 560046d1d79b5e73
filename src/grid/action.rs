//! Grid game records: the game document, actions and events.
//!
//! Events are append-only and immutable once written. The server timestamp
//! on each event is the source of truth for ordering.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::CellCoordinate;
use crate::core::{PlayerId, Timestamp};
use crate::error::DecodeError;

/// A grid game. Immutable after creation apart from `started_at`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    /// Display name.
    pub name: String,
    /// When the game document was created.
    pub created_at: Timestamp,
    /// When the creator started the clock, if they have.
    pub started_at: Option<Timestamp>,
    /// Side length of every player's board.
    pub board_size: usize,
    /// User who created the game.
    pub creator_id: PlayerId,
}

impl Game {
    /// Create a game that has not started yet.
    pub fn new(name: impl Into<String>, board_size: usize, creator_id: PlayerId, created_at: Timestamp) -> Self {
        Self {
            name: name.into(),
            created_at,
            started_at: None,
            board_size,
            creator_id,
        }
    }

    /// Set the start time (builder pattern).
    #[must_use]
    pub fn with_started_at(mut self, started_at: Timestamp) -> Self {
        self.started_at = Some(started_at);
        self
    }
}

/// The kind of an action, as written in the `type` tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    /// A word was found on the board.
    MakeWord,
    /// Used letters were removed and redrawn.
    Detonate,
    /// The player joined and received a board.
    Init,
    /// The creator started the game for everyone.
    GameStart,
    /// Explicitly ignored.
    Ignore,
}

impl ActionType {
    /// Every action type the engine handles.
    pub const ALL: [ActionType; 5] = [
        ActionType::Detonate,
        ActionType::GameStart,
        ActionType::Init,
        ActionType::MakeWord,
        ActionType::Ignore,
    ];

    /// The wire tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ActionType::MakeWord => "make_word",
            ActionType::Detonate => "detonate",
            ActionType::Init => "init",
            ActionType::GameStart => "game_start",
            ActionType::Ignore => "ignore",
        }
    }
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ActionType {
    type Err = DecodeError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        ActionType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == tag)
            .ok_or_else(|| DecodeError::UnhandledActionType(tag.to_string()))
    }
}

/// One cell to refill during a detonation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    /// The cell.
    pub pos: CellCoordinate,
    /// Its new letter.
    pub letter: char,
}

/// Cells spelling a word, in order. Most words fit inline.
pub type WordPath = SmallVec<[CellCoordinate; 8]>;

/// What an event does, with its payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Join with a full letter grid.
    Init {
        /// Letter rows, `board_size` x `board_size`.
        grid: Vec<Vec<char>>,
    },
    /// A discovered word and the cells spelling it.
    #[serde(rename_all = "camelCase")]
    MakeWord {
        /// The word.
        word: String,
        /// Cells used, in spelling order.
        letter_positions: WordPath,
    },
    /// Refill used cells with new letters.
    Detonate {
        /// Cells and their new letters.
        replacements: Vec<Replacement>,
    },
    /// Start the game clock.
    #[serde(rename_all = "camelCase")]
    GameStart {
        /// Start time requested by the creator.
        #[serde(default)]
        started_at: Option<Timestamp>,
    },
    /// No effect.
    Ignore,
}

impl Action {
    /// The action's kind.
    #[must_use]
    pub fn action_type(&self) -> ActionType {
        match self {
            Action::Init { .. } => ActionType::Init,
            Action::MakeWord { .. } => ActionType::MakeWord,
            Action::Detonate { .. } => ActionType::Detonate,
            Action::GameStart { .. } => ActionType::GameStart,
            Action::Ignore => ActionType::Ignore,
        }
    }

    /// Build a `make_word` action.
    pub fn make_word(word: impl Into<String>, letter_positions: &[CellCoordinate]) -> Self {
        Action::MakeWord {
            word: word.into(),
            letter_positions: SmallVec::from_slice(letter_positions),
        }
    }
}

/// A single entry in a game's event log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameEvent {
    /// When the server received the event.
    pub created_at: Timestamp,
    /// What happened.
    pub action: Action,
    /// Whose board this event applies to. Same as the creator except for
    /// powerups aimed at another player.
    pub target_player_id: PlayerId,
    /// Who wrote the event.
    pub creator_id: PlayerId,
}

impl GameEvent {
    /// Create an event a player writes about their own board.
    pub fn new(created_at: Timestamp, action: Action, player: PlayerId) -> Self {
        Self {
            created_at,
            action,
            creator_id: player.clone(),
            target_player_id: player,
        }
    }

    /// Set a different author (builder pattern).
    #[must_use]
    pub fn with_creator(mut self, creator: PlayerId) -> Self {
        self.creator_id = creator;
        self
    }

    /// Retarget the event at another player (builder pattern).
    #[must_use]
    pub fn with_target(mut self, target: PlayerId) -> Self {
        self.target_player_id = target;
        self
    }

    /// Whether the event applies to `player`.
    #[must_use]
    pub fn targets(&self, player: &PlayerId) -> bool {
        &self.target_player_id == player
    }
}

/// Builders for common events.
impl GameEvent {
    /// Join with a grid.
    pub fn init(created_at: Timestamp, player: PlayerId, grid: Vec<Vec<char>>) -> Self {
        Self::new(created_at, Action::Init { grid }, player)
    }

    /// Record a discovered word.
    pub fn make_word(
        created_at: Timestamp,
        player: PlayerId,
        word: impl Into<String>,
        letter_positions: &[CellCoordinate],
    ) -> Self {
        Self::new(created_at, Action::make_word(word, letter_positions), player)
    }

    /// Refill cells.
    pub fn detonate(created_at: Timestamp, player: PlayerId, replacements: Vec<Replacement>) -> Self {
        Self::new(created_at, Action::Detonate { replacements }, player)
    }

    /// Start the game.
    pub fn game_start(created_at: Timestamp, player: PlayerId) -> Self {
        Self::new(
            created_at,
            Action::GameStart {
                started_at: Some(created_at),
            },
            player,
        )
    }

    /// An event with no effect.
    pub fn ignore(created_at: Timestamp, player: PlayerId) -> Self {
        Self::new(created_at, Action::Ignore, player)
    }
}
