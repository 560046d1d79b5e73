//! Error types.
//!
//! Every failure is a data-integrity or programmer error surfaced to the
//! caller immediately. Nothing here is retried or recovered inside the
//! engine; re-fetching events or telling the user is the application's job.

use crate::grid::{ActionType, CellCoordinate};

/// Failures while folding a grid event log into state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RollupError {
    /// An action other than `init` arrived for a board that has no grid yet.
    #[error("board is not initialized: received `{action}` before `init`")]
    UninitializedBoard {
        /// The offending action.
        action: ActionType,
    },

    /// Detonation targeted a cell that was never used in a word.
    #[error("tried to replace an unused letter at {cell}")]
    InvalidDetonation {
        /// The cell with zero hits.
        cell: CellCoordinate,
    },

    /// The action tag is not one the engine knows.
    #[error("unhandled action type `{0}`")]
    UnhandledActionType(String),

    /// A required routing field is missing or unusable.
    #[error("malformed event: `{field}` {reason}")]
    MalformedEvent {
        /// Name of the field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// A coordinate lies outside the board.
    #[error("cell {cell} is outside the {size}x{size} board")]
    OutOfBounds {
        /// The coordinate.
        cell: CellCoordinate,
        /// Side length of the board.
        size: usize,
    },

    /// The `init` grid does not match the game's board size.
    #[error("init grid must be {expected}x{expected}: {reason}")]
    InvalidGrid {
        /// Expected side length.
        expected: usize,
        /// What is wrong with the grid.
        reason: String,
    },

    /// A second `init` arrived for a board that already has a grid.
    #[error("board is already initialized")]
    AlreadyInitialized,
}

/// Failures while evaluating or recording guesses.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvaluateError {
    /// Attempt and target word differ in length.
    #[error("attempt has {attempt} letters but the target has {target}")]
    LengthMismatch {
        /// Letters in the attempt.
        attempt: usize,
        /// Letters in the target.
        target: usize,
    },

    /// An empty attempt was submitted.
    #[error("attempt is empty")]
    EmptyAttempt,

    /// The player has used every attempt.
    #[error("attempt limit of {max} reached")]
    AttemptLimitReached {
        /// The cap.
        max: usize,
    },
}

/// Failures while reading loosely-typed documents.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The value is not an object.
    #[error("expected a document object")]
    NotADocument,

    /// A required field is absent or null.
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    /// A field holds the wrong kind of value.
    #[error("field `{field}` should be {expected}")]
    WrongType {
        /// Name of the field.
        field: &'static str,
        /// Description of the expected type.
        expected: &'static str,
    },

    /// The action tag is not one the engine knows.
    #[error("unhandled action type `{0}`")]
    UnhandledActionType(String),

    /// A nested payload failed to parse.
    #[error("invalid `{field}`: {reason}")]
    InvalidPayload {
        /// Name of the field.
        field: &'static str,
        /// Parser message.
        reason: String,
    },
}

impl From<DecodeError> for RollupError {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::UnhandledActionType(tag) => RollupError::UnhandledActionType(tag),
            DecodeError::NotADocument => RollupError::MalformedEvent {
                field: "event",
                reason: "is not a document".to_string(),
            },
            DecodeError::MissingField(field) => RollupError::MalformedEvent {
                field,
                reason: "is missing".to_string(),
            },
            DecodeError::WrongType { field, expected } => RollupError::MalformedEvent {
                field,
                reason: format!("should be {expected}"),
            },
            DecodeError::InvalidPayload { field, reason } => RollupError::MalformedEvent { field, reason },
        }
    }
}

/// Failures encoding or decoding a cached state snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The binary codec failed.
    #[error("snapshot codec: {0}")]
    Codec(#[from] bincode::Error),

    /// The decoded board's cells do not fill a square of its size.
    #[error("snapshot board has {cells} cells but size {size}")]
    InconsistentBoard {
        /// Stored side length.
        size: usize,
        /// Stored cell count.
        cells: usize,
    },
}

/// Failures building a grid command for the current state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// The player has no board yet.
    #[error("player has not joined the game")]
    NotJoined,

    /// The player already has a board.
    #[error("player has already joined the game")]
    AlreadyJoined,

    /// Boards need at least one cell.
    #[error("board size must be at least 1, got {0}")]
    InvalidBoardSize(usize),

    /// The alphabet has no letters to draw from.
    #[error("alphabet is empty")]
    EmptyAlphabet,

    /// The word was already found by this player.
    #[error("word `{0}` was already found")]
    WordAlreadyFound(String),

    /// The word is not in the dictionary.
    #[error("word `{0}` is not in the dictionary")]
    NotInDictionary(String),

    /// The selected cells do not form a valid path.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// The selected cells spell something else.
    #[error("path spells `{spelled}`, not `{word}`")]
    PathMismatch {
        /// The claimed word.
        word: String,
        /// What the cells actually spell.
        spelled: String,
    },

    /// No cell has been used yet.
    #[error("nothing to detonate")]
    NothingToDetonate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_errors_map_to_rollup_errors() {
        assert_eq!(
            RollupError::from(DecodeError::UnhandledActionType("teleport".into())),
            RollupError::UnhandledActionType("teleport".into())
        );

        match RollupError::from(DecodeError::MissingField("targetPlayerId")) {
            RollupError::MalformedEvent { field, .. } => assert_eq!(field, "targetPlayerId"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_messages() {
        let err = RollupError::InvalidDetonation {
            cell: CellCoordinate::new(1, 2),
        };
        assert_eq!(err.to_string(), "tried to replace an unused letter at (1, 2)");

        let err = EvaluateError::LengthMismatch { attempt: 4, target: 5 };
        assert_eq!(err.to_string(), "attempt has 4 letters but the target has 5");
    }
}
