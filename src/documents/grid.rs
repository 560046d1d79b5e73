//! Grid game documents.

use serde_json::Value;

use super::{as_document, optional_string, optional_timestamp, string, timestamp, unsigned};
use crate::core::{GameConfig, PlayerId};
use crate::error::{DecodeError, RollupError};
use crate::grid::{rollup_with, Action, ActionType, Game, GameEvent, GridState};

/// Read a game document. A missing name reads as empty.
pub fn decode_game(value: &Value) -> Result<Game, DecodeError> {
    let doc = as_document(value)?;
    let board_size = usize::try_from(unsigned(doc, "boardSize")?)
        .ok()
        .filter(|&size| size >= 1)
        .ok_or(DecodeError::WrongType {
            field: "boardSize",
            expected: "a board size of at least 1",
        })?;

    Ok(Game {
        name: optional_string(doc, "name")?.unwrap_or_default(),
        created_at: timestamp(doc, "createdAt")?,
        started_at: optional_timestamp(doc, "startedAt")?,
        board_size,
        creator_id: PlayerId::new(string(doc, "creatorId")?),
    })
}

/// Read the `action` of an event document.
///
/// The tag is checked first so an unknown kind surfaces as
/// `UnhandledActionType` rather than a payload error. Kinds without a
/// payload may also be written as a bare tag string.
fn decode_action(value: &Value) -> Result<Action, DecodeError> {
    let tag = match value {
        Value::String(tag) => tag.as_str(),
        Value::Object(doc) => doc
            .get("type")
            .and_then(Value::as_str)
            .ok_or(DecodeError::MissingField("action.type"))?,
        _ => {
            return Err(DecodeError::WrongType {
                field: "action",
                expected: "an object",
            })
        }
    };

    let kind: ActionType = tag.parse()?;
    match (kind, value) {
        (ActionType::Ignore, Value::String(_)) => Ok(Action::Ignore),
        (ActionType::GameStart, Value::String(_)) => Ok(Action::GameStart { started_at: None }),
        (_, Value::String(_)) => Err(DecodeError::InvalidPayload {
            field: "action",
            reason: format!("`{kind}` needs a payload"),
        }),
        _ => serde_json::from_value(value.clone()).map_err(|err| DecodeError::InvalidPayload {
            field: "action",
            reason: err.to_string(),
        }),
    }
}

/// Read an event document.
pub fn decode_event(value: &Value) -> Result<GameEvent, DecodeError> {
    let doc = as_document(value)?;
    let action = doc
        .get("action")
        .filter(|action| !action.is_null())
        .ok_or(DecodeError::MissingField("action"))?;

    Ok(GameEvent {
        created_at: timestamp(doc, "createdAt")?,
        action: decode_action(action)?,
        target_player_id: PlayerId::new(string(doc, "targetPlayerId")?),
        creator_id: PlayerId::new(string(doc, "creatorId")?),
    })
}

/// Write an event as a document.
pub fn encode_event(event: &GameEvent) -> Result<Value, serde_json::Error> {
    serde_json::to_value(event)
}

/// Decode every event document and roll up `player`'s state.
///
/// The first undecodable document fails the whole rollup.
pub fn rollup_documents(
    config: &GameConfig,
    game: &Game,
    player: &PlayerId,
    documents: &[Value],
) -> Result<GridState, RollupError> {
    let events = documents
        .iter()
        .map(decode_event)
        .collect::<Result<Vec<_>, _>>()?;
    rollup_with(config, game, player, &events)
}
