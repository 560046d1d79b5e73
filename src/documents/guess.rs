//! Guess game documents.

use serde_json::Value;

use super::{as_document, list_of, parse_timestamp, string, timestamp};
use crate::core::PlayerId;
use crate::error::DecodeError;
use crate::guess::{Attempt, Game, GameState};

/// Read a game document. Non-string target words are dropped.
pub fn decode_game(value: &Value) -> Result<Game, DecodeError> {
    let doc = as_document(value)?;
    Ok(Game {
        target_words: list_of(doc, "targetWords", |word| word.as_str().map(str::to_string)),
        creator_id: PlayerId::new(string(doc, "creatorId")?),
        created_at: timestamp(doc, "createdAt")?,
    })
}

/// Read one attempt, if well formed.
fn decode_attempt(value: &Value) -> Option<Attempt> {
    let doc = value.as_object()?;
    let word = doc.get("value")?.as_str()?;
    let created_at = parse_timestamp(doc.get("createdAt")?)?;
    Some(Attempt::new(word, created_at))
}

/// Read a player's state document. Malformed attempts are dropped.
pub fn decode_game_state(value: &Value) -> Result<GameState, DecodeError> {
    let doc = as_document(value)?;
    Ok(GameState {
        game_id: string(doc, "gameId")?,
        attempts: list_of(doc, "attempts", decode_attempt),
        created_at: timestamp(doc, "createdAt")?,
        creator_id: PlayerId::new(string(doc, "creatorId")?),
    })
}

/// Write a player's state as a document.
pub fn encode_game_state(state: &GameState) -> Result<Value, serde_json::Error> {
    serde_json::to_value(state)
}
