//! Document boundary integration tests.
//!
//! These tests feed raw store documents through the decoders and on into
//! the rollup and scoring functions.

use serde_json::{json, Value};
use word_engine::core::{GameConfig, PlayerId, Timestamp};
use word_engine::documents::{grid, guess};
use word_engine::error::{DecodeError, RollupError};
use word_engine::guess::{score_of, summarize};

fn stamp(seconds: i64) -> Value {
    json!({"seconds": seconds, "nanoseconds": 0})
}

fn grid_game_doc() -> Value {
    json!({
        "name": "Break room",
        "createdAt": stamp(0),
        "boardSize": 2,
        "creatorId": "alice",
    })
}

/// Test a grid game rolled up straight from documents.
#[test]
fn test_grid_documents_roll_up() {
    let game = grid::decode_game(&grid_game_doc()).unwrap();
    let docs = vec![
        json!({
            "createdAt": stamp(2),
            "action": {"type": "make_word", "word": "cat", "letterPositions": [
                {"row": 0, "col": 0}, {"row": 0, "col": 1}, {"row": 1, "col": 1}
            ]},
            "targetPlayerId": "alice",
            "creatorId": "alice",
        }),
        json!({
            "createdAt": stamp(1),
            "action": {"type": "init", "grid": [["c", "a"], ["x", "t"]]},
            "targetPlayerId": "alice",
            "creatorId": "alice",
        }),
    ];

    let state = grid::rollup_documents(&GameConfig::default(), &game, &PlayerId::new("alice"), &docs).unwrap();
    assert_eq!(state.score, 1);
    assert_eq!(state.grid.total_hits(), 3);
}

/// Test that a wrong-sized init grid fails the rollup.
#[test]
fn test_wrong_sized_grid() {
    let game = grid::decode_game(&grid_game_doc()).unwrap();
    let docs = vec![json!({
        "createdAt": stamp(1),
        "action": {"type": "init", "grid": [["c", "a", "t"]]},
        "targetPlayerId": "alice",
        "creatorId": "alice",
    })];

    let result = grid::rollup_documents(&GameConfig::default(), &game, &PlayerId::new("alice"), &docs);
    assert!(matches!(result, Err(RollupError::InvalidGrid { expected: 2, .. })));
}

/// Test that an empty routing field is rejected by the rollup.
#[test]
fn test_empty_target_player() {
    let game = grid::decode_game(&grid_game_doc()).unwrap();
    let docs = vec![json!({
        "createdAt": stamp(1),
        "action": "ignore",
        "targetPlayerId": "",
        "creatorId": "alice",
    })];

    let result = grid::rollup_documents(&GameConfig::default(), &game, &PlayerId::new("alice"), &docs);
    assert!(matches!(
        result,
        Err(RollupError::MalformedEvent { field: "targetPlayerId", .. })
    ));
}

/// Test that a missing timestamp is reported as a malformed event.
#[test]
fn test_missing_timestamp() {
    let doc = json!({
        "action": "ignore",
        "targetPlayerId": "alice",
        "creatorId": "alice",
    });
    assert_eq!(grid::decode_event(&doc), Err(DecodeError::MissingField("createdAt")));

    let game = grid::decode_game(&grid_game_doc()).unwrap();
    let result = grid::rollup_documents(&GameConfig::default(), &game, &PlayerId::new("alice"), &[doc]);
    assert!(matches!(result, Err(RollupError::MalformedEvent { field: "createdAt", .. })));
}

/// Test a guess game scored straight from documents.
#[test]
fn test_guess_documents_score() {
    let game = guess::decode_game(&json!({
        "targetWords": ["apple", "grape"],
        "creatorId": "host",
        "createdAt": stamp(0),
    }))
    .unwrap();

    let state = guess::decode_game_state(&json!({
        "gameId": "g1",
        "attempts": [
            {"value": "grape", "createdAt": stamp(1)},
            "not an attempt",
            {"value": "apple", "createdAt": stamp(2)},
        ],
        "createdAt": stamp(0),
        "creatorId": "alice",
    }))
    .unwrap();

    assert_eq!(state.attempts.len(), 2);
    assert_eq!(state.attempts[0].created_at, Timestamp::from_seconds(1));

    let score = score_of(&game, &state);
    assert_eq!(score.turns_per_word, vec![2, 1]);
    assert!(summarize(&game, &state).unwrap().completed);

    let encoded = guess::encode_game_state(&state).unwrap();
    assert_eq!(encoded["creatorId"], "alice");
}

/// Test that a document that is not an object is refused.
#[test]
fn test_not_a_document() {
    assert_eq!(guess::decode_game(&json!("apple")), Err(DecodeError::NotADocument));
    assert_eq!(grid::decode_event(&json!(null)), Err(DecodeError::NotADocument));
}
