//! Commands: build the next event for a player from their current state.
//!
//! Commands validate against the rolled-up state before anything is written
//! to the log. The reducer stays permissive about what it replays; these
//! checks are where bad moves are turned away.

use super::action::{Action, Game, GameEvent, Replacement};
use super::board::{random_grid, CellCoordinate};
use super::path::{validate_path, Dictionary};
use super::rollup::GridState;
use crate::core::{GameConfig, GameRng, PlayerId, Timestamp};
use crate::error::CommandError;

/// Join the game: an `init` event carrying a fresh random board.
///
/// The board is drawn from a stream keyed by the player's id, so the same
/// seed always deals a player the same board.
pub fn join(state: &GridState, created_at: Timestamp, config: &GameConfig) -> Result<GameEvent, CommandError> {
    if state.is_initialized() {
        return Err(CommandError::AlreadyJoined);
    }
    let size = state.game.board_size;
    if size == 0 {
        return Err(CommandError::InvalidBoardSize(size));
    }

    let mut rng = GameRng::new(config.grid_seed).for_context(state.player.as_str());
    let grid = random_grid(size, &mut rng, &config.alphabet).ok_or(CommandError::EmptyAlphabet)?;

    tracing::debug!(player = %state.player, size, "dealing board");
    Ok(GameEvent::init(created_at, state.player.clone(), grid))
}

/// Start the clock for every player.
#[must_use]
pub fn start(player: PlayerId, started_at: Timestamp) -> GameEvent {
    GameEvent::game_start(started_at, player)
}

/// Claim a word spelled by `path`.
///
/// Rejects the claim if the path is not a chain of neighbouring cells, if
/// it spells something else, if the dictionary does not know the word, or
/// if the player already found it.
pub fn make_word(
    state: &GridState,
    word: &str,
    path: &[CellCoordinate],
    dictionary: &Dictionary,
    created_at: Timestamp,
) -> Result<GameEvent, CommandError> {
    if !state.is_initialized() {
        return Err(CommandError::NotJoined);
    }
    validate_path(path)?;

    let spelled = state
        .grid
        .letters_at(path)
        .ok_or_else(|| CommandError::InvalidPath("path leaves the board".to_string()))?;
    if spelled != word {
        return Err(CommandError::PathMismatch {
            word: word.to_string(),
            spelled,
        });
    }
    if !dictionary.contains(word) {
        return Err(CommandError::NotInDictionary(word.to_string()));
    }
    if state.has_word(word) {
        return Err(CommandError::WordAlreadyFound(word.to_string()));
    }

    Ok(GameEvent::make_word(created_at, state.player.clone(), word, path))
}

/// Detonate every used cell, refilling each with a random letter.
pub fn detonate(
    state: &GridState,
    created_at: Timestamp,
    rng: &mut GameRng,
    config: &GameConfig,
) -> Result<GameEvent, CommandError> {
    if !state.is_initialized() {
        return Err(CommandError::NotJoined);
    }

    let targets = state.grid.hit_cells();
    if targets.is_empty() {
        return Err(CommandError::NothingToDetonate);
    }

    let replacements = targets
        .into_iter()
        .map(|pos| {
            rng.letter(&config.alphabet)
                .map(|letter| Replacement { pos, letter })
                .ok_or(CommandError::EmptyAlphabet)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GameEvent::detonate(created_at, state.player.clone(), replacements))
}

/// Join/start status of a player, derived from the whole log.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Session {
    /// The player has an `init` event.
    pub joined: bool,
    /// When the game started, if it has.
    pub started_at: Option<Timestamp>,
}

impl Session {
    /// Whether the game has started.
    #[must_use]
    pub fn started(&self) -> bool {
        self.started_at.is_some()
    }
}

/// Work out whether `player` has joined and whether the game has started.
///
/// The game's own `started_at` wins; otherwise the earliest `game_start`
/// event from anyone counts.
#[must_use]
pub fn session(game: &Game, player: &PlayerId, events: &[GameEvent]) -> Session {
    let joined = events
        .iter()
        .any(|event| event.targets(player) && matches!(event.action, Action::Init { .. }));

    let started_at = game.started_at.or_else(|| {
        events
            .iter()
            .filter_map(|event| match event.action {
                Action::GameStart { started_at } => Some(started_at.unwrap_or(event.created_at)),
                _ => None,
            })
            .min()
    });

    Session { joined, started_at }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{rollup, Board};

    fn alice() -> PlayerId {
        PlayerId::new("alice")
    }

    fn game() -> Game {
        Game::new("Test Game", 2, alice(), Timestamp::from_seconds(0))
    }

    fn joined_state() -> GridState {
        let mut state = GridState::new(game(), alice());
        state.grid = Board::from_letters(&[vec!['c', 'a'], vec!['x', 't']], 2).unwrap();
        state
    }

    fn cat_path() -> [CellCoordinate; 3] {
        [CellCoordinate::new(0, 0), CellCoordinate::new(0, 1), CellCoordinate::new(1, 1)]
    }

    #[test]
    fn test_join() {
        let state = GridState::new(game(), alice());
        let config = GameConfig::default();

        let event = join(&state, Timestamp::from_seconds(1), &config).unwrap();
        match &event.action {
            Action::Init { grid } => {
                assert_eq!(grid.len(), 2);
                assert!(grid.iter().all(|row| row.len() == 2));
            }
            other => panic!("expected init, got {other:?}"),
        }

        // Deterministic per player
        let again = join(&state, Timestamp::from_seconds(1), &config).unwrap();
        assert_eq!(event, again);

        // The event rolls up cleanly
        let rolled = rollup(&game(), &alice(), &[event]).unwrap();
        assert!(rolled.is_initialized());

        assert_eq!(join(&joined_state(), Timestamp::from_seconds(1), &config), Err(CommandError::AlreadyJoined));
    }

    #[test]
    fn test_join_rejects_empty_alphabet() {
        let mut config = GameConfig::default();
        config.alphabet.clear();
        let state = GridState::new(game(), alice());

        assert_eq!(join(&state, Timestamp::from_seconds(1), &config), Err(CommandError::EmptyAlphabet));
    }

    #[test]
    fn test_make_word() {
        let dictionary = Dictionary::parse("cat act");
        let state = joined_state();

        let event = make_word(&state, "cat", &cat_path(), &dictionary, Timestamp::from_seconds(2)).unwrap();
        assert_eq!(event.action, Action::make_word("cat", &cat_path()));
    }

    #[test]
    fn test_make_word_rejections() {
        let dictionary = Dictionary::parse("cat");
        let state = joined_state();
        let now = Timestamp::from_seconds(2);

        assert_eq!(
            make_word(&GridState::new(game(), alice()), "cat", &cat_path(), &dictionary, now),
            Err(CommandError::NotJoined)
        );
        assert!(matches!(
            make_word(&state, "cat", &[CellCoordinate::new(0, 0), CellCoordinate::new(5, 5)], &dictionary, now),
            Err(CommandError::InvalidPath(_))
        ));
        assert!(matches!(
            make_word(&state, "cut", &cat_path(), &dictionary, now),
            Err(CommandError::PathMismatch { .. })
        ));

        let path = [CellCoordinate::new(0, 1), CellCoordinate::new(1, 1)];
        assert_eq!(
            make_word(&state, "at", &path, &dictionary, now),
            Err(CommandError::NotInDictionary("at".to_string()))
        );

        let mut found = state.clone();
        found.words.push_back("cat".to_string());
        assert_eq!(
            make_word(&found, "cat", &cat_path(), &dictionary, now),
            Err(CommandError::WordAlreadyFound("cat".to_string()))
        );
    }

    #[test]
    fn test_detonate() {
        let config = GameConfig::default();
        let mut rng = GameRng::new(7);
        let mut state = joined_state();

        assert_eq!(
            detonate(&state, Timestamp::from_seconds(3), &mut rng, &config),
            Err(CommandError::NothingToDetonate)
        );

        state.grid.hit(CellCoordinate::new(1, 0)).unwrap();
        let event = detonate(&state, Timestamp::from_seconds(3), &mut rng, &config).unwrap();
        match event.action {
            Action::Detonate { replacements } => {
                assert_eq!(replacements.len(), 1);
                assert_eq!(replacements[0].pos, CellCoordinate::new(1, 0));
                assert!(config.alphabet.contains(&replacements[0].letter));
            }
            other => panic!("expected detonate, got {other:?}"),
        }
    }

    #[test]
    fn test_session() {
        let bob = PlayerId::new("bob");
        let events = [
            GameEvent::init(Timestamp::from_seconds(1), alice(), vec![]),
            start(alice(), Timestamp::from_seconds(5)),
            start(alice(), Timestamp::from_seconds(4)),
        ];

        let alice_session = session(&game(), &alice(), &events);
        assert!(alice_session.joined);
        assert_eq!(alice_session.started_at, Some(Timestamp::from_seconds(4)));

        let bob_session = session(&game(), &bob, &events);
        assert!(!bob_session.joined);
        assert!(bob_session.started());

        let fresh = session(&game(), &alice(), &[]);
        assert_eq!(fresh, Session::default());

        let started_game = game().with_started_at(Timestamp::from_seconds(9));
        assert_eq!(session(&started_game, &bob, &[]).started_at, Some(Timestamp::from_seconds(9)));
    }
}
