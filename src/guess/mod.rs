//! Multi-word guessing game.
//!
//! A game fixes several secret words of equal length. Every guess is
//! scored against every target word at once; the player has one attempt
//! per word plus a small allowance.
//!
//! - `evaluate`: score one guess against one word
//! - `summarize`: completion flag and keyboard hints for a player
//! - `score_of` / `rank_all`: turns taken and standings

mod evaluate;
mod game;
mod keyboard;
mod score;

pub use evaluate::{evaluate, Classification, LetterEvaluation};
pub use game::{Attempt, Game, GameState};
pub use keyboard::{is_completed, summarize, summarize_with, EvaluatedGameState, KeyboardState};
pub use score::{rank_all, rank_all_with, score_of, score_of_with, GameResult, GameScore, Results};
