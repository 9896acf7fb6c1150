//! Core types: players, board, dice, move records, state, configuration.
//!
//! This module holds data only. Turn resolution lives in `rules`.

pub mod player;
pub mod board;
pub mod dice;
pub mod record;
pub mod state;
pub mod config;
pub mod error;

pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use board::{Board, Square, SquareKind, FINAL_SQUARE, START_SQUARE};
pub use dice::{Dice, DiceRoll};
pub use record::{MoveEvent, MoveRecord, Slide, SlideKind};
pub use state::GameState;
pub use config::GameConfig;
pub use error::{BoardError, EngineError};
