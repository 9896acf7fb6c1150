//! # snakes-ladders
//!
//! A deterministic two-player Snakes and Ladders turn engine.
//!
//! ## Design Principles
//!
//! 1. **No hidden randomness**: The engine takes dice values as input.
//!    `Dice` is provided for hosts that want a seeded roller.
//!
//! 2. **Owned instances**: Each game is an `Engine` value owned by its host.
//!    There is no global game.
//!
//! 3. **Structured results**: `process_turn` returns a `TurnResult` carrying
//!    explicit event tags. Display text is derived from that data.
//!
//! ## Example
//!
//! ```
//! use snakes_ladders::{Engine, MoveEvent, PlayerId};
//!
//! let mut engine = Engine::new();
//! let result = engine.process_turn(3, 4).unwrap();
//!
//! let report = result.report().unwrap();
//! assert_eq!(report.to(), 14); // 7 is a ladder bottom
//! assert_eq!(report.event(), MoveEvent::Ladder);
//! assert_eq!(engine.current_player(), PlayerId::SECOND);
//! ```
//!
//! ## Modules
//!
//! - `core`: Players, board topology, dice, move records, state, configuration
//! - `rules`: Turn resolution engine and statistics

pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    Board, Square, SquareKind, FINAL_SQUARE, START_SQUARE,
    Dice, DiceRoll,
    MoveEvent, MoveRecord, Slide, SlideKind,
    GameState, GameConfig,
    BoardError, EngineError,
};

pub use crate::rules::{Engine, GameStats, PlayerStats, TurnReport, TurnResult};
