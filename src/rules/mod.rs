//! Game rules: turn resolution and derived statistics.
//!
//! `Engine` is the only thing that mutates a `GameState`.

pub mod engine;
pub mod stats;

pub use engine::{Engine, TurnReport, TurnResult};
pub use stats::{GameStats, PlayerStats};
