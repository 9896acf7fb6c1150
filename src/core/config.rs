//! Engine configuration.
//!
//! Every game runs on the standard board unless a host supplies a
//! validated custom `Board`.

use super::board::{Board, Square};
use super::error::EngineError;

/// Configuration for one engine instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameConfig {
    /// Snake and ladder tables.
    pub board: Board,
}

impl GameConfig {
    /// Standard board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a prebuilt board.
    #[must_use]
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Build and use a board from raw tables.
    pub fn with_tables(
        self,
        snakes: &[(Square, Square)],
        ladders: &[(Square, Square)],
    ) -> Result<Self, EngineError> {
        Ok(self.with_board(Board::new(snakes, ladders)?))
    }
}
