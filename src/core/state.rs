//! Game state: positions, turn, terminal flag and move history.
//!
//! ## Invariants
//!
//! - Both positions lie in `0..=100`
//! - `game_over` holds iff some position is exactly 100
//! - History only grows, one record per processed turn
//! - Replaying the history on the game's board reproduces the state
//!
//! The engine in `rules` is the only code that mutates a `GameState`.
//! History uses `im::Vector` so snapshots and clones are O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::rules::engine::resolve_move;

use super::board::{Board, Square, FINAL_SQUARE, START_SQUARE};
use super::error::EngineError;
use super::player::{PlayerId, PlayerMap};
use super::record::MoveRecord;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    positions: PlayerMap<Square>,
    current_player: PlayerId,
    game_over: bool,
    history: Vector<MoveRecord>,
}

impl GameState {
    /// Both players off the board, player 1 to move, empty history.
    #[must_use]
    pub fn new() -> Self {
        Self {
            positions: PlayerMap::with_value(START_SQUARE),
            current_player: PlayerId::FIRST,
            game_over: false,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn positions(&self) -> &PlayerMap<Square> {
        &self.positions
    }

    #[must_use]
    pub fn position(&self, player: PlayerId) -> Square {
        self.positions[player]
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// The player standing on square 100, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.positions
            .iter()
            .find(|(_, &square)| square == FINAL_SQUARE)
            .map(|(player, _)| player)
    }

    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Number of turns processed so far.
    #[must_use]
    pub fn turns(&self) -> usize {
        self.history.len()
    }

    // === Mutation (engine only) ===

    /// Commit a resolved move: update the mover's position and record it.
    pub(crate) fn commit(&mut self, record: MoveRecord) {
        self.positions[record.player] = record.position;
        if record.position == FINAL_SQUARE {
            self.game_over = true;
        }
        self.history.push_back(record);
    }

    pub(crate) fn set_current_player(&mut self, player: PlayerId) {
        self.current_player = player;
    }

    // === Snapshots ===

    /// Encode the state with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EngineError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a state produced by `to_bytes` for a game on `board`,
    /// checking its invariants.
    pub fn from_bytes(bytes: &[u8], board: &Board) -> Result<Self, EngineError> {
        let state: Self = bincode::deserialize(bytes)?;
        state.validate(board)?;
        Ok(state)
    }

    /// Replay the history on `board` and check that it reproduces this
    /// state: every record matches the rules, turns alternate except after
    /// doubles, nothing follows a win, and positions, `current_player` and
    /// `game_over` agree with the replay.
    pub fn validate(&self, board: &Board) -> Result<(), EngineError> {
        let mut replayed = PlayerMap::with_value(START_SQUARE);
        let mut mover = PlayerId::FIRST;

        for record in &self.history {
            if replayed.as_array().contains(&FINAL_SQUARE) {
                return Err(EngineError::CorruptState("move recorded after the game ended"));
            }
            if record.player != mover {
                return Err(EngineError::CorruptState("move recorded out of turn"));
            }
            let expected = resolve_move(board, mover, replayed[mover], record.roll);
            if *record != expected {
                return Err(EngineError::CorruptState("move disagrees with the board"));
            }

            replayed[mover] = record.position;
            if record.position != FINAL_SQUARE && !record.roll.is_double() {
                mover = mover.other();
            }
        }

        if replayed != self.positions {
            return Err(EngineError::CorruptState("positions disagree with history"));
        }
        if self.current_player != mover {
            return Err(EngineError::CorruptState("current player disagrees with history"));
        }
        if self.game_over != replayed.as_array().contains(&FINAL_SQUARE) {
            return Err(EngineError::CorruptState("game over flag disagrees with positions"));
        }
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
