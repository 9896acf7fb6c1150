//! Per-player statistics derived from move history.

use serde::{Deserialize, Serialize};

use crate::core::record::{MoveRecord, SlideKind};
use crate::core::player::{PlayerId, PlayerMap};

/// Counts for a single player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Turns taken.
    pub moves: u32,
    /// Snakes slid down.
    pub snakes: u32,
    /// Ladders climbed.
    pub ladders: u32,
    /// Rolls with both dice equal.
    pub doubles: u32,
    /// Moves that overshot 100 and bounced back.
    pub bounces: u32,
}

/// Statistics for a whole game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    /// Total turns processed.
    pub turns: u32,
    pub players: PlayerMap<PlayerStats>,
}

impl GameStats {
    /// Scan a history. An empty history yields all zeros.
    ///
    /// Slides are counted individually, so a snake that drops a player onto
    /// a ladder counts once for each.
    pub fn from_history<'a>(history: impl IntoIterator<Item = &'a MoveRecord>) -> Self {
        let mut stats = Self::default();

        for record in history {
            stats.turns += 1;
            let entry = &mut stats.players[record.player];
            entry.moves += 1;
            if record.is_double() {
                entry.doubles += 1;
            }
            if record.bounced {
                entry.bounces += 1;
            }
            for slide in &record.slides {
                match slide.kind {
                    SlideKind::Snake => entry.snakes += 1,
                    SlideKind::Ladder => entry.ladders += 1,
                }
            }
        }

        stats
    }

    /// Stats for one player.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerStats {
        &self.players[player]
    }
}
