//! Turn resolution.
//!
//! `Engine` owns one game: its board and its state. Each call to
//! `process_turn` resolves a roll in a single pass:
//!
//! 1. Move `die1 + die2` squares forward
//! 2. Past 100, bounce back by the overshoot
//! 3. Slide down a snake, then climb a ladder (in that order)
//! 4. Landing on 100 wins; otherwise non-doubles pass the turn
//!
//! The engine never rolls dice and performs no I/O. Hosts own one instance
//! per game and serialize calls to it.

use smallvec::SmallVec;

use crate::core::board::{Board, Square, FINAL_SQUARE};
use crate::core::config::GameConfig;
use crate::core::dice::DiceRoll;
use crate::core::error::EngineError;
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::record::{MoveEvent, MoveRecord, Slide, SlideKind};
use crate::core::state::GameState;

use super::stats::GameStats;

/// Structured outcome of one resolved turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    /// The move as recorded in history.
    pub record: MoveRecord,
    /// The game ended with this move.
    pub game_over: bool,
    /// Who moves next. Unchanged on doubles and on a win.
    pub next_player: PlayerId,
}

impl TurnReport {
    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.record.player
    }

    #[must_use]
    pub fn roll(&self) -> DiceRoll {
        self.record.roll
    }

    #[must_use]
    pub fn from(&self) -> Square {
        self.record.from
    }

    #[must_use]
    pub fn to(&self) -> Square {
        self.record.position
    }

    #[must_use]
    pub fn event(&self) -> MoveEvent {
        self.record.event
    }
}

/// Result of `Engine::process_turn`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnResult {
    /// The mover did not finish.
    Moved(TurnReport),
    /// The mover landed on 100.
    Won(TurnReport),
    /// The game had already ended; nothing changed.
    AlreadyOver,
}

impl TurnResult {
    #[must_use]
    pub fn report(&self) -> Option<&TurnReport> {
        match self {
            TurnResult::Moved(report) | TurnResult::Won(report) => Some(report),
            TurnResult::AlreadyOver => None,
        }
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        !matches!(self, TurnResult::Moved(_))
    }

    /// The winner, if this turn won the game.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            TurnResult::Won(report) => Some(report.player()),
            _ => None,
        }
    }
}

impl std::fmt::Display for TurnResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let report = match self {
            TurnResult::AlreadyOver => return write!(f, "Game over!"),
            TurnResult::Won(report) => {
                return write!(
                    f,
                    "{} Wins with a roll of {}!",
                    report.player(),
                    report.roll()
                );
            }
            TurnResult::Moved(report) => report,
        };

        let record = &report.record;
        write!(
            f,
            "{} rolled {}={} and moved from {} to {}.",
            record.player,
            record.roll,
            record.roll.total(),
            record.from,
            record.position
        )?;
        for slide in &record.slides {
            match slide.kind {
                SlideKind::Snake => write!(f, " Oops! Snake from {} to {}.", slide.from, slide.to)?,
                SlideKind::Ladder => write!(f, " Nice! Ladder from {} to {}.", slide.from, slide.to)?,
            }
        }
        if record.roll.is_double() {
            write!(f, " Double roll! {} gets another turn.", record.player)
        } else {
            write!(f, " {}'s turn now.", report.next_player)
        }
    }
}

/// Resolve a roll from `from` on `board` without touching any state.
///
/// From any square below 100 a valid roll reaches at most 111, so a single
/// reflection lands in 89..=99. Out-of-range squares saturate instead of
/// overflowing.
#[must_use]
pub(crate) fn resolve_move(
    board: &Board,
    player: PlayerId,
    from: Square,
    roll: DiceRoll,
) -> MoveRecord {
    let raw_to = from.saturating_add(roll.total());
    let mut event = MoveEvent::None;
    let mut bounced = false;

    let landed = if raw_to > FINAL_SQUARE {
        bounced = true;
        event = MoveEvent::Bounce;
        FINAL_SQUARE.saturating_sub(raw_to - FINAL_SQUARE)
    } else {
        raw_to
    };

    let mut position = landed;
    let mut slides = SmallVec::new();

    if let Some(tail) = board.snake_at(position) {
        slides.push(Slide { kind: SlideKind::Snake, from: position, to: tail });
        event = MoveEvent::Snake;
        position = tail;
    }
    if let Some(top) = board.ladder_at(position) {
        slides.push(Slide { kind: SlideKind::Ladder, from: position, to: top });
        event = MoveEvent::Ladder;
        position = top;
    }

    MoveRecord {
        player,
        roll,
        from,
        raw_to,
        landed,
        position,
        event,
        bounced,
        slides,
    }
}

/// One game of Snakes and Ladders.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    config: GameConfig,
    state: GameState,
}

impl Engine {
    /// New game on the standard board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// New game with a custom configuration.
    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        Self {
            config,
            state: GameState::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.config.board
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Process one turn for the current player with raw die values.
    ///
    /// Returns `TurnResult::AlreadyOver` without validating the dice once
    /// the game has ended. Otherwise out-of-range dice are rejected with
    /// `EngineError::InvalidDie` and the state is left untouched.
    pub fn process_turn(&mut self, die1: i32, die2: i32) -> Result<TurnResult, EngineError> {
        if self.state.is_game_over() {
            return Ok(TurnResult::AlreadyOver);
        }
        let roll = DiceRoll::new(die1, die2)?;
        Ok(self.play(roll))
    }

    /// Process one turn with an already-validated roll.
    pub fn play(&mut self, roll: DiceRoll) -> TurnResult {
        if self.state.is_game_over() {
            return TurnResult::AlreadyOver;
        }

        let player = self.state.current_player();
        let from = self.state.position(player);
        let record = resolve_move(&self.config.board, player, from, roll);

        log::debug!(
            "{} rolled {} from {} to {} ({:?})",
            player,
            roll,
            from,
            record.position,
            record.event
        );

        self.state.commit(record.clone());

        if self.state.is_game_over() {
            log::info!("{} wins after {} turns", player, self.state.turns());
            return TurnResult::Won(TurnReport {
                record,
                game_over: true,
                next_player: player,
            });
        }

        let next_player = if roll.is_double() { player } else { player.other() };
        self.state.set_current_player(next_player);

        TurnResult::Moved(TurnReport {
            record,
            game_over: false,
            next_player,
        })
    }

    #[must_use]
    pub fn positions(&self) -> PlayerMap<Square> {
        *self.state.positions()
    }

    /// Whose turn is next. Not meaningful once the game is over.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.state.current_player()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner()
    }

    #[must_use]
    pub fn move_history(&self) -> &im::Vector<MoveRecord> {
        self.state.history()
    }

    #[must_use]
    pub fn stats(&self) -> GameStats {
        GameStats::from_history(self.state.history())
    }

    /// Replace the state with a fresh game. The board is kept.
    pub fn reset(&mut self) {
        self.state = GameState::new();
    }

    /// Encode the current state.
    pub fn snapshot(&self) -> Result<Vec<u8>, EngineError> {
        self.state.to_bytes()
    }

    /// Replace the state with one decoded from `snapshot`.
    ///
    /// The history is replayed on this engine's board and must reproduce
    /// the decoded state. On error the current state is kept.
    pub fn restore(&mut self, bytes: &[u8]) -> Result<(), EngineError> {
        self.state = GameState::from_bytes(bytes, &self.config.board)?;
        Ok(())
    }
}
