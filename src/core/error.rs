//! Error types for the engine.
//!
//! Playing on after the game has ended is not an error; see
//! `TurnResult::AlreadyOver`.

use thiserror::Error;

use super::board::Square;

/// Invalid snake/ladder topology passed to `Board::new`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("{kind} source square {square} is outside 1..=99")]
    SourceOutOfRange { kind: &'static str, square: Square },
    #[error("{kind} from {from} targets {to}, outside 1..=100")]
    TargetOutOfRange { kind: &'static str, from: Square, to: Square },
    #[error("snake from {head} to {tail} does not go down")]
    SnakeNotDescending { head: Square, tail: Square },
    #[error("ladder from {bottom} to {top} does not go up")]
    LadderNotAscending { bottom: Square, top: Square },
    #[error("square {square} is the source of more than one snake or ladder")]
    DuplicateSource { square: Square },
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("die {die} rolled {value}, expected 1..=6")]
    InvalidDie { die: u8, value: i32 },
    #[error("player index {0} is not 0 or 1")]
    InvalidPlayer(u8),
    #[error("invalid board: {0}")]
    Board(#[from] BoardError),
    #[error("snapshot decode failed: {0}")]
    Snapshot(String),
    #[error("corrupt state: {0}")]
    CorruptState(&'static str),
}

impl From<bincode::Error> for EngineError {
    fn from(err: bincode::Error) -> Self {
        EngineError::Snapshot(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::InvalidDie { die: 2, value: 7 };
        assert_eq!(err.to_string(), "die 2 rolled 7, expected 1..=6");

        let err = EngineError::InvalidPlayer(5);
        assert_eq!(err.to_string(), "player index 5 is not 0 or 1");

        let err = EngineError::from(BoardError::DuplicateSource { square: 7 });
        assert_eq!(
            err.to_string(),
            "invalid board: square 7 is the source of more than one snake or ladder"
        );
    }
}
