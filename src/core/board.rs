//! Board topology: the 100-square path with its snakes and ladders.
//!
//! The standard layout is fixed. `Board::new` exists so hosts and tests can
//! supply other tables, but they are validated against the same rules the
//! standard tables obey:
//! - snakes go strictly down, ladders strictly up
//! - sources lie in 1..=99, targets in 1..=100
//! - no square is the source of more than one mapping

use rustc_hash::{FxHashMap, FxHashSet};

use super::error::BoardError;

/// A position on the board path. 0 is off-board, 100 is the finish.
pub type Square = u8;

/// Square a player occupies before entering the board.
pub const START_SQUARE: Square = 0;

/// Landing exactly here wins.
pub const FINAL_SQUARE: Square = 100;

/// Standard snakes as (head, tail).
pub const STANDARD_SNAKES: [(Square, Square); 10] = [
    (16, 6),
    (46, 25),
    (49, 11),
    (62, 19),
    (64, 60),
    (74, 53),
    (89, 68),
    (92, 88),
    (95, 75),
    (99, 80),
];

/// Standard ladders as (bottom, top).
pub const STANDARD_LADDERS: [(Square, Square); 11] = [
    (2, 38),
    (7, 14),
    (8, 31),
    (15, 26),
    (21, 42),
    (28, 84),
    (36, 44),
    (51, 67),
    (71, 91),
    (78, 98),
    (87, 94),
];

/// What a square does to a player who lands on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SquareKind {
    Plain,
    SnakeHead { tail: Square },
    LadderBottom { top: Square },
}

/// Immutable snake and ladder tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    snakes: FxHashMap<Square, Square>,
    ladders: FxHashMap<Square, Square>,
}

impl Board {
    /// The fixed layout every game uses by default.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            snakes: STANDARD_SNAKES.iter().copied().collect(),
            ladders: STANDARD_LADDERS.iter().copied().collect(),
        }
    }

    /// Build a board from custom tables, rejecting invalid topologies.
    pub fn new(
        snakes: &[(Square, Square)],
        ladders: &[(Square, Square)],
    ) -> Result<Self, BoardError> {
        let mut seen = FxHashSet::default();

        for &(head, tail) in snakes {
            check_range("snake", head, tail)?;
            if tail >= head {
                return Err(BoardError::SnakeNotDescending { head, tail });
            }
            if !seen.insert(head) {
                return Err(BoardError::DuplicateSource { square: head });
            }
        }

        for &(bottom, top) in ladders {
            check_range("ladder", bottom, top)?;
            if top <= bottom {
                return Err(BoardError::LadderNotAscending { bottom, top });
            }
            if !seen.insert(bottom) {
                return Err(BoardError::DuplicateSource { square: bottom });
            }
        }

        Ok(Self {
            snakes: snakes.iter().copied().collect(),
            ladders: ladders.iter().copied().collect(),
        })
    }

    /// Tail of the snake whose head is `square`, if any.
    #[must_use]
    pub fn snake_at(&self, square: Square) -> Option<Square> {
        self.snakes.get(&square).copied()
    }

    /// Top of the ladder whose bottom is `square`, if any.
    #[must_use]
    pub fn ladder_at(&self, square: Square) -> Option<Square> {
        self.ladders.get(&square).copied()
    }

    #[must_use]
    pub fn kind_at(&self, square: Square) -> SquareKind {
        if let Some(tail) = self.snake_at(square) {
            SquareKind::SnakeHead { tail }
        } else if let Some(top) = self.ladder_at(square) {
            SquareKind::LadderBottom { top }
        } else {
            SquareKind::Plain
        }
    }

    /// Snakes as (head, tail), ordered by head.
    #[must_use]
    pub fn snakes(&self) -> Vec<(Square, Square)> {
        sorted_pairs(&self.snakes)
    }

    /// Ladders as (bottom, top), ordered by bottom.
    #[must_use]
    pub fn ladders(&self) -> Vec<(Square, Square)> {
        sorted_pairs(&self.ladders)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

fn check_range(kind: &'static str, from: Square, to: Square) -> Result<(), BoardError> {
    if from == START_SQUARE || from >= FINAL_SQUARE {
        return Err(BoardError::SourceOutOfRange { kind, square: from });
    }
    if to == START_SQUARE || to > FINAL_SQUARE {
        return Err(BoardError::TargetOutOfRange { kind, from, to });
    }
    Ok(())
}

fn sorted_pairs(map: &FxHashMap<Square, Square>) -> Vec<(Square, Square)> {
    let mut pairs: Vec<_> = map.iter().map(|(&k, &v)| (k, v)).collect();
    pairs.sort_unstable();
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_tables_are_valid() {
        let board = Board::new(&STANDARD_SNAKES, &STANDARD_LADDERS).unwrap();
        assert_eq!(board, Board::standard());
    }

    #[test]
    fn test_standard_lookups() {
        let board = Board::standard();
        assert_eq!(board.ladder_at(7), Some(14));
        assert_eq!(board.snake_at(99), Some(80));
        assert_eq!(board.snake_at(7), None);
        assert_eq!(board.ladder_at(98), None);
        assert_eq!(board.kind_at(12), SquareKind::Plain);
        assert_eq!(board.kind_at(16), SquareKind::SnakeHead { tail: 6 });
        assert_eq!(board.kind_at(28), SquareKind::LadderBottom { top: 84 });
    }

    #[test]
    fn test_sorted_listing() {
        let board = Board::standard();
        assert_eq!(board.snakes().first(), Some(&(16, 6)));
        assert_eq!(board.ladders().last(), Some(&(87, 94)));
        assert_eq!(board.snakes().len(), 10);
        assert_eq!(board.ladders().len(), 11);
    }

    #[test]
    fn test_rejects_upward_snake() {
        let err = Board::new(&[(10, 20)], &[]).unwrap_err();
        assert_eq!(err, BoardError::SnakeNotDescending { head: 10, tail: 20 });
    }

    #[test]
    fn test_rejects_downward_ladder() {
        let err = Board::new(&[], &[(30, 30)]).unwrap_err();
        assert_eq!(err, BoardError::LadderNotAscending { bottom: 30, top: 30 });
    }

    #[test]
    fn test_rejects_shared_source() {
        let err = Board::new(&[(40, 10)], &[(40, 60)]).unwrap_err();
        assert_eq!(err, BoardError::DuplicateSource { square: 40 });
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(matches!(
            Board::new(&[(100, 50)], &[]),
            Err(BoardError::SourceOutOfRange { square: 100, .. })
        ));
        assert!(matches!(
            Board::new(&[], &[(0, 5)]),
            Err(BoardError::SourceOutOfRange { square: 0, .. })
        ));
        assert!(matches!(
            Board::new(&[], &[(90, 101)]),
            Err(BoardError::TargetOutOfRange { to: 101, .. })
        ));
    }
}
