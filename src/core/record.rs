//! Move records: what happened on one processed turn.
//!
//! Records are appended to the history once and never modified.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::Square;
use super::dice::DiceRoll;
use super::player::PlayerId;

/// The notable event of a move.
///
/// When several apply, the last one resolved wins: a bounce onto a snake
/// head is tagged `Snake`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveEvent {
    #[default]
    None,
    Bounce,
    Snake,
    Ladder,
}

/// Direction of a slide along a snake or ladder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlideKind {
    Snake,
    Ladder,
}

/// A single snake or ladder taken during a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slide {
    pub kind: SlideKind,
    /// Square where the snake head or ladder bottom was.
    pub from: Square,
    pub to: Square,
}

/// One processed turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: PlayerId,
    pub roll: DiceRoll,
    pub from: Square,
    /// `from + total`, before any bounce. May exceed 100.
    pub raw_to: u8,
    /// Square reached after the bounce, before snakes and ladders.
    pub landed: Square,
    /// Final resolved position.
    pub position: Square,
    pub event: MoveEvent,
    pub bounced: bool,
    /// Snake then ladder, in resolution order. At most one of each.
    pub slides: SmallVec<[Slide; 2]>,
}

impl MoveRecord {
    /// Square where a snake was triggered, if one was.
    #[must_use]
    pub fn snake_from(&self) -> Option<Square> {
        self.slide_from(SlideKind::Snake)
    }

    /// Square where a ladder was triggered, if one was.
    #[must_use]
    pub fn ladder_from(&self) -> Option<Square> {
        self.slide_from(SlideKind::Ladder)
    }

    #[must_use]
    pub fn is_double(&self) -> bool {
        self.roll.is_double()
    }

    fn slide_from(&self, kind: SlideKind) -> Option<Square> {
        self.slides.iter().find(|s| s.kind == kind).map(|s| s.from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn record(slides: SmallVec<[Slide; 2]>, event: MoveEvent) -> MoveRecord {
        MoveRecord {
            player: PlayerId::FIRST,
            roll: DiceRoll::new(3, 3).unwrap(),
            from: 10,
            raw_to: 16,
            landed: 16,
            position: 6,
            event,
            bounced: false,
            slides,
        }
    }

    #[test]
    fn test_slide_lookup() {
        let rec = record(
            smallvec![Slide { kind: SlideKind::Snake, from: 16, to: 6 }],
            MoveEvent::Snake,
        );
        assert_eq!(rec.snake_from(), Some(16));
        assert_eq!(rec.ladder_from(), None);
        assert!(rec.is_double());
    }

    #[test]
    fn test_record_serde() {
        let rec = record(SmallVec::new(), MoveEvent::None);
        let json = serde_json::to_string(&rec).unwrap();
        let back: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(rec, back);
    }

    #[test]
    fn test_record_serde_rejects_bad_player_and_dice() {
        let rec = record(SmallVec::new(), MoveEvent::None);
        let mut value = serde_json::to_value(&rec).unwrap();

        value["player"] = 5.into();
        assert!(serde_json::from_value::<MoveRecord>(value.clone()).is_err());

        value["player"] = 1.into();
        value["roll"] = serde_json::json!({ "die1": 50, "die2": 50 });
        assert!(serde_json::from_value::<MoveRecord>(value).is_err());
    }
}
