//! Dice: a validated pair of faces and a seeded roller for hosts.
//!
//! The engine never rolls on its own. Hosts either pass faces they got
//! elsewhere or use `Dice` to generate them.
//!
//! ```
//! use snakes_ladders::core::Dice;
//!
//! let mut a = Dice::new(42);
//! let mut b = Dice::new(42);
//! assert_eq!(a.roll(), b.roll());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Lowest face on a die.
pub const MIN_FACE: u8 = 1;

/// Highest face on a die.
pub const MAX_FACE: u8 = 6;

/// Two die faces, each guaranteed to be in 1..=6.
///
/// Deserialization goes through `DiceRoll::new`, so decoded rolls keep the
/// same guarantee.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDiceRoll")]
pub struct DiceRoll {
    die1: u8,
    die2: u8,
}

impl DiceRoll {
    /// Validate two raw faces.
    pub fn new(die1: i32, die2: i32) -> Result<Self, EngineError> {
        Ok(Self {
            die1: face(1, die1)?,
            die2: face(2, die2)?,
        })
    }

    #[must_use]
    pub const fn die1(self) -> u8 {
        self.die1
    }

    #[must_use]
    pub const fn die2(self) -> u8 {
        self.die2
    }

    /// Number of squares to move.
    #[must_use]
    pub const fn total(self) -> u8 {
        self.die1 + self.die2
    }

    /// Both dice show the same face.
    #[must_use]
    pub const fn is_double(self) -> bool {
        self.die1 == self.die2
    }
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}+{}", self.die1, self.die2)
    }
}

/// Unchecked wire form of `DiceRoll`.
#[derive(Deserialize)]
struct RawDiceRoll {
    die1: u8,
    die2: u8,
}

impl TryFrom<RawDiceRoll> for DiceRoll {
    type Error = EngineError;

    fn try_from(raw: RawDiceRoll) -> Result<Self, Self::Error> {
        DiceRoll::new(i32::from(raw.die1), i32::from(raw.die2))
    }
}

fn face(die: u8, value: i32) -> Result<u8, EngineError> {
    u8::try_from(value)
        .ok()
        .filter(|v| (MIN_FACE..=MAX_FACE).contains(v))
        .ok_or(EngineError::InvalidDie { die, value })
}

/// Seeded pair of six-sided dice.
///
/// Uses ChaCha8 so the same seed always produces the same game.
#[derive(Clone, Debug)]
pub struct Dice {
    inner: ChaCha8Rng,
    seed: u64,
}

impl Dice {
    /// Create dice with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create dice seeded from the OS.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed these dice started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Roll both dice.
    pub fn roll(&mut self) -> DiceRoll {
        DiceRoll {
            die1: self.inner.gen_range(MIN_FACE..=MAX_FACE),
            die2: self.inner.gen_range(MIN_FACE..=MAX_FACE),
        }
    }
}
