//! Move symbols.
//!
//! A move is one of the four player inputs. Symbols outside the alphabet
//! can still be constructed and submitted; they never match an expected
//! move, so the engine treats them as ordinary wrong moves.

use serde::{Deserialize, Serialize};

/// Number of distinct move symbols.
pub const ALPHABET_SIZE: u8 = 4;

/// Length of the sequence that wins the game.
pub const WIN_LENGTH: usize = 20;

/// A single player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move(pub u8);

impl Move {
    /// Create a new move.
    #[must_use]
    pub const fn new(symbol: u8) -> Self {
        Self(symbol)
    }

    /// Get the raw symbol.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Whether this symbol belongs to the alphabet.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 < ALPHABET_SIZE
    }

    /// Iterate over every symbol of the alphabet, in order.
    ///
    /// ```
    /// use simon_engine::Move;
    ///
    /// let all: Vec<_> = Move::all().collect();
    /// assert_eq!(all, vec![Move(0), Move(1), Move(2), Move(3)]);
    /// ```
    pub fn all() -> impl Iterator<Item = Move> {
        (0..ALPHABET_SIZE).map(Move)
    }

    /// The next symbol, wrapping around the alphabet.
    ///
    /// Always differs from `self` for valid symbols.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1) % ALPHABET_SIZE)
    }
}

impl From<u8> for Move {
    fn from(symbol: u8) -> Self {
        Self(symbol)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Move({})", self.0)
    }
}
