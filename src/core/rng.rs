//! Move generation.
//!
//! The engine draws every new move from a [`MoveSource`]. Three sources
//! ship with the crate:
//!
//! - [`GameRng`]: seeded ChaCha8, deterministic and checkpointable
//! - [`EntropySource`]: the thread-local OS-seeded RNG
//! - [`ScriptedMoves`]: a fixed cycle of moves, for tests and replays
//!
//! ```
//! use simon_engine::core::{GameRng, MoveSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! // Same seed, same deal
//! for _ in 0..20 {
//!     assert_eq!(a.next_move(), b.next_move());
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::moves::{Move, ALPHABET_SIZE};

/// A source of new moves for the expected sequence.
///
/// Implementations must return a symbol of the alphabet on every call.
/// Random sources must draw uniformly.
pub trait MoveSource {
    /// Produce the next move.
    fn next_move(&mut self) -> Move;
}

impl<S: MoveSource + ?Sized> MoveSource for &mut S {
    fn next_move(&mut self) -> Move {
        (**self).next_move()
    }
}

impl<S: MoveSource + ?Sized> MoveSource for Box<S> {
    fn next_move(&mut self) -> Move {
        (**self).next_move()
    }
}

/// Deterministic RNG for dealing moves.
///
/// Uses ChaCha8 for speed while keeping the sequence reproducible from the
/// seed alone.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG with a seed drawn from the thread-local generator.
    ///
    /// The seed is still recorded, so the game can be reproduced later via
    /// [`GameRng::seed`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl MoveSource for GameRng {
    fn next_move(&mut self) -> Move {
        let mv = Move(self.inner.gen_range(0..ALPHABET_SIZE));
        trace!(seed = self.seed, symbol = mv.raw(), "dealt move");
        mv
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position, so capture and restore are O(1)
/// regardless of how many moves have been dealt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Non-reproducible source backed by `rand::thread_rng`.
#[derive(Clone, Copy, Debug, Default)]
pub struct EntropySource;

impl MoveSource for EntropySource {
    fn next_move(&mut self) -> Move {
        let mv = Move(rand::thread_rng().gen_range(0..ALPHABET_SIZE));
        trace!(symbol = mv.raw(), "dealt move");
        mv
    }
}

/// Replays a fixed script of moves, wrapping around at the end.
#[derive(Clone, Debug)]
pub struct ScriptedMoves {
    script: Vec<Move>,
    cursor: usize,
}

impl ScriptedMoves {
    /// Create a source that cycles through `script`.
    pub fn new(script: impl IntoIterator<Item = Move>) -> Self {
        let script: Vec<Move> = script.into_iter().collect();
        assert!(!script.is_empty(), "Script must contain at least one move");
        assert!(
            script.iter().all(|mv| mv.is_valid()),
            "Script moves must belong to the alphabet"
        );

        Self { script, cursor: 0 }
    }

    /// A source that deals the same move forever.
    pub fn repeat(mv: Move) -> Self {
        Self::new([mv])
    }

    /// How many moves have been dealt so far.
    #[must_use]
    pub fn dealt(&self) -> usize {
        self.cursor
    }
}

impl MoveSource for ScriptedMoves {
    fn next_move(&mut self) -> Move {
        let mv = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        mv
    }
}
