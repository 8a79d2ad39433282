//! Invariant violations on [`GameState`](super::GameState).
//!
//! A wrong move is never an error. These variants only describe states
//! that no sequence of transitions can produce, for example a snapshot
//! edited by hand before being handed back to the engine.

use super::moves::Move;
use super::state::GameStatus;

/// A game state that breaks one of the sequence invariants.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("expected sequence is empty")]
    EmptySequence,

    #[error("expected sequence has {len} moves, more than the winning length {max}")]
    SequenceTooLong { len: usize, max: usize },

    #[error("expected move {index} is {symbol}, outside the alphabet")]
    InvalidSymbol { index: usize, symbol: Move },

    #[error("{made} moves made against an expected sequence of {expected}")]
    MadeExceedsExpected { made: usize, expected: usize },

    #[error("made move {index} does not match the expected sequence")]
    NotAPrefix { index: usize },

    #[error("status {status:?} is inconsistent with {made} made moves")]
    StatusMismatch { status: GameStatus, made: usize },
}
