//! Game state.
//!
//! ## GameState
//!
//! An immutable snapshot of one game:
//! - The expected sequence for the current round
//! - The prefix of it the player has reproduced so far
//! - The penalty mode, fixed at creation
//! - The outcome of the transition that produced it
//!
//! States are never mutated in place. The engine builds each successor
//! from its predecessor with the copy-with-changes methods below. Sequences
//! are `im` vectors, so a clone shares structure with the original.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::error::StateError;
use super::moves::{Move, WIN_LENGTH};

/// Outcome of the most recent transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// The round continues; at least one move of it has been made.
    InProgress,
    /// A round starts from its first move: fresh deal, completed round, or
    /// reset after a wrong move.
    NewRound,
    /// The winning sequence was reproduced. Terminal for `make_move`.
    Win,
}

impl GameStatus {
    /// Short lowercase name, for logs.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::NewRound => "new_round",
            Self::Win => "win",
        }
    }
}

/// Complete state of one Simon game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    expected_moves: Vector<Move>,
    made_moves: Vector<Move>,
    strict_mode: bool,
    status: GameStatus,
}

impl GameState {
    /// A fresh game whose first round is the single move `first`.
    #[must_use]
    pub fn dealt(first: Move, strict_mode: bool) -> Self {
        Self {
            expected_moves: Vector::unit(first),
            made_moves: Vector::new(),
            strict_mode,
            status: GameStatus::NewRound,
        }
    }

    /// Assemble a state from its parts, checking every invariant.
    pub fn from_parts(
        expected_moves: impl IntoIterator<Item = Move>,
        made_moves: impl IntoIterator<Item = Move>,
        strict_mode: bool,
        status: GameStatus,
    ) -> Result<Self, StateError> {
        let state = Self {
            expected_moves: expected_moves.into_iter().collect(),
            made_moves: made_moves.into_iter().collect(),
            strict_mode,
            status,
        };
        state.validate()?;
        Ok(state)
    }

    /// Check the sequence invariants.
    ///
    /// States produced by the engine always pass. Hand-built or
    /// deserialized states may not.
    pub fn validate(&self) -> Result<(), StateError> {
        let expected = self.expected_moves.len();
        let made = self.made_moves.len();

        if expected == 0 {
            return Err(StateError::EmptySequence);
        }
        if expected > WIN_LENGTH {
            return Err(StateError::SequenceTooLong {
                len: expected,
                max: WIN_LENGTH,
            });
        }
        if let Some((index, &symbol)) = self
            .expected_moves
            .iter()
            .enumerate()
            .find(|(_, mv)| !mv.is_valid())
        {
            return Err(StateError::InvalidSymbol { index, symbol });
        }

        // A completed round is reset immediately, so a full match never
        // survives as a state.
        if made >= expected {
            return Err(StateError::MadeExceedsExpected { made, expected });
        }
        if let Some(index) = self
            .made_moves
            .iter()
            .zip(self.expected_moves.iter())
            .position(|(m, e)| m != e)
        {
            return Err(StateError::NotAPrefix { index });
        }

        let consistent = match self.status {
            GameStatus::InProgress => made > 0,
            GameStatus::NewRound | GameStatus::Win => made == 0,
        };
        if !consistent {
            return Err(StateError::StatusMismatch {
                status: self.status,
                made,
            });
        }

        Ok(())
    }

    // === Accessors ===

    /// The sequence to reproduce this round.
    #[must_use]
    pub fn expected_moves(&self) -> &Vector<Move> {
        &self.expected_moves
    }

    /// The moves reproduced so far this round.
    #[must_use]
    pub fn made_moves(&self) -> &Vector<Move> {
        &self.made_moves
    }

    #[must_use]
    pub fn strict_mode(&self) -> bool {
        self.strict_mode
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Win
    }

    /// Current round number, starting at 1. Equal to the expected length.
    #[must_use]
    pub fn round(&self) -> usize {
        self.expected_moves.len()
    }

    /// Index of the next move to make within the round.
    #[must_use]
    pub fn position(&self) -> usize {
        self.made_moves.len()
    }

    /// The move that would be correct right now.
    #[must_use]
    pub fn next_expected(&self) -> Option<Move> {
        self.expected_moves.get(self.position()).copied()
    }

    /// Moves still needed to finish the round.
    #[must_use]
    pub fn remaining_in_round(&self) -> usize {
        self.expected_moves.len().saturating_sub(self.made_moves.len())
    }

    // === Copy-with-changes ===

    #[must_use]
    pub(crate) fn with_expected_moves(mut self, expected_moves: Vector<Move>) -> Self {
        self.expected_moves = expected_moves;
        self
    }

    #[must_use]
    pub(crate) fn with_made_moves(mut self, made_moves: Vector<Move>) -> Self {
        self.made_moves = made_moves;
        self
    }

    #[must_use]
    pub(crate) fn with_status(mut self, status: GameStatus) -> Self {
        self.status = status;
        self
    }
}
