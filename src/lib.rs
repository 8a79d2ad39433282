//! # simon-engine
//!
//! The move-validation state machine of a Simon-style memory game.
//!
//! The player reproduces a growing sequence of moves. Each completed round
//! appends one more move; completing a sequence of [`WIN_LENGTH`] moves
//! wins. A wrong move either replays the current round (lenient mode) or
//! restarts with a brand-new sequence (strict mode).
//!
//! ## Design Principles
//!
//! 1. **Values, not mutation**: every transition returns a new
//!    [`GameState`]. Sequences are `im` vectors, so successors share
//!    structure with their predecessors.
//!
//! 2. **Injectable randomness**: new moves come from a [`MoveSource`].
//!    Seed a [`GameRng`] or script the deal with [`ScriptedMoves`] for
//!    reproducible games.
//!
//! 3. **Side-channel notifications**: a [`GameObserver`] hears `ok`,
//!    `error`, `new_round` and `win` in a fixed order but never shapes the
//!    returned state.
//!
//! ## Example
//!
//! ```
//! use simon_engine::{GameRng, GameStatus, SimonEngine};
//!
//! let mut engine = SimonEngine::new(GameRng::new(42));
//! let state = engine.new_game(false);
//!
//! let first = state.next_expected().unwrap();
//! let state = engine.make_move(first, &state);
//! assert_eq!(state.round(), 2);
//! assert_eq!(state.status(), GameStatus::NewRound);
//!
//! // Lenient mode: a wrong move replays the round
//! let wrong = state.next_expected().unwrap().next();
//! let state = engine.make_move(wrong, &state);
//! assert_eq!(state.round(), 2);
//! assert!(state.made_moves().is_empty());
//! ```
//!
//! ## Modules
//!
//! - `core`: moves, state, move sources, configuration, errors
//! - `events`: transition notifications and observers
//! - `rules`: the transition function and the engine

pub mod core;
pub mod events;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    EntropySource, GameConfig, GameRng, GameRngState, GameState, GameStatus, Move, MoveSource,
    ScriptedMoves, StateError, ALPHABET_SIZE, WIN_LENGTH,
};

pub use crate::events::{Callbacks, EventLog, GameEvent, GameObserver, NoopObserver};

pub use crate::rules::{make_move, new_game, transition, SimonEngine, Transition};
