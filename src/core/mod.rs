//! Core types: moves, state, move sources, configuration.
//!
//! Everything here is independent of how transitions are applied. The
//! transition itself lives in `rules`.

pub mod moves;
pub mod rng;
pub mod config;
pub mod error;
pub mod state;

pub use moves::{Move, ALPHABET_SIZE, WIN_LENGTH};
pub use rng::{EntropySource, GameRng, GameRngState, MoveSource, ScriptedMoves};
pub use config::GameConfig;
pub use error::StateError;
pub use state::{GameState, GameStatus};
