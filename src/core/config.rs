//! Game configuration.
//!
//! Callers describe a game once and build an engine plus its opening state:
//!
//! ```
//! use simon_engine::core::GameConfig;
//!
//! let (mut engine, state) = GameConfig::default().strict().with_seed(7).build();
//! assert!(state.strict_mode());
//!
//! let next = engine.make_move(state.next_expected().unwrap(), &state);
//! assert_eq!(next.round(), 2);
//! ```

use serde::{Deserialize, Serialize};

use super::rng::GameRng;
use super::state::GameState;
use crate::events::{GameObserver, NoopObserver};
use crate::rules::SimonEngine;

/// Configuration for a single game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Restart from scratch on a wrong move instead of replaying the round.
    pub strict_mode: bool,

    /// RNG seed. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create a lenient, entropy-seeded configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable strict mode.
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.strict_mode = true;
        self
    }

    /// Set the strict mode flag.
    #[must_use]
    pub fn with_strict_mode(mut self, strict_mode: bool) -> Self {
        self.strict_mode = strict_mode;
        self
    }

    /// Use a fixed seed for a reproducible deal.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The RNG this configuration deals from.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }

    /// Build a silent engine and deal the opening state.
    pub fn build(&self) -> (SimonEngine<GameRng, NoopObserver>, GameState) {
        self.build_with_observer(NoopObserver)
    }

    /// Build an engine that notifies `observer`, and deal the opening state.
    pub fn build_with_observer<O: GameObserver>(
        &self,
        observer: O,
    ) -> (SimonEngine<GameRng, O>, GameState) {
        let mut engine = SimonEngine::with_observer(self.rng(), observer);
        let state = engine.new_game(self.strict_mode);
        (engine, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameStatus;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert!(!config.strict_mode);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::new().strict().with_seed(123);
        assert!(config.strict_mode);
        assert_eq!(config.seed, Some(123));

        let config = config.with_strict_mode(false);
        assert!(!config.strict_mode);
    }

    #[test]
    fn test_seeded_build_is_reproducible() {
        let config = GameConfig::new().with_seed(99);

        let (_, a) = config.build();
        let (_, b) = config.build();

        assert_eq!(a, b);
        assert_eq!(a.status(), GameStatus::NewRound);
        assert!(!a.strict_mode());
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::new().strict().with_seed(5);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
