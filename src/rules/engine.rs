//! The game engine.
//!
//! `SimonEngine` owns a move source and an observer and drives
//! [`transition`] with them. Game states stay plain values: the engine
//! reads the state it is given and returns a new one.

use tracing::{debug, warn};

use super::transition::transition;
use crate::core::{EntropySource, GameRng, GameState, Move, MoveSource, StateError};
use crate::events::{GameObserver, NoopObserver};

/// Deals games and applies moves to them.
///
/// ## Implementation Notes
///
/// - New moves are drawn from `S` only when a round grows, a strict game
///   restarts, or a game is won
/// - Events reach `O` synchronously, after the successor state is built
/// - A won state is terminal: `make_move` returns it unchanged
#[derive(Clone, Debug)]
pub struct SimonEngine<S = GameRng, O = NoopObserver> {
    source: S,
    observer: O,
}

impl<S: MoveSource> SimonEngine<S, NoopObserver> {
    /// Create a silent engine.
    pub fn new(source: S) -> Self {
        Self::with_observer(source, NoopObserver)
    }
}

impl<S: MoveSource, O: GameObserver> SimonEngine<S, O> {
    /// Create an engine that notifies `observer` on every transition.
    pub fn with_observer(source: S, observer: O) -> Self {
        Self { source, observer }
    }

    /// Deal a new game with a single random move.
    pub fn new_game(&mut self, strict_mode: bool) -> GameState {
        let state = GameState::dealt(self.source.next_move(), strict_mode);
        debug!(strict = strict_mode, "new game");
        state
    }

    /// Apply `mv` to `state` and notify the observer.
    ///
    /// # Panics
    ///
    /// Panics if `state` breaks the sequence invariants. States returned by
    /// the engine never do; see [`SimonEngine::try_make_move`] for
    /// untrusted input.
    #[must_use]
    pub fn make_move(&mut self, mv: Move, state: &GameState) -> GameState {
        match self.try_make_move(mv, state) {
            Ok(next) => next,
            Err(err) => panic!("make_move called with an invalid game state: {err}"),
        }
    }

    /// Apply `mv` to `state`, rejecting states that break the invariants.
    ///
    /// On error nothing is dealt and the observer is not called.
    pub fn try_make_move(&mut self, mv: Move, state: &GameState) -> Result<GameState, StateError> {
        let outcome = transition(mv, state, &mut self.source).map_err(|err| {
            warn!(%err, "rejected invalid game state");
            err
        })?;

        for &event in &outcome.events {
            self.observer.notify(event, &outcome.state);
        }

        Ok(outcome.state)
    }

    /// Leave a finished game and start the next one.
    ///
    /// A won state already holds the primed first move of the next game,
    /// so it is kept. Any other state is abandoned for a fresh deal. The
    /// strict mode carries over. No events fire.
    pub fn start_new_game(&mut self, state: &GameState) -> GameState {
        if state.is_won() {
            if let Some(first) = state.expected_moves().front().copied() {
                debug!(strict = state.strict_mode(), "new game from primed move");
                return GameState::dealt(first, state.strict_mode());
            }
        }
        self.new_game(state.strict_mode())
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Split the engine back into its source and observer.
    pub fn into_parts(self) -> (S, O) {
        (self.source, self.observer)
    }
}

/// Deal a new game from the thread-local RNG, with no notifications.
pub fn new_game(strict_mode: bool) -> GameState {
    SimonEngine::new(EntropySource).new_game(strict_mode)
}

/// Apply a move from the thread-local RNG, with no notifications.
///
/// # Panics
///
/// Panics if `state` breaks the sequence invariants.
#[must_use]
pub fn make_move(mv: Move, state: &GameState) -> GameState {
    SimonEngine::new(EntropySource).make_move(mv, state)
}
