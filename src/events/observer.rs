//! Observers for transition notifications.
//!
//! Observers are side channels: they see the resulting state by shared
//! reference and cannot change what the engine returns. They run
//! synchronously inside `make_move`, and a panic in an observer propagates
//! to the caller.

use std::fmt;

use super::event::GameEvent;
use crate::core::GameState;

/// Receives notifications as the engine applies moves.
///
/// Every handler defaults to doing nothing, so implementors override only
/// what they care about.
pub trait GameObserver {
    /// The move matched the expected sequence.
    fn on_ok(&mut self, _state: &GameState) {}

    /// The move did not match.
    fn on_error(&mut self, _state: &GameState) {}

    /// A round starts from its first move.
    fn on_new_round(&mut self, _state: &GameState) {}

    /// The winning sequence was completed.
    fn on_win(&mut self, _state: &GameState) {}

    /// Route an event to its handler.
    fn notify(&mut self, event: GameEvent, state: &GameState) {
        match event {
            GameEvent::Ok => self.on_ok(state),
            GameEvent::Error => self.on_error(state),
            GameEvent::NewRound => self.on_new_round(state),
            GameEvent::Win => self.on_win(state),
        }
    }
}

impl<O: GameObserver + ?Sized> GameObserver for &mut O {
    fn on_ok(&mut self, state: &GameState) {
        (**self).on_ok(state);
    }

    fn on_error(&mut self, state: &GameState) {
        (**self).on_error(state);
    }

    fn on_new_round(&mut self, state: &GameState) {
        (**self).on_new_round(state);
    }

    fn on_win(&mut self, state: &GameState) {
        (**self).on_win(state);
    }

    fn notify(&mut self, event: GameEvent, state: &GameState) {
        (**self).notify(event, state);
    }
}

/// Ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl GameObserver for NoopObserver {}

/// Records events in the order they fire.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// How many times `event` was recorded.
    #[must_use]
    pub fn count(&self, event: GameEvent) -> usize {
        self.events.iter().filter(|&&e| e == event).count()
    }

    /// Remove and return the recorded events.
    pub fn take(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl GameObserver for EventLog {
    fn notify(&mut self, event: GameEvent, _state: &GameState) {
        self.events.push(event);
    }
}

type Handler<'a> = Box<dyn FnMut(&GameState) + 'a>;

/// Four independent optional closures, one per notification.
///
/// ```
/// use std::cell::Cell;
/// use simon_engine::core::GameRng;
/// use simon_engine::events::Callbacks;
/// use simon_engine::rules::SimonEngine;
///
/// let oks = Cell::new(0);
/// let callbacks = Callbacks::new().on_ok(|_| oks.set(oks.get() + 1));
///
/// let mut engine = SimonEngine::with_observer(GameRng::new(1), callbacks);
/// let state = engine.new_game(false);
/// let first = state.next_expected().unwrap();
/// let _ = engine.make_move(first, &state);
///
/// drop(engine);
/// assert_eq!(oks.get(), 1);
/// ```
#[derive(Default)]
pub struct Callbacks<'a> {
    ok: Option<Handler<'a>>,
    error: Option<Handler<'a>>,
    new_round: Option<Handler<'a>>,
    win: Option<Handler<'a>>,
}

impl<'a> Callbacks<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on_ok(mut self, f: impl FnMut(&GameState) + 'a) -> Self {
        self.ok = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_error(mut self, f: impl FnMut(&GameState) + 'a) -> Self {
        self.error = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_new_round(mut self, f: impl FnMut(&GameState) + 'a) -> Self {
        self.new_round = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_win(mut self, f: impl FnMut(&GameState) + 'a) -> Self {
        self.win = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for Callbacks<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("ok", &self.ok.is_some())
            .field("error", &self.error.is_some())
            .field("new_round", &self.new_round.is_some())
            .field("win", &self.win.is_some())
            .finish()
    }
}

impl GameObserver for Callbacks<'_> {
    fn on_ok(&mut self, state: &GameState) {
        if let Some(f) = self.ok.as_mut() {
            f(state);
        }
    }

    fn on_error(&mut self, state: &GameState) {
        if let Some(f) = self.error.as_mut() {
            f(state);
        }
    }

    fn on_new_round(&mut self, state: &GameState) {
        if let Some(f) = self.new_round.as_mut() {
            f(state);
        }
    }

    fn on_win(&mut self, state: &GameState) {
        if let Some(f) = self.win.as_mut() {
            f(state);
        }
    }
}
