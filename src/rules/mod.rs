//! Game rules: the move transition and the engine that drives it.
//!
//! `transition` is the pure state function. `SimonEngine` pairs it with a
//! move source and an observer, and delivers each transition's events in
//! order.

pub mod engine;
pub mod transition;

pub use engine::{make_move, new_game, SimonEngine};
pub use transition::{transition, Events, Transition};
