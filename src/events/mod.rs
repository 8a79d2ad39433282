//! Transition notifications and the observers that receive them.
//!
//! The engine never requires an observer. `NoopObserver` is the silent
//! default; `EventLog` records events; `Callbacks` wires four optional
//! closures, one per notification.

pub mod event;
pub mod observer;

pub use event::GameEvent;
pub use observer::{Callbacks, EventLog, GameObserver, NoopObserver};
