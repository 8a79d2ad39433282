//! Transition notifications.

use serde::{Deserialize, Serialize};

/// A notification raised by a transition.
///
/// One transition raises one to three events, always in a fixed order:
///
/// | Transition                  | Events                      |
/// |-----------------------------|-----------------------------|
/// | correct move, round goes on | `Ok`                        |
/// | correct move, round done    | `Ok`, `NewRound`            |
/// | correct move, game won      | `Ok`, `Win`, `NewRound`     |
/// | wrong move                  | `Error`, `NewRound`         |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// The move matched the expected sequence.
    Ok,
    /// The move did not match.
    Error,
    /// A round starts from its first move.
    NewRound,
    /// The winning sequence was completed.
    Win,
}

impl GameEvent {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Error => "error",
            Self::NewRound => "new_round",
            Self::Win => "win",
        }
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
