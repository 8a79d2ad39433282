//! The move transition.
//!
//! `transition` maps a move and a state to the successor state plus the
//! events it raises. It never touches an observer, so the same function
//! backs both the silent and the notifying engine.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use tracing::debug;

use crate::core::{GameState, GameStatus, Move, MoveSource, StateError, WIN_LENGTH};
use crate::events::GameEvent;

/// Events raised by one transition, in firing order. At most three.
pub type Events = SmallVec<[GameEvent; 3]>;

/// Result of applying one move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// The successor state.
    pub state: GameState,
    /// Events to deliver, in order.
    pub events: Events,
}

impl Transition {
    fn new(state: GameState, events: Events) -> Self {
        Self { state, events }
    }

    /// Whether the move matched the expected sequence.
    #[must_use]
    pub fn accepted(&self) -> bool {
        self.events.first() == Some(&GameEvent::Ok)
    }
}

/// Apply `mv` to `state`, drawing any new moves from `source`.
///
/// A won game is left untouched and raises nothing. A state that breaks
/// the sequence invariants is rejected before anything else happens.
pub fn transition<S: MoveSource + ?Sized>(
    mv: Move,
    state: &GameState,
    source: &mut S,
) -> Result<Transition, StateError> {
    state.validate()?;

    if state.is_won() {
        debug!(symbol = mv.raw(), "move ignored, game already won");
        return Ok(Transition::new(state.clone(), SmallVec::new()));
    }

    let round = state.round();
    let position = state.position();
    let strict = state.strict_mode();

    if state.next_expected() != Some(mv) {
        let next = if strict {
            GameState::dealt(source.next_move(), true)
        } else {
            state
                .clone()
                .with_made_moves(Vector::new())
                .with_status(GameStatus::NewRound)
        };

        debug!(round, position, strict, symbol = mv.raw(), "wrong move");
        return Ok(Transition::new(
            next,
            smallvec![GameEvent::Error, GameEvent::NewRound],
        ));
    }

    if position + 1 < round {
        let mut made = state.made_moves().clone();
        made.push_back(mv);
        let next = state
            .clone()
            .with_made_moves(made)
            .with_status(GameStatus::InProgress);

        debug!(round, position, "correct move");
        return Ok(Transition::new(next, smallvec![GameEvent::Ok]));
    }

    if round == WIN_LENGTH {
        let next = state
            .clone()
            .with_expected_moves(Vector::unit(source.next_move()))
            .with_made_moves(Vector::new())
            .with_status(GameStatus::Win);

        debug!(round, strict, "game won");
        return Ok(Transition::new(
            next,
            smallvec![GameEvent::Ok, GameEvent::Win, GameEvent::NewRound],
        ));
    }

    let mut expected = state.expected_moves().clone();
    expected.push_back(source.next_move());
    let next = state
        .clone()
        .with_expected_moves(expected)
        .with_made_moves(Vector::new())
        .with_status(GameStatus::NewRound);

    debug!(round, "round complete");
    Ok(Transition::new(
        next,
        smallvec![GameEvent::Ok, GameEvent::NewRound],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedMoves;

    fn state(expected: &[u8], made: &[u8], strict: bool) -> GameState {
        let status = if made.is_empty() {
            GameStatus::NewRound
        } else {
            GameStatus::InProgress
        };
        GameState::from_parts(
            expected.iter().copied().map(Move),
            made.iter().copied().map(Move),
            strict,
            status,
        )
        .unwrap()
    }

    #[test]
    fn test_correct_move_mid_round() {
        let mut source = ScriptedMoves::repeat(Move(0));
        let before = state(&[1, 2, 3], &[1], false);

        let t = transition(Move(2), &before, &mut source).unwrap();

        assert!(t.accepted());
        assert_eq!(t.events.as_slice(), &[GameEvent::Ok]);
        assert_eq!(t.state.made_moves().len(), 2);
        assert_eq!(t.state.expected_moves(), before.expected_moves());
        assert_eq!(t.state.status(), GameStatus::InProgress);
        assert_eq!(source.dealt(), 0);
    }

    #[test]
    fn test_round_completion_appends_move() {
        let mut source = ScriptedMoves::repeat(Move(3));
        let before = state(&[1, 2], &[1], false);

        let t = transition(Move(2), &before, &mut source).unwrap();

        assert_eq!(t.events.as_slice(), &[GameEvent::Ok, GameEvent::NewRound]);
        assert_eq!(
            t.state.expected_moves().iter().copied().collect::<Vec<_>>(),
            vec![Move(1), Move(2), Move(3)]
        );
        assert!(t.state.made_moves().is_empty());
        assert_eq!(t.state.status(), GameStatus::NewRound);
    }

    #[test]
    fn test_lenient_wrong_move_keeps_sequence() {
        let mut source = ScriptedMoves::repeat(Move(0));
        let before = state(&[1, 2, 3], &[1, 2], false);

        let t = transition(Move(0), &before, &mut source).unwrap();

        assert!(!t.accepted());
        assert_eq!(t.events.as_slice(), &[GameEvent::Error, GameEvent::NewRound]);
        assert_eq!(t.state.expected_moves(), before.expected_moves());
        assert!(t.state.made_moves().is_empty());
        assert_eq!(t.state.status(), GameStatus::NewRound);
        assert_eq!(source.dealt(), 0);
    }

    #[test]
    fn test_strict_wrong_move_restarts() {
        let mut source = ScriptedMoves::repeat(Move(2));
        let before = state(&[1, 2, 3], &[1], true);

        let t = transition(Move(3), &before, &mut source).unwrap();

        assert_eq!(t.events.as_slice(), &[GameEvent::Error, GameEvent::NewRound]);
        assert_eq!(t.state, GameState::dealt(Move(2), true));
    }

    #[test]
    fn test_out_of_alphabet_move_is_wrong() {
        let mut source = ScriptedMoves::repeat(Move(0));
        let before = state(&[1], &[], false);

        let t = transition(Move(200), &before, &mut source).unwrap();

        assert_eq!(t.events.as_slice(), &[GameEvent::Error, GameEvent::NewRound]);
    }

    #[test]
    fn test_win_primes_next_game() {
        let mut source = ScriptedMoves::repeat(Move(1));
        let full = vec![0u8; WIN_LENGTH];
        let before = state(&full, &full[..WIN_LENGTH - 1], false);

        let t = transition(Move(0), &before, &mut source).unwrap();

        assert_eq!(
            t.events.as_slice(),
            &[GameEvent::Ok, GameEvent::Win, GameEvent::NewRound]
        );
        assert_eq!(t.state.status(), GameStatus::Win);
        assert_eq!(t.state.expected_moves(), &Vector::unit(Move(1)));
        assert!(t.state.made_moves().is_empty());
    }

    #[test]
    fn test_won_state_is_noop() {
        let mut source = ScriptedMoves::repeat(Move(1));
        let won = GameState::from_parts([Move(3)], [], false, GameStatus::Win).unwrap();

        for mv in Move::all() {
            let t = transition(mv, &won, &mut source).unwrap();
            assert_eq!(t.state, won);
            assert!(t.events.is_empty());
        }
        assert_eq!(source.dealt(), 0);
    }

    #[test]
    fn test_invalid_state_rejected() {
        let mut source = ScriptedMoves::repeat(Move(1));
        let json = r#"{"expected_moves":[1,2],"made_moves":[3],"strict_mode":false,"status":"InProgress"}"#;
        let broken: GameState = serde_json::from_str(json).unwrap();

        let err = transition(Move(2), &broken, &mut source).unwrap_err();
        assert_eq!(err, StateError::NotAPrefix { index: 0 });
    }
}
