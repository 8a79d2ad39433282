//! Benchmarks for whole games and single transitions.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use simon_engine::core::{GameRng, GameState, Move, WIN_LENGTH};
use simon_engine::events::EventLog;
use simon_engine::rules::SimonEngine;

fn play_to_win(seed: u64) -> GameState {
    let mut engine = SimonEngine::with_observer(GameRng::new(seed), EventLog::new());
    let mut state = engine.new_game(false);

    for _ in 0..WIN_LENGTH {
        let round: Vec<Move> = state.expected_moves().iter().copied().collect();
        for mv in round {
            state = engine.make_move(mv, &state);
        }
    }
    state
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("full_game_to_win", |b| b.iter(|| play_to_win(black_box(42))));
}

fn bench_single_move(c: &mut Criterion) {
    let mut engine = SimonEngine::new(GameRng::new(7));
    let mut state = engine.new_game(false);
    for _ in 0..WIN_LENGTH - 1 {
        let round: Vec<Move> = state.expected_moves().iter().copied().collect();
        for mv in round {
            state = engine.make_move(mv, &state);
        }
    }
    let right = state.next_expected().unwrap();

    c.bench_function("correct_move_last_round", |b| {
        b.iter(|| engine.make_move(black_box(right), &state))
    });
    c.bench_function("wrong_move_last_round", |b| {
        b.iter(|| engine.make_move(black_box(right.next()), &state))
    });
}

criterion_group!(benches, bench_full_game, bench_single_move);
criterion_main!(benches);
