use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use omok::{GameState, Rules, Symmetric, Symmetry};

// A crowded middle game on the default 9x9 board.
const MIDDLE_GAME: [usize; 24] = [
    40, 41, 31, 49, 50, 32, 30, 22, 39, 48, 58, 29, 21, 13, 12, 57, 66, 67, 23, 14, 4, 60, 51, 42,
];

fn middle_game() -> GameState {
    GameState::from_actions(Rules::default(), &MIDDLE_GAME).unwrap()
}

fn legal_actions(c: &mut Criterion) {
    c.bench_function("legal actions empty 9x9", |b| {
        let state = GameState::default();
        b.iter(|| black_box(&state).legal_actions())
    });
    c.bench_function("legal actions middle game", |b| {
        let state = middle_game();
        b.iter(|| black_box(&state).legal_actions())
    });
}

fn making_moves(c: &mut Criterion) {
    c.bench_function("next middle game", |b| {
        let state = middle_game();
        b.iter_batched_ref(
            || state.clone(),
            |s| s.next(black_box(76)).unwrap(),
            BatchSize::SmallInput,
        )
    });
    c.bench_function("full scan setup", |b| {
        let state = middle_game();
        b.iter(|| {
            GameState::from_grids(
                *state.rules(),
                state.own().clone(),
                state.opponent().clone(),
                state.last_action(),
            )
            .unwrap()
        })
    });
}

fn symmetries(c: &mut Criterion) {
    c.bench_function("all symmetries middle game", |b| {
        let state = middle_game();
        b.iter(|| black_box(&state).symmetries())
    });
    c.bench_function("policy rotation 9x9", |b| {
        let policy = vec![1.0_f32 / 81.0; 81];
        b.iter(|| Symmetry::Rotate90.apply(9, 9, black_box(&policy)))
    });
}

criterion_group!(benches, legal_actions, making_moves, symmetries);
criterion_main!(benches);
