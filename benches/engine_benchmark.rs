use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rise_engine::{Color, GameConfig, GameEngine, GridLocation, Layout};

const RED_RING: &str = "\
.....
.RR..
.ROR.
.RR..
....B";

fn fresh_engine(layout: &str) -> GameEngine {
    let mut engine = GameEngine::new(GameConfig::default());
    engine.setup(&Layout::parse(layout));
    engine
}

fn bench_setup(c: &mut Criterion) {
    let layout = Layout::parse(RED_RING);
    let mut engine = GameEngine::new(GameConfig::default());
    c.bench_function("setup", |b| {
        b.iter(|| engine.setup(black_box(&layout)));
    });
}

/// One claim action, including the full-board siege scan it triggers.
/// Actions consume the move budget, so each iteration gets a fresh engine.
fn bench_claim_action(c: &mut Criterion) {
    c.bench_function("claim_action", |b| {
        b.iter_batched(
            || fresh_engine(RED_RING),
            |mut engine| engine.apply_action(black_box(GridLocation::new(28, 29)), Color::Red),
            BatchSize::SmallInput,
        );
    });
}

fn bench_snapshot_and_undo(c: &mut Criterion) {
    c.bench_function("snapshot_and_undo", |b| {
        b.iter_batched(
            || {
                let mut engine = fresh_engine(RED_RING);
                let _ = engine.apply_action(GridLocation::new(28, 29), Color::Red);
                engine
            },
            |mut engine| engine.undo_last_action(),
            BatchSize::SmallInput,
        );
    });
}

fn bench_full_turn(c: &mut Criterion) {
    c.bench_function("full_turn", |b| {
        b.iter_batched(
            || fresh_engine(RED_RING),
            |mut engine| {
                let _ = engine.apply_action(GridLocation::new(28, 29), Color::Red);
                let _ = engine.apply_action(GridLocation::new(28, 31), Color::Red);
                engine.current_player()
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_setup,
    bench_claim_action,
    bench_snapshot_and_undo,
    bench_full_turn
);
criterion_main!(benches);
