//! Criterion micro-benchmarks for stepping and state cloning.

use covey_core::Action;
use covey_engine::{Game, GameConfig};
use covey_test_utils::OpenField;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn make_game(rows: u32, cols: u32, num_agents: usize) -> Game {
    Game::new(
        Box::new(OpenField),
        GameConfig {
            rows,
            cols,
            horizon: u32::MAX,
            num_agents,
            ..GameConfig::default()
        },
    )
    .expect("valid config")
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");
    for &num_agents in &[2usize, 8, 25] {
        let game = make_game(16, 16, num_agents);
        let state = game.new_initial_state().expect("setup");
        let actions: Vec<Action> = (0..num_agents)
            .map(|i| Action::ALL[i % Action::ALL.len()])
            .collect();
        group.bench_function(format!("agents_{num_agents}"), |b| {
            b.iter(|| {
                let mut s = state.clone();
                game.step(&mut s, black_box(&actions));
                s
            })
        });
    }
    group.finish();
}

fn bench_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone");
    for &(rows, cols) in &[(8u32, 8u32), (32, 32)] {
        let game = make_game(rows, cols, 8);
        let state = game.new_initial_state().expect("setup");
        group.bench_function(format!("{rows}x{cols}"), |b| {
            b.iter(|| black_box(state.clone()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_step, bench_clone);
criterion_main!(benches);
