//! Benchmarks for the per-frame simulation work.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use linkfield::{CloseRule, Simulation, SimulationState, Surface};

fn surface() -> Surface {
    Surface::new(1280.0, 720.0).unwrap()
}

fn warm_state(count: usize) -> SimulationState {
    let mut state = Simulation::new()
        .with_particle_count(count)
        .with_surface(1280.0, 720.0)
        .with_seed(1)
        .build(0.0)
        .unwrap();
    for frame in 1..=60 {
        state.step(surface(), frame as f64 * 16.0);
    }
    state
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for count in [50, 100, 200] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut state = warm_state(count);
            let mut now = state.last_timestamp();
            b.iter(|| {
                now += 16.0;
                black_box(state.step(surface(), now))
            })
        });
    }

    group.finish();
}

fn bench_close_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("close_set");
    let state = warm_state(100);

    for rule in [CloseRule::Either, CloseRule::Owner] {
        group.bench_function(format!("{:?}", rule), |b| {
            b.iter(|| {
                black_box(
                    state
                        .links()
                        .close_set(state.particles(), surface(), 2, rule),
                )
            })
        });
    }

    group.finish();
}

fn bench_render_geometry(c: &mut Criterion) {
    let state = warm_state(100);
    c.bench_function("render_geometry", |b| {
        b.iter(|| black_box(state.links().render_geometry(state.particles(), surface())))
    });
}

criterion_group!(benches, bench_step, bench_close_set, bench_render_geometry);
criterion_main!(benches);
