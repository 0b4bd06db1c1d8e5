//! Headless runner: steps a simulation at a fixed cadence and logs what it
//! would draw.
//!
//! Run with: `RUST_LOG=info cargo run --release -- [config.json]`

use linkfield::prelude::*;
use linkfield::ConfigError;
use log::{debug, info};

fn active_links(state: &SimulationState) -> usize {
    state.links().links().iter().filter(|l| l.is_active()).count()
}

fn main() -> Result<(), ConfigError> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading config from {}", path);
            LinkFieldConfig::load(path)?
        }
        None => LinkFieldConfig::default(),
    };

    let surface = config.surface()?;
    let mut state = Simulation::from_config(config.clone()).build(0.0)?;
    info!(
        "Running '{}': {} particles on {}x{}, {} frames at {:.2}ms",
        config.name,
        config.particle_count,
        surface.width(),
        surface.height(),
        config.frames,
        config.frame_ms
    );

    let mut clock = FrameClock::new();
    clock.set_fixed_delta(Some(config.frame_ms));
    let frames_per_second = (1000.0 / config.frame_ms).round().max(1.0) as u64;

    let mut appeared = 0;
    let mut retracted = 0;
    for _ in 0..config.frames {
        let (now, _) = clock.tick();
        let frame = state.step(surface, now);
        appeared += frame.appeared.len();
        retracted += frame.retracted.len();

        if clock.frame() % frames_per_second == 0 {
            info!(
                "t={:.0}ms active={} segments={} split={} (+{} -{})",
                now,
                active_links(&state),
                frame.segment_count(),
                frame.split_segment_count(),
                appeared,
                retracted
            );
            appeared = 0;
            retracted = 0;
        }
    }

    debug!("Stepped {} frames at {:.1} fps wall clock", clock.frame(), clock.fps());
    info!(
        "Done: {} active links of {}",
        active_links(&state),
        state.links().len()
    );
    Ok(())
}
