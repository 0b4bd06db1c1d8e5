//! Frame timestamps for driving the simulation.
//!
//! [`SimulationState::step`](crate::SimulationState::step) takes a timestamp in
//! milliseconds. `FrameClock` is one way to produce them: it reads the
//! monotonic clock once per frame, or advances by a fixed delta for
//! deterministic runs.
//!
//! # Example
//!
//! ```ignore
//! use linkfield::time::FrameClock;
//!
//! let mut clock = FrameClock::new();
//!
//! // In your frame callback:
//! let (now, _delta) = clock.tick();
//! let payload = state.step(surface, now);
//! ```

use std::time::{Duration, Instant};

/// Millisecond timestamp source.
#[derive(Debug)]
pub struct FrameClock {
    /// When the last tick occurred.
    last_tick: Instant,
    /// Accumulated timestamp in milliseconds.
    timestamp_ms: f64,
    /// Total ticks since start.
    frame_count: u64,
    /// Calculated FPS (updated periodically).
    fps: f32,
    fps_frame_count: u64,
    fps_update_time: Instant,
    fps_update_interval: Duration,
    /// Fixed delta in milliseconds, replacing wall-clock time when set.
    fixed_delta_ms: Option<f64>,
}

impl FrameClock {
    /// Create a clock at timestamp 0.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_tick: now,
            timestamp_ms: 0.0,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            fps_update_interval: Duration::from_millis(500),
            fixed_delta_ms: None,
        }
    }

    /// Advance the clock. Call once per frame.
    ///
    /// Returns `(timestamp, delta)` in milliseconds.
    pub fn tick(&mut self) -> (f64, f64) {
        let now = Instant::now();
        let raw_delta = now.duration_since(self.last_tick).as_secs_f64() * 1000.0;
        let delta_ms = self.fixed_delta_ms.unwrap_or(raw_delta);
        self.last_tick = now;
        self.timestamp_ms += delta_ms;

        self.frame_count += 1;

        let fps_elapsed = now.duration_since(self.fps_update_time);
        if fps_elapsed >= self.fps_update_interval {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
        }

        (self.timestamp_ms, delta_ms)
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Wall-clock ticks per second.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Use a fixed delta (milliseconds) instead of wall-clock time.
    ///
    /// Pass `None` to go back to real frame timing.
    pub fn set_fixed_delta(&mut self, delta_ms: Option<f64>) {
        self.fixed_delta_ms = delta_ms;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
