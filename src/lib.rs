//! # linkfield - drifting dots joined to their nearest neighbors
//!
//! A field of particles moves at constant velocity over a wraparound
//! (toroidal) surface. Every particle is linked to its `k` nearest neighbors,
//! and each link fades in and out smoothly as proximity changes.
//!
//! The crate is the simulation core only. It takes a surface size and a
//! timestamp and hands back geometry; drawing is up to the caller.
//!
//! ## Quick Start
//!
//! ```
//! use linkfield::prelude::*;
//!
//! let surface = Surface::new(800.0, 600.0).unwrap();
//! let mut state = Simulation::new()
//!     .with_particle_count(100)
//!     .with_links_per_particle(2)
//!     .with_seed(1)
//!     .build(0.0)
//!     .unwrap();
//!
//! // Once per animation frame, with a millisecond timestamp:
//! let frame = state.step(surface, 16.0);
//! for dot in &frame.dots {
//!     // draw a dot at (dot.x, dot.y)
//! #   let _ = dot;
//! }
//! for piece in &frame.segments {
//!     // draw a line from piece.segment.start to piece.segment.end
//!     // with alpha piece.opacity
//! #   let _ = piece;
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Surface
//!
//! [`Surface`] is the `width x height` domain. Both axes wrap, so the
//! distance between points is measured the short way around
//! ([`torus::wrapped_distance`]).
//!
//! ### Links
//!
//! There is one [`Link`] per pair of particles. Each frame every particle
//! votes for its nearest `k` links; voted links gain `decay * dt` weight, all
//! others lose it. Links with positive weight are drawn with that weight as
//! opacity. [`CloseRule`] decides whether one endpoint's vote is enough.
//!
//! ### Edge crossing
//!
//! A link whose endpoints are on opposite sides of the surface is drawn as two
//! segments, each leaving through one edge ([`torus::split_wrapped_segment`]).
//!
//! ### Retained-mode renderers
//!
//! [`RenderPayload::appeared`] and [`RenderPayload::retracted`] list links
//! whose weight crossed zero this frame, so a scene-graph renderer can create
//! and remove line elements without diffing the whole set.

pub mod config;
mod error;
mod frame;
pub mod links;
mod particle;
mod simulation;
pub mod spawn;
pub mod time;
pub mod torus;
pub mod vertex;

pub use config::LinkFieldConfig;
pub use error::{ConfigError, SurfaceError};
pub use frame::{LinkParams, RenderPayload, SimulationState};
pub use glam::DVec2;
pub use links::{CloseRule, CloseSet, Link, LinkGraph, LinkId, LinkSegment, WeightChanges};
pub use particle::{Particle, ParticleSet};
pub use simulation::Simulation;
pub use torus::{Segment, Surface, WrappedSegment};
pub use vertex::{DotVertex, LineVertex};

/// Convenient re-exports for common usage.
///
/// # Usage
///
/// ```ignore
/// use linkfield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::LinkFieldConfig;
    pub use crate::frame::{LinkParams, RenderPayload, SimulationState};
    pub use crate::links::{CloseRule, LinkSegment};
    pub use crate::particle::{Particle, ParticleSet};
    pub use crate::simulation::Simulation;
    pub use crate::time::FrameClock;
    pub use crate::torus::{Segment, Surface};
    pub use crate::DVec2;
}
