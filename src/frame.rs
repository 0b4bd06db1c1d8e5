//! One simulation tick, from timestamp to render payload.
//!
//! [`SimulationState::step`] is driven by an external scheduler once per
//! animation frame. It never loops or sleeps; the caller owns the cadence and
//! supplies the timestamp. Steps must not overlap on the same state.

use crate::links::{CloseRule, LinkGraph, LinkId, LinkSegment};
use crate::particle::ParticleSet;
use crate::torus::Surface;
use glam::DVec2;
use log::{debug, trace, warn};
use rand::Rng;

/// Parameters of the link policy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkParams {
    /// How many nearest neighbors each particle votes for (`k`).
    pub links_per_particle: usize,
    /// Weight change per millisecond.
    pub decay: f64,
    /// How the two endpoints' votes combine.
    pub close_rule: CloseRule,
}

impl Default for LinkParams {
    fn default() -> Self {
        Self {
            links_per_particle: 2,
            decay: 0.001,
            close_rule: CloseRule::Either,
        }
    }
}

/// What the renderer needs for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderPayload {
    /// Particle positions in index order.
    pub dots: Vec<DVec2>,
    /// Pieces of every visible link, in link id order.
    pub segments: Vec<LinkSegment>,
    /// Links that became visible this frame.
    pub appeared: Vec<LinkId>,
    /// Links that became invisible this frame. Any drawable kept for them
    /// should be removed.
    pub retracted: Vec<LinkId>,
    /// Milliseconds since the previous step.
    pub delta_ms: f64,
}

impl RenderPayload {
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Number of segments that are half of an edge-crossing link.
    pub fn split_segment_count(&self) -> usize {
        self.segments.iter().filter(|s| s.split).count()
    }
}

/// Particles, links and the previous timestamp.
///
/// The simulation is always running once created; stopping is just not
/// calling [`step`](Self::step) again.
#[derive(Clone, Debug)]
pub struct SimulationState {
    particles: ParticleSet,
    links: LinkGraph,
    params: LinkParams,
    last_timestamp: f64,
    frame: u64,
}

impl SimulationState {
    /// Spawn `count` random particles and the complete link graph over them.
    pub fn initialize<R: Rng + ?Sized>(
        count: usize,
        surface: Surface,
        max_speed: f64,
        params: LinkParams,
        start_timestamp: f64,
        rng: &mut R,
    ) -> Self {
        let particles = ParticleSet::initialize(count, surface, max_speed, rng);
        Self::from_particles(particles, params, start_timestamp)
    }

    /// Build the state around an existing particle set.
    pub fn from_particles(particles: ParticleSet, params: LinkParams, start_timestamp: f64) -> Self {
        let links = LinkGraph::initialize(&particles);
        if particles.len() > 1 && params.links_per_particle >= particles.len() - 1 {
            warn!(
                "links_per_particle = {} with {} particles selects every link",
                params.links_per_particle,
                particles.len()
            );
        }
        debug!(
            "Simulation initialized: {} particles, {} links",
            particles.len(),
            links.len()
        );
        Self {
            particles,
            links,
            params,
            last_timestamp: start_timestamp,
            frame: 0,
        }
    }

    /// Advance to `now` and produce the frame to draw.
    ///
    /// Runs, in order: particle motion, close-link selection, weight update,
    /// geometry. A step with the same timestamp as the previous one changes
    /// nothing. A timestamp earlier than the previous one runs the tick
    /// backwards.
    pub fn step(&mut self, surface: Surface, now: f64) -> RenderPayload {
        let delta_ms = now - self.last_timestamp;
        if delta_ms < 0.0 {
            warn!("Timestamp went back {:.3}ms, stepping in reverse", -delta_ms);
        }
        self.last_timestamp = now;

        self.particles.advance(surface, delta_ms);
        let close = self.links.close_set(
            &self.particles,
            surface,
            self.params.links_per_particle,
            self.params.close_rule,
        );
        let changes = self
            .links
            .update_weights(&close, delta_ms, self.params.decay);
        let segments = self.links.render_geometry(&self.particles, surface);

        self.frame += 1;
        trace!(
            "frame {}: dt={:.3}ms close={} +{} -{} segments={}",
            self.frame,
            delta_ms,
            close.len(),
            changes.appeared.len(),
            changes.retracted.len(),
            segments.len()
        );

        RenderPayload {
            dots: self.particles.positions().collect(),
            segments,
            appeared: changes.appeared,
            retracted: changes.retracted,
            delta_ms,
        }
    }

    #[inline]
    pub fn particles(&self) -> &ParticleSet {
        &self.particles
    }

    #[inline]
    pub fn links(&self) -> &LinkGraph {
        &self.links
    }

    #[inline]
    pub fn params(&self) -> LinkParams {
        self.params
    }

    /// Change the link policy. Takes effect on the next step.
    pub fn set_params(&mut self, params: LinkParams) {
        self.params = params;
    }

    #[inline]
    pub fn last_timestamp(&self) -> f64 {
        self.last_timestamp
    }

    /// Steps taken so far.
    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame
    }
}
