//! Particles drifting at constant velocity over the wraparound surface.

use crate::spawn::{random_position, random_velocity};
use crate::torus::Surface;
use glam::DVec2;
use rand::Rng;

/// A moving point.
///
/// Velocity is fixed for the particle's lifetime; only position changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Position in surface units, inside `[0, width) x [0, height)` after
    /// every advance.
    pub position: DVec2,
    /// Surface units per millisecond.
    pub velocity: DVec2,
}

impl Particle {
    pub fn new(position: DVec2, velocity: DVec2) -> Self {
        Self { position, velocity }
    }

    /// Move by `velocity * dt` and wrap both axes.
    #[inline]
    pub fn advance(&mut self, surface: Surface, dt: f64) {
        self.position = surface.wrap(self.position + self.velocity * dt);
    }
}

/// The fixed collection of particles.
///
/// A particle's index is its identity. Particles are never added or removed
/// after creation, which keeps link endpoint indices valid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParticleSet {
    particles: Vec<Particle>,
}

impl ParticleSet {
    /// Spawn `count` particles at random positions with random velocities.
    pub fn initialize<R: Rng + ?Sized>(
        count: usize,
        surface: Surface,
        max_speed: f64,
        rng: &mut R,
    ) -> Self {
        let particles = (0..count)
            .map(|_| {
                let position = random_position(rng, surface);
                let velocity = random_velocity(rng, max_speed);
                Particle::new(position, velocity)
            })
            .collect();
        Self { particles }
    }

    /// Use an explicit set of particles, e.g. a recorded or hand-placed layout.
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    /// Move every particle by one tick of `dt` milliseconds.
    ///
    /// Positions are re-wrapped unconditionally, so particles left outside a
    /// shrunken surface come back inside on the next call.
    pub fn advance(&mut self, surface: Surface, dt: f64) {
        for particle in &mut self.particles {
            particle.advance(surface, dt);
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Current positions in index order.
    pub fn positions(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.particles.iter().map(|p| p.position)
    }
}

impl std::ops::Index<usize> for ParticleSet {
    type Output = Particle;

    fn index(&self, index: usize) -> &Particle {
        &self.particles[index]
    }
}

impl<'a> IntoIterator for &'a ParticleSet {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}
