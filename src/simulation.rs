//! Simulation builder

use crate::config::LinkFieldConfig;
use crate::error::ConfigError;
use crate::frame::{LinkParams, SimulationState};
use crate::links::CloseRule;
use crate::spawn::seeded_rng;
use crate::torus::Surface;
use rand::Rng;

/// A particle-link simulation builder.
///
/// Use method chaining to configure, then call `.build()` to get the state
/// to step.
///
/// ```
/// use linkfield::Simulation;
///
/// let mut state = Simulation::new()
///     .with_particle_count(50)
///     .with_seed(7)
///     .build(0.0)
///     .unwrap();
/// let surface = linkfield::Surface::new(800.0, 600.0).unwrap();
/// let frame = state.step(surface, 16.0);
/// assert_eq!(frame.dots.len(), 50);
/// ```
#[derive(Clone, Debug)]
pub struct Simulation {
    config: LinkFieldConfig,
}

impl Simulation {
    /// Create a new simulation with default settings.
    pub fn new() -> Self {
        Self {
            config: LinkFieldConfig::default(),
        }
    }

    /// Start from a loaded configuration.
    pub fn from_config(config: LinkFieldConfig) -> Self {
        Self { config }
    }

    /// Set the number of particles.
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.config.particle_count = count;
        self
    }

    /// Set the per-axis speed limit (surface units per millisecond).
    pub fn with_max_speed(mut self, max_speed: f64) -> Self {
        self.config.max_speed = max_speed;
        self
    }

    /// Set how many nearest neighbors each particle links to.
    pub fn with_links_per_particle(mut self, k: usize) -> Self {
        self.config.links_per_particle = k;
        self
    }

    /// Set the weight change per millisecond.
    pub fn with_decay(mut self, decay: f64) -> Self {
        self.config.decay = decay;
        self
    }

    pub fn with_close_rule(mut self, rule: CloseRule) -> Self {
        self.config.close_rule = rule;
        self
    }

    /// Use a fixed seed for reproducible particle placement.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Set the surface the particles are spawned on.
    pub fn with_surface(mut self, width: f64, height: f64) -> Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    pub fn config(&self) -> &LinkFieldConfig {
        &self.config
    }

    /// The configured surface.
    pub fn surface(&self) -> Result<Surface, ConfigError> {
        self.config.surface()
    }

    pub fn link_params(&self) -> LinkParams {
        self.config.link_params()
    }

    /// Validate and spawn, seeding from the configured seed.
    pub fn build(&self, start_timestamp: f64) -> Result<SimulationState, ConfigError> {
        let mut rng = seeded_rng(self.config.seed);
        self.build_with_rng(start_timestamp, &mut rng)
    }

    /// Validate and spawn using the given RNG.
    pub fn build_with_rng<R: Rng + ?Sized>(
        &self,
        start_timestamp: f64,
        rng: &mut R,
    ) -> Result<SimulationState, ConfigError> {
        self.config.validate()?;
        let surface = self.config.surface()?;
        Ok(SimulationState::initialize(
            self.config.particle_count,
            surface,
            self.config.max_speed,
            self.config.link_params(),
            start_timestamp,
            rng,
        ))
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
