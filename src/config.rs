//! Simulation configuration that can be stored as JSON.
//!
//! Every field has a default, so a config file only needs the values it
//! changes:
//!
//! ```json
//! { "particle_count": 50, "seed": 7, "close_rule": "owner" }
//! ```

use crate::error::ConfigError;
use crate::frame::LinkParams;
use crate::links::CloseRule;
use crate::torus::Surface;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Complete simulation configuration.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LinkFieldConfig {
    pub name: String,
    pub particle_count: usize,
    /// Per-axis speed limit in surface units per millisecond.
    pub max_speed: f64,
    pub links_per_particle: usize,
    /// Weight change per millisecond.
    pub decay: f64,
    pub close_rule: CloseRule,
    /// Fixed seed for reproducible runs. `None` seeds from the clock.
    pub seed: Option<u64>,
    pub width: f64,
    pub height: f64,
    /// Frame interval used by the headless runner.
    pub frame_ms: f64,
    /// Number of frames the headless runner steps.
    pub frames: u64,
}

impl Default for LinkFieldConfig {
    fn default() -> Self {
        Self {
            name: "Untitled".into(),
            particle_count: 100,
            max_speed: 0.1,
            links_per_particle: 2,
            decay: 0.001,
            close_rule: CloseRule::Either,
            seed: None,
            width: 800.0,
            height: 600.0,
            frame_ms: 1000.0 / 60.0,
            frames: 600,
        }
    }
}

impl LinkFieldConfig {
    /// Save the configuration to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load a configuration from a JSON file and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parse and validate a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every parameter is in its valid range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.surface()?;
        if !self.max_speed.is_finite() || self.max_speed < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "max_speed must be finite and >= 0, got {}",
                self.max_speed
            )));
        }
        if !self.decay.is_finite() || self.decay < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "decay must be finite and >= 0, got {}",
                self.decay
            )));
        }
        if !self.frame_ms.is_finite() || self.frame_ms <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "frame_ms must be finite and > 0, got {}",
                self.frame_ms
            )));
        }
        if self.particle_count > 1 && self.links_per_particle >= self.particle_count - 1 {
            warn!(
                "links_per_particle ({}) >= particle_count - 1, every link will be shown",
                self.links_per_particle
            );
        }
        Ok(())
    }

    pub fn surface(&self) -> Result<Surface, ConfigError> {
        Ok(Surface::new(self.width, self.height)?)
    }

    pub fn link_params(&self) -> LinkParams {
        LinkParams {
            links_per_particle: self.links_per_particle,
            decay: self.decay,
            close_rule: self.close_rule,
        }
    }
}
