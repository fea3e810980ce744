//! Particle configuration (parsed from TOML)

use crate::error::{PinkboardError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest sprite edge in pixels
pub const MAX_SPRITE_SIZE: u32 = 4096;

/// Tuning inputs for the particle effect.
///
/// Field names in TOML follow the `[particles]` table of a settings file:
///
/// ```toml
/// [particles]
/// length = 500     # maximum amount of particles
/// duration = 2.0   # particle lifetime in seconds
/// velocity = 100.0 # emission speed in pixels/sec
/// effect = -0.75   # acceleration as a multiple of the initial velocity
/// size = 30        # sprite size in pixels
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParticleConfig {
    #[serde(rename = "length")]
    pub max_particles: usize,
    #[serde(rename = "duration")]
    pub lifetime: f32,
    pub velocity: f32,
    pub effect: f32,
    pub size: u32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            max_particles: 500,
            lifetime: 2.0,
            velocity: 100.0,
            effect: -0.75,
            size: 30,
        }
    }
}

impl ParticleConfig {
    /// Target spawn rate in particles per second.
    ///
    /// Spawning at this rate keeps the live population near capacity.
    pub fn emission_rate(&self) -> f32 {
        self.max_particles as f32 / self.lifetime
    }

    /// Check the values the engine relies on
    pub fn validate(&self) -> Result<()> {
        if self.max_particles < 2 {
            return Err(PinkboardError::InvalidConfig(format!(
                "length must be at least 2, got {}",
                self.max_particles
            )));
        }
        if !(self.lifetime.is_finite() && self.lifetime > 0.0) {
            return Err(PinkboardError::InvalidConfig(format!(
                "duration must be a positive number of seconds, got {}",
                self.lifetime
            )));
        }
        if !(self.velocity.is_finite() && self.velocity >= 0.0) {
            return Err(PinkboardError::InvalidConfig(format!(
                "velocity must be finite and non-negative, got {}",
                self.velocity
            )));
        }
        if !self.effect.is_finite() {
            return Err(PinkboardError::InvalidConfig(format!(
                "effect must be finite, got {}",
                self.effect
            )));
        }
        if self.size == 0 || self.size > MAX_SPRITE_SIZE {
            return Err(PinkboardError::InvalidConfig(format!(
                "size must be between 1 and {MAX_SPRITE_SIZE} pixels, got {}",
                self.size
            )));
        }
        Ok(())
    }
}

/// Top-level settings file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub particles: ParticleConfig,
}

impl Settings {
    /// Parse and validate settings from a TOML string
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(s)?;
        settings.particles.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
