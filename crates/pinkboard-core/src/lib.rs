//! Pinkboard Core - Foundational types for the Pinkboard particle engine
//!
//! This crate provides the types that all other Pinkboard crates depend on:
//! - `Vec2` - 2D point/vector used for positions and velocities
//! - `ParticleConfig`, `Settings` - Immutable tuning inputs loaded from TOML
//! - Error types and Result alias

mod config;
mod error;
mod types;

pub use config::{ParticleConfig, Settings, MAX_SPRITE_SIZE};
pub use error::{PinkboardError, Result};
pub use types::Vec2;
