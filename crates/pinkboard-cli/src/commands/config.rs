//! Settings loading shared by commands, and the `config` command

use anyhow::{Context, Result};
use clap::Args;
use pinkboard_core::Settings;

/// Settings file plus per-field overrides
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to a settings TOML file
    #[arg(long)]
    pub config: Option<String>,

    /// Maximum amount of particles
    #[arg(long)]
    pub length: Option<usize>,

    /// Particle lifetime in seconds
    #[arg(long)]
    pub duration: Option<f32>,

    /// Particle velocity in pixels/sec
    #[arg(long)]
    pub velocity: Option<f32>,

    /// Acceleration as a multiple of the initial velocity
    #[arg(long, allow_negative_numbers = true)]
    pub effect: Option<f32>,

    /// Particle size in pixels
    #[arg(long)]
    pub size: Option<u32>,
}

/// Load the settings file (or defaults) and apply command-line overrides
pub fn load_settings(args: &ConfigArgs) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path))?,
        None => Settings::default(),
    };

    let particles = &mut settings.particles;
    if let Some(v) = args.length {
        particles.max_particles = v;
    }
    if let Some(v) = args.duration {
        particles.lifetime = v;
    }
    if let Some(v) = args.velocity {
        particles.velocity = v;
    }
    if let Some(v) = args.effect {
        particles.effect = v;
    }
    if let Some(v) = args.size {
        particles.size = v;
    }
    particles.validate().context("Invalid particle settings")?;

    log::debug!("effective settings: {:?}", settings.particles);
    Ok(settings)
}

/// Print the effective settings as TOML
pub fn run(args: &ConfigArgs) -> Result<()> {
    let settings = load_settings(args)?;
    print!("{}", settings.to_toml_string()?);
    Ok(())
}
