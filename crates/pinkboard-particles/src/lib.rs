//! Pinkboard Particles - heart-shaped particle effect
//!
//! Provides the particle lifecycle engine:
//! - Fixed-capacity ring buffer of particle slots, recycled forever
//! - Constant-acceleration integration with per-particle age
//! - Emission along a parametric heart curve at a steady rate
//! - Rendering through a caller-supplied [`Surface`]: sprites grow with a
//!   cubic ease-out and fade linearly over their lifetime

pub mod curves;
pub mod driver;
pub mod heart;
pub mod particle;
pub mod pool;
pub mod surface;

pub use driver::{AnimationDriver, DriverState};
pub use heart::HeartCurve;
pub use particle::Particle;
pub use pool::ParticlePool;
pub use surface::{SpriteRect, Surface};
