//! Pinkboard Raster - CPU rendering for the particle effect
//!
//! - `heart_sprite` rasterizes the filled heart outline into a sprite image
//! - `Canvas` is an RGBA software surface the animation can draw on
//! - `parse_color` reads `#rrggbb` style colors from the command line

mod canvas;
mod color;
mod sprite;

pub use canvas::Canvas;
pub use color::{parse_color, DEFAULT_FILL};
pub use sprite::{heart_sprite, Sprite};
