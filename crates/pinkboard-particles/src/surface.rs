//! Drawing surface abstraction consumed by the particle pool

use pinkboard_core::Result;

/// Destination rectangle of a sprite draw, in surface pixels (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl SpriteRect {
    /// Square of side `size` centered on `(cx, cy)`
    pub fn centered(cx: f32, cy: f32, size: f32) -> Self {
        Self {
            x: cx - size / 2.0,
            y: cy - size / 2.0,
            width: size,
            height: size,
        }
    }
}

/// A 2D surface the animation draws onto.
///
/// `Sprite` is whatever image handle the surface knows how to blit.
pub trait Surface {
    type Sprite;

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Match the host element's size. Contents may be discarded.
    fn resize(&mut self, width: u32, height: u32) -> Result<()>;

    fn clear(&mut self) -> Result<()>;

    /// Draw `sprite` stretched into `rect` with `opacity` in `[0, 1]`
    fn draw_sprite(&mut self, sprite: &Self::Sprite, rect: SpriteRect, opacity: f32) -> Result<()>;
}
