//! Software RGBA surface

use crate::sprite::Sprite;
use image::{Rgba, RgbaImage};
use pinkboard_core::{PinkboardError, Result};
use pinkboard_particles::{SpriteRect, Surface};
use std::path::Path;

/// An in-memory drawing surface backed by an `RgbaImage`.
///
/// Sprites are scaled nearest-neighbor and composited source-over with
/// straight (non-premultiplied) alpha.
pub struct Canvas {
    image: RgbaImage,
    background: Rgba<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, background),
            background,
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.image.save(path).map_err(|e| {
            PinkboardError::Image(format!("Failed to save {}: {}", path.display(), e))
        })
    }
}

impl Surface for Canvas {
    type Sprite = Sprite;

    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.image = RgbaImage::from_pixel(width, height, self.background);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        for pixel in self.image.pixels_mut() {
            *pixel = self.background;
        }
        Ok(())
    }

    fn draw_sprite(&mut self, sprite: &Sprite, rect: SpriteRect, opacity: f32) -> Result<()> {
        if !(rect.width > 0.0 && rect.height > 0.0) || opacity <= 0.0 {
            return Ok(());
        }
        if !(rect.x.is_finite() && rect.y.is_finite()) {
            return Err(PinkboardError::Surface(format!(
                "sprite position is not finite: ({}, {})",
                rect.x, rect.y
            )));
        }
        let opacity = opacity.min(1.0);

        // Destination pixels whose centers fall inside the rect
        let x0 = (rect.x - 0.5).ceil().max(0.0) as u32;
        let y0 = (rect.y - 0.5).ceil().max(0.0) as u32;
        let x1 = ((rect.x + rect.width - 0.5).ceil().max(0.0) as u32).min(self.image.width());
        let y1 = ((rect.y + rect.height - 0.5).ceil().max(0.0) as u32).min(self.image.height());

        let src = sprite.image();
        let (sw, sh) = src.dimensions();
        if sw == 0 || sh == 0 {
            return Ok(());
        }

        for y in y0..y1 {
            let v = (y as f32 + 0.5 - rect.y) / rect.height;
            let sy = ((v * sh as f32) as u32).min(sh - 1);
            for x in x0..x1 {
                let u = (x as f32 + 0.5 - rect.x) / rect.width;
                let sx = ((u * sw as f32) as u32).min(sw - 1);
                let s = src.get_pixel(sx, sy);
                blend_over(self.image.get_pixel_mut(x, y), s, opacity);
            }
        }
        Ok(())
    }
}

/// Composite `src` at `opacity` over `dst`
fn blend_over(dst: &mut Rgba<u8>, src: &Rgba<u8>, opacity: f32) {
    let sa = src[3] as f32 / 255.0 * opacity;
    if sa <= 0.0 {
        return;
    }
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);

    for c in 0..3 {
        let sc = src[c] as f32;
        let dc = dst[c] as f32;
        dst[c] = ((sc * sa + dc * da * (1.0 - sa)) / out_a).round().clamp(0.0, 255.0) as u8;
    }
    dst[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::DEFAULT_FILL;
    use crate::sprite::heart_sprite;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    fn solid_sprite(color: Rgba<u8>) -> Sprite {
        Sprite::from_image(RgbaImage::from_pixel(4, 4, color))
    }

    #[test]
    fn new_canvas_is_background() {
        let canvas = Canvas::new(8, 6, WHITE);
        assert_eq!(canvas.width(), 8);
        assert_eq!(canvas.height(), 6);
        assert!(canvas.image().pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn opaque_sprite_covers_rect() {
        let mut canvas = Canvas::new(10, 10, WHITE);
        let red = Rgba([255, 0, 0, 255]);
        canvas
            .draw_sprite(&solid_sprite(red), SpriteRect::centered(5.0, 5.0, 4.0), 1.0)
            .unwrap();

        for y in 0..10 {
            for x in 0..10 {
                let inside = (3..7).contains(&x) && (3..7).contains(&y);
                let expected = if inside { red } else { WHITE };
                assert_eq!(*canvas.image().get_pixel(x, y), expected, "({x}, {y})");
            }
        }
    }

    #[test]
    fn opacity_blends_with_background() {
        let mut canvas = Canvas::new(4, 4, WHITE);
        let black = Rgba([0, 0, 0, 255]);
        canvas
            .draw_sprite(&solid_sprite(black), SpriteRect::centered(2.0, 2.0, 4.0), 0.5)
            .unwrap();
        let p = canvas.image().get_pixel(1, 1);
        assert!((p[0] as i32 - 128).abs() <= 1);
        assert_eq!(p[3], 255);
    }

    #[test]
    fn blend_onto_transparent_keeps_color() {
        let mut canvas = Canvas::new(4, 4, CLEAR);
        canvas
            .draw_sprite(&solid_sprite(DEFAULT_FILL), SpriteRect::centered(2.0, 2.0, 4.0), 0.5)
            .unwrap();
        let p = canvas.image().get_pixel(2, 2);
        assert_eq!(p[0], DEFAULT_FILL[0]);
        assert_eq!(p[1], DEFAULT_FILL[1]);
        assert_eq!(p[2], DEFAULT_FILL[2]);
        assert!((p[3] as i32 - 128).abs() <= 1);
    }

    #[test]
    fn sprites_are_clipped_to_canvas() {
        let mut canvas = Canvas::new(4, 4, WHITE);
        let sprite = solid_sprite(Rgba([0, 0, 255, 255]));
        canvas
            .draw_sprite(&sprite, SpriteRect::centered(0.0, 0.0, 4.0), 1.0)
            .unwrap();
        canvas
            .draw_sprite(&sprite, SpriteRect::centered(-100.0, 50.0, 4.0), 1.0)
            .unwrap();
        assert_eq!(canvas.image().get_pixel(0, 0)[2], 255);
        assert_eq!(*canvas.image().get_pixel(3, 3), WHITE);
    }

    #[test]
    fn invisible_draws_are_skipped() {
        let mut canvas = Canvas::new(4, 4, WHITE);
        let sprite = solid_sprite(Rgba([0, 0, 0, 255]));
        canvas
            .draw_sprite(&sprite, SpriteRect::centered(2.0, 2.0, 0.0), 1.0)
            .unwrap();
        canvas
            .draw_sprite(&sprite, SpriteRect::centered(2.0, 2.0, 4.0), 0.0)
            .unwrap();
        assert!(canvas.image().pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn non_finite_position_is_an_error() {
        let mut canvas = Canvas::new(4, 4, WHITE);
        let sprite = solid_sprite(WHITE);
        let err = canvas
            .draw_sprite(&sprite, SpriteRect::centered(f32::NAN, 1.0, 2.0), 1.0)
            .unwrap_err();
        assert!(matches!(err, PinkboardError::Surface(_)));
    }

    #[test]
    fn clear_and_resize() {
        let mut canvas = Canvas::new(4, 4, WHITE);
        let sprite = heart_sprite(4, DEFAULT_FILL).unwrap();
        canvas
            .draw_sprite(&sprite, SpriteRect::centered(2.0, 2.0, 4.0), 1.0)
            .unwrap();
        canvas.clear().unwrap();
        assert!(canvas.image().pixels().all(|p| *p == WHITE));

        canvas.resize(16, 9).unwrap();
        assert_eq!(canvas.image().dimensions(), (16, 9));
        assert!(canvas.image().pixels().all(|p| *p == WHITE));
    }
}
