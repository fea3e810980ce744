//! Procedural heart sprite

use image::{Rgba, RgbaImage};
use pinkboard_core::{PinkboardError, Result, Vec2, MAX_SPRITE_SIZE};
use pinkboard_particles::HeartCurve;
use std::path::Path;

/// Subsamples per pixel along each axis when computing edge coverage
const SUPERSAMPLE: u32 = 4;

/// Square RGBA image drawn for every particle
#[derive(Debug, Clone)]
pub struct Sprite {
    image: RgbaImage,
}

impl Sprite {
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        self.image
            .save(path.as_ref())
            .map_err(|e| PinkboardError::Image(format!("Failed to save PNG: {}", e)))
    }
}

/// Rasterize the closed heart outline into a `size × size` sprite filled with `color`.
///
/// Pixels on the outline get partial alpha proportional to their coverage.
pub fn heart_sprite(size: u32, color: Rgba<u8>) -> Result<Sprite> {
    if size == 0 || size > MAX_SPRITE_SIZE {
        return Err(PinkboardError::InvalidConfig(format!(
            "sprite size must be between 1 and {MAX_SPRITE_SIZE} pixels, got {size}"
        )));
    }

    let outline = HeartCurve::outline(size);
    let coverage = coverage_mask(&outline, size, size);

    let mut img = RgbaImage::new(size, size);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let c = coverage[y as usize * size as usize + x as usize].min(1.0);
        if c > 0.0 {
            let alpha = (color[3] as f32 * c).round() as u8;
            *pixel = Rgba([color[0], color[1], color[2], alpha]);
        }
    }
    log::debug!("rasterized {size}x{size} heart sprite from {} outline points", outline.len());
    Ok(Sprite::from_image(img))
}

/// Fraction of each pixel inside `polygon` (even-odd rule), row-major
fn coverage_mask(polygon: &[Vec2], width: u32, height: u32) -> Vec<f32> {
    let mut mask = vec![0.0f32; width as usize * height as usize];
    let weight = 1.0 / (SUPERSAMPLE * SUPERSAMPLE) as f32;
    let mut crossings = Vec::new();

    for sub_row in 0..height * SUPERSAMPLE {
        let y = (sub_row as f32 + 0.5) / SUPERSAMPLE as f32;
        let row = sub_row / SUPERSAMPLE;

        crossings.clear();
        for (a, b) in polygon.iter().zip(polygon.iter().cycle().skip(1)) {
            if (a.y <= y) != (b.y <= y) {
                crossings.push(a.x + (y - a.y) / (b.y - a.y) * (b.x - a.x));
            }
        }
        crossings.sort_by(|a, b| a.total_cmp(b));

        for span in crossings.chunks_exact(2) {
            // Subsample columns whose centers fall inside the span
            let first = (span[0] * SUPERSAMPLE as f32 - 0.5).ceil().max(0.0) as u32;
            let last = (span[1] * SUPERSAMPLE as f32 - 0.5)
                .floor()
                .min((width * SUPERSAMPLE) as f32 - 1.0);
            if last < first as f32 {
                continue;
            }
            for sub_col in first..=last as u32 {
                mask[row as usize * width as usize + (sub_col / SUPERSAMPLE) as usize] += weight;
            }
        }
    }
    mask
}
