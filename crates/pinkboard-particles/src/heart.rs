//! Parametric heart curve used for emission points and the sprite outline

use pinkboard_core::{Result, Vec2};
use rand::Rng;
use std::f32::consts::PI;

/// Width of the curve's bounding box in curve units, used to fit the outline into a sprite
const OUTLINE_EXTENT: f32 = 350.0;

/// Parameter step when tracing the outline
const OUTLINE_STEP: f32 = 0.01;

/// The classic heart curve, centered near the origin with y pointing up.
///
/// Spans roughly x ∈ [-160, 160], y ∈ [-145, 145].
pub struct HeartCurve;

impl HeartCurve {
    /// Point on the curve for `t ∈ [-π, π]`
    pub fn point_on_curve(t: f32) -> Vec2 {
        let s = t.sin();
        Vec2::new(
            160.0 * s * s * s,
            130.0 * t.cos() - 50.0 * (2.0 * t).cos() - 20.0 * (3.0 * t).cos()
                - 10.0 * (4.0 * t).cos()
                + 25.0,
        )
    }

    /// Point at a uniformly random parameter in `[-π, π]`
    pub fn random_emission_point<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
        let t = PI - 2.0 * PI * rng.random::<f32>();
        Self::point_on_curve(t)
    }

    /// Outward velocity through `point` with magnitude `speed`
    pub fn emission_direction(point: Vec2, speed: f32) -> Result<Vec2> {
        point.scaled_to_length(speed)
    }

    /// Closed polygon tracing the curve inside a `size × size` box in
    /// image coordinates (y down).
    pub fn outline(size: u32) -> Vec<Vec2> {
        let size = size as f32;
        let scale = size / OUTLINE_EXTENT;
        let steps = (2.0 * PI / OUTLINE_STEP).ceil() as usize;

        (0..=steps)
            .map(|i| {
                let p = Self::point_on_curve(-PI + i as f32 * OUTLINE_STEP);
                Vec2::new(size / 2.0 + p.x * scale, size / 2.0 - p.y * scale)
            })
            .collect()
    }
}
