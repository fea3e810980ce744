//! Value-over-lifetime curves

/// Cubic ease-out: `(t - 1)³ + 1`. Maps 0 → 0 and 1 → 1, fast start and slow finish.
pub fn ease_out_cubic(t: f32) -> f32 {
    let u = t - 1.0;
    u * u * u + 1.0
}

/// Linear fade from fully opaque at `t = 0` to transparent at `t = 1`
pub fn fade_out(t: f32) -> f32 {
    1.0 - t
}
