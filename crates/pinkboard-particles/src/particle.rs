//! A single particle: position, velocity, constant acceleration, and age

use crate::curves::{ease_out_cubic, fade_out};
use crate::surface::SpriteRect;
use pinkboard_core::Vec2;

/// Simulation state of one pool slot
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Fixed at spawn as `effect * initial velocity`
    pub acceleration: Vec2,
    /// Seconds since spawn
    pub age: f32,
}

impl Particle {
    /// Overwrite every field for a fresh spawn.
    ///
    /// Slots are recycled, so this is both the first-spawn and the reuse path.
    pub fn initialize(&mut self, position: Vec2, velocity: Vec2, effect: f32) {
        self.position = position;
        self.velocity = velocity;
        self.acceleration = velocity * effect;
        self.age = 0.0;
    }

    /// Semi-implicit step: position moves with the velocity from before this
    /// step's acceleration is applied.
    pub fn update(&mut self, dt: f32) {
        self.position += self.velocity * dt;
        self.velocity += self.acceleration * dt;
        self.age += dt;
    }

    pub fn is_expired(&self, lifetime: f32) -> bool {
        self.age >= lifetime
    }

    /// Normalized age in [0, 1]
    pub fn age_ratio(&self, lifetime: f32) -> f32 {
        if lifetime <= 0.0 {
            1.0
        } else {
            (self.age / lifetime).clamp(0.0, 1.0)
        }
    }

    /// Where and how visible this particle is drawn: a square sprite centered
    /// on the position that grows from nothing to `base_size` while fading out.
    pub fn sprite_rect(&self, lifetime: f32, base_size: f32) -> (SpriteRect, f32) {
        let t = self.age_ratio(lifetime);
        let size = base_size * ease_out_cubic(t);
        (
            SpriteRect::centered(self.position.x, self.position.y, size),
            fade_out(t),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawned(x: f32, y: f32, dx: f32, dy: f32, effect: f32) -> Particle {
        let mut p = Particle::default();
        p.initialize(Vec2::new(x, y), Vec2::new(dx, dy), effect);
        p
    }

    #[test]
    fn initialize_derives_acceleration() {
        let p = spawned(1.0, 2.0, 10.0, -20.0, -0.75);
        assert_eq!(p.position, Vec2::new(1.0, 2.0));
        assert_eq!(p.velocity, Vec2::new(10.0, -20.0));
        assert_eq!(p.acceleration, Vec2::new(-7.5, 15.0));
        assert_eq!(p.age, 0.0);
    }

    #[test]
    fn initialize_overwrites_recycled_state() {
        let mut p = spawned(5.0, 5.0, 1.0, 1.0, -0.5);
        p.update(3.0);
        p.initialize(Vec2::ZERO, Vec2::new(2.0, 0.0), -1.0);
        assert_eq!(p, spawned(0.0, 0.0, 2.0, 0.0, -1.0));
    }

    #[test]
    fn update_uses_pre_step_velocity() {
        let mut p = spawned(0.0, 0.0, 10.0, 0.0, -0.5);
        p.update(1.0);
        // Moved with v = 10, then v dropped by a = -5
        assert!((p.position.x - 10.0).abs() < 1e-6);
        assert!((p.velocity.x - 5.0).abs() < 1e-6);
        assert!((p.age - 1.0).abs() < 1e-6);
    }

    #[test]
    fn zero_acceleration_is_straight_line() {
        let mut p = spawned(3.0, -4.0, 12.5, 7.0, 0.0);
        p.update(0.4);
        assert_eq!(p.position, Vec2::new(3.0 + 12.5 * 0.4, -4.0 + 7.0 * 0.4));
        assert_eq!(p.velocity, Vec2::new(12.5, 7.0));
    }

    #[test]
    fn zero_dt_changes_nothing() {
        let mut p = spawned(3.0, 4.0, 1.0, 2.0, -0.75);
        p.update(0.5);
        let before = p;
        p.update(0.0);
        assert_eq!(p, before);
    }

    #[test]
    fn age_strictly_increases() {
        let mut p = spawned(0.0, 0.0, 1.0, 1.0, -0.75);
        let mut last = p.age;
        for _ in 0..10 {
            p.update(0.016);
            assert!(p.age > last);
            last = p.age;
        }
        assert!(!p.is_expired(1.0));
        p.update(1.0);
        assert!(p.is_expired(1.0));
    }

    #[test]
    fn sprite_grows_and_fades() {
        let mut p = spawned(100.0, 50.0, 0.0, 0.0, 0.0);

        let (rect, opacity) = p.sprite_rect(2.0, 30.0);
        assert_eq!(rect.width, 0.0);
        assert!((opacity - 1.0).abs() < 1e-6);

        p.update(1.0);
        let (rect, opacity) = p.sprite_rect(2.0, 30.0);
        assert!((rect.width - 30.0 * 0.875).abs() < 1e-4);
        assert_eq!(rect.width, rect.height);
        assert!((rect.x + rect.width / 2.0 - 100.0).abs() < 1e-4);
        assert!((rect.y + rect.height / 2.0 - 50.0).abs() < 1e-4);
        assert!((opacity - 0.5).abs() < 1e-6);

        p.update(5.0);
        let (rect, opacity) = p.sprite_rect(2.0, 30.0);
        assert!((rect.width - 30.0).abs() < 1e-4);
        assert!(opacity.abs() < 1e-6);
    }
}
