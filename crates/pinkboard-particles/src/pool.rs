//! Fixed-capacity ring buffer of particles
//!
//! Live particles occupy the circular range `[first_active, first_free)`.
//! Slots are allocated once and recycled forever; spawning past capacity
//! overwrites the oldest particle instead of growing or failing.
//!
//! One slot always stays free: when an `add` makes `first_free` catch up with
//! `first_active`, the oldest particle is dropped. That keeps
//! `first_active == first_free` meaning "empty" and nothing else, so a pool
//! of capacity `N` holds at most `N - 1` live particles.

use crate::particle::Particle;
use crate::surface::Surface;
use pinkboard_core::{ParticleConfig, Result, Vec2};
use std::ops::Range;

pub struct ParticlePool {
    particles: Vec<Particle>,
    /// Index of the oldest live particle
    first_active: usize,
    /// Index of the next slot to recycle
    first_free: usize,
    lifetime: f32,
    effect: f32,
    sprite_size: f32,
}

impl ParticlePool {
    /// Allocate `config.max_particles` slots
    pub fn new(config: &ParticleConfig) -> Result<Self> {
        config.validate()?;
        log::debug!(
            "allocating particle pool: {} slots, lifetime {}s",
            config.max_particles,
            config.lifetime
        );
        Ok(Self {
            particles: vec![Particle::default(); config.max_particles],
            first_active: 0,
            first_free: 0,
            lifetime: config.lifetime,
            effect: config.effect,
            sprite_size: config.size as f32,
        })
    }

    pub fn capacity(&self) -> usize {
        self.particles.len()
    }

    /// Number of live particles (circular distance between the cursors)
    pub fn len(&self) -> usize {
        let n = self.particles.len();
        (self.first_free + n - self.first_active) % n
    }

    pub fn is_empty(&self) -> bool {
        self.first_active == self.first_free
    }

    pub fn first_active(&self) -> usize {
        self.first_active
    }

    pub fn first_free(&self) -> usize {
        self.first_free
    }

    /// Spawn a particle at `(x, y)` moving with `(dx, dy)` px/s.
    ///
    /// Always succeeds; at capacity the oldest particle is overwritten.
    pub fn add(&mut self, x: f32, y: f32, dx: f32, dy: f32) {
        self.particles[self.first_free].initialize(Vec2::new(x, y), Vec2::new(dx, dy), self.effect);

        self.first_free = self.next_index(self.first_free);
        if self.first_active == self.first_free {
            self.first_active = self.next_index(self.first_active);
        }
    }

    /// Advance every live particle by `dt` seconds, then retire expired ones
    /// from the old end.
    ///
    /// Expiry stops at the first particle still alive; particles live for the
    /// same duration and are ordered by spawn time, so none behind it can
    /// have expired.
    pub fn update(&mut self, dt: f32) {
        let (head, tail) = self.active_ranges();
        for p in &mut self.particles[head] {
            p.update(dt);
        }
        for p in &mut self.particles[tail] {
            p.update(dt);
        }

        while self.first_active != self.first_free
            && self.particles[self.first_active].is_expired(self.lifetime)
        {
            self.first_active = self.next_index(self.first_active);
        }
    }

    /// Draw live particles oldest first, so newer ones land on top
    pub fn draw<S: Surface>(&self, surface: &mut S, sprite: &S::Sprite) -> Result<()> {
        for p in self.iter() {
            let (rect, opacity) = p.sprite_rect(self.lifetime, self.sprite_size);
            surface.draw_sprite(sprite, rect, opacity)?;
        }
        Ok(())
    }

    /// Live particles from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &Particle> + '_ {
        let (head, tail) = self.active_ranges();
        self.particles[head].iter().chain(self.particles[tail].iter())
    }

    /// Drop every live particle without touching slot contents
    pub fn clear(&mut self) {
        self.first_active = self.first_free;
    }

    /// The active range as up to two linear slices: `[first_active, end)` and
    /// the wrapped `[0, first_free)` part.
    fn active_ranges(&self) -> (Range<usize>, Range<usize>) {
        if self.first_active <= self.first_free {
            (self.first_active..self.first_free, 0..0)
        } else {
            (self.first_active..self.particles.len(), 0..self.first_free)
        }
    }

    fn next_index(&self, index: usize) -> usize {
        let next = index + 1;
        if next == self.particles.len() {
            0
        } else {
            next
        }
    }
}
