//! Animation driver: spawns particles along the heart at a steady rate,
//! advances the pool, and draws it every frame.

use crate::heart::HeartCurve;
use crate::pool::ParticlePool;
use crate::surface::Surface;
use pinkboard_core::{ParticleConfig, PinkboardError, Result, Vec2};
use pinkboard_runtime::{Frame, FrameClock, FrameScheduler, FrameToken, HostEvent};
use rand::Rng;

/// Lifecycle of the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// Constructed, no frame requested yet
    Idle,
    /// A frame is pending or being handled
    Running,
    /// Cancelled; frames are ignored
    Stopped,
}

/// Owns the particle pool and runs one simulation step per animation frame.
///
/// Frames, pointer events, and resizes are all delivered by a single host
/// loop, one call at a time.
pub struct AnimationDriver<R: Rng> {
    config: ParticleConfig,
    pool: ParticlePool,
    clock: FrameClock,
    rng: R,
    state: DriverState,
    pending: Option<FrameToken>,
    /// Fractional particles carried over between frames
    accumulator: f64,
}

impl<R: Rng> AnimationDriver<R> {
    pub fn new(config: ParticleConfig, rng: R) -> Result<Self> {
        let pool = ParticlePool::new(&config)?;
        Ok(Self {
            config,
            pool,
            clock: FrameClock::new(),
            rng,
            state: DriverState::Idle,
            pending: None,
            accumulator: 0.0,
        })
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn pool(&self) -> &ParticlePool {
        &self.pool
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Frames handled so far
    pub fn frame_count(&self) -> u64 {
        self.clock.frame_count
    }

    /// Request the first frame.
    ///
    /// Starting a running driver does nothing. A stopped driver cannot be
    /// restarted.
    pub fn start(&mut self, scheduler: &mut impl FrameScheduler) -> Result<()> {
        match self.state {
            DriverState::Idle => {}
            DriverState::Running => return Ok(()),
            DriverState::Stopped => {
                return Err(PinkboardError::Scheduler(
                    "cannot restart a stopped animation".to_string(),
                ))
            }
        }
        self.pending = Some(scheduler.schedule_next_frame()?);
        self.state = DriverState::Running;
        log::debug!(
            "animation started: {} particles/s, capacity {}",
            self.config.emission_rate(),
            self.pool.capacity()
        );
        Ok(())
    }

    /// Cancel the pending frame. No frame is handled after this.
    pub fn stop(&mut self, scheduler: &mut impl FrameScheduler) {
        if let Some(token) = self.pending.take() {
            scheduler.cancel_frame(token);
        }
        if self.state != DriverState::Stopped {
            log::debug!("animation stopped after {} frames", self.clock.frame_count);
        }
        self.state = DriverState::Stopped;
    }

    /// Handle a frame from the scheduler and request the next one.
    ///
    /// Frames other than the one this driver is waiting for are ignored.
    pub fn on_frame<S: Surface>(
        &mut self,
        frame: Frame,
        surface: &mut S,
        sprite: &S::Sprite,
        scheduler: &mut impl FrameScheduler,
    ) -> Result<()> {
        if self.state != DriverState::Running || self.pending != Some(frame.token) {
            log::warn!("ignoring unexpected frame {}", frame.token.raw());
            return Ok(());
        }
        self.pending = None;

        self.tick(frame.timestamp, surface, sprite)?;

        self.pending = Some(scheduler.schedule_next_frame()?);
        Ok(())
    }

    /// One simulation step at `timestamp` seconds. Returns the number of
    /// particles spawned.
    pub fn tick<S: Surface>(
        &mut self,
        timestamp: f64,
        surface: &mut S,
        sprite: &S::Sprite,
    ) -> Result<usize> {
        let dt = self.clock.tick(timestamp);

        let count = self.spawn_count(dt);
        self.accumulator += self.config.emission_rate() as f64 * dt - count as f64;

        // Spawns past capacity would be overwritten within this same tick
        let spawned = count.min(self.pool.capacity());
        if spawned < count {
            log::debug!("frame gap of {dt:.3}s: spawning {spawned} of {count} particles");
        }

        // Curve space is y-up, the surface is y-down
        let center = Vec2::new(surface.width() as f32 / 2.0, surface.height() as f32 / 2.0);
        for _ in 0..spawned {
            let point = HeartCurve::random_emission_point(&mut self.rng);
            let dir = HeartCurve::emission_direction(point, self.config.velocity)?.flip_y();
            let pos = center + point.flip_y();
            self.pool.add(pos.x, pos.y, dir.x, dir.y);
        }
        log::trace!(
            "frame {}: dt {dt:.4}s, spawned {spawned}, live {}",
            self.clock.frame_count,
            self.pool.len()
        );

        self.pool.update(dt as f32);

        surface.clear()?;
        self.pool.draw(surface, sprite)?;
        Ok(spawned)
    }

    /// Particles the next frame spawns if it comes `dt` seconds after the
    /// previous one: `floor(emission_rate * dt)`, plus the fraction left
    /// over from earlier frames.
    pub fn spawn_count(&self, dt: f64) -> usize {
        (self.accumulator + self.config.emission_rate() as f64 * dt).floor() as usize
    }

    /// Spawn one particle at a click position, independent of the spawn rate
    pub fn on_pointer_down(&mut self, x: f32, y: f32) -> Result<()> {
        let point = HeartCurve::random_emission_point(&mut self.rng);
        let dir = HeartCurve::emission_direction(point, self.config.velocity)?.flip_y();
        self.pool.add(x, y, dir.x, dir.y);
        Ok(())
    }

    /// Apply an event delivered between frames
    pub fn handle_event<S: Surface>(&mut self, event: HostEvent, surface: &mut S) -> Result<()> {
        match event {
            HostEvent::PointerDown { x, y } => self.on_pointer_down(x, y),
            HostEvent::Resize { width, height } => {
                log::debug!("surface resized to {width}x{height}");
                surface.resize(width, height)
            }
        }
    }
}
