//! Animation frame scheduling
//!
//! The driver asks a [`FrameScheduler`] for its next frame and receives a
//! [`FrameToken`]. The host loop pulls due frames with
//! [`FrameScheduler::next_frame`] and hands them back to the driver. A
//! cancelled token is never returned by `next_frame`.

use pinkboard_core::Result;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Identifies one requested frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameToken(u64);

impl FrameToken {
    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// A frame delivered by the scheduler
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub token: FrameToken,
    /// Frame time in seconds
    pub timestamp: f64,
}

/// Arranges future animation frames.
pub trait FrameScheduler {
    /// Request one more frame. The returned token comes back in a [`Frame`].
    fn schedule_next_frame(&mut self) -> Result<FrameToken>;

    /// Withdraw a requested frame. Unknown or delivered tokens are ignored.
    fn cancel_frame(&mut self, token: FrameToken);

    /// Deliver the next due frame, or `None` when nothing is scheduled.
    fn next_frame(&mut self) -> Option<Frame>;
}

/// Pending tokens in request order
#[derive(Debug, Default)]
struct PendingFrames {
    next_id: u64,
    queue: VecDeque<FrameToken>,
}

impl PendingFrames {
    fn push(&mut self) -> FrameToken {
        self.next_id += 1;
        let token = FrameToken(self.next_id);
        self.queue.push_back(token);
        token
    }

    fn cancel(&mut self, token: FrameToken) {
        self.queue.retain(|t| *t != token);
    }

    fn pop(&mut self) -> Option<FrameToken> {
        self.queue.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Deterministic scheduler: every frame is `step` seconds after the previous one.
///
/// No real time passes, which makes runs reproducible and fast.
#[derive(Debug)]
pub struct SimulatedScheduler {
    step: f64,
    now: f64,
    delivered: u64,
    pending: PendingFrames,
}

impl SimulatedScheduler {
    /// Frames at `fps` per second starting at timestamp 0
    pub fn new(fps: f64) -> Self {
        Self::with_step(1.0 / fps)
    }

    pub fn with_step(step: f64) -> Self {
        Self {
            step,
            now: 0.0,
            delivered: 0,
            pending: PendingFrames::default(),
        }
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

impl FrameScheduler for SimulatedScheduler {
    fn schedule_next_frame(&mut self) -> Result<FrameToken> {
        Ok(self.pending.push())
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        self.pending.cancel(token);
    }

    fn next_frame(&mut self) -> Option<Frame> {
        let token = self.pending.pop()?;
        if self.delivered > 0 {
            self.now += self.step;
        }
        self.delivered += 1;
        Some(Frame {
            token,
            timestamp: self.now,
        })
    }
}

/// Wall-clock scheduler that paces frames to a target rate by sleeping
#[derive(Debug)]
pub struct RealtimeScheduler {
    interval: Duration,
    origin: Instant,
    next_deadline: Instant,
    pending: PendingFrames,
}

impl RealtimeScheduler {
    pub fn new(fps: f64) -> Self {
        let now = Instant::now();
        Self {
            interval: Duration::from_secs_f64(1.0 / fps),
            origin: now,
            next_deadline: now,
            pending: PendingFrames::default(),
        }
    }
}

impl FrameScheduler for RealtimeScheduler {
    fn schedule_next_frame(&mut self) -> Result<FrameToken> {
        Ok(self.pending.push())
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        self.pending.cancel(token);
    }

    fn next_frame(&mut self) -> Option<Frame> {
        let token = self.pending.pop()?;

        let now = Instant::now();
        if self.next_deadline > now {
            std::thread::sleep(self.next_deadline - now);
        }
        let now = Instant::now();

        // Fell behind by more than a frame: pace from now instead of catching up
        self.next_deadline += self.interval;
        if self.next_deadline < now {
            log::trace!("frame late by {:?}", now - self.next_deadline);
            self.next_deadline = now + self.interval;
        }

        Some(Frame {
            token,
            timestamp: now.duration_since(self.origin).as_secs_f64(),
        })
    }
}
