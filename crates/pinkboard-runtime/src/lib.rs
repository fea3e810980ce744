//! Pinkboard Runtime - Frame loop infrastructure
//!
//! Provides the building blocks a host uses to drive the particle engine:
//! - `FrameClock` - wall-clock deltas between frames, zero on the first frame
//! - `FrameScheduler` - request/cancel the next animation frame
//! - `HostEvent` / `EventQueue` - pointer and resize events held until the frame they are due

mod clock;
mod event;
mod event_queue;
mod scheduler;

pub use clock::FrameClock;
pub use event::HostEvent;
pub use event_queue::EventQueue;
pub use scheduler::{Frame, FrameScheduler, FrameToken, RealtimeScheduler, SimulatedScheduler};
