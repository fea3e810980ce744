//! Events a host delivers to the animation between frames

/// Input and surface events, in surface-local pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// A pointer click or tap
    PointerDown { x: f32, y: f32 },
    /// The host element changed size; the surface should follow
    Resize { width: u32, height: u32 },
}
