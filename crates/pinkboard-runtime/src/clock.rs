//! Frame clock measuring the time between animation frames

/// Tracks frame timestamps and yields the delta since the previous frame
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    /// Total elapsed time in seconds since the first frame
    pub total_time: f64,
    /// Time since last frame in seconds
    pub delta_time: f64,
    /// Number of frames ticked so far
    pub frame_count: u64,
    /// Timestamp of the previous frame
    last_timestamp: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock to `timestamp` (seconds). Call once per frame.
    ///
    /// The first tick yields a zero delta so the first frame does not spawn
    /// a burst proportional to the time before the loop started. A timestamp
    /// earlier than the previous one yields zero as well.
    pub fn tick(&mut self, timestamp: f64) -> f64 {
        self.frame_count += 1;

        let Some(last) = self.last_timestamp.replace(timestamp) else {
            self.delta_time = 0.0;
            return 0.0;
        };

        self.delta_time = (timestamp - last).max(0.0);
        self.total_time += self.delta_time;
        self.delta_time
    }
}
