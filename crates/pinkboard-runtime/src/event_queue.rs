//! Host events held back until the frame they are due

use crate::event::HostEvent;
use std::collections::BTreeMap;

/// Events keyed by the frame index before which they are delivered.
///
/// Draining yields events in frame order, and in push order within a frame.
#[derive(Debug, Default)]
pub struct EventQueue {
    due: BTreeMap<u64, Vec<HostEvent>>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold `event` until frame `frame`
    pub fn push(&mut self, frame: u64, event: HostEvent) {
        self.due.entry(frame).or_default().push(event);
    }

    /// Remove every event due at or before `frame`.
    ///
    /// Events for frames that already went by are delivered late, not dropped.
    pub fn drain_due(&mut self, frame: u64) -> Vec<HostEvent> {
        let later = match frame.checked_add(1) {
            Some(next) => self.due.split_off(&next),
            None => BTreeMap::new(),
        };
        std::mem::replace(&mut self.due, later)
            .into_values()
            .flatten()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.due.is_empty()
    }

    /// Number of events still waiting
    pub fn len(&self) -> usize {
        self.due.values().map(Vec::len).sum()
    }
}

impl FromIterator<(u64, HostEvent)> for EventQueue {
    fn from_iter<I: IntoIterator<Item = (u64, HostEvent)>>(iter: I) -> Self {
        let mut queue = Self::new();
        for (frame, event) in iter {
            queue.push(frame, event);
        }
        queue
    }
}
