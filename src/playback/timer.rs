//! Cancellable tick scheduling
//!
//! The event loop owns the only clock. A [`TickSlot`] holds at most one
//! pending [`TickHandle`]; the loop polls the slot with the current time and
//! the tick fires once its deadline has passed. Scheduling into an occupied
//! slot replaces the old handle, so two ticks can never be pending at once.

use std::time::{Duration, Instant};

/// A scheduled tick. Dropping the handle cancels it.
#[derive(Debug, PartialEq, Eq)]
pub struct TickHandle {
    due: Instant,
}

impl TickHandle {
    /// Instant at which this tick fires
    pub fn due(&self) -> Instant {
        self.due
    }
}

/// Holder for the single pending tick of a playback session
#[derive(Debug, Default)]
pub struct TickSlot {
    pending: Option<TickHandle>,
}

impl TickSlot {
    pub fn new() -> Self {
        TickSlot { pending: None }
    }

    /// Schedule a tick `delay` after `now`, replacing any pending one
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.pending = Some(TickHandle { due: now + delay });
    }

    /// Drop the pending tick. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Consume the pending tick if it is due at `now`
    pub fn take_due(&mut self, now: Instant) -> Option<TickHandle> {
        match &self.pending {
            Some(handle) if handle.due <= now => self.pending.take(),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left until the pending tick fires, if any
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|handle| handle.due.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_not_due_before_deadline() {
        let start = Instant::now();
        let mut slot = TickSlot::new();
        slot.schedule(start, Duration::from_millis(100));

        assert!(slot.take_due(start + Duration::from_millis(99)).is_none());
        assert!(slot.is_pending());

        let handle = slot.take_due(start + Duration::from_millis(100)).unwrap();
        assert_eq!(handle.due(), start + Duration::from_millis(100));
        assert!(!slot.is_pending());
    }

    #[test]
    fn test_schedule_replaces_pending_tick() {
        let start = Instant::now();
        let mut slot = TickSlot::new();
        slot.schedule(start, Duration::from_millis(10));
        slot.schedule(start, Duration::from_millis(500));

        // The first deadline is gone, only the replacement remains
        assert!(slot.take_due(start + Duration::from_millis(10)).is_none());
        assert_eq!(slot.remaining(start), Some(Duration::from_millis(500)));
    }

    #[test]
    fn test_cancel() {
        let start = Instant::now();
        let mut slot = TickSlot::new();
        assert!(!slot.cancel());

        slot.schedule(start, Duration::ZERO);
        assert!(slot.cancel());
        assert!(slot.take_due(start + Duration::from_secs(1)).is_none());
        assert_eq!(slot.remaining(start), None);
    }
}
