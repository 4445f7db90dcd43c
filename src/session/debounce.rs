//! Resize debouncing.
//!
//! Every resize notification reschedules a single pending recomputation;
//! only the last size survives, and it is released once the viewport has
//! been quiet for the configured delay. Time is passed in by the caller so
//! the shell can drive it from its own timer.

use std::time::{Duration, Instant};

use tracing::trace;

use crate::layout::Size;

/// Identifies one scheduled recomputation. Scheduling again invalidates the
/// previous handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone, Copy)]
struct PendingResize {
    handle: TimerHandle,
    size: Size,
    due: Instant,
}

#[derive(Debug)]
pub struct ResizeDebouncer {
    delay: Duration,
    next_id: u64,
    pending: Option<PendingResize>,
}

impl ResizeDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            next_id: 0,
            pending: None,
        }
    }

    /// Schedules a recomputation for `size`, replacing any pending one.
    pub fn schedule(&mut self, size: Size, now: Instant) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        if let Some(previous) = self.pending.replace(PendingResize {
            handle,
            size,
            due: now + self.delay,
        }) {
            trace!(previous = ?previous.handle, "Superseded pending resize");
        }
        handle
    }

    /// Drops the pending recomputation, returning the size it carried.
    pub fn cancel(&mut self) -> Option<Size> {
        self.pending.take().map(|p| p.size)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_handle(&self) -> Option<TimerHandle> {
        self.pending.map(|p| p.handle)
    }

    /// When the pending recomputation becomes due.
    pub fn pending_deadline(&self) -> Option<Instant> {
        self.pending.map(|p| p.due)
    }

    /// Releases the pending size if the quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<Size> {
        let pending = self.pending?;
        if now >= pending.due {
            self.pending = None;
            Some(pending.size)
        } else {
            None
        }
    }

    /// Releases the pending size for a timer that went off. Stale handles
    /// are ignored.
    pub fn fire(&mut self, handle: TimerHandle) -> Option<Size> {
        match self.pending {
            Some(pending) if pending.handle == handle => {
                self.pending = None;
                Some(pending.size)
            }
            _ => None,
        }
    }
}
