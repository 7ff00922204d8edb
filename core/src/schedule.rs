//! Timer ownership.
//!
//! The runtime that actually fires timers lives elsewhere (gloo tasks in the
//! browser, a virtual clock in tests). This module only tracks handles so that
//! every owner holds at most one live interval and always cancels what it
//! started.

use std::num::NonZeroU32;
use std::time::Duration;

use crate::error::CoreError;

/// A strictly positive timer interval in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IntervalMs(NonZeroU32);

impl IntervalMs {
    pub fn new(interval_ms: u32) -> Result<Self, CoreError> {
        NonZeroU32::new(interval_ms)
            .map(Self)
            .ok_or(CoreError::InvalidInterval { interval_ms })
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.get()))
    }
}

/// Something that can stop a running timer.
pub trait TimerHandle {
    fn cancel(self);
}

/// Holds at most one live interval timer.
///
/// Re-arming with a different interval cancels the old handle before the new
/// one is started. Dropping the slot cancels whatever is still running.
pub struct IntervalSlot<H: TimerHandle> {
    live: Option<(IntervalMs, H)>,
}

impl<H: TimerHandle> IntervalSlot<H> {
    pub fn new() -> Self {
        Self { live: None }
    }

    /// Ensure a timer is running at `interval`.
    ///
    /// `start` is only called when nothing is armed or the interval changed.
    /// Returns true if a new timer was started.
    pub fn arm(&mut self, interval: IntervalMs, start: impl FnOnce(IntervalMs) -> H) -> bool {
        if self.interval() == Some(interval) {
            return false;
        }
        if self.clear() {
            tracing::debug!(interval_ms = interval.get(), "Re-arming timer with new interval");
        }
        let handle = start(interval);
        self.live = Some((interval, handle));
        true
    }

    /// Cancel the live timer. Returns false if nothing was armed.
    pub fn clear(&mut self) -> bool {
        match self.live.take() {
            Some((_, handle)) => {
                handle.cancel();
                true
            }
            None => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.live.is_some()
    }

    pub fn interval(&self) -> Option<IntervalMs> {
        self.live.as_ref().map(|(interval, _)| *interval)
    }
}

impl<H: TimerHandle> Default for IntervalSlot<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: TimerHandle> Drop for IntervalSlot<H> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// A group of one-shot timers cancelled together (e.g. a stagger cascade).
pub struct TimerSet<H: TimerHandle> {
    handles: Vec<H>,
}

impl<H: TimerHandle> TimerSet<H> {
    pub fn new() -> Self {
        Self { handles: Vec::new() }
    }

    pub fn push(&mut self, handle: H) {
        self.handles.push(handle);
    }

    /// Cancel every handle. Returns how many were cancelled.
    pub fn clear(&mut self) -> usize {
        let count = self.handles.len();
        for handle in self.handles.drain(..) {
            handle.cancel();
        }
        count
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl<H: TimerHandle> Default for TimerSet<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: TimerHandle> Drop for TimerSet<H> {
    fn drop(&mut self) {
        self.clear();
    }
}
