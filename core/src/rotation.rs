//! Rotating rings: headline words, activity strings, the project carousel.
//!
//! A [`Ring`] is a non-empty list cycled one step at a time. A
//! [`RotationScheduler`] pairs a ring with an [`IntervalSlot`] so each
//! rotating widget owns exactly one timer of its own.

use crate::error::CoreError;
use crate::schedule::{IntervalMs, IntervalSlot, TimerHandle};

/// Non-empty ordered items with a cursor that wraps.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring<T> {
    items: Vec<T>,
    index: usize,
    /// Cycling is limited to the first `window` items
    window: usize,
}

impl<T> Ring<T> {
    pub fn new(items: Vec<T>) -> Result<Self, CoreError> {
        if items.is_empty() {
            return Err(CoreError::EmptyRing);
        }
        let window = items.len();
        Ok(Self {
            items,
            index: 0,
            window,
        })
    }

    /// Only cycle through the leading `window` items (at least one, at most all).
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window.clamp(1, self.items.len());
        self.index %= self.window;
        self
    }

    pub fn current(&self) -> &T {
        &self.items[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; a ring cannot be constructed empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of positions the cursor visits
    pub fn window(&self) -> usize {
        self.window
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Step to the next item, wrapping after the end of the window.
    pub fn advance(&mut self) -> &T {
        self.index = (self.index + 1) % self.window;
        self.current()
    }

    /// Jump to a position (e.g. a carousel dot). Out-of-range indices wrap.
    pub fn select(&mut self, index: usize) -> &T {
        self.index = index % self.window;
        self.current()
    }
}

/// A ring driven by its own interval timer.
///
/// An empty item list is allowed but never arms a timer and has no current
/// item. A single-item ring arms normally; ticking just keeps the same item.
pub struct RotationScheduler<T, H: TimerHandle> {
    ring: Option<Ring<T>>,
    slot: IntervalSlot<H>,
}

impl<T, H: TimerHandle> RotationScheduler<T, H> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            ring: Self::build_ring(items),
            slot: IntervalSlot::new(),
        }
    }

    /// Rotation restricted to the first `window` items.
    pub fn windowed(items: Vec<T>, window: usize) -> Self {
        Self {
            ring: Self::build_ring(items).map(|r| r.with_window(window)),
            slot: IntervalSlot::new(),
        }
    }

    fn build_ring(items: Vec<T>) -> Option<Ring<T>> {
        match Ring::new(items) {
            Ok(ring) => Some(ring),
            Err(e) => {
                tracing::debug!(error = %e, "Rotation has nothing to show");
                None
            }
        }
    }

    /// Arm (or re-arm) the timer. Returns false when there is nothing to
    /// rotate or the timer is already running at this interval.
    pub fn start(&mut self, interval: IntervalMs, start: impl FnOnce(IntervalMs) -> H) -> bool {
        if self.ring.is_none() {
            return false;
        }
        self.slot.arm(interval, start)
    }

    /// Advance one step. Called from the timer callback.
    pub fn tick(&mut self) -> Option<&T> {
        self.ring.as_mut().map(Ring::advance)
    }

    /// Jump to an index without touching the timer.
    pub fn select(&mut self, index: usize) -> Option<&T> {
        self.ring.as_mut().map(|r| r.select(index))
    }

    /// Swap in new items. The cursor restarts at the first item; the timer
    /// keeps running unless the new list is empty.
    pub fn replace_items(&mut self, items: Vec<T>, window: usize) {
        self.ring = Self::build_ring(items).map(|r| r.with_window(window));
        if self.ring.is_none() {
            self.slot.clear();
        }
    }

    /// Cancel the timer. The current item stays where it is.
    pub fn stop(&mut self) -> bool {
        self.slot.clear()
    }

    pub fn current(&self) -> Option<&T> {
        self.ring.as_ref().map(Ring::current)
    }

    pub fn index(&self) -> Option<usize> {
        self.ring.as_ref().map(Ring::index)
    }

    pub fn ring(&self) -> Option<&Ring<T>> {
        self.ring.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.slot.is_armed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(items: &[&'static str]) -> Ring<&'static str> {
        Ring::new(items.to_vec()).unwrap()
    }

    #[test]
    fn test_empty_ring_rejected() {
        assert_eq!(Ring::<u8>::new(vec![]), Err(CoreError::EmptyRing));
    }

    #[test]
    fn test_ring_advance_wraps() {
        let mut r = ring(&["A", "B", "C"]);
        assert_eq!(*r.advance(), "B");
        assert_eq!(*r.advance(), "C");
        assert_eq!(*r.advance(), "A");
    }

    #[test]
    fn test_single_item_ring() {
        let mut r = ring(&["A"]);
        for _ in 0..10 {
            assert_eq!(*r.advance(), "A");
        }
    }

    #[test]
    fn test_window_limits_cycle() {
        let mut r = ring(&["A", "B", "C", "D", "E"]).with_window(3);
        let seen: Vec<_> = (0..4).map(|_| *r.advance()).collect();
        assert_eq!(seen, vec!["B", "C", "A", "B"]);
    }

    #[test]
    fn test_window_clamped_to_len() {
        assert_eq!(ring(&["A", "B"]).with_window(3).window(), 2);
        assert_eq!(ring(&["A", "B"]).with_window(0).window(), 1);
    }

    #[test]
    fn test_select_wraps_out_of_range() {
        let mut r = ring(&["A", "B", "C"]);
        assert_eq!(*r.select(2), "C");
        assert_eq!(*r.select(4), "B");
        assert_eq!(r.index(), 1);
    }
}
