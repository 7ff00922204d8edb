//! Rotating widgets: headline words, activity line, project spotlight.
//!
//! Every call site gets its own [`RotationScheduler`] inside a signal, and
//! with it its own interval timer. Ticks write through the signal so only
//! the components reading the rotation re-render.

use dioxus::prelude::*;
use folio_core::{IntervalMs, RotationScheduler};

use super::timers::{TaskHandle, spawn_interval};

type Scheduler<T> = RotationScheduler<T, TaskHandle>;

/// Handle to a mounted rotation.
pub struct Rotation<T: 'static> {
    scheduler: Signal<Scheduler<T>>,
}

impl<T: 'static> Clone for Rotation<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Rotation<T> {}

impl<T: Clone + 'static> Rotation<T> {
    /// Item currently shown, `None` when there is nothing to rotate.
    pub fn current(&self) -> Option<T> {
        self.scheduler.read().current().cloned()
    }

    pub fn index(&self) -> usize {
        self.scheduler.read().index().unwrap_or(0)
    }

    /// Jump to a position (carousel dots). The timer keeps its phase.
    pub fn select(&mut self, index: usize) {
        self.scheduler.write().select(index);
    }

    /// Number of positions the rotation visits
    pub fn window(&self) -> usize {
        self.scheduler.read().ring().map_or(0, |r| r.window())
    }
}

/// Cycle through `items`, one step every `interval_ms`.
pub fn use_rotation<T>(items: Vec<T>, interval_ms: u32) -> Option<T>
where
    T: Clone + PartialEq + 'static,
{
    use_carousel(items, usize::MAX, Some(interval_ms)).current()
}

/// Rotation over the first `window` items, paused while `interval_ms` is `None`.
///
/// Replacing `items` rebuilds the ring and restarts at the first item.
pub fn use_carousel<T>(items: Vec<T>, window: usize, interval_ms: Option<u32>) -> Rotation<T>
where
    T: Clone + PartialEq + 'static,
{
    let mut scheduler = use_signal(|| Scheduler::windowed(items.clone(), window));

    // Track props in signals so effects can react to changes
    let mut tracked_items = use_signal(|| items.clone());
    if *tracked_items.peek() != items {
        tracked_items.set(items);
    }
    let mut tracked_interval = use_signal(|| interval_ms);
    if *tracked_interval.peek() != interval_ms {
        tracked_interval.set(interval_ms);
    }

    // Skip the mount run; the scheduler was built from these items already
    let mut first_run = use_signal(|| true);
    use_effect(move || {
        let items = tracked_items();
        if *first_run.peek() {
            first_run.set(false);
            return;
        }
        tracing::debug!(items = items.len(), window, "Rebuilding rotation ring");
        scheduler.write().replace_items(items, window);
    });

    use_effect(move || {
        let has_items = !tracked_items.read().is_empty();
        match tracked_interval() {
            Some(ms) if has_items => arm(scheduler, ms),
            _ => {
                scheduler.write().stop();
            }
        }
    });

    use_drop(move || {
        let _ = scheduler.try_write().map(|mut s| s.stop());
    });

    Rotation { scheduler }
}

fn arm<T: 'static>(mut scheduler: Signal<Scheduler<T>>, interval_ms: u32) {
    let interval = match IntervalMs::new(interval_ms) {
        Ok(interval) => interval,
        Err(e) => {
            tracing::warn!(error = %e, "Rotation not started");
            return;
        }
    };

    let mut ticker = scheduler;
    let started = scheduler.write().start(interval, move |iv| {
        spawn_interval(iv, move || {
            // Signal may already be gone if the owner unmounted mid-tick
            let _ = ticker.try_write().map(|mut s| {
                s.tick();
            });
        })
    });
    if started {
        tracing::debug!(interval_ms, "Armed rotation timer");
    }
}
