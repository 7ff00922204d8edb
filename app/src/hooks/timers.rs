//! Browser timers bound to component lifetimes.
//!
//! Timers run as Dioxus tasks driven by `gloo-timers`. Each hook owns its
//! handles through the core slot types and cancels them in `use_drop`, so an
//! unmounted component never receives another tick.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::core::Task;
use dioxus::prelude::*;
use folio_core::{IntervalMs, IntervalSlot, TimerHandle};
use gloo_timers::future::TimeoutFuture;

/// A spawned Dioxus task that can be cancelled through the core timer traits.
#[derive(Clone, Copy)]
pub struct TaskHandle(Task);

impl TimerHandle for TaskHandle {
    fn cancel(self) {
        self.0.cancel();
    }
}

/// Run `on_tick` every `interval` until the returned handle is cancelled.
pub fn spawn_interval(interval: IntervalMs, mut on_tick: impl FnMut() + 'static) -> TaskHandle {
    let ms = interval.get();
    TaskHandle(spawn(async move {
        loop {
            TimeoutFuture::new(ms).await;
            on_tick();
        }
    }))
}

/// Run `on_fire` once after `delay_ms`, unless cancelled first.
pub fn spawn_timeout(delay_ms: u32, on_fire: impl FnOnce() + 'static) -> TaskHandle {
    TaskHandle(spawn(async move {
        TimeoutFuture::new(delay_ms).await;
        on_fire();
    }))
}

/// Call `on_tick` every `interval_ms` while mounted. `None` pauses.
///
/// The callback is captured on the first render; have it close over signals
/// rather than plain values. Changing the interval replaces the running
/// timer; an unchanged interval leaves it alone.
pub fn use_interval(interval_ms: Option<u32>, on_tick: impl FnMut() + 'static) {
    let callback = use_hook(|| Rc::new(RefCell::new(on_tick)));
    let slot = use_hook(|| Rc::new(RefCell::new(IntervalSlot::<TaskHandle>::new())));

    // Track the interval in a signal so the effect re-runs when it changes
    let mut tracked = use_signal(|| interval_ms);
    if *tracked.peek() != interval_ms {
        tracked.set(interval_ms);
    }

    use_effect({
        let slot = slot.clone();
        move || {
            let Some(ms) = tracked() else {
                slot.borrow_mut().clear();
                return;
            };
            match IntervalMs::new(ms) {
                Ok(interval) => {
                    let callback = callback.clone();
                    slot.borrow_mut().arm(interval, move |iv| {
                        spawn_interval(iv, move || {
                            let mut tick = callback.borrow_mut();
                            (*tick)()
                        })
                    });
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Interval timer not started");
                    slot.borrow_mut().clear();
                }
            }
        }
    });

    use_drop(move || {
        slot.borrow_mut().clear();
    });
}

/// A flag that flips to true once, `delay_ms` after mount.
///
/// Drives entrance transitions (navbar and hero slide-in).
pub fn use_delayed_flag(delay_ms: u32) -> Signal<bool> {
    let mut flag = use_signal(|| false);
    let handle = use_hook(move || {
        Rc::new(RefCell::new(Some(spawn_timeout(delay_ms, move || {
            let _ = flag.try_write().map(|mut w| *w = true);
        }))))
    });

    use_drop(move || {
        if let Some(handle) = handle.borrow_mut().take() {
            handle.cancel();
        }
    });

    flag
}
