//! Viewport-gated activation.
//!
//! Wraps an `IntersectionObserver` around the core [`ActivationLatch`]. The
//! observer is disconnected as soon as the latch fires, and again when the
//! owning component unmounts.

use dioxus::prelude::*;
use dioxus::web::WebEventExt;
use folio_core::{ActivationLatch, StaggerPlan, Threshold, TimerSet};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::timers::{TaskHandle, spawn_timeout};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Live observer plus the closure it calls back into.
struct ObserverGuard {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// "Has this element been seen yet?" for one mounted element.
#[derive(Clone, Copy)]
pub struct ViewportActivation {
    entered: Signal<bool>,
    latch: Signal<Option<ActivationLatch>>,
    guard: Signal<Option<ObserverGuard>>,
}

impl ViewportActivation {
    /// True once the element has been at least `threshold` visible.
    pub fn has_entered(&self) -> bool {
        *self.entered.read()
    }

    /// `onmounted` handler for the observed element.
    pub fn attach(mut self, event: MountedEvent) {
        let observing = self.latch.peek().as_ref().is_some_and(|l| l.is_observing());
        if !observing || self.guard.peek().is_some() {
            return;
        }
        let Some(element) = event.try_as_web_event() else {
            tracing::warn!("Mounted element is not a DOM element; showing immediately");
            self.entered.set(true);
            return;
        };

        match self.observe(&element) {
            Ok(guard) => self.guard.set(Some(guard)),
            Err(e) => {
                // No observer support: reveal rather than hide content forever
                tracing::warn!(error = ?e, "IntersectionObserver unavailable");
                self.entered.set(true);
            }
        }
    }

    fn observe(self, element: &web_sys::Element) -> Result<ObserverGuard, JsValue> {
        let mut latch = self.latch;
        let mut entered = self.entered;
        let threshold = latch
            .peek()
            .as_ref()
            .map_or(1.0, |l| l.threshold().get());

        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let ratio = entry.intersection_ratio();
                    let fired = match latch.try_write() {
                        Ok(mut l) => Option::as_mut(&mut *l).is_some_and(|l| l.observe(ratio)),
                        Err(_) => false,
                    };
                    if fired {
                        tracing::debug!(ratio, "Element entered viewport");
                        observer.disconnect();
                        let _ = entered.try_write().map(|mut w| *w = true);
                        break;
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);

        Ok(ObserverGuard {
            observer,
            _callback: callback,
        })
    }
}

/// Observe one element and latch the first time it is `threshold` visible.
///
/// An invalid threshold is logged and the element is treated as already seen.
pub fn use_viewport_activation(threshold: f64) -> ViewportActivation {
    let latch = use_signal(|| match Threshold::new(threshold) {
        Ok(t) => Some(ActivationLatch::new(t)),
        Err(e) => {
            tracing::warn!(error = %e, "Viewport latch disabled");
            None
        }
    });
    let entered = use_signal(|| latch.peek().is_none());
    let guard = use_signal(|| None::<ObserverGuard>);

    let mut activation = ViewportActivation {
        entered,
        latch,
        guard,
    };

    use_drop(move || {
        let _ = activation.latch.try_write().map(|mut l| {
            if let Some(latch) = &mut *l
                && latch.detach()
            {
                tracing::debug!("Observed element removed before entering viewport");
            }
        });
        // Dropping the guard disconnects the observer
        let _ = activation.guard.try_write().map(|mut g| g.take());
    });

    activation
}

/// Fill flags for `count` items, set one at a time once `activated`.
///
/// The cascade starts at most once; pending steps are cancelled on unmount.
pub fn use_stagger(activated: bool, count: usize, step_ms: u32) -> Signal<Vec<bool>> {
    let mut filled = use_signal(|| vec![false; count]);
    let mut timers = use_signal(TimerSet::<TaskHandle>::new);
    let mut started = use_signal(|| false);

    let mut tracked = use_signal(|| activated);
    if *tracked.peek() != activated {
        tracked.set(activated);
    }

    use_effect(move || {
        if !tracked() || *started.peek() {
            return;
        }
        started.set(true);

        let plan = StaggerPlan::new(count, step_ms);
        tracing::debug!(steps = plan.len(), total_ms = plan.total_ms(), "Starting stagger cascade");
        let mut pending = timers.write();
        for step in plan.steps() {
            pending.push(spawn_timeout(step.delay_ms, move || {
                let _ = filled.try_write().map(|mut f| {
                    if let Some(slot) = f.get_mut(step.index) {
                        *slot = true;
                    }
                });
            }));
        }
    });

    use_drop(move || {
        let _ = timers.try_write().map(|mut t| t.clear());
    });

    filled
}
