//! Deterministic stand-in for the browser event loop.
//!
//! Timers fire in due-time order (ties broken by creation order) when the
//! clock is advanced. Callbacks run one at a time with no clock borrow held,
//! so they may start or cancel other timers.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::schedule::{IntervalMs, TimerHandle};

type Callback = Rc<RefCell<dyn FnMut()>>;

struct PendingTimer {
    id: u64,
    due_ms: u64,
    period_ms: Option<u64>,
    callback: Callback,
}

#[derive(Default)]
struct ClockState {
    now_ms: u64,
    next_id: u64,
    timers: Vec<PendingTimer>,
}

#[derive(Clone, Default)]
pub struct ManualClock {
    state: Rc<RefCell<ClockState>>,
}

pub struct ManualHandle {
    id: u64,
    clock: Weak<RefCell<ClockState>>,
}

impl TimerHandle for ManualHandle {
    fn cancel(self) {
        if let Some(state) = self.clock.upgrade() {
            state.borrow_mut().timers.retain(|t| t.id != self.id);
        }
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.state.borrow().now_ms
    }

    /// Number of timers still scheduled
    pub fn pending(&self) -> usize {
        self.state.borrow().timers.len()
    }

    pub fn set_interval(&self, interval: IntervalMs, callback: impl FnMut() + 'static) -> ManualHandle {
        let period = u64::from(interval.get());
        self.schedule(period, Some(period), Rc::new(RefCell::new(callback)))
    }

    pub fn set_timeout(&self, delay_ms: u64, callback: impl FnOnce() + 'static) -> ManualHandle {
        let mut once = Some(callback);
        let callback = move || {
            if let Some(f) = once.take() {
                f();
            }
        };
        self.schedule(delay_ms, None, Rc::new(RefCell::new(callback)))
    }

    fn schedule(&self, delay_ms: u64, period_ms: Option<u64>, callback: Callback) -> ManualHandle {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        let due_ms = state.now_ms + delay_ms;
        state.timers.push(PendingTimer {
            id,
            due_ms,
            period_ms,
            callback,
        });
        ManualHandle {
            id,
            clock: Rc::downgrade(&self.state),
        }
    }

    /// Move time forward, firing everything that comes due. Returns the
    /// number of callbacks run.
    pub fn advance(&self, ms: u64) -> usize {
        let target = self.now_ms() + ms;
        let mut fired = 0;

        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let Some(pos) = state
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due_ms <= target)
                    .min_by_key(|(_, t)| (t.due_ms, t.id))
                    .map(|(pos, _)| pos)
                else {
                    break;
                };

                let due_ms = state.timers[pos].due_ms;
                state.now_ms = due_ms;
                let callback = state.timers[pos].callback.clone();
                match state.timers[pos].period_ms {
                    Some(period) => state.timers[pos].due_ms += period,
                    None => {
                        state.timers.remove(pos);
                    }
                }
                callback
            };

            let mut callback = next.borrow_mut();
            (*callback)();
            drop(callback);
            fired += 1;
        }

        self.state.borrow_mut().now_ms = target;
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_fires_each_period() {
        let clock = ManualClock::new();
        let count = Rc::new(RefCell::new(0));
        let c = count.clone();
        let _h = clock.set_interval(IntervalMs::new(100).unwrap(), move || *c.borrow_mut() += 1);

        assert_eq!(clock.advance(99), 0);
        assert_eq!(clock.advance(1), 1);
        assert_eq!(clock.advance(350), 3);
        assert_eq!(*count.borrow(), 4);
        assert_eq!(clock.now_ms(), 450);
    }

    #[test]
    fn test_timeout_fires_once() {
        let clock = ManualClock::new();
        let _h = clock.set_timeout(50, || {});
        assert_eq!(clock.pending(), 1);
        assert_eq!(clock.advance(1_000), 1);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let clock = ManualClock::new();
        let h = clock.set_timeout(10, || panic!("cancelled timer fired"));
        h.cancel();
        assert_eq!(clock.advance(100), 0);
    }

    #[test]
    fn test_fire_order() {
        let clock = ManualClock::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for (tag, delay) in [("late", 30), ("early", 10), ("tie", 10)] {
            let o = order.clone();
            let _ = clock.set_timeout(delay, move || o.borrow_mut().push(tag));
        }
        clock.advance(30);
        assert_eq!(*order.borrow(), vec!["early", "tie", "late"]);
    }
}
