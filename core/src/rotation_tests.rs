//! Scenario tests for timer-driven widgets.
//!
//! Drives rotation schedulers, interval slots and stagger cascades against
//! the virtual clock to check tick ordering and teardown.

use std::cell::RefCell;
use std::rc::Rc;

use crate::manual_clock::{ManualClock, ManualHandle};
use crate::rotation::RotationScheduler;
use crate::schedule::{IntervalMs, TimerSet};
use crate::viewport::{ActivationLatch, StaggerPlan, Threshold};

type Shared<T> = Rc<RefCell<RotationScheduler<T, ManualHandle>>>;

fn ms(v: u32) -> IntervalMs {
    IntervalMs::new(v).unwrap()
}

/// Build a scheduler whose timer callback ticks it, mimicking a mounted view.
fn mount<T: 'static>(clock: &ManualClock, items: Vec<T>, interval: u32) -> (Shared<T>, bool) {
    let scheduler: Shared<T> = Rc::new(RefCell::new(RotationScheduler::new(items)));
    let armed = start(clock, &scheduler, interval);
    (scheduler, armed)
}

fn start<T: 'static>(clock: &ManualClock, scheduler: &Shared<T>, interval: u32) -> bool {
    let weak = Rc::downgrade(scheduler);
    let clock = clock.clone();
    scheduler.borrow_mut().start(ms(interval), move |iv| {
        clock.set_interval(iv, move || {
            if let Some(s) = weak.upgrade() {
                s.borrow_mut().tick();
            }
        })
    })
}

fn current<T: Clone>(scheduler: &Shared<T>) -> Option<T> {
    scheduler.borrow().current().cloned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Ring advance
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_ring_advances_per_interval() {
    let clock = ManualClock::new();
    let (s, armed) = mount(&clock, vec!["A", "B", "C"], 1000);
    assert!(armed);
    assert_eq!(current(&s), Some("A"));

    clock.advance(999);
    assert_eq!(current(&s), Some("A"));

    clock.advance(1);
    assert_eq!(current(&s), Some("B"));

    clock.advance(2000);
    assert_eq!(current(&s), Some("A"));
}

#[test]
fn test_single_item_ring_keeps_ticking() {
    let clock = ManualClock::new();
    let (s, armed) = mount(&clock, vec!["A"], 1000);
    assert!(armed);

    assert_eq!(clock.advance(10_000), 10);
    assert_eq!(current(&s), Some("A"));
    assert!(s.borrow().is_running());
}

#[test]
fn test_empty_items_never_arm() {
    let clock = ManualClock::new();
    let (s, armed) = mount::<&str>(&clock, vec![], 1000);
    assert!(!armed);
    assert_eq!(clock.pending(), 0);
    assert_eq!(current(&s), None);
    assert!(s.borrow_mut().tick().is_none());
}

// ─────────────────────────────────────────────────────────────────────────────
// Single live timer
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_restart_same_interval_keeps_one_timer() {
    let clock = ManualClock::new();
    let (s, _) = mount(&clock, vec![1, 2, 3], 500);

    assert!(!start(&clock, &s, 500));
    assert_eq!(clock.pending(), 1);

    clock.advance(500);
    assert_eq!(current(&s), Some(2));
}

#[test]
fn test_interval_change_rearms_without_drift() {
    let clock = ManualClock::new();
    let (s, _) = mount(&clock, vec![1, 2, 3, 4], 1000);

    clock.advance(600);
    assert!(start(&clock, &s, 300));
    assert_eq!(clock.pending(), 1);

    // old 1000ms timer would have fired at t=1000; only the new one runs
    clock.advance(400);
    assert_eq!(current(&s), Some(2));
    clock.advance(200);
    assert_eq!(current(&s), Some(3));
}

// ─────────────────────────────────────────────────────────────────────────────
// Independence & teardown
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_independent_schedulers_do_not_lockstep() {
    let clock = ManualClock::new();
    let (words, _) = mount(&clock, vec!["Frontend", "Designer", "Creator", "Innovator"], 2500);
    let (slides, _) = mount(&clock, vec![0, 1, 2], 4000);

    clock.advance(5000);
    assert_eq!(current(&words), Some("Creator"));
    assert_eq!(current(&slides), Some(1));

    slides.borrow_mut().stop();
    clock.advance(5000);
    assert_eq!(current(&words), Some("Frontend"));
    assert_eq!(current(&slides), Some(1));
}

#[test]
fn test_stop_means_no_further_ticks() {
    let clock = ManualClock::new();
    let (s, _) = mount(&clock, vec!["A", "B", "C"], 100);
    clock.advance(100);

    assert!(s.borrow_mut().stop());
    assert_eq!(clock.pending(), 0);
    assert_eq!(clock.advance(1_000), 0);
    assert_eq!(current(&s), Some("B"));
}

#[test]
fn test_drop_tears_down_timer() {
    let clock = ManualClock::new();
    let (s, _) = mount(&clock, vec!["A", "B"], 100);
    drop(s);

    assert_eq!(clock.pending(), 0);
    assert_eq!(clock.advance(1_000), 0);
}

#[test]
fn test_replace_with_empty_stops_timer() {
    let clock = ManualClock::new();
    let (s, _) = mount(&clock, vec!["A", "B"], 100);

    s.borrow_mut().replace_items(vec![], 3);
    assert!(!s.borrow().is_running());
    assert_eq!(clock.pending(), 0);
}

#[test]
fn test_replace_items_restarts_window() {
    let clock = ManualClock::new();
    let (s, _) = mount(&clock, vec!["A", "B", "C"], 100);
    clock.advance(200);

    s.borrow_mut().replace_items(vec!["X", "Y", "Z", "W"], 2);
    assert_eq!(current(&s), Some("X"));
    clock.advance(200);
    assert_eq!(current(&s), Some("X"));
    clock.advance(100);
    assert_eq!(current(&s), Some("Y"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Viewport-gated cascade
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_activation_triggers_cascade_once_in_order() {
    let clock = ManualClock::new();
    let filled = Rc::new(RefCell::new(Vec::new()));
    let mut timers = TimerSet::new();
    let mut latch = ActivationLatch::new(Threshold::new(0.2).unwrap());
    let plan = StaggerPlan::new(3, 150);

    for ratio in [0.1, 0.4, 0.0, 0.8] {
        if latch.observe(ratio) {
            for step in plan.steps() {
                let filled = filled.clone();
                timers.push(clock.set_timeout(u64::from(step.delay_ms), move || {
                    filled.borrow_mut().push(step.index)
                }));
            }
        }
    }

    assert_eq!(timers.len(), 3);
    clock.advance(150);
    assert_eq!(*filled.borrow(), vec![0, 1]);
    clock.advance(1_000);
    assert_eq!(*filled.borrow(), vec![0, 1, 2]);
}

#[test]
fn test_cascade_cancelled_on_teardown() {
    let clock = ManualClock::new();
    let filled = Rc::new(RefCell::new(0));
    let mut timers = TimerSet::new();

    for step in StaggerPlan::new(5, 100).steps() {
        let filled = filled.clone();
        timers.push(clock.set_timeout(u64::from(step.delay_ms), move || {
            *filled.borrow_mut() += 1
        }));
    }

    clock.advance(150);
    drop(timers);
    clock.advance(1_000);
    assert_eq!(*filled.borrow(), 2);
    assert_eq!(clock.pending(), 0);
}
