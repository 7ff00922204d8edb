//! One-shot "has entered the viewport" latch and staggered cascades.
//!
//! The latch fires the first time an observed element's visible ratio reaches
//! the threshold and never again. If the element goes away first, the latch is
//! detached and will never fire.

use crate::error::CoreError;

/// Visible-area fraction in `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f64);

impl Threshold {
    pub fn new(threshold: f64) -> Result<Self, CoreError> {
        if threshold > 0.0 && threshold <= 1.0 {
            Ok(Self(threshold))
        } else {
            Err(CoreError::InvalidThreshold { threshold })
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatchState {
    /// Waiting for the first qualifying intersection
    Armed,
    Fired,
    /// Target removed before firing
    Detached,
}

#[derive(Debug, Clone)]
pub struct ActivationLatch {
    threshold: Threshold,
    state: LatchState,
}

impl ActivationLatch {
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            state: LatchState::Armed,
        }
    }

    /// Feed an intersection ratio. Returns true exactly once, on the first
    /// ratio at or above the threshold.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.state != LatchState::Armed || ratio < self.threshold.get() {
            return false;
        }
        self.state = LatchState::Fired;
        true
    }

    /// The observed element is gone. An armed latch becomes inert; a fired
    /// one keeps its result.
    pub fn detach(&mut self) -> bool {
        if self.state == LatchState::Armed {
            self.state = LatchState::Detached;
            return true;
        }
        false
    }

    pub fn has_entered(&self) -> bool {
        self.state == LatchState::Fired
    }

    /// Whether an observer still needs to be attached
    pub fn is_observing(&self) -> bool {
        self.state == LatchState::Armed
    }

    pub fn state(&self) -> LatchState {
        self.state
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }
}

/// One delayed step of a cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaggerStep {
    pub index: usize,
    pub delay_ms: u32,
}

/// Delays for running one step per item, `index * step_ms` after activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaggerPlan {
    count: usize,
    step_ms: u32,
}

impl StaggerPlan {
    pub fn new(count: usize, step_ms: u32) -> Self {
        Self { count, step_ms }
    }

    /// Steps in item order.
    pub fn steps(&self) -> impl Iterator<Item = StaggerStep> + '_ {
        (0..self.count).map(|index| StaggerStep {
            index,
            delay_ms: self.delay_for(index),
        })
    }

    /// Saturates instead of overflowing for very long lists.
    pub fn delay_for(&self, index: usize) -> u32 {
        u32::try_from(index)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.step_ms)
    }

    /// Delay of the last step
    pub fn total_ms(&self) -> u32 {
        self.count.checked_sub(1).map_or(0, |last| self.delay_for(last))
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latch(t: f64) -> ActivationLatch {
        ActivationLatch::new(Threshold::new(t).unwrap())
    }

    #[test]
    fn test_threshold_range() {
        assert!(Threshold::new(0.2).is_ok());
        assert!(Threshold::new(1.0).is_ok());
        assert!(Threshold::new(0.0).is_err());
        assert!(Threshold::new(-0.5).is_err());
        assert!(Threshold::new(1.01).is_err());
        assert!(Threshold::new(f64::NAN).is_err());
    }

    #[test]
    fn test_fires_once_across_enter_exit_enter() {
        let mut l = latch(0.2);
        let fired: Vec<bool> = [0.0, 0.5, 0.0, 0.9, 1.0]
            .iter()
            .map(|r| l.observe(*r))
            .collect();
        assert_eq!(fired, vec![false, true, false, false, false]);
        assert!(l.has_entered());
    }

    #[test]
    fn test_below_threshold_does_not_fire() {
        let mut l = latch(0.5);
        assert!(!l.observe(0.49));
        assert!(l.is_observing());
        assert!(l.observe(0.5));
    }

    #[test]
    fn test_detached_never_fires() {
        let mut l = latch(0.2);
        assert!(l.detach());
        assert!(!l.observe(1.0));
        assert_eq!(l.state(), LatchState::Detached);
        assert!(!l.has_entered());
    }

    #[test]
    fn test_detach_after_fire_keeps_result() {
        let mut l = latch(0.2);
        l.observe(0.3);
        assert!(!l.detach());
        assert!(l.has_entered());
    }

    #[test]
    fn test_stagger_steps_in_order() {
        let plan = StaggerPlan::new(4, 150);
        let delays: Vec<_> = plan.steps().map(|s| (s.index, s.delay_ms)).collect();
        assert_eq!(delays, vec![(0, 0), (1, 150), (2, 300), (3, 450)]);
        assert_eq!(plan.total_ms(), 450);
    }

    #[test]
    fn test_empty_stagger() {
        let plan = StaggerPlan::new(0, 150);
        assert!(plan.is_empty());
        assert_eq!(plan.steps().count(), 0);
        assert_eq!(plan.total_ms(), 0);
    }
}
