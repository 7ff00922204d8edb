//! Framework-free behaviour behind the portfolio page.
//!
//! Nothing in here knows about Dioxus or the DOM. The UI crate binds these
//! types to signals, `gloo-timers` tasks and `IntersectionObserver`.
//!
//! - [`visibility`]: the shared "show UX insights" flag
//! - [`annotation`] / [`tooltip`]: what an annotated element renders
//! - [`schedule`] / [`rotation`]: single-timer slots and rotating rings
//! - [`viewport`]: one-shot activation latch and staggered cascades
//! - [`filter`]: category filtering for the project grid
//! - [`content`]: loading and validating the embedded page content

pub mod annotation;
pub mod availability;
pub mod contact;
pub mod content;
pub mod error;
pub mod filter;
pub mod rotation;
pub mod schedule;
pub mod tooltip;
pub mod viewport;
pub mod visibility;

#[cfg(test)]
mod manual_clock;
#[cfg(test)]
mod rotation_tests;

pub use annotation::{AnnotationRecord, OverlayPlan, Position, Variant};
pub use availability::{ClockReading, OwnerClock, ResponseWindow};
pub use content::load_site_content;
pub use error::{ContentError, CoreError};
pub use filter::{ALL_CATEGORY, Categorized, CategoryFilter, category_keys, filter_items};
pub use rotation::{Ring, RotationScheduler};
pub use schedule::{IntervalMs, IntervalSlot, TimerHandle, TimerSet};
pub use tooltip::{ArrowDirection, TooltipPlan};
pub use viewport::{ActivationLatch, StaggerPlan, StaggerStep, Threshold};
pub use visibility::{SubscriptionId, VisibilityStore};
