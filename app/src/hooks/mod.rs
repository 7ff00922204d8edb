//! Hooks binding `folio-core` timers and latches to component lifetimes.

pub mod rotation;
pub mod scroll;
pub mod timers;
pub mod viewport;

pub use rotation::{use_carousel, use_rotation};
pub use scroll::{scroll_to_top, use_scrolled_past};
pub use timers::{use_delayed_flag, use_interval};
pub use viewport::{use_stagger, use_viewport_activation};
