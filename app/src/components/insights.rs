//! Page-wide "show UX insights" switch.
//!
//! Provides a global insights manager accessible via context. The navbar
//! toggle is the only writer; every `UxAnnotate` reads it.

use dioxus::prelude::*;
use folio_core::VisibilityStore;

/// Global handle on the insights flag.
///
/// Access via `use_insights()` from any component.
#[derive(Clone, Copy)]
pub struct InsightsManager {
    store: Signal<VisibilityStore>,
}

impl InsightsManager {
    /// Create a manager with insights hidden.
    pub fn new() -> Self {
        let mut store = VisibilityStore::new();
        store.subscribe(|visible| tracing::info!(visible, "UX insights toggled"));
        Self {
            store: Signal::new(store),
        }
    }

    /// Current flag. Subscribes the calling component to changes.
    pub fn is_visible(&self) -> bool {
        self.store.read().is_visible()
    }

    /// Flip the flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.store.write().toggle()
    }
}

impl Default for InsightsManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize the insights provider at app root.
///
/// Call this once in the App component before any annotated children.
pub fn use_insights_provider() -> InsightsManager {
    use_context_provider(InsightsManager::new)
}

/// Get the insights manager from context.
pub fn use_insights() -> InsightsManager {
    use_context::<InsightsManager>()
}

/// Navbar switch bound to the insights flag.
#[component]
pub fn InsightsToggle() -> Element {
    let mut insights = use_insights();
    let on = insights.is_visible();

    rsx! {
        button {
            class: if on { "insights-toggle insights-toggle--on" } else { "insights-toggle" },
            role: "switch",
            aria_checked: "{on}",
            aria_label: "Toggle UX Insights",
            onclick: move |_| {
                insights.toggle();
            },
            span { class: "insights-toggle-knob",
                if on { "🧠" } else { "💡" }
            }
        }
    }
}
