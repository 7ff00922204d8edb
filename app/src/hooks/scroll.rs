//! Window scroll tracking.

use dioxus::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

type ScrollListener = Closure<dyn FnMut(web_sys::Event)>;

/// True while the page is scrolled more than `offset_px` from the top.
///
/// The window listener is removed when the component unmounts.
pub fn use_scrolled_past(offset_px: f64) -> Signal<bool> {
    let mut scrolled = use_signal(|| false);
    let mut listener = use_signal(|| None::<ScrollListener>);

    use_effect(move || {
        let Some(window) = web_sys::window() else {
            return;
        };
        if listener.peek().is_some() {
            return;
        }

        let closure = ScrollListener::new(move |_event: web_sys::Event| {
            let y = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);
            let past = y > offset_px;
            if *scrolled.peek() != past {
                let _ = scrolled.try_write().map(|mut w| *w = past);
            }
        });
        if let Err(e) =
            window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
        {
            tracing::warn!(error = ?e, "Failed to attach scroll listener");
            return;
        }
        listener.set(Some(closure));
    });

    // Cleanup on component unmount
    use_drop(move || {
        let Ok(mut slot) = listener.try_write() else {
            return;
        };
        if let (Some(closure), Some(window)) = (slot.take(), web_sys::window()) {
            let _ = window
                .remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        }
    });

    scrolled
}

/// Smooth-scroll the window back to the top.
pub fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = web_sys::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
