//! Portfolio single-page app (Dioxus web).

mod app;
mod components;
mod hooks;
mod sections;

use tracing::Level;

fn main() {
    let level = if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO };
    if let Err(e) = dioxus_logger::init(level) {
        web_sys::console::warn_1(&format!("Logger init failed: {e}").into());
    }
    dioxus::launch(app::App);
}
