//! Fixed top navigation bar.

use dioxus::prelude::*;
use folio_types::formatting::section_anchor;

use crate::components::annotate::UxAnnotate;
use crate::components::insights::InsightsToggle;
use crate::hooks::{use_delayed_flag, use_scrolled_past};

/// Scroll distance after which the bar turns translucent
const SCROLL_OFFSET_PX: f64 = 20.0;

const NAV_LINKS: [&str; 3] = ["Work", "About", "Contact"];

#[component]
pub fn Navbar(brand: String, resume_url: Option<String>, entrance_delay_ms: u32) -> Element {
    let scrolled = use_scrolled_past(SCROLL_OFFSET_PX);
    let loaded = use_delayed_flag(entrance_delay_ms);

    let nav_class = if scrolled() { "navbar navbar--scrolled" } else { "navbar" };
    let enter = if loaded() { "enter enter--done" } else { "enter" };
    let resume = resume_url.unwrap_or_else(|| "#resume".to_string());

    rsx! {
        nav { class: "{nav_class}",
            div { class: "navbar-inner",
                div { class: "{enter} enter--from-left",
                    UxAnnotate {
                        law: "Recognition over Recall",
                        insight: "Brand name always visible for easy navigation",
                        position: "right",
                        a { class: "navbar-brand", href: "#home", "{brand}" }
                    }
                }

                div { class: "{enter} enter--from-top navbar-links",
                    UxAnnotate {
                        law: "Law of Proximity",
                        insight: "Grouped elements are perceived as related.",
                        position: "bottom",
                        div { class: "navbar-link-group",
                            for item in NAV_LINKS {
                                a {
                                    key: "{item}",
                                    class: "navbar-link",
                                    href: section_anchor(item),
                                    "{item}"
                                }
                            }
                        }
                    }
                }

                div { class: "{enter} enter--from-right navbar-actions",
                    UxAnnotate {
                        law: "Affordance",
                        insight: "Toggle switch implies clickability and current state.",
                        position: "bottom",
                        InsightsToggle {}
                    }
                    UxAnnotate {
                        law: "Von Restorff Effect",
                        insight: "High contrast CTA stands out from navigation links.",
                        position: "left",
                        a { class: "btn btn-primary navbar-resume", href: "{resume}", "Resume" }
                    }
                }
            }
        }
    }
}
