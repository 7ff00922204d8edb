//! Page footer.

use chrono::{Datelike, Utc};
use dioxus::prelude::*;
use folio_types::SocialLink;
use folio_types::formatting::section_anchor;

use crate::components::UxAnnotate;
use crate::hooks::scroll_to_top;

const QUICK_LINKS: [&str; 3] = ["About", "Work", "Contact"];

#[component]
pub fn Footer(name: String, email: String, socials: Vec<SocialLink>, open_to_work: bool) -> Element {
    let year = Utc::now().year();

    rsx! {
        footer { class: "footer",
            div { class: "footer-rule" }
            div { class: "footer-grid",
                div { class: "footer-brand",
                    UxAnnotate {
                        law: "Brand Consistency",
                        insight: "Maintaining visual identity across all touchpoints",
                        h3 { class: "gradient-heading", "{name}" }
                    }
                    p { class: "footer-text",
                        "Frontend Developer crafting intuitive digital experiences with modern web technologies and UX principles."
                    }
                    p { class: "footer-made",
                        "Made with "
                        i { class: "fa-solid fa-heart" }
                        " and Rust"
                    }
                }

                div {
                    h4 { "Quick Links" }
                    UxAnnotate {
                        law: "Information Architecture",
                        insight: "Organized navigation aids user wayfinding",
                        ul { class: "footer-links",
                            for label in QUICK_LINKS {
                                li { key: "{label}",
                                    a { href: section_anchor(label), "{label}" }
                                }
                            }
                        }
                    }
                }

                div {
                    h4 { "Connect" }
                    UxAnnotate {
                        law: "Fitts's Law",
                        insight: "Larger touch targets with hover states improve usability",
                        div { class: "social-row",
                            for social in socials.iter() {
                                a {
                                    key: "{social.name}",
                                    class: "social-link",
                                    href: "{social.href}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    aria_label: "Connect on {social.name}",
                                    i { class: "{social.icon}" }
                                }
                            }
                        }
                    }
                    div { class: "footer-text",
                        if open_to_work {
                            p { "Open to new opportunities" }
                        }
                        p { class: "accent-text", "{email}" }
                    }
                }
            }

            div { class: "footer-bottom",
                UxAnnotate {
                    law: "Legal Compliance",
                    insight: "Copyright notice provides legal protection and professionalism",
                    p { class: "footer-copy", "© {year} {name}. All rights reserved." }
                }
                if open_to_work {
                    UxAnnotate {
                        law: "Status Visibility",
                        insight: "Clear availability status helps potential employers",
                        span { class: "chip chip--green", span { class: "status-dot" } "Available for work" }
                    }
                }
            }

            div { class: "footer-top",
                UxAnnotate {
                    law: "Progressive Enhancement",
                    insight: "Smooth scroll improves user experience over page jumps",
                    position: "top",
                    button {
                        class: "back-to-top",
                        onclick: move |_| scroll_to_top(),
                        i { class: "fa-solid fa-arrow-up" }
                        " Back to top"
                    }
                }
            }
        }
    }
}
