//! Project detail modal.

use dioxus::prelude::*;
use folio_types::Project;

use crate::components::annotate::UxAnnotate;

#[component]
pub fn ProjectModal(project: Project, on_close: EventHandler<()>) -> Element {
    let accent = project.accent.css();
    let status = project.status;

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-dialog",
                role: "dialog",
                aria_modal: "true",
                onclick: move |e| e.stop_propagation(),

                UxAnnotate {
                    law: "Hick's Law",
                    insight: "Modal focuses attention on single project, reducing cognitive load",
                    position: "top",
                    class: "modal-content",

                    div { class: "modal-header",
                        div { class: "modal-title",
                            div { class: "project-icon project-icon--lg", style: "background: {accent};",
                                "{project.icon}"
                            }
                            div {
                                h2 { "{project.title}" }
                                span { class: "{status.badge_class()}", "{status.label()}" }
                            }
                        }
                        button {
                            class: "modal-close",
                            aria_label: "Close project details",
                            onclick: move |_| on_close.call(()),
                            i { class: "fa-solid fa-xmark" }
                        }
                    }

                    div { class: "modal-body",
                        div {
                            h3 { "Overview" }
                            p { class: "modal-text", "{project.long_description}" }

                            h3 { "Key Features" }
                            ul { class: "feature-list",
                                for feature in project.features.iter() {
                                    li { key: "{feature}", span { class: "feature-dot" } "{feature}" }
                                }
                            }

                            div { class: "modal-links",
                                if let Some(url) = &project.live_url {
                                    a { class: "btn btn-primary", href: "{url}", target: "_blank", rel: "noopener noreferrer",
                                        i { class: "fa-solid fa-arrow-up-right-from-square" }
                                        " Live Demo"
                                    }
                                }
                                if let Some(url) = &project.github_url {
                                    a { class: "btn btn-outline", href: "{url}", target: "_blank", rel: "noopener noreferrer",
                                        i { class: "fa-brands fa-github" }
                                        " View Code"
                                    }
                                }
                            }
                        }

                        div {
                            h3 { "Tech Stack" }
                            div { class: "tag-row",
                                for tech in project.tech_stack.iter() {
                                    span { key: "{tech}", class: "tag tag--pill", "{tech}" }
                                }
                            }

                            if !project.impact.is_empty() {
                                h3 { "Impact" }
                                p { class: "modal-text", "{project.impact}" }
                            }

                            div { class: "detail-table",
                                h4 { "Project Details" }
                                DetailRow { label: "Year", value: project.year.clone() }
                                DetailRow { label: "Category", value: project.category.clone() }
                                DetailRow { label: "Status", value: status.label().to_string() }
                                DetailRow { label: "Technologies", value: project.tech_stack.len().to_string() }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DetailRow(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "detail-row",
            span { class: "detail-label", "{label}:" }
            span { class: "detail-value", "{value}" }
        }
    }
}
