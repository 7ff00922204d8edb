//! Contact section: live owner clock, contact methods, quick topics, message draft.

use chrono::Utc;
use dioxus::prelude::*;
use folio_core::contact::{first_name, mailto, topic_mailto};
use folio_core::{ClockReading, OwnerClock};
use folio_types::formatting::read_time_minutes;
use folio_types::{ContactContent, ContactMethod, Timing};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use crate::components::UxAnnotate;
use crate::hooks::use_interval;

const DEFAULT_SUBJECT: &str = "Let's collaborate!";

/// Pause between highlighting a method card and following its link
const METHOD_OPEN_DELAY_MS: u32 = 300;

#[component]
pub fn Contact(owner_name: String, brand: String, contact: ContactContent, timing: Timing) -> Element {
    let clock = use_hook(|| match OwnerClock::new(contact.utc_offset_minutes) {
        Ok(clock) => Some(clock),
        Err(e) => {
            tracing::warn!(error = %e, "Owner clock disabled");
            None
        }
    });
    let mut reading = use_signal(move || clock.map(|c| ClockReading::at(&c, Utc::now())));
    use_interval(clock.map(|_| timing.clock_refresh_ms), move || {
        if let Some(clock) = clock {
            reading.set(Some(ClockReading::at(&clock, Utc::now())));
        }
    });

    let mut selected_method = use_signal(|| "email".to_string());
    let mut message = use_signal(|| contact.message_template.clone());

    let greeting_name = first_name(&owner_name).to_string();
    let email = contact.email.clone();
    let chars = message.read().chars().count();
    let read_minutes = read_time_minutes(chars);
    let calendar = contact
        .methods
        .iter()
        .find(|m| m.id == "calendar")
        .map(|m| m.action.clone());

    rsx! {
        section { id: "contact", class: "contact",
            div { class: "section-header",
                UxAnnotate {
                    law: "Emotional Design",
                    insight: "Warm, inviting language encourages engagement.",
                    position: "top",
                    h2 { class: "section-title", "Let's Connect" }
                }
                div { class: "presence",
                    span { class: "presence-item", span { class: "status-dot" } "Online now" }
                    if let Some(reading) = reading() {
                        span { class: "presence-divider" }
                        span { class: "presence-item", "{contact.timezone_label} {reading.time}" }
                        span { class: "presence-divider" }
                        span { class: "presence-item", "{reading.response}" }
                    }
                }
            }

            div { class: "method-grid",
                for method in contact.methods.iter() {
                    MethodCard {
                        key: "{method.id}",
                        method: method.clone(),
                        selected: *selected_method.read() == method.id,
                        on_select: move |m: ContactMethod| {
                            selected_method.set(m.id.clone());
                            spawn_local(async move {
                                TimeoutFuture::new(METHOD_OPEN_DELAY_MS).await;
                                open_link(&m.action, m.opens_new_tab());
                            });
                        },
                    }
                }
            }

            div { class: "topics",
                UxAnnotate {
                    law: "Hick's Law",
                    insight: "Categorized options reduce decision time.",
                    position: "top",
                    h3 { "What would you like to discuss?" }
                }
                div { class: "chip-row chip-row--center",
                    for topic in contact.topics.iter() {
                        button {
                            key: "{topic.label}",
                            class: if topic.popular { "topic topic--popular" } else { "topic" },
                            onclick: {
                                let url = topic_mailto(&email, &greeting_name, &topic.label);
                                move |_| open_link(&url, false)
                            },
                            span { "{topic.emoji}" }
                            span { class: "topic-label", "{topic.label}" }
                            if topic.popular {
                                span { class: "topic-badge" }
                            }
                        }
                    }
                }
            }

            UxAnnotate {
                law: "Progressive Disclosure",
                insight: "Pre-filled template reduces friction in communication.",
                position: "top",
                class: "composer-wrap",
                div { class: "composer",
                    div { class: "composer-head",
                        div { class: "composer-avatar", "{brand}" }
                        div {
                            p { class: "composer-title", "Quick Email Template" }
                            p { class: "composer-sub", "Ready to send!" }
                        }
                    }
                    textarea {
                        class: "composer-input",
                        placeholder: "Hi {greeting_name}! I'd love to discuss...",
                        value: "{message}",
                        oninput: move |e| message.set(e.value()),
                    }
                    div { class: "composer-foot",
                        div { class: "composer-stats",
                            span { "Characters: {chars}" }
                            span { class: "presence-divider" }
                            span { "Estimated read time: {read_minutes} min" }
                        }
                        button {
                            class: "btn btn-gradient",
                            onclick: {
                                let email = email.clone();
                                move |_| open_link(&mailto(&email, DEFAULT_SUBJECT, Some(&message.read())), false)
                            },
                            "Send Email 🚀"
                        }
                    }
                }
            }

            div { class: "contact-cta",
                UxAnnotate {
                    law: "Reciprocity Principle",
                    insight: "Personal invitation creates connection and encourages response.",
                    position: "top",
                    p { class: "section-lead",
                        "Whether you're looking to hire, collaborate, or just want to chat about frontend development and UX design, I'm always excited to connect with fellow creators and innovators."
                    }
                }
                div { class: "cta-row",
                    button {
                        class: "btn btn-gradient btn-lg",
                        onclick: {
                            let email = email.clone();
                            move |_| open_link(&mailto(&email, DEFAULT_SUBJECT, None), false)
                        },
                        "Start a Conversation"
                    }
                    if let Some(url) = calendar {
                        button {
                            class: "btn btn-outline btn-lg",
                            onclick: move |_| open_link(&url, true),
                            "Schedule a Call"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MethodCard(method: ContactMethod, selected: bool, on_select: EventHandler<ContactMethod>) -> Element {
    let card = rsx! {
        div { class: if selected { "method-card method-card--selected" } else { "method-card" },
            div { class: "method-icon", "{method.icon}" }
            h3 { "{method.label}" }
            p { class: "method-primary", "{method.primary}" }
            p { class: "method-secondary", "{method.secondary}" }
            if selected {
                div { class: "method-ripple" }
            }
        }
    };
    let clicked = method.clone();

    rsx! {
        div {
            class: "method",
            onclick: move |_| on_select.call(clicked.clone()),
            if method.id == "email" {
                UxAnnotate {
                    law: "Fitts's Law",
                    insight: "Large touch targets reduce selection errors.",
                    position: "top",
                    class: "block",
                    {card}
                }
            } else {
                {card}
            }
        }
    }
}

/// Follow a link: `mailto:` in place, everything else in a new tab.
fn open_link(url: &str, new_tab: bool) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let result = if new_tab {
        window
            .open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
            .map(|_| ())
    } else {
        window.location().set_href(url)
    };
    if let Err(e) = result {
        tracing::warn!(error = ?e, url, "Failed to open link");
    }
}
