//! Landing section: name, rotating headline word, experience cards, CTAs.

use dioxus::prelude::*;
use folio_types::{HeroContent, Profile, Timing};

use crate::components::UxAnnotate;
use crate::hooks::{use_delayed_flag, use_rotation};

#[component]
pub fn Hero(profile: Profile, hero: HeroContent, activities: Vec<String>, timing: Timing) -> Element {
    let loaded = use_delayed_flag(timing.entrance_delay_ms);
    let word = use_rotation(hero.words.clone(), timing.headline_rotation_ms);
    let activity = use_rotation(activities, timing.activity_rotation_ms);

    let enter = if loaded() { "enter enter--done" } else { "enter" };

    rsx! {
        section { id: "home", class: "hero",
            // Background layer sits behind the content; hovering content blocks it
            div { class: "hero-backdrop",
                UxAnnotate {
                    law: "Aesthetic-Usability Effect",
                    insight: "Generous whitespace reduces cognitive load and is perceived as more 'premium'.",
                    variant: "ghost",
                    position: "bottom",
                    class: "fill",
                    div { class: "hero-orbs",
                        div { class: "orb orb--blue" }
                        div { class: "orb orb--pink" }
                        div { class: "dot-grid" }
                    }
                }
            }

            div { class: "hero-content",
                div { class: "{enter} enter--rise",
                    UxAnnotate {
                        law: "Halo Effect",
                        insight: "Professional visuals create a positive bias towards skills.",
                        position: "left",
                        Avatar { name: profile.name.clone(), brand: profile.brand.clone(), src: profile.avatar.clone() }
                    }
                }

                div { class: "{enter} enter--rise enter--d300",
                    UxAnnotate {
                        law: "Visual Hierarchy",
                        insight: "Large typography guides the eye first.",
                        position: "right",
                        h1 { class: "hero-name", "{profile.name}" }
                    }
                    p { class: "hero-word",
                        if let Some(word) = word {
                            span { class: "gradient-text", "{word}" }
                        }
                        span { class: "cursor-blink", "_" }
                    }
                    if let Some(activity) = activity {
                        p { class: "hero-activity",
                            span { class: "status-dot" }
                            "Currently: {activity}"
                        }
                    }
                    p { class: "hero-tagline", "{profile.tagline}" }
                }

                div { class: "{enter} enter--rise enter--d500",
                    div { class: "hero-cards",
                        for card in hero.cards.iter() {
                            div { key: "{card.title}", class: "hero-card",
                                div { class: "hero-card-icon", "{card.icon}" }
                                h3 { "{card.title}" }
                                p { "{card.description}" }
                            }
                        }
                    }
                }

                div { class: "{enter} enter--rise enter--d900",
                    div { class: "hero-ctas",
                        UxAnnotate {
                            law: "Fitts's Law",
                            insight: "Large target area minimizes effort.",
                            position: "top",
                            a { class: "btn btn-primary btn-lg", href: "#work", "Explore My Work" }
                        }
                        UxAnnotate {
                            law: "Progressive Disclosure",
                            insight: "Secondary options available if needed.",
                            a { class: "btn btn-outline btn-lg", href: "#contact", "Let's Connect" }
                        }
                    }
                }
            }
        }
    }
}

/// Profile photo, falling back to the brand initials when there is none.
#[component]
pub fn Avatar(name: String, brand: String, src: Option<String>) -> Element {
    rsx! {
        div { class: "avatar",
            div { class: "avatar-inner",
                match src {
                    Some(src) => rsx! { img { src: "{src}", alt: "{name}" } },
                    None => rsx! { span { class: "avatar-initials", "{brand}" } },
                }
            }
        }
    }
}
