//! About section: bento grid with bio, stats, timeline, skills and tech marquee.

use dioxus::prelude::*;
use folio_types::formatting::percent_width;
use folio_types::{ExperienceEntry, Profile, Skill, TechItem, Timing};

use crate::components::UxAnnotate;
use crate::hooks::{use_stagger, use_viewport_activation};
use crate::sections::hero::Avatar;

#[component]
pub fn About(
    profile: Profile,
    skills: Vec<Skill>,
    tech_stack: Vec<TechItem>,
    experience: Vec<ExperienceEntry>,
    timing: Timing,
) -> Element {
    let activation = use_viewport_activation(timing.viewport_threshold);
    let entered = activation.has_entered();
    let reveal = if entered { "reveal reveal--in" } else { "reveal" };

    rsx! {
        section {
            id: "about",
            class: "about",
            onmounted: move |evt| activation.attach(evt),

            div { class: "section-header",
                UxAnnotate {
                    law: "Visual Hierarchy",
                    insight: "Clear headings establish context immediately.",
                    h2 { class: "section-title {reveal}", "Beyond the Code" }
                }
                p { class: "section-lead",
                    "A glimpse into my journey, experience, and the tools I use to build digital products."
                }
            }

            div { class: "bento {reveal}",
                UxAnnotate {
                    law: "Face-ism Ratio",
                    insight: "Personal photos build trust and human connection.",
                    class: "bento-wide bento-tall",
                    BioCard { profile: profile.clone() }
                }

                for stat in profile.stats.iter() {
                    UxAnnotate {
                        key: "{stat.label}",
                        law: "Social Proof",
                        insight: "Quantifiable metrics increase credibility.",
                        div { class: "bento-card bento-card--stat",
                            span { class: "stat-value", "{stat.value}" }
                            span { class: "stat-label", "{stat.label}" }
                        }
                    }
                }

                UxAnnotate {
                    law: "Authority Bias",
                    insight: "Professional experience establishes expertise.",
                    class: "bento-tall",
                    Timeline { entries: experience }
                }

                UxAnnotate {
                    law: "Goal-Gradient Effect",
                    insight: "Progress bars that fill in sequence pull the eye along the list.",
                    class: "bento-wide",
                    SkillBars { skills: skills, activated: entered, step_ms: timing.skill_stagger_step_ms }
                }

                UxAnnotate {
                    law: "Hick's Law",
                    insight: "Continuous loop reduces interaction cost (no clicking required).",
                    class: "bento-wide",
                    TechMarquee { items: tech_stack }
                }
            }
        }
    }
}

#[component]
fn BioCard(profile: Profile) -> Element {
    rsx! {
        div { class: "bento-card bento-card--bio",
            div { class: "bio-head",
                Avatar { name: profile.name.clone(), brand: profile.brand.clone(), src: profile.avatar.clone() }
                div {
                    h3 { "{profile.name}" }
                    p { class: "accent-text", "{profile.title}" }
                }
            }
            p { class: "bio-text", "{profile.bio}" }
            div { class: "chip-row",
                if profile.open_to_work {
                    span { class: "chip chip--green", span { class: "status-dot" } "Open to Work" }
                }
                span { class: "chip chip--blue", "{profile.location}" }
            }
        }
    }
}

#[component]
fn Timeline(entries: Vec<ExperienceEntry>) -> Element {
    rsx! {
        div { class: "bento-card",
            div { class: "card-head",
                span { class: "card-head-icon", "💼" }
                h3 { "Experience" }
            }
            div { class: "timeline",
                for entry in entries.iter() {
                    div { key: "{entry.title}-{entry.period}", class: "timeline-item",
                        div { class: if entry.current { "timeline-dot timeline-dot--current" } else { "timeline-dot" } }
                        h4 { "{entry.title}" }
                        p { class: "timeline-meta", "{entry.organization} • {entry.period}" }
                        if let Some(summary) = &entry.summary {
                            p { class: "timeline-summary", "{summary}" }
                        }
                        div { class: "tag-row",
                            for tag in entry.tags.iter() {
                                span { key: "{tag}", class: "tag tag--caps", "{tag}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Bars start empty and fill one after another once the section is in view.
#[component]
fn SkillBars(skills: Vec<Skill>, activated: bool, step_ms: u32) -> Element {
    let filled = use_stagger(activated, skills.len(), step_ms);
    let filled = filled.read();

    rsx! {
        div { class: "bento-card",
            div { class: "card-head",
                span { class: "card-head-icon", "📈" }
                h3 { "Skills" }
            }
            div { class: "skill-list",
                for (i, skill) in skills.iter().enumerate() {
                    div { key: "{skill.name}", class: "skill",
                        div { class: "skill-label",
                            span { "{skill.name}" }
                            span { class: "skill-level", "{skill.level}%" }
                        }
                        div { class: "skill-track",
                            div {
                                class: "skill-fill",
                                style: percent_width(if filled.get(i).copied().unwrap_or(false) { skill.level } else { 0 }),
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Tech icons scrolling forever; the list is doubled so the loop is seamless.
#[component]
fn TechMarquee(items: Vec<TechItem>) -> Element {
    rsx! {
        div { class: "bento-card marquee-card",
            div { class: "card-head card-head--split",
                h3 { class: "eyebrow", "My Arsenal" }
                span { class: "chip chip--blue chip--sm", "Infinite Scroll" }
            }
            div { class: "marquee",
                div { class: "marquee-fade marquee-fade--left" }
                div { class: "marquee-fade marquee-fade--right" }
                div { class: "marquee-track",
                    for (i, tech) in items.iter().chain(items.iter()).enumerate() {
                        div { key: "{tech.name}-{i}", class: "marquee-item",
                            div { class: "marquee-icon", "{tech.icon}" }
                            span { class: "marquee-label", "{tech.name}" }
                        }
                    }
                }
            }
        }
    }
}
