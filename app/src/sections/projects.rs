//! Projects section: spotlight carousel, category filter, grid/list, detail modal.

use dioxus::prelude::*;
use folio_core::{CategoryFilter, category_keys, filter_items};
use folio_types::formatting::format_overflow;
use folio_types::{Project, Timing};

use crate::components::{ProjectModal, UxAnnotate};
use crate::hooks::{use_carousel, use_viewport_activation};

// ─────────────────────────────────────────────────────────────────────────────
// View Mode
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Grid => "Grid",
            ViewMode::List => "List",
        }
    }

    pub fn all() -> &'static [ViewMode] {
        &[ViewMode::Grid, ViewMode::List]
    }

    /// Tags shown on a card before collapsing into a `+N` badge
    fn visible_tags(&self) -> usize {
        match self {
            ViewMode::Grid => 3,
            ViewMode::List => 4,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Section
// ─────────────────────────────────────────────────────────────────────────────

#[component]
pub fn Projects(projects: Vec<Project>, timing: Timing) -> Element {
    let activation = use_viewport_activation(timing.viewport_threshold);
    let mut active_filter = use_signal(CategoryFilter::default);
    let mut view_mode = use_signal(ViewMode::default);
    let mut playing = use_signal(|| true);
    let mut selected = use_signal(|| None::<Project>);

    let categories = category_keys(&projects);
    let filter = active_filter.read().clone();
    let visible: Vec<Project> = filter_items(&projects, &filter).into_iter().cloned().collect();

    let interval = playing().then_some(timing.carousel_rotation_ms);
    let mut spotlight = use_carousel(visible.clone(), timing.carousel_window, interval);
    let current_slide = spotlight.index();
    let slide_count = spotlight.window();

    let mode = view_mode();
    let reveal = if activation.has_entered() { "reveal reveal--in" } else { "reveal" };
    let layout_class = match mode {
        ViewMode::Grid => "project-grid",
        ViewMode::List => "project-list",
    };

    rsx! {
        section {
            id: "work",
            class: "projects",
            onmounted: move |evt| activation.attach(evt),

            div { class: "section-header {reveal}",
                UxAnnotate {
                    law: "Von Restorff Effect",
                    insight: "Large, contrasting headers help important content stand out.",
                    position: "top",
                    h2 { class: "section-title", "Featured Projects" }
                }
                p { class: "section-lead",
                    "A showcase of projects that combine technical excellence with thoughtful user experience design"
                }
            }

            // Spotlight carousel
            div { class: "{reveal} reveal--d200",
                UxAnnotate {
                    law: "Progressive Disclosure",
                    insight: "Hero section highlights key project, detailed view available on demand.",
                    position: "top",
                    class: "block",
                    div { class: "spotlight",
                        div { class: "spotlight-head",
                            h3 { "Spotlight" }
                            div { class: "spotlight-controls",
                                button {
                                    class: "icon-btn",
                                    aria_label: if playing() { "Pause spotlight" } else { "Play spotlight" },
                                    onclick: move |_| playing.toggle(),
                                    if playing() {
                                        i { class: "fa-solid fa-pause" }
                                    } else {
                                        i { class: "fa-solid fa-play" }
                                    }
                                }
                                div { class: "dots",
                                    for i in 0..slide_count {
                                        button {
                                            key: "{i}",
                                            class: if i == current_slide { "dot dot--active" } else { "dot" },
                                            aria_label: "Show project {i + 1}",
                                            onclick: move |_| spotlight.select(i),
                                        }
                                    }
                                }
                            }
                        }
                        if let Some(project) = spotlight.current() {
                            Spotlight {
                                project: project,
                                on_open: move |p| selected.set(Some(p)),
                            }
                        }
                    }
                }
            }

            // Filter chips + view toggle
            div { class: "project-controls {reveal} reveal--d400",
                UxAnnotate {
                    law: "Hick's Law",
                    insight: "A handful of categories keeps the choice quick.",
                    div { class: "chip-row",
                        for key in categories.iter() {
                            button {
                                key: "{key}",
                                class: if filter.key() == key.as_str() { "filter-chip filter-chip--active" } else { "filter-chip" },
                                onclick: {
                                    let key = key.clone();
                                    move |_| {
                                        tracing::debug!(category = %key, "Project filter changed");
                                        active_filter.set(CategoryFilter::from_key(&key));
                                    }
                                },
                                "{key}"
                            }
                        }
                    }
                }
                div { class: "view-toggle",
                    span { class: "view-toggle-label", "View:" }
                    div { class: "segmented",
                        for m in ViewMode::all() {
                            button {
                                key: "{m.label()}",
                                class: if mode == *m { "segment segment--active" } else { "segment" },
                                onclick: {
                                    let m = *m;
                                    move |_| view_mode.set(m)
                                },
                                "{m.label()}"
                            }
                        }
                    }
                }
            }

            // Cards
            div { class: "{reveal} reveal--d600",
                if visible.is_empty() {
                    p { class: "empty-hint", "No projects in this category yet." }
                }
                div { class: "{layout_class}",
                    for project in visible.iter() {
                        UxAnnotate {
                            key: "{project.id}",
                            law: "Fitts's Law",
                            insight: "Larger click targets and hover states improve interaction efficiency.",
                            position: "top",
                            class: "block",
                            ProjectCard {
                                project: project.clone(),
                                mode: mode,
                                on_open: move |p| selected.set(Some(p)),
                            }
                        }
                    }
                }
            }

            if let Some(project) = selected() {
                ProjectModal {
                    project: project,
                    on_close: move |_| selected.set(None),
                }
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Cards
// ─────────────────────────────────────────────────────────────────────────────

#[component]
fn Spotlight(project: Project, on_open: EventHandler<Project>) -> Element {
    let accent = project.accent.css();
    let status = project.status;
    let open = project.clone();

    rsx! {
        div { class: "spotlight-body",
            div { class: "spotlight-text",
                div { class: "spotlight-title",
                    div { class: "project-icon", style: "background: {accent};", "{project.icon}" }
                    div {
                        h4 { "{project.title}" }
                        span { class: "{status.badge_class()}", "{status.label()}" }
                    }
                }
                p { class: "spotlight-description", "{project.long_description}" }
                div { class: "tag-row",
                    for tag in project.tags.iter() {
                        span { key: "{tag}", class: "tag tag--pill", "{tag}" }
                    }
                }
                div { class: "spotlight-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_open.call(open.clone()),
                        i { class: "fa-solid fa-eye" }
                        " View Details"
                    }
                    if let Some(url) = &project.live_url {
                        a { class: "btn btn-outline", href: "{url}", target: "_blank", rel: "noopener noreferrer",
                            i { class: "fa-solid fa-arrow-up-right-from-square" }
                            " Live Demo"
                        }
                    }
                }
            }
            div { class: "spotlight-art",
                div { class: "spotlight-tile", style: "background: {accent};", "{project.icon}" }
                div { class: "spotlight-year", "{project.year}" }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project, mode: ViewMode, on_open: EventHandler<Project>) -> Element {
    let accent = project.accent.css();
    let status = project.status;
    let shown = mode.visible_tags();
    let overflow = format_overflow(project.tags.len(), shown);
    let open = project.clone();
    let card_class = match mode {
        ViewMode::Grid => "project-card",
        ViewMode::List => "project-card project-card--row",
    };

    rsx! {
        div {
            class: "{card_class}",
            onclick: move |_| on_open.call(open.clone()),

            div { class: "project-card-head",
                div { class: "project-icon", style: "background: {accent};", "{project.icon}" }
                span { class: "{status.badge_class()}", "{status.label()}" }
            }
            div { class: "project-card-body",
                h3 { class: "project-card-title", "{project.title}" }
                p { class: "project-card-description", "{project.description}" }
                div { class: "tag-row",
                    for tag in project.tags.iter().take(shown) {
                        span { key: "{tag}", class: "tag", "{tag}" }
                    }
                    if let Some(more) = overflow {
                        span { class: "tag tag--more", "{more}" }
                    }
                }
            }
            div { class: "project-card-links",
                if let Some(url) = &project.live_url {
                    a {
                        class: "icon-btn",
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        aria_label: "Live demo",
                        onclick: move |e| e.stop_propagation(),
                        i { class: "fa-solid fa-arrow-up-right-from-square" }
                    }
                }
                if let Some(url) = &project.github_url {
                    a {
                        class: "icon-btn",
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        aria_label: "Source code",
                        onclick: move |e| e.stop_propagation(),
                        i { class: "fa-brands fa-github" }
                    }
                }
                i { class: "fa-solid fa-chevron-right project-card-chevron" }
            }
        }
    }
}
