//! Tooltip bubble: law name, insight, and an arrow pointing at the target.

use dioxus::prelude::*;
use folio_core::TooltipPlan;

#[component]
pub fn TooltipBubble(plan: TooltipPlan) -> Element {
    rsx! {
        div { class: "ux-tooltip",
            div { class: "ux-tooltip-body",
                div { class: "ux-tooltip-sheen" }
                div { class: "ux-tooltip-title",
                    span { class: "ux-tooltip-dot" }
                    h4 { "{plan.law}" }
                }
                if plan.has_body() {
                    p { class: "ux-tooltip-insight", "{plan.insight}" }
                }
                div { class: "ux-tooltip-accent" }
            }
            div { class: "{plan.arrow_class()}",
                div { class: "ux-tooltip-arrow-tip" }
            }
        }
    }
}
