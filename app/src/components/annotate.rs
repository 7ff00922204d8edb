//! UX-law annotation wrapper.
//!
//! The wrapper `div` is rendered whether or not insights are on, so flipping
//! the switch never moves anything on the page. While insights are on the
//! wrapper gains a hover affordance and a tooltip layer that stays hidden
//! (and click-through) until hovered.

use dioxus::prelude::*;
use folio_core::{AnnotationRecord, OverlayPlan, Position, Variant};

use crate::components::insights::use_insights;
use crate::components::tooltip::TooltipBubble;

#[derive(Props, Clone, PartialEq)]
pub struct UxAnnotateProps {
    /// Name of the UX law, e.g. "Fitts's Law"
    #[props(into)]
    pub law: String,
    #[props(into)]
    pub insight: String,
    #[props(default, into)]
    pub position: Position,
    #[props(default, into)]
    pub variant: Variant,
    /// Extra classes for the wrapper (grid spans, sizing)
    #[props(default, into)]
    pub class: String,
    pub children: Element,
}

#[component]
pub fn UxAnnotate(props: UxAnnotateProps) -> Element {
    let insights = use_insights();
    let record = AnnotationRecord::new(props.law, props.insight, props.position);
    let plan = OverlayPlan::new(&record, props.variant, insights.is_visible(), &props.class);

    rsx! {
        div { class: "{plan.wrapper_class}",
            {props.children}
            if let Some(tooltip) = plan.tooltip {
                div { class: "{tooltip.placement_class()}",
                    TooltipBubble { plan: tooltip.clone() }
                }
            }
            if plan.glow {
                div { class: "ux-annotate-glow" }
            }
        }
    }
}
