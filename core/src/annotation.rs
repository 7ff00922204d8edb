//! UX-law annotations around arbitrary page elements.
//!
//! The wrapper element is part of the layout no matter what the visibility
//! flag says, so toggling insights never reflows the page. Only the tooltip
//! layer, the glow and the hover affordance come and go.

use crate::tooltip::TooltipPlan;

/// Which side of the wrapped element the tooltip sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Position {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

impl Position {
    /// Parse a position name. Anything unrecognised falls back to `Bottom`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Self::Top,
            "bottom" => Self::Bottom,
            "left" => Self::Left,
            "right" => Self::Right,
            other => {
                tracing::debug!(position = other, "Unknown tooltip position, using bottom");
                Self::Bottom
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    pub fn all() -> &'static [Position] {
        &[Self::Top, Self::Bottom, Self::Left, Self::Right]
    }
}

impl From<&str> for Position {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

/// Decoration style for an annotated element.
///
/// `Ghost` keeps the tooltip but drops the hover glow and scale affordance;
/// it is meant for large background regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    #[default]
    Default,
    Ghost,
}

impl Variant {
    /// Parse a variant name, falling back to `Default`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "ghost" => Self::Ghost,
            _ => Self::Default,
        }
    }

    fn decorates(&self) -> bool {
        matches!(self, Self::Default)
    }
}

impl From<&str> for Variant {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

/// The law and explanation attached to one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationRecord {
    pub law: String,
    pub insight: String,
    pub position: Position,
}

impl AnnotationRecord {
    pub fn new(law: impl Into<String>, insight: impl Into<String>, position: Position) -> Self {
        Self {
            law: law.into(),
            insight: insight.into(),
            position,
        }
    }
}

const WRAPPER_CLASS: &str = "ux-annotate";
const INTERACTIVE_CLASS: &str = "ux-annotate--interactive";

/// Render plan for one annotated element.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayPlan {
    /// Classes that affect layout. Identical for both visibility states.
    pub layout_class: String,
    /// `layout_class` plus the hover affordance when insights are on.
    pub wrapper_class: String,
    /// Present only while insights are visible
    pub tooltip: Option<TooltipPlan>,
    pub glow: bool,
}

impl OverlayPlan {
    pub fn new(record: &AnnotationRecord, variant: Variant, visible: bool, extra_class: &str) -> Self {
        let layout_class = match extra_class.trim() {
            "" => WRAPPER_CLASS.to_string(),
            extra => format!("{WRAPPER_CLASS} {extra}"),
        };

        let interactive = visible && variant.decorates();
        let wrapper_class = if interactive {
            format!("{layout_class} {INTERACTIVE_CLASS}")
        } else {
            layout_class.clone()
        };

        let tooltip = visible.then(|| TooltipPlan::from_record(record));

        Self {
            layout_class,
            wrapper_class,
            tooltip,
            glow: interactive,
        }
    }

    pub fn is_active(&self) -> bool {
        self.tooltip.is_some()
    }
}
