//! Tooltip bubble layout.
//!
//! A tooltip is a pure function of `(law, insight, position)`: where the bubble
//! goes and which way its arrow points back at the wrapped element.

use crate::annotation::{AnnotationRecord, Position};

/// Direction the bubble's arrow points (towards the wrapped element).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrowDirection {
    Up,
    Down,
    Left,
    Right,
}

impl ArrowDirection {
    pub fn for_position(position: Position) -> Self {
        match position {
            Position::Top => Self::Down,
            Position::Bottom => Self::Up,
            Position::Left => Self::Right,
            Position::Right => Self::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipPlan {
    pub law: String,
    pub insight: String,
    pub position: Position,
    pub arrow: ArrowDirection,
}

impl TooltipPlan {
    pub fn new(law: impl Into<String>, insight: impl Into<String>, position: Position) -> Self {
        Self {
            law: law.into(),
            insight: insight.into(),
            position,
            arrow: ArrowDirection::for_position(position),
        }
    }

    pub fn from_record(record: &AnnotationRecord) -> Self {
        Self::new(record.law.clone(), record.insight.clone(), record.position)
    }

    /// Class for the absolutely positioned layer holding the bubble
    pub fn placement_class(&self) -> String {
        format!("ux-tooltip-layer ux-tooltip-layer--{}", self.position.as_str())
    }

    pub fn arrow_class(&self) -> String {
        format!("ux-tooltip-arrow ux-tooltip-arrow--{}", self.arrow.as_str())
    }

    /// An empty insight renders an empty body rather than failing.
    pub fn has_body(&self) -> bool {
        !self.insight.trim().is_empty()
    }
}
