//! Error types for the core crate

use thiserror::Error;

/// Misuse of one of the scheduling or viewport primitives.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("rotation ring needs at least one item")]
    EmptyRing,

    #[error("interval must be positive, got {interval_ms}ms")]
    InvalidInterval { interval_ms: u32 },

    #[error("viewport threshold must be in (0, 1], got {threshold}")]
    InvalidThreshold { threshold: f64 },

    #[error("utc offset out of range: {minutes} minutes")]
    InvalidUtcOffset { minutes: i32 },
}

/// Errors that can occur while loading page content
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse site content: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid `{field}`: {reason}")]
    Invalid { field: String, reason: String },
}

impl ContentError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
