//! Shared content types for the portfolio site.
//!
//! Everything the page displays (profile, projects, skills, contact details and
//! timing knobs) is plain serde data so it can live in a TOML file next to the
//! UI crate and be validated by `folio-core`.

pub mod content;
pub mod formatting;

pub use content::{
    Accent, ContactContent, ContactMethod, ExperienceEntry, HeroCard, HeroContent, Profile,
    Project, ProjectStatus, QuickTopic, SiteContent, Skill, SocialLink, Stat, TechItem, Timing,
};
