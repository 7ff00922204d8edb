//! Site content loading and validation
//!
//! Content is authored as TOML and embedded into the UI bundle. Parsing is
//! followed by a validation pass so bad timing values are caught at load time
//! instead of silently producing a dead timer.

use std::collections::HashSet;

use folio_types::{SiteContent, Timing};

use crate::availability::OwnerClock;
use crate::error::ContentError;
use crate::schedule::IntervalMs;
use crate::viewport::Threshold;

/// Parse and validate site content from TOML source.
pub fn load_site_content(source: &str) -> Result<SiteContent, ContentError> {
    let content: SiteContent = toml::from_str(source)?;
    validate(&content)?;
    tracing::info!(
        projects = content.projects.len(),
        skills = content.skills.len(),
        "Loaded site content"
    );
    Ok(content)
}

/// Check invariants serde cannot express.
pub fn validate(content: &SiteContent) -> Result<(), ContentError> {
    validate_timing(&content.timing)?;

    let mut seen = HashSet::new();
    for project in &content.projects {
        if !seen.insert(project.id.as_str()) {
            return Err(ContentError::invalid(
                "projects.id",
                format!("duplicate project id `{}`", project.id),
            ));
        }
    }

    if let Some(skill) = content.skills.iter().find(|s| s.level > 100) {
        return Err(ContentError::invalid(
            "skills.level",
            format!("`{}` has level {} (max 100)", skill.name, skill.level),
        ));
    }

    OwnerClock::new(content.contact.utc_offset_minutes)
        .map_err(|e| ContentError::invalid("contact.utc_offset_minutes", e.to_string()))?;

    Ok(())
}

fn validate_timing(timing: &Timing) -> Result<(), ContentError> {
    let intervals = [
        ("timing.headline_rotation_ms", timing.headline_rotation_ms),
        ("timing.activity_rotation_ms", timing.activity_rotation_ms),
        ("timing.carousel_rotation_ms", timing.carousel_rotation_ms),
        ("timing.clock_refresh_ms", timing.clock_refresh_ms),
    ];
    for (field, value) in intervals {
        IntervalMs::new(value).map_err(|e| ContentError::invalid(field, e.to_string()))?;
    }

    Threshold::new(timing.viewport_threshold)
        .map_err(|e| ContentError::invalid("timing.viewport_threshold", e.to_string()))?;

    if timing.carousel_window == 0 {
        return Err(ContentError::invalid("timing.carousel_window", "must be at least 1"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = r#"
[profile]
name = "Ada Example"
brand = "AE"
title = "Frontend Engineer"
tagline = "Form meets function"
bio = "Builds things."
location = "Somewhere"

[hero]
words = ["Frontend"]

[contact]
email = "ada@example.com"
utc_offset_minutes = 330
timezone_label = "IST"
"#;

    fn project(id: &str) -> String {
        format!(
            r#"
[[projects]]
id = "{id}"
title = "T"
description = "d"
long_description = "ld"
status = "Complete"
category = "Game"
icon = "🎯"
year = "2023"
"#
        )
    }

    #[test]
    fn test_load_valid() {
        let src = format!("{BASE}{}{}", project("a"), project("b"));
        let content = load_site_content(&src).unwrap();
        assert_eq!(content.projects.len(), 2);
    }

    #[test]
    fn test_duplicate_project_id() {
        let src = format!("{BASE}{}{}", project("a"), project("a"));
        let err = load_site_content(&src).unwrap_err();
        assert!(matches!(err, ContentError::Invalid { ref field, .. } if field == "projects.id"));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let src = format!("{BASE}\n[timing]\ncarousel_rotation_ms = 0\n");
        let err = load_site_content(&src).unwrap_err();
        assert!(err.to_string().contains("timing.carousel_rotation_ms"));
    }

    #[test]
    fn test_threshold_rejected() {
        let src = format!("{BASE}\n[timing]\nviewport_threshold = 1.5\n");
        assert!(load_site_content(&src).is_err());
    }

    #[test]
    fn test_skill_level_over_100() {
        let src = format!("{BASE}\n[[skills]]\nname = \"CSS\"\nlevel = 120\n");
        let err = load_site_content(&src).unwrap_err();
        assert!(err.to_string().contains("skills.level"));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            load_site_content("profile = 3"),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn test_bundled_content_is_valid() {
        let content = load_site_content(include_str!("../../app/content/site.toml")).unwrap();
        assert!(!content.projects.is_empty());
        assert!(!content.hero.words.is_empty());
    }
}
