//! Page content model
//!
//! Mirrors the layout of `site.toml`. The UI treats all of this as inert data;
//! only [`Timing`] feeds behaviour (timer intervals, viewport threshold).

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Root
// ─────────────────────────────────────────────────────────────────────────────

/// Everything rendered on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub profile: Profile,
    pub hero: HeroContent,
    /// Rotating "currently ..." strings shown under the headline
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub tech_stack: Vec<TechItem>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub projects: Vec<Project>,
    pub contact: ContactContent,
    #[serde(default)]
    pub timing: Timing,
}

// ─────────────────────────────────────────────────────────────────────────────
// Profile & Hero
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Brand mark shown in the navbar (e.g. initials)
    pub brand: String,
    pub title: String,
    pub tagline: String,
    pub bio: String,
    pub location: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub open_to_work: bool,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

/// Headline number on the about grid ("5+ Projects Shipped")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroContent {
    /// Words cycled after the name in the headline
    pub words: Vec<String>,
    #[serde(default)]
    pub cards: Vec<HeroCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroCard {
    pub icon: String,
    pub title: String,
    pub description: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// About
// ─────────────────────────────────────────────────────────────────────────────

/// A skill bar. `level` is a percentage in `0..=100`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechItem {
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub organization: String,
    pub period: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Highlighted dot on the timeline
    #[serde(default)]
    pub current: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Projects
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[serde(rename = "Complete")]
    Complete,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Almost Complete")]
    AlmostComplete,
}

impl ProjectStatus {
    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Complete => "Complete",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::AlmostComplete => "Almost Complete",
        }
    }

    /// Badge modifier class
    pub fn badge_class(&self) -> &'static str {
        match self {
            ProjectStatus::Complete => "status-badge status-complete",
            ProjectStatus::InProgress => "status-badge status-in-progress",
            ProjectStatus::AlmostComplete => "status-badge status-almost",
        }
    }
}

/// Two-stop gradient used for a project's icon and hero tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accent {
    pub from: String,
    pub to: String,
}

impl Accent {
    /// CSS `background` value
    pub fn css(&self) -> String {
        format!("linear-gradient(135deg, {}, {})", self.from, self.to)
    }
}

impl Default for Accent {
    fn default() -> Self {
        Self {
            from: "#3b82f6".to_string(),
            to: "#8b5cf6".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub status: ProjectStatus,
    pub category: String,
    pub icon: String,
    pub year: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub accent: Accent,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub impact: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Contact
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactContent {
    pub email: String,
    /// Offset of the owner's wall clock from UTC, in minutes (IST = 330)
    pub utc_offset_minutes: i32,
    pub timezone_label: String,
    #[serde(default)]
    pub methods: Vec<ContactMethod>,
    #[serde(default)]
    pub topics: Vec<QuickTopic>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub message_template: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMethod {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub primary: String,
    pub secondary: String,
    /// `mailto:` or `https://` target
    pub action: String,
}

impl ContactMethod {
    /// Mail links open in place; everything else gets a new tab.
    pub fn opens_new_tab(&self) -> bool {
        !self.action.starts_with("mailto:")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickTopic {
    pub emoji: String,
    pub label: String,
    #[serde(default)]
    pub popular: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub href: String,
    pub icon: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Timing
// ─────────────────────────────────────────────────────────────────────────────

/// Timer intervals and thresholds for the animated widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    pub headline_rotation_ms: u32,
    pub activity_rotation_ms: u32,
    pub carousel_rotation_ms: u32,
    /// Number of leading projects the spotlight carousel cycles through
    pub carousel_window: usize,
    pub clock_refresh_ms: u32,
    pub skill_stagger_step_ms: u32,
    /// Fraction of a section that must be visible before it animates in
    pub viewport_threshold: f64,
    /// Delay before the navbar and hero slide in
    pub entrance_delay_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            headline_rotation_ms: 2500,
            activity_rotation_ms: 3000,
            carousel_rotation_ms: 4000,
            carousel_window: 3,
            clock_refresh_ms: 60_000,
            skill_stagger_step_ms: 150,
            viewport_threshold: 0.2,
            entrance_delay_ms: 300,
        }
    }
}
