//! UI Components
//!
//! Reusable pieces shared by the page sections: the annotation overlay, its
//! tooltip, the insights toggle and context, the navbar and the project modal.

pub mod annotate;
pub mod insights;
pub mod navbar;
pub mod project_modal;
pub mod tooltip;

pub use annotate::UxAnnotate;
pub use insights::use_insights_provider;
pub use navbar::Navbar;
pub use project_modal::ProjectModal;
