//! Page shell: provides the insights context, loads the bundled content and
//! lays out the sections.

use dioxus::prelude::*;
use folio_core::load_site_content;

use crate::components::{Navbar, use_insights_provider};
use crate::sections::{About, Contact, Footer, Hero, Projects};

const MAIN_CSS: Asset = asset!("/assets/main.css");
const SITE_CONTENT: &str = include_str!("../content/site.toml");
const FONT_AWESOME: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

#[component]
pub fn App() -> Element {
    use_insights_provider();

    let content = use_hook(|| {
        load_site_content(SITE_CONTENT).map_err(|e| {
            tracing::error!(error = %e, "Failed to load site content");
            e.to_string()
        })
    });

    let body = match content {
        Ok(site) => rsx! {
            Navbar {
                brand: site.profile.brand.clone(),
                resume_url: site.profile.resume_url.clone(),
                entrance_delay_ms: site.timing.entrance_delay_ms,
            }
            main {
                Hero {
                    profile: site.profile.clone(),
                    hero: site.hero.clone(),
                    activities: site.activities.clone(),
                    timing: site.timing.clone(),
                }
                About {
                    profile: site.profile.clone(),
                    skills: site.skills.clone(),
                    tech_stack: site.tech_stack.clone(),
                    experience: site.experience.clone(),
                    timing: site.timing.clone(),
                }
                Projects { projects: site.projects.clone(), timing: site.timing.clone() }
                Contact {
                    owner_name: site.profile.name.clone(),
                    brand: site.profile.brand.clone(),
                    contact: site.contact.clone(),
                    timing: site.timing.clone(),
                }
            }
            Footer {
                name: site.profile.name.clone(),
                email: site.contact.email.clone(),
                socials: site.contact.socials.clone(),
                open_to_work: site.profile.open_to_work,
            }
        },
        Err(message) => rsx! {
            div { class: "load-error",
                h1 { "Something went wrong" }
                p { "The page content could not be loaded." }
                pre { "{message}" }
            }
        },
    };

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        document::Stylesheet { href: FONT_AWESOME }
        div { class: "page", {body} }
    }
}
