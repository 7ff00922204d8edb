//! Page sections, in scroll order.

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod projects;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use projects::Projects;
