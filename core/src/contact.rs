//! `mailto:` link construction for the contact panel.

/// Build a `mailto:` URL with percent-encoded subject and optional body.
pub fn mailto(email: &str, subject: &str, body: Option<&str>) -> String {
    let mut url = format!("mailto:{}?subject={}", email, urlencoding::encode(subject));
    if let Some(body) = body.filter(|b| !b.is_empty()) {
        url.push_str("&body=");
        url.push_str(&urlencoding::encode(body));
    }
    url
}

/// Pre-filled message for a quick-topic chip.
pub fn topic_mailto(email: &str, owner_first_name: &str, topic: &str) -> String {
    let subject = format!("Re: {topic}");
    let body = format!("Hi {owner_first_name}!\n\nI'd love to discuss {topic} with you.\n\nBest regards,");
    mailto(email, &subject, Some(&body))
}

/// First word of a full name, used for greetings
pub fn first_name(full_name: &str) -> &str {
    full_name.split_whitespace().next().unwrap_or(full_name)
}
