use crate::forms::ContactForm;

pub const SUBJECT_PREFIX: &str = "New lead from website: ";
pub const SERVICE_NOT_SPECIFIED: &str = "Not specified";

/// `mailto:` URI with percent-encoded subject and body.
pub fn compose_uri(address: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        address,
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

pub fn contact_subject(name: &str) -> String {
    format!("{}{}", SUBJECT_PREFIX, name)
}

/// Labeled lines of the contact form, one per field, joined with `\n`.
pub fn contact_body(form: &ContactForm) -> String {
    let service = form
        .service
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(SERVICE_NOT_SPECIFIED);
    [
        format!("Name: {}", form.name),
        format!("Email: {}", form.email),
        format!("Phone: {}", form.phone),
        format!("Message: {}", form.message),
        format!("Interested Service: {}", service),
    ]
    .join("\n")
}

pub fn contact_uri(address: &str, form: &ContactForm) -> String {
    compose_uri(address, &contact_subject(&form.name), &contact_body(form))
}
