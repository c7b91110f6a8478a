/// DOM hooks the page markup provides.
///
/// Kept free of web-sys so host tests can include this file directly.
// Background
pub const CANVAS_ID: &str = "bg-canvas";

// Forms (hero quick-quote and the contact section share one handler)
pub const CONTACT_FORM_IDS: [&str; 2] = ["quote-form", "contact-form"];
pub const CONTACT_FIELDS: [&str; 5] = ["name", "email", "phone", "service", "message"];
pub const NEWSLETTER_FORM_ID: &str = "newsletter-form";
pub const NEWSLETTER_FIELD: &str = "newsEmail";
pub const NEWSLETTER_MSG_ID: &str = "newsletter-msg";

// Status label inside each contact form
pub const STATUS_SELECTOR: &str = "[data-status]";
pub const STATE_ATTR: &str = "data-state";

// Config-driven links and labels
pub const LINK_SELECTOR: &str = "[data-link]";
pub const LINK_ATTR: &str = "data-link";
pub const RATE_SELECTOR: &str = "[data-rate]";
pub const EMAIL_TEXT_SELECTOR: &str = "[data-email]";

// Canvas backing store never collapses below one pixel
pub const MIN_BACKING_PX: u32 = 1;
