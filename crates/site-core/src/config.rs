// Site-wide contact and delivery settings, fixed at compile time.

/// Optional form endpoint (e.g. a Formspree URL). Empty disables network delivery.
pub const FORM_ENDPOINT: &str = "";
pub const EMAIL: &str = "sanjojose147@gmail.com";
pub const WHATSAPP_NUMBER: &str = "+917510339490";
pub const LINKEDIN: &str = "https://www.linkedin.com/in/onlinesanjo";
pub const HOURLY_RATE: u32 = 2490; // INR

/// Suffix appended to the endpoint for newsletter signups.
pub const NEWSLETTER_PATH: &str = "/newsletter";

/// Contact configuration handed to the submission handlers.
///
/// `Default` yields the compile-time constants above; tests build their own
/// value to point the handlers at a fake endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub form_endpoint: String,
    pub email: String,
    pub whatsapp_number: String,
    pub linkedin: String,
    pub hourly_rate: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            form_endpoint: FORM_ENDPOINT.to_string(),
            email: EMAIL.to_string(),
            whatsapp_number: WHATSAPP_NUMBER.to_string(),
            linkedin: LINKEDIN.to_string(),
            hourly_rate: HOURLY_RATE,
        }
    }
}

impl SiteConfig {
    /// Same as the default configuration but with `endpoint` for form delivery.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            form_endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Trimmed endpoint, or `None` when network delivery is not configured.
    pub fn endpoint(&self) -> Option<&str> {
        let trimmed = self.form_endpoint.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }

    pub fn newsletter_endpoint(&self) -> Option<String> {
        self.endpoint()
            .map(|base| format!("{}{}", base, NEWSLETTER_PATH))
    }

    /// `wa.me` chat link; the number is written without the leading `+`.
    pub fn whatsapp_link(&self) -> String {
        format!("https://wa.me/{}", self.whatsapp_number.replace('+', ""))
    }

    pub fn mailto_link(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn hourly_rate_label(&self) -> String {
        format!("₹{} / hour", self.hourly_rate)
    }
}
