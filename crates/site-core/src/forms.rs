//! Form models and the user-facing outcome labels.

use serde::Serialize;
use std::cell::Cell;
use std::rc::Rc;

/// Contact / quote form contents. Required-field checks happen in the page
/// (`required` inputs); this type accepts whatever was entered.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    pub message: String,
}

impl ContactForm {
    /// Builds the form from `(field, value)` entries; unknown fields are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = Self::default();
        for (key, value) in pairs {
            let value = value.into();
            match key.as_ref() {
                "name" => form.name = value,
                "email" => form.email = value,
                "phone" => form.phone = value,
                "service" => form.service = Some(value).filter(|s| !s.is_empty()),
                "message" => form.message = value,
                _ => {}
            }
        }
        form
    }
}

/// Outcome label of a contact submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormStatus {
    Sent,
    Failed,
    FallbackOpened,
}

impl FormStatus {
    pub fn label(self) -> &'static str {
        match self {
            FormStatus::Sent => "Thanks — I received your message and will reply shortly.",
            FormStatus::Failed => "Submission failed. Falling back to email client...",
            FormStatus::FallbackOpened => "Opened your email client to send the message.",
        }
    }

    /// Short tag, used as a `data-state` attribute for styling.
    pub fn tag(self) -> &'static str {
        match self {
            FormStatus::Sent => "sent",
            FormStatus::Failed => "failed",
            FormStatus::FallbackOpened => "fallback",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NewsletterMessage {
    MissingEmail,
    Subscribed,
    ManualFallback,
}

impl NewsletterMessage {
    pub fn label(self) -> &'static str {
        match self {
            NewsletterMessage::MissingEmail => "Please enter an email",
            NewsletterMessage::Subscribed => "Thanks — you're subscribed!",
            NewsletterMessage::ManualFallback => {
                "Thanks — please expect updates via email (manual fallback).\n(Configure FORM_ENDPOINT for automatic delivery)"
            }
        }
    }

    /// Whether the newsletter form should be reset after this message.
    pub fn clears_form(self) -> bool {
        !matches!(self, NewsletterMessage::MissingEmail)
    }
}

/// Allows one submission in flight per form.
#[derive(Clone, Debug, Default)]
pub struct SubmitGuard {
    pending: Rc<Cell<bool>>,
}

impl SubmitGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a submission as started. `None` if one is already pending.
    pub fn try_begin(&self) -> Option<SubmitTicket> {
        if self.pending.replace(true) {
            return None;
        }
        Some(SubmitTicket {
            pending: self.pending.clone(),
        })
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}

/// Held for the duration of a submission; dropping it re-opens the form.
#[derive(Debug)]
pub struct SubmitTicket {
    pending: Rc<Cell<bool>>,
}

impl Drop for SubmitTicket {
    fn drop(&mut self) {
        self.pending.set(false);
    }
}
