//! Form delivery: one remote attempt, then a local fallback.
//!
//! Both the contact form and the newsletter form go through
//! `deliver_with_fallback`. An unconfigured endpoint skips the network step
//! entirely; a configured endpoint that fails (transport error or non-2xx)
//! reports the failure and then runs the same fallback.

use crate::config::SiteConfig;
use crate::forms::{ContactForm, FormStatus, NewsletterMessage};
use crate::mailto;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("endpoint responded with status {0}")]
    Status(u16),
    #[error("could not encode payload: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
}

impl TransportResponse {
    #[inline]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Network boundary: a single JSON POST.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// POST `body` (already JSON) with `Content-Type: application/json`.
    async fn post_json(&self, url: &str, body: &str) -> Result<TransportResponse, DeliveryError>;
}

/// Mail-compose boundary: hands a `mailto:` URI to the environment.
pub trait Composer {
    fn compose(&self, uri: &str);
}

/// How a submission was finally delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
    Remote,
    /// `attempted` is false when no endpoint was configured.
    Fallback { attempted: bool },
}

async fn attempt<T, P>(transport: &T, url: &str, payload: &P) -> Result<(), DeliveryError>
where
    T: Transport,
    P: Serialize + ?Sized,
{
    let body = serde_json::to_string(payload)?;
    let response = transport.post_json(url, &body).await?;
    if response.is_success() {
        Ok(())
    } else {
        Err(DeliveryError::Status(response.status))
    }
}

/// Tries `endpoint` once, else runs `fallback`.
///
/// `on_failure` fires only for a configured endpoint that failed, before the
/// fallback runs. No retries, no timeout beyond the transport's own.
pub async fn deliver_with_fallback<T, P, E, F>(
    transport: &T,
    endpoint: Option<&str>,
    payload: &P,
    on_failure: E,
    fallback: F,
) -> Delivery
where
    T: Transport,
    P: Serialize + ?Sized,
    E: FnOnce(&DeliveryError),
    F: FnOnce(),
{
    let attempted = match endpoint {
        Some(url) => {
            log::info!("[delivery] POST {}", url);
            match attempt(transport, url, payload).await {
                Ok(()) => return Delivery::Remote,
                Err(e) => {
                    log::warn!("[delivery] {} failed: {}", url, e);
                    on_failure(&e);
                }
            }
            true
        }
        None => {
            log::info!("[delivery] no endpoint configured, using fallback");
            false
        }
    };
    fallback();
    Delivery::Fallback { attempted }
}

/// Final state of a contact submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactOutcome {
    pub status: FormStatus,
    pub delivery: Delivery,
}

impl ContactOutcome {
    /// The contact form is reset on every path.
    pub fn clears_form(&self) -> bool {
        true
    }
}

/// Contact form: POST the fields as JSON, else open a pre-filled email.
///
/// `on_status` sees every intermediate label (`Failed` then
/// `FallbackOpened` on a failed attempt); the last one wins.
pub async fn submit_contact<T, C, S>(
    config: &SiteConfig,
    form: &ContactForm,
    transport: &T,
    composer: &C,
    on_status: S,
) -> ContactOutcome
where
    T: Transport,
    C: Composer,
    S: Fn(FormStatus),
{
    let delivery = deliver_with_fallback(
        transport,
        config.endpoint(),
        form,
        |_| on_status(FormStatus::Failed),
        || {
            composer.compose(&mailto::contact_uri(&config.email, form));
            on_status(FormStatus::FallbackOpened);
        },
    )
    .await;
    let status = match delivery {
        Delivery::Remote => {
            on_status(FormStatus::Sent);
            FormStatus::Sent
        }
        Delivery::Fallback { .. } => FormStatus::FallbackOpened,
    };
    ContactOutcome { status, delivery }
}

#[derive(Serialize)]
struct NewsletterSignup<'a> {
    email: &'a str,
}

/// Newsletter form: validation, one POST to `${endpoint}/newsletter`, and a
/// silent manual fallback.
pub async fn submit_newsletter<T: Transport>(
    config: &SiteConfig,
    email: &str,
    transport: &T,
) -> NewsletterMessage {
    let email = email.trim();
    if email.is_empty() {
        return NewsletterMessage::MissingEmail;
    }
    let endpoint = config.newsletter_endpoint();
    let delivery = deliver_with_fallback(
        transport,
        endpoint.as_deref(),
        &NewsletterSignup { email },
        |_| {},
        || {},
    )
    .await;
    // Subscribed only on a 2xx reply; any other status is a failed attempt,
    // same as the contact form.
    match delivery {
        Delivery::Remote => NewsletterMessage::Subscribed,
        Delivery::Fallback { .. } => NewsletterMessage::ManualFallback,
    }
}
