//! Client side of the contact flow: captures the three form fields, checks
//! them, posts them to the intake endpoint and turns the outcome into a single
//! message for the visitor.

use reqwest::Client;

use crate::domain::{is_valid_email_format, ContactFormData};
use crate::routes::ContactResponse;

pub const MISSING_FIELD_MESSAGE: &str = "Please fill out this field.";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const SENT_MESSAGE: &str = "Thanks! Your message has been sent.";

/// Outcome of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// Rejected locally; nothing was sent.
    Invalid(&'static str),
    Sent,
    /// The request was made but did not succeed. Holds the failure detail.
    Failed(String),
}

impl Feedback {
    /// The text shown to the visitor.
    pub fn message(&self) -> String {
        match self {
            Feedback::Invalid(message) => message.to_string(),
            Feedback::Sent => SENT_MESSAGE.to_string(),
            Feedback::Failed(detail) if detail.is_empty() => {
                "Sorry, we couldn't send your message. Please try again later.".into()
            }
            Feedback::Failed(detail) => {
                format!("Sorry, we couldn't send your message. {}", detail)
            }
        }
    }

    pub fn is_sent(&self) -> bool {
        matches!(self, Feedback::Sent)
    }
}

#[derive(thiserror::Error, Debug)]
enum SubmitError {
    #[error("{0}")]
    Rejected(String),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

pub struct ContactForm {
    pub from: String,
    pub email: String,
    pub subject: String,
    endpoint: String,
    http_client: Client,
}

impl ContactForm {
    /// A blank form posting to `{base_url}/api/contact`.
    pub fn new(base_url: &str) -> Self {
        Self {
            from: String::new(),
            email: String::new(),
            subject: String::new(),
            endpoint: format!("{}/api/contact", base_url.trim_end_matches('/')),
            http_client: Client::new(),
        }
    }

    pub fn reset(&mut self) {
        self.from.clear();
        self.email.clear();
        self.subject.clear();
    }

    /// Makes at most one request. Fields are cleared only when the
    /// submission was accepted.
    #[tracing::instrument(name = "submitting the contact form", skip(self))]
    pub async fn submit(&mut self) -> Feedback {
        let data = ContactFormData {
            from: self.from.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
        };

        if data.from.is_empty() || data.subject.is_empty() {
            return Feedback::Invalid(MISSING_FIELD_MESSAGE);
        }
        if !is_valid_email_format(&data.email) {
            return Feedback::Invalid(INVALID_EMAIL_MESSAGE);
        }

        match self.post(&data).await {
            Ok(()) => {
                self.reset();
                Feedback::Sent
            }
            Err(e) => {
                tracing::warn!(error = ?e, "contact submission failed");
                Feedback::Failed(e.to_string())
            }
        }
    }

    async fn post(&self, data: &ContactFormData) -> Result<(), SubmitError> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .json(data)
            .send()
            .await?;

        let status = response.status();
        let body: ContactResponse = response.json().await?;

        if !status.is_success() || !body.ok {
            let error = body
                .error
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| "Failed to send message".into());
            return Err(SubmitError::Rejected(error));
        }

        Ok(())
    }
}
