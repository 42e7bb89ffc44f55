use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use uuid::Uuid;

use crate::domain::{ContactFormData, ContactSubmission};
use crate::email_client::{EmailMessage, EmailProvider, SendError};
use crate::routes::error_chain_fmt;

/// Addresses every contact email is sent from and delivered to.
#[derive(Debug, Clone)]
pub struct ContactMailboxes {
    pub sender: String,
    pub recipient: String,
}

/// Body of every `/api/contact` response.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ContactResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactResponse {
    pub fn success() -> Self {
        Self {
            ok: true,
            error: None,
        }
    }

    pub fn failure(error: String) -> Self {
        Self {
            ok: false,
            error: Some(error),
        }
    }
}

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("Invalid form data")]
    ValidationError(String),

    #[error("{0}")]
    ProviderError(String),

    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl From<SendError> for ContactError {
    fn from(e: SendError) -> Self {
        match e {
            SendError::Rejected(message) if message.is_empty() => {
                ContactError::ProviderError("Email send failed".into())
            }
            SendError::Rejected(message) => ContactError::ProviderError(message),
            SendError::Transport(e) => ContactError::UnexpectedError(e.into()),
        }
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ContactError::ProviderError(_) | ContactError::UnexpectedError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ContactError::ValidationError(reason) = self {
            tracing::warn!(%reason, "rejecting contact submission");
        }

        let mut error = self.to_string();
        if error.is_empty() {
            error = "Unexpected error".into();
        }

        HttpResponse::build(self.status_code()).json(ContactResponse::failure(error))
    }
}

#[tracing::instrument(
    name = "forwarding a contact submission",
    skip(body, provider, mailboxes),
    fields(submission_id = %Uuid::new_v4(), sender_email = tracing::field::Empty)
)]
pub async fn contact(
    body: Result<web::Bytes, actix_web::Error>,
    provider: web::Data<dyn EmailProvider>,
    mailboxes: web::Data<ContactMailboxes>,
) -> Result<HttpResponse, ContactError> {
    let body = body.map_err(|e| ContactError::UnexpectedError(anyhow::anyhow!("{}", e)))?;
    let form = ContactFormData::from_json(&body)
        .map_err(|e| ContactError::UnexpectedError(e.into()))?;

    let submission =
        ContactSubmission::try_from(form).map_err(ContactError::ValidationError)?;
    tracing::Span::current().record(
        "sender_email",
        tracing::field::display(&submission.email),
    );

    let message = EmailMessage {
        from: mailboxes.sender.clone(),
        to: mailboxes.recipient.clone(),
        subject: submission.subject_line(),
        text: submission.text_body(),
    };

    provider.send(&message).await?;

    tracing::info!("contact submission has been forwarded");
    Ok(HttpResponse::Ok().json(ContactResponse::success()))
}
