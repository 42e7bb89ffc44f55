use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

/// A single email as accepted by the provider's send endpoint.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
}

#[derive(thiserror::Error, Debug)]
pub enum SendError {
    /// The provider answered but refused the email. Holds the provider's
    /// message, which may be empty.
    #[error("provider rejected the email: {0}")]
    Rejected(String),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// The outbound side of the contact flow.
#[async_trait::async_trait]
pub trait EmailProvider: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<(), SendError>;
}

pub struct EmailClient {
    base_url: String,
    http_client: Client,
    authorization_token: Secret<String>,
}

#[derive(serde::Deserialize)]
struct ProviderErrorBody {
    #[serde(default)]
    message: String,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        authorization_token: Secret<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            http_client,
            authorization_token,
        })
    }
}

#[async_trait::async_trait]
impl EmailProvider for EmailClient {
    #[tracing::instrument(
        name = "sending email through provider",
        skip(self, message),
        fields(subject = %message.subject)
    )]
    async fn send(&self, message: &EmailMessage) -> Result<(), SendError> {
        let url = format!("{}/emails", self.base_url);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(self.authorization_token.expose_secret())
            .json(message)
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(());
        }

        let status = response.status();
        let message = response
            .json::<ProviderErrorBody>()
            .await
            .map(|body| body.message)
            .unwrap_or_default();

        tracing::warn!(%status, error = %message, "provider rejected the email");

        Err(SendError::Rejected(message))
    }
}
