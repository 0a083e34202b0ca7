use std::time::Duration;

use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::MailboxAddress;

const UNKNOWN_PROVIDER_ERROR: &str = "Unknown error";

#[derive(Debug, Clone)]
pub struct EmailClient {
    http_client: Client,
    base_url: Url,
    sender: String,
    api_key: SecretString,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    reply_to: &'a str,
    subject: &'a str,
    html: &'a str,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: String,
}

#[derive(Deserialize)]
struct ProviderErrorBody {
    message: Option<String>,
}

/// Receipt handed back by the provider for an accepted email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub id: String,
}

#[derive(Debug, thiserror::Error)]
pub enum EmailClientError {
    #[error("The email provider rejected the request with status {status}: {message}")]
    Rejected { status: u16, message: String },
    #[error("Failed to reach the email provider.")]
    Transport(#[from] reqwest::Error),
}

impl EmailClientError {
    /// Text reported back to the caller as the failure details.
    pub fn provider_message(&self) -> String {
        match self {
            EmailClientError::Rejected { message, .. } => message.clone(),
            EmailClientError::Transport(e) => e.to_string(),
        }
    }
}

impl EmailClient {
    pub fn new(
        base_url: Url,
        sender: MailboxAddress,
        sender_name: &str,
        api_key: SecretString,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            http_client: Client::builder().timeout(timeout).build()?,
            base_url,
            sender: format!("{sender_name} <{sender}>"),
            api_key,
        })
    }

    pub async fn send_email(
        &self,
        recipient: &MailboxAddress,
        reply_to: &str,
        subject: &str,
        html_content: &str,
    ) -> Result<SentEmail, EmailClientError> {
        let url = self.endpoint();

        let body = SendEmailRequest {
            from: &self.sender,
            to: [recipient.as_ref()],
            reply_to,
            subject,
            html: html_content,
        };

        let response = self
            .http_client
            .post(url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ProviderErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| UNKNOWN_PROVIDER_ERROR.to_string());
            return Err(EmailClientError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        match response.json::<SendEmailResponse>().await {
            Ok(SendEmailResponse { id }) => Ok(SentEmail { id }),
            Err(e) => {
                tracing::warn!(error.message = %e, "Email provider accepted the request without an id");
                Err(EmailClientError::Rejected {
                    status: status.as_u16(),
                    message: UNKNOWN_PROVIDER_ERROR.to_string(),
                })
            }
        }
    }

    // Base urls that cannot take a path are refused when the client is configured.
    fn endpoint(&self) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("emails");
        }
        url
    }
}
