use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use super::super::helpers::error_chain_fmt;
use super::types::ErrorResponse;
use crate::{domain::SubmissionError, email_client::EmailClientError};

#[derive(thiserror::Error)]
pub enum SendEmailError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error(transparent)]
    ValidationError(#[from] SubmissionError),
    #[error("Failed to send email")]
    ProviderError(#[source] EmailClientError),
    #[error("Internal server error")]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for SendEmailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl SendEmailError {
    fn details(&self) -> Option<String> {
        match self {
            SendEmailError::MethodNotAllowed | SendEmailError::ValidationError(_) => None,
            SendEmailError::ProviderError(e) => Some(e.provider_message()),
            SendEmailError::UnexpectedError(e) => Some(format!("{e:#}")),
        }
    }
}

impl ResponseError for SendEmailError {
    fn status_code(&self) -> StatusCode {
        match self {
            SendEmailError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            SendEmailError::ValidationError(_) => StatusCode::BAD_REQUEST,
            SendEmailError::ProviderError(_) | SendEmailError::UnexpectedError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            details: self.details(),
        })
    }
}
