use serde::{Deserialize, Serialize};

use crate::domain::{ContactSubmission, SubmissionError};

pub const SUCCESS_MESSAGE: &str =
    "Email sent successfully! You should receive a confirmation soon.";

/// Raw request body. Every field is optional so absence is a validation error.
#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl TryFrom<ContactRequest> for ContactSubmission {
    type Error = SubmissionError;

    fn try_from(value: ContactRequest) -> Result<Self, Self::Error> {
        ContactSubmission::parse(value.name, value.email, value.subject, value.message)
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DispatchResponse {
    pub success: bool,
    pub message_id: String,
    pub message: String,
}

impl DispatchResponse {
    pub fn sent(message_id: String) -> Self {
        Self {
            success: true,
            message_id,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
