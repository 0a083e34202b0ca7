use super::{ContactEmail, ContactMessage, ContactName};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("Missing required fields")]
    MissingFields,
    #[error("Invalid email format")]
    InvalidEmail,
}

/// A contact form payload that passed server-side validation.
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: ContactEmail,
    pub subject: Option<String>,
    pub message: ContactMessage,
}

impl ContactSubmission {
    /// Required fields are checked together before the email format.
    pub fn parse(
        name: Option<String>,
        email: Option<String>,
        subject: Option<String>,
        message: Option<String>,
    ) -> Result<Self, SubmissionError> {
        let name = name.and_then(|n| ContactName::parse(n).ok());
        let email = email.filter(|e| !e.trim().is_empty());
        let message = message.and_then(|m| ContactMessage::parse(m).ok());

        let (Some(name), Some(email), Some(message)) = (name, email, message) else {
            return Err(SubmissionError::MissingFields);
        };
        let email = ContactEmail::parse(email).map_err(|_| SubmissionError::InvalidEmail)?;
        let subject = subject.filter(|s| !s.trim().is_empty());

        Ok(Self {
            name,
            email,
            subject,
            message,
        })
    }

    pub fn subject_line(&self) -> String {
        match &self.subject {
            Some(subject) => subject.clone(),
            None => format!("New message from {}", self.name.as_ref()),
        }
    }
}
