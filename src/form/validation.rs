use serde::Serialize;

use crate::domain::{ContactMessage, is_valid_contact_email};

const NAME_REQUIRED: &str = "Name is required";
const EMAIL_REQUIRED: &str = "Email is required";
const EMAIL_INVALID: &str = "Please enter a valid email";
const MESSAGE_REQUIRED: &str = "Message is required";
const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters";

/// What the user typed, serialized as-is into the request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl FormData {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }
}

/// Per-field error text. `None` means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Email => self.email = None,
            Field::Message => self.message = None,
            Field::Subject => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub valid: bool,
    pub errors: FieldErrors,
}

pub fn validate(form: &FormData) -> Validation {
    let name = form.name.trim().is_empty().then(|| NAME_REQUIRED.to_string());

    let email = if form.email.trim().is_empty() {
        Some(EMAIL_REQUIRED.to_string())
    } else if !is_valid_contact_email(&form.email) {
        Some(EMAIL_INVALID.to_string())
    } else {
        None
    };

    let message = if form.message.trim().is_empty() {
        Some(MESSAGE_REQUIRED.to_string())
    } else if !ContactMessage::meets_min_length(&form.message) {
        Some(MESSAGE_TOO_SHORT.to_string())
    } else {
        None
    };

    let errors = FieldErrors {
        name,
        email,
        message,
    };
    Validation {
        valid: errors.is_empty(),
        errors,
    }
}
