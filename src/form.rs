//! Client side of the contact pipeline: field validation and a single-flight
//! submitter that mirrors what the contact section of the site does.

mod contact_form;
mod validation;

pub use contact_form::{
    CONFIRMATION_DISPLAY, ContactForm, FormState, GENERIC_FAILURE_NOTICE, SubmitOutcome,
};
pub use validation::{Field, FieldErrors, FormData, Validation, validate};
