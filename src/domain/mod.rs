mod contact_email;
mod contact_message;
mod contact_name;
mod contact_submission;
mod mailbox_address;

pub use contact_email::{ContactEmail, is_valid_contact_email};
pub use contact_message::ContactMessage;
pub use contact_name::ContactName;
pub use contact_submission::{ContactSubmission, SubmissionError};
pub use mailbox_address::MailboxAddress;
