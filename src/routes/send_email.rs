mod errors;
mod helpers;
mod send_email_handler;
mod types;

pub use errors::SendEmailError;
pub use helpers::get_email_html;
pub use send_email_handler::{ContactRecipient, MAX_BODY_SIZE, send_email};
pub use types::{ContactRequest, DispatchResponse, ErrorResponse, SUCCESS_MESSAGE};
