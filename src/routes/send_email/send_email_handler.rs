use actix_web::{HttpRequest, HttpResponse, http::Method, web};
use anyhow::Context;

use super::{
    errors::SendEmailError,
    helpers::get_email_html,
    types::{ContactRequest, DispatchResponse},
};
use crate::{
    domain::{ContactSubmission, MailboxAddress},
    email_client::EmailClient,
};

/// Largest request body the endpoint reads. Anything bigger is an internal error.
pub const MAX_BODY_SIZE: usize = 64 * 1024;

/// The site owner's inbox every submission is delivered to.
pub struct ContactRecipient(pub MailboxAddress);

#[tracing::instrument(
    name = "Dispatching a contact form submission",
    skip(req, payload, email_client, recipient),
    fields(
        method = %req.method(),
        contact_email = tracing::field::Empty,
        message_id = tracing::field::Empty,
    )
)]
pub async fn send_email(
    req: HttpRequest,
    payload: web::Payload,
    email_client: web::Data<EmailClient>,
    recipient: web::Data<ContactRecipient>,
) -> Result<HttpResponse, SendEmailError> {
    if req.method() != Method::POST {
        return Err(SendEmailError::MethodNotAllowed);
    }

    let body = payload
        .to_bytes_limited(MAX_BODY_SIZE)
        .await
        .map_err(|_| anyhow::anyhow!("The request body exceeds {MAX_BODY_SIZE} bytes"))
        .and_then(|read| read.map_err(|e| anyhow::anyhow!("{e}")))
        .context("Failed to read the request body")
        .map_err(unexpected)?;

    let request: ContactRequest = serde_json::from_slice(&body)
        .context("Failed to parse the request body")
        .map_err(unexpected)?;
    let submission: ContactSubmission = request.try_into().map_err(|e| {
        tracing::info!(error.message = %e, "Rejected an invalid contact submission");
        SendEmailError::ValidationError(e)
    })?;
    tracing::Span::current().record(
        "contact_email",
        tracing::field::display(submission.email.as_ref()),
    );

    let html = get_email_html(&submission)
        .context("Failed to render the contact email")
        .map_err(unexpected)?;

    let sent = email_client
        .send_email(
            &recipient.0,
            submission.email.as_ref(),
            &submission.subject_line(),
            &html,
        )
        .await
        .map_err(|e| {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "The email provider failed to send the contact email"
            );
            SendEmailError::ProviderError(e)
        })?;

    tracing::Span::current().record("message_id", tracing::field::display(&sent.id));
    tracing::info!("Email sent successfully");

    Ok(HttpResponse::Ok().json(DispatchResponse::sent(sent.id)))
}

fn unexpected(e: anyhow::Error) -> SendEmailError {
    tracing::error!(error.cause_chain = ?e, "Failed to handle the contact submission");
    SendEmailError::UnexpectedError(e)
}
