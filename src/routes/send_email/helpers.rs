use super::super::helpers::prepare_html_template;
use crate::domain::ContactSubmission;

pub fn get_email_html(submission: &ContactSubmission) -> Result<String, tera::Error> {
    prepare_html_template(
        &[
            ("name", submission.name.as_ref()),
            ("email", submission.email.as_ref()),
            ("subject", submission.subject.as_deref().unwrap_or_default()),
            ("message", submission.message.as_ref()),
        ],
        "contact_email.html",
    )
}
