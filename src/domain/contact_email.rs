use once_cell::sync::Lazy;
use regex::Regex;

/// Loose `local@domain.tld` shape shared by the contact form and the endpoint.
/// U+FEFF counts as whitespace, as it does for browsers.
static CONTACT_EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("Invalid contact email regex")
});

pub fn is_valid_contact_email(s: &str) -> bool {
    CONTACT_EMAIL_REGEX.is_match(s)
}

/// The submitter's address, used as the reply-to of the dispatched email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmail(String);

impl ContactEmail {
    pub fn parse(s: String) -> Result<Self, String> {
        if !is_valid_contact_email(&s) {
            return Err(format!("{} is not a valid contact email.", s));
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
