use validator::ValidateEmail;

/// An operator-configured address: the sender identity or the site owner's inbox.
#[derive(Debug, Clone)]
pub struct MailboxAddress(String);

impl MailboxAddress {
    pub fn parse(s: String) -> Result<Self, String> {
        if !s.validate_email() {
            return Err(format!("{} is not a valid mailbox address.", s));
        };
        Ok(Self(s))
    }
}

impl AsRef<str> for MailboxAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MailboxAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
