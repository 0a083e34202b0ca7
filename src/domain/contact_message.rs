use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage(String);

impl ContactMessage {
    /// Shortest message the contact form lets through, in grapheme clusters
    /// after trimming. An emoji or an accented letter counts once.
    pub const MIN_LENGTH: usize = 10;

    pub fn parse(s: String) -> Result<Self, String> {
        if s.trim().is_empty() {
            return Err("Contact message must not be empty.".to_string());
        }
        Ok(Self(s))
    }

    pub fn meets_min_length(s: &str) -> bool {
        s.trim().graphemes(true).count() >= Self::MIN_LENGTH
    }
}

impl AsRef<str> for ContactMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
