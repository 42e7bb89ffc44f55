use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email format regex is valid")
});

/// Loose `<local>@<domain>.<tld>` shape check.
///
/// Both the contact form and the intake endpoint run this check on their own.
pub fn is_valid_email_format(s: &str) -> bool {
    EMAIL_FORMAT.is_match(s)
}

#[derive(Debug, Clone)]
pub struct SenderEmail(String);

impl SenderEmail {
    pub fn parse(s: String) -> Result<SenderEmail, String> {
        let trimmed = s.trim();

        if !is_valid_email_format(trimmed) {
            return Err(format!("{:?} is not a valid email address.", s));
        }

        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for SenderEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SenderEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
