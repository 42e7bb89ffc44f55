#[derive(Debug, Clone)]
pub struct SenderName(String);

impl SenderName {
    /// Returns an instance of `SenderName` if the trimmed input is not empty.
    pub fn parse(s: String) -> Result<SenderName, String> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(format!("{:?} is not a valid sender name.", s));
        }

        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for SenderName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
