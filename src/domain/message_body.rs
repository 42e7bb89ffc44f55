#[derive(Debug, Clone)]
pub struct MessageBody(String);

impl MessageBody {
    pub fn parse(s: String) -> Result<MessageBody, String> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err("the message body cannot be empty.".to_string());
        }

        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for MessageBody {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
