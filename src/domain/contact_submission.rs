use serde_json::Value;

use crate::domain::{MessageBody, SenderEmail, SenderName};

/// Raw contact form payload, as typed by the visitor.
#[derive(serde::Serialize, Debug, Clone, Default)]
pub struct ContactFormData {
    pub from: String,
    pub email: String,
    pub subject: String,
}

impl ContactFormData {
    /// Reads the three fields out of a JSON request body.
    ///
    /// Fails only when the body is not JSON or is `null`. A missing or
    /// non-string field, or a body that is not an object, yields empty
    /// strings so the submission fails validation instead.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_slice(body)?;
        if value.is_null() {
            return Err(<serde_json::Error as serde::de::Error>::custom(
                "cannot read fields of a null body",
            ));
        }

        let field = |name: &str| {
            value
                .get(name)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Ok(Self {
            from: field("from"),
            email: field("email"),
            subject: field("subject"),
        })
    }
}

#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub from: SenderName,
    pub email: SenderEmail,
    pub subject: MessageBody,
}

impl TryFrom<ContactFormData> for ContactSubmission {
    type Error = String;

    fn try_from(form: ContactFormData) -> Result<Self, Self::Error> {
        let from = SenderName::parse(form.from)?;
        let email = SenderEmail::parse(form.email)?;
        let subject = MessageBody::parse(form.subject)?;

        Ok(Self {
            from,
            email,
            subject,
        })
    }
}

impl ContactSubmission {
    pub fn subject_line(&self) -> String {
        format!("Contact Form: {}", self.from.as_ref())
    }

    pub fn text_body(&self) -> String {
        format!(
            "New contact submission\n\nFrom: {}\nEmail: {}\n\nSubject / Message:\n{}",
            self.from.as_ref(),
            self.email.as_ref(),
            self.subject.as_ref()
        )
    }
}
