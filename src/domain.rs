mod contact_submission;
mod message_body;
mod sender_email;
mod sender_name;

pub use contact_submission::{ContactFormData, ContactSubmission};
pub use message_body::MessageBody;
pub use sender_email::{is_valid_email_format, SenderEmail};
pub use sender_name::SenderName;
