use async_trait::async_trait;

use crate::error::MailError;

pub mod contact;
pub mod smtp_mailer;

/// A composed message. Sender and recipient are decided by the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingMail {
    pub reply_to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, mail: &OutgoingMail) -> Result<(), MailError>;
}
