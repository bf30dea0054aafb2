use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config;
use crate::error::MailError;
use crate::mail::{MailTransport, OutgoingMail};

/// Relays mail through an authenticated SMTP server. A connection is opened per message.
pub struct SmtpMailer {
    config: config::Mail,
}

impl SmtpMailer {
    pub fn new(config: &config::Mail) -> Self {
        SmtpMailer { config: config.clone() }
    }
}

fn mailbox(address: &str) -> Result<Mailbox, MailError> {
    address.parse().map_err(|_| MailError::Address(address.to_string()))
}

pub fn build_message(from: &str, to: &str, mail: &OutgoingMail) -> Result<Message, MailError> {
    let mut builder = Message::builder()
        .from(mailbox(from)?)
        .to(mailbox(to)?)
        .subject(mail.subject.as_str());

    // Reply-To is left out when the submitted address does not parse
    if let Ok(reply_to) = mailbox(&mail.reply_to) {
        builder = builder.reply_to(reply_to);
    }

    let message = builder.multipart(MultiPart::alternative_plain_html(mail.text.clone(), mail.html.clone()))?;
    Ok(message)
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send(&self, mail: &OutgoingMail) -> Result<(), MailError> {
        let username = self.config.username.as_deref().ok_or(MailError::NotConfigured("username"))?;
        let password = self.config.password.as_deref().ok_or(MailError::NotConfigured("password"))?;
        let recipient = self.config.recipient().ok_or(MailError::NotConfigured("recipient"))?;

        let message = build_message(username, recipient, mail)?;
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.config.smtp_host)?
            .credentials(Credentials::new(username.to_string(), password.to_string()))
            .build();

        transport.send(message).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mail(reply_to: &str) -> OutgoingMail {
        OutgoingMail {
            reply_to: reply_to.to_string(),
            subject: "New Contact Form Submission from Ada".to_string(),
            text: "Name: Ada".to_string(),
            html: "<p>Name: Ada</p>".to_string(),
        }
    }

    #[test]
    fn test_build_message() {
        let message = build_message("blog@example.com", "inbox@example.com", &mail("ada@example.com")).unwrap();
        let formatted = String::from_utf8(message.formatted()).unwrap();
        assert!(formatted.contains("From: blog@example.com"));
        assert!(formatted.contains("To: inbox@example.com"));
        assert!(formatted.contains("Reply-To: ada@example.com"));
        assert!(formatted.contains("Subject: New Contact Form Submission from Ada"));
        assert!(formatted.contains("multipart/alternative"));
    }

    #[test]
    fn test_build_message_bad_reply_to() {
        let message = build_message("blog@example.com", "inbox@example.com", &mail("not an address")).unwrap();
        let formatted = String::from_utf8(message.formatted()).unwrap();
        assert!(!formatted.contains("Reply-To:"));
    }

    #[test]
    fn test_build_message_bad_sender() {
        let res = build_message("nope", "inbox@example.com", &mail("ada@example.com"));
        assert!(matches!(res, Err(MailError::Address(_))));
    }

    #[ntex::test]
    async fn test_send_not_configured() {
        let mailer = SmtpMailer::new(&config::Mail::default());
        let res = mailer.send(&mail("ada@example.com")).await;
        assert!(matches!(res, Err(MailError::NotConfigured("username"))));
    }
}
