use ntex::http::StatusCode;
use quick_xml::escape::escape;
use serde::{Deserialize, Serialize};
use spdlog::{error, info};

use crate::error::ContactError;
use crate::mail::{MailTransport, OutgoingMail};

const MISSING_FIELDS: &str = "All fields are required";
const INVALID_BODY: &str = "Invalid request body";
const SENT: &str = "Email sent successfully";

#[derive(Deserialize, Default, Debug)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ContactReply {
    pub message: String,
}

impl ContactReply {
    fn new(message: &str) -> Self {
        ContactReply { message: message.to_string() }
    }
}

fn required(value: Option<String>) -> Result<String, ContactError> {
    value.filter(|v| !v.trim().is_empty())
        .ok_or(ContactError::Validation(MISSING_FIELDS))
}

impl ContactForm {
    pub fn validate(self) -> Result<ContactMessage, ContactError> {
        Ok(ContactMessage {
            name: required(self.name)?,
            email: required(self.email)?,
            message: required(self.message)?,
        })
    }
}

impl ContactMessage {
    pub fn to_mail(&self) -> OutgoingMail {
        let text = format!("Name: {}\nEmail: {}\n\nMessage:\n{}\n", self.name, self.email, self.message);
        let html = format!(
            r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2>New Contact Form Submission</h2>
  <p><strong>Name:</strong> {}</p>
  <p><strong>Email:</strong> {}</p>
  <h3>Message:</h3>
  <p>{}</p>
</div>"#,
            escape(self.name.as_str()),
            escape(self.email.as_str()),
            escape(self.message.as_str()).replace('\n', "<br>"),
        );

        OutgoingMail {
            reply_to: self.email.clone(),
            subject: format!("New Contact Form Submission from {}", self.name),
            text,
            html,
        }
    }
}

async fn send_contact(body: &[u8], transport: &dyn MailTransport) -> Result<(), ContactError> {
    let form: ContactForm = serde_json::from_slice(body)
        .map_err(|_| ContactError::Validation(INVALID_BODY))?;
    let contact = form.validate()?;
    transport.send(&contact.to_mail()).await?;
    info!("Contact message from {} relayed", contact.email);
    Ok(())
}

/// Validates a JSON contact submission and relays it. The transport is only used for valid forms.
pub async fn relay(body: &[u8], transport: &dyn MailTransport) -> (StatusCode, ContactReply) {
    match send_contact(body, transport).await {
        Ok(()) => (StatusCode::OK, ContactReply::new(SENT)),
        Err(e) => {
            if let ContactError::Mail(ref mail_error) = e {
                error!("Error sending email: {}", mail_error);
            }
            (e.status(), ContactReply { message: e.to_string() })
        }
    }
}
