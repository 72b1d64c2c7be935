use askama::Template;
use folio_contact::Submission;
use lettre::Message;
use lettre::message::{Mailbox, header::ContentType};

mod service;

pub use service::*;

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("invalid operator address `{0}`: {1}")]
    Address(String, #[source] lettre::address::AddressError),

    #[error("failed to render message body: {0}")]
    Render(#[from] askama::Error),

    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// Contact message plain text template
#[derive(Template)]
#[template(path = "emails/contact-message.txt")]
struct ContactMessageTemplate<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

/// Email relayed to the operator for one contact submission.
///
/// Fields are interpolated verbatim. The submitter becomes the reply-to
/// address when it parses as a mailbox; otherwise the message goes out
/// without one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmail {
    pub reply_to: Option<Mailbox>,
    pub subject: String,
    pub body: String,
}

impl ContactEmail {
    pub fn compose(submission: &Submission) -> Result<Self, MailError> {
        let reply_to = match submission.email.parse::<Mailbox>() {
            Ok(mailbox) => Some(mailbox),
            Err(e) => {
                tracing::warn!(
                    email = %submission.email,
                    error = %e,
                    "Submitted email is not a valid mailbox, relaying without reply-to"
                );
                None
            }
        };

        let body = ContactMessageTemplate {
            name: &submission.name,
            email: &submission.email,
            message: &submission.message,
        }
        .render()?;

        Ok(Self {
            reply_to,
            subject: format!("New Contact Form Message from {}", submission.name),
            body,
        })
    }

    /// Build the message sent from and to the operator account.
    pub fn to_message(&self, operator: &Mailbox) -> Result<Message, MailError> {
        let mut builder = Message::builder()
            .from(operator.clone())
            .to(operator.clone());

        if let Some(reply_to) = &self.reply_to {
            builder = builder.reply_to(reply_to.clone());
        }

        Ok(builder
            .subject(&self.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(self.body.clone())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operator() -> Mailbox {
        "owner@example.com".parse().unwrap()
    }

    #[test]
    fn test_compose_contact_email() {
        let submission = Submission::new("Jane Doe", "jane@example.com", "Hello");
        let email = ContactEmail::compose(&submission).unwrap();

        assert_eq!(email.reply_to, Some("jane@example.com".parse().unwrap()));
        assert!(email.subject.contains("Jane Doe"));
        assert!(email.body.contains("Hello"));
        assert!(email.body.contains("Name: Jane Doe"));
        assert!(email.body.contains("Email: jane@example.com"));
        assert!(email.body.contains("Message: Hello"));
    }

    #[test]
    fn test_fields_are_not_escaped() {
        let submission = Submission::new("<b>Jane</b>", "jane@example.com", "a & b \"quoted\"");
        let email = ContactEmail::compose(&submission).unwrap();

        assert!(email.body.contains("Name: <b>Jane</b>"));
        assert!(email.body.contains("Message: a & b \"quoted\""));
    }

    #[test]
    fn test_missing_email_drops_reply_to() {
        let submission = Submission::new("Jane Doe", "", "Hello");
        let email = ContactEmail::compose(&submission).unwrap();

        assert_eq!(email.reply_to, None);
        assert!(email.body.contains("Email: \n"));

        let message = email.to_message(&operator()).unwrap();
        let raw = String::from_utf8_lossy(&message.formatted()).to_string();
        assert!(!raw.contains("Reply-To"));
    }

    #[test]
    fn test_message_addresses_operator() {
        let submission = Submission::new("Jane Doe", "jane@example.com", "Hello");
        let message = ContactEmail::compose(&submission)
            .unwrap()
            .to_message(&operator())
            .unwrap();

        let raw = String::from_utf8_lossy(&message.formatted()).to_string();
        assert!(raw.contains("From: owner@example.com"));
        assert!(raw.contains("To: owner@example.com"));
        assert!(raw.contains("Reply-To: jane@example.com"));
        assert!(raw.contains("Subject: New Contact Form Message from Jane Doe"));
        assert!(raw.contains("Hello"));
    }
}
