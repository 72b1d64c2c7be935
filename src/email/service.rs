//! Mail relay using lettre

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Tokio1Executor, message::Mailbox,
    transport::smtp::authentication::Credentials,
};
use tracing::info;

use super::{ContactEmail, MailError};
use crate::config::EmailConfig;

/// Sends composed contact emails to the operator.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: ContactEmail) -> Result<(), MailError>;
}

/// SMTP mailer for the operator account
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    account: String,
}

impl SmtpMailer {
    /// Create a new mailer from configuration
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let transport = if config.account.is_empty() || config.app_password.is_empty() {
            info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                account = %config.account,
                "Mail relay initialized with authentication and TLS"
            );
            let creds = Credentials::new(config.account.clone(), config.app_password.clone());
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        Ok(Self {
            transport,
            account: config.account.clone(),
        })
    }

    fn operator(&self) -> Result<Mailbox, MailError> {
        self.account
            .parse()
            .map_err(|e| MailError::Address(self.account.clone(), e))
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: ContactEmail) -> Result<(), MailError> {
        let operator = self.operator()?;
        let message = email.to_message(&operator)?;

        self.transport.send(message).await?;

        info!(
            subject = %email.subject,
            reply_to = ?email.reply_to.as_ref().map(|m| m.to_string()),
            "Contact message relayed"
        );

        Ok(())
    }
}
