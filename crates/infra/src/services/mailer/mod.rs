mod inmemory;
mod smtp;

use flowerstation_domain::MailContent;
pub use inmemory::InMemoryMailer;
pub use smtp::SmtpMailer;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMail {
    /// Message id assigned to the outgoing mail
    pub id: String,
}

#[derive(Error, Debug)]
pub enum MailError {
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),
    #[error("Unable to build the email: {0}")]
    Build(String),
    #[error("SMTP configuration error: {0}")]
    Config(String),
    #[error("SMTP send error: {0}")]
    Send(String),
}

/// Outbound mail gateway
#[async_trait::async_trait]
pub trait IMailer: Send + Sync {
    async fn send(&self, to: &str, content: &MailContent) -> Result<SentMail, MailError>;
}
