use super::{IMailer, MailError, SentMail};
use flowerstation_domain::MailContent;
use std::sync::{Mutex, PoisonError};
use tracing::info;
use uuid::Uuid;

/// Records mails instead of delivering them. Used in tests and when no SMTP
/// server is configured.
pub struct InMemoryMailer {
    sent: Mutex<Vec<(String, MailContent)>>,
    failing: Mutex<Vec<String>>,
}

impl InMemoryMailer {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(vec![]),
            failing: Mutex::new(vec![]),
        }
    }

    /// Makes every later send to `recipient` fail
    pub fn fail_for(&self, recipient: &str) {
        self.failing
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(recipient.to_lowercase());
    }

    /// Recipient and content of every successfully sent mail, in send order
    pub fn sent(&self) -> Vec<(String, MailContent)> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for InMemoryMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IMailer for InMemoryMailer {
    async fn send(&self, to: &str, content: &MailContent) -> Result<SentMail, MailError> {
        let fails = self
            .failing
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&to.to_lowercase());
        if fails {
            return Err(MailError::Send(format!("Mailbox {} is unavailable", to)));
        }

        let id = format!("<{}@flowerstation>", Uuid::new_v4());
        info!("Email to {} with subject {:?} recorded as {}", to, content.subject, id);
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((to.to_string(), content.clone()));
        Ok(SentMail { id })
    }
}
