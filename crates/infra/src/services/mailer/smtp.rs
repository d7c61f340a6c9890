use super::{IMailer, MailError, SentMail};
use crate::config::MailConfig;
use flowerstation_domain::MailContent;
use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::{error, info};
use uuid::Uuid;

/// Delivers mails through the configured SMTP server
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &MailConfig) -> Result<Self, MailError> {
        let host = config
            .host
            .as_deref()
            .ok_or_else(|| MailError::Config("EMAIL_SERVER_HOST is not set".into()))?;
        let from = config
            .from
            .parse::<Mailbox>()
            .map_err(|e| MailError::InvalidAddress(format!("{}: {}", config.from, e)))?;

        // Port 465 style servers expect TLS from the first byte, others upgrade with STARTTLS
        let builder = if config.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
        }
        .map_err(|e| MailError::Config(e.to_string()))?
        .port(config.port);

        let builder = match (&config.user, &config.password) {
            (Some(user), Some(password)) => {
                builder.credentials(Credentials::new(user.clone(), password.clone()))
            }
            _ => builder,
        };

        info!(
            "Using SMTP server {}:{} (secure: {})",
            host, config.port, config.secure
        );

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }

    fn build_message(
        &self,
        to: &str,
        content: &MailContent,
        message_id: &str,
    ) -> Result<Message, MailError> {
        let to = to
            .parse::<Mailbox>()
            .map_err(|e| MailError::InvalidAddress(format!("{}: {}", to, e)))?;

        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(content.subject.clone())
            .message_id(Some(message_id.to_string()))
            .multipart(MultiPart::alternative_plain_html(
                content.text.clone(),
                content.html.clone(),
            ))
            .map_err(|e| MailError::Build(e.to_string()))
    }
}

#[async_trait::async_trait]
impl IMailer for SmtpMailer {
    async fn send(&self, to: &str, content: &MailContent) -> Result<SentMail, MailError> {
        let message_id = format!("<{}@flowerstation>", Uuid::new_v4());
        let message = self.build_message(to, content, &message_id)?;

        match self.transport.send(message).await {
            Ok(_) => {
                info!("Email sent to {}: {}", to, message_id);
                Ok(SentMail { id: message_id })
            }
            Err(e) => {
                error!("Error sending email to {}: {:?}", to, e);
                Err(MailError::Send(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> MailConfig {
        MailConfig {
            host: Some("smtp.example.com".into()),
            port: 587,
            user: Some("mailer".into()),
            password: Some("secret".into()),
            secure: false,
            from: "Flower Station <noreply@flowerstation.com>".into(),
        }
    }

    fn content() -> MailContent {
        MailContent {
            subject: "Reminder: Party Today!".into(),
            text: "Party".into(),
            html: "<p>Party</p>".into(),
        }
    }

    #[tokio::test]
    async fn rejects_missing_host() {
        let mut config = config();
        config.host = None;
        assert!(matches!(SmtpMailer::new(&config), Err(MailError::Config(_))));
    }

    #[tokio::test]
    async fn rejects_invalid_sender() {
        let mut config = config();
        config.from = "not an address".into();
        assert!(matches!(
            SmtpMailer::new(&config),
            Err(MailError::InvalidAddress(_))
        ));
    }

    #[tokio::test]
    async fn builds_multipart_message() {
        let mailer = SmtpMailer::new(&config()).expect("To create mailer");
        let message = mailer
            .build_message("ada@example.com", &content(), "<1@flowerstation>")
            .expect("To build message");
        let formatted = String::from_utf8(message.formatted()).expect("Utf8 message");
        assert!(formatted.contains("Subject: Reminder: Party Today!"));
        assert!(formatted.contains("To: ada@example.com"));
        assert!(formatted.contains("multipart/alternative"));

        assert!(matches!(
            mailer.build_message("nope", &content(), "<2@flowerstation>"),
            Err(MailError::InvalidAddress(_))
        ));
    }
}
