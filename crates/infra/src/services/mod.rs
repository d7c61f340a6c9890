mod mailer;

pub use mailer::{IMailer, InMemoryMailer, MailError, SentMail, SmtpMailer};
