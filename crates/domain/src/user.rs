use crate::shared::entity::{Entity, ID};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: ID,
    pub name: String,
    pub email: String,
    /// Managed by the authentication provider, never read here
    pub password_hash: Option<String>,
    pub settings: UserSettings,
    pub created: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserSettings {
    pub email_notifications: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            email_notifications: true,
        }
    }
}

impl User {
    pub fn new(name: String, email: String, created: i64) -> Self {
        Self {
            id: Default::default(),
            name,
            email,
            password_hash: None,
            settings: Default::default(),
            created,
        }
    }
}

impl Entity for User {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// Loose e-mail check: a non-empty local part and domain without whitespace
pub fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}
