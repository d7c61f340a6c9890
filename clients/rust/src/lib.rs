mod base;
mod event;
mod notification;
mod reminder;
mod status;
mod user;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};
use event::EventClient;
pub use event::{CreateEventInput, UpdateEventInput};
pub use flowerstation_api_structs::dtos::*;
pub use flowerstation_api_structs::EventInput;
pub use flowerstation_domain::ID;
use notification::NotificationClient;
use reminder::ReminderClient;
use status::StatusClient;
use std::sync::Arc;
use user::UserClient;
pub use user::{CreateUserInput, UpdateMeInput};

// Domain
pub use flowerstation_api_structs::dtos::EventDTO as Event;
pub use flowerstation_api_structs::dtos::NotificationDTO as Notification;
pub use flowerstation_api_structs::dtos::ReminderResultDTO as ReminderResult;
pub use flowerstation_api_structs::dtos::UserDTO as User;

/// Flower Station Server SDK
///
/// The SDK contains methods for interacting with the Flower Station server
/// API.
#[derive(Clone)]
pub struct StationSDK {
    pub event: EventClient,
    pub notification: NotificationClient,
    pub reminder: ReminderClient,
    pub status: StatusClient,
    pub user: UserClient,
}

impl StationSDK {
    /// Client without credentials, only the public routes can be used
    pub fn new<T: Into<String>>(address: T) -> Self {
        Self::from_base(BaseClient::new(address.into()))
    }

    /// Client for the authentication provider that registers users
    pub fn with_api_key<T: Into<String>, K: Into<String>>(address: T, api_key: K) -> Self {
        let mut base = BaseClient::new(address.into());
        base.set_api_key(api_key.into());
        Self::from_base(base)
    }

    /// Client acting with a session token or the cron secret
    pub fn with_bearer_token<T: Into<String>, K: Into<String>>(address: T, token: K) -> Self {
        let mut base = BaseClient::new(address.into());
        base.set_bearer_token(token.into());
        Self::from_base(base)
    }

    fn from_base(base: BaseClient) -> Self {
        let base = Arc::new(base);
        Self {
            event: EventClient::new(base.clone()),
            notification: NotificationClient::new(base.clone()),
            reminder: ReminderClient::new(base.clone()),
            status: StatusClient::new(base.clone()),
            user: UserClient::new(base),
        }
    }
}
