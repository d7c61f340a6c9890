use flowerstation_domain::{User, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserDTO {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub email_notifications: bool,
    pub created: i64,
}

impl UserDTO {
    pub fn new(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            email_notifications: user.settings.email_notifications,
            created: user.created,
        }
    }
}
