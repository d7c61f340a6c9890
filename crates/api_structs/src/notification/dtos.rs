use flowerstation_domain::{Notification, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDTO {
    pub id: ID,
    pub event_id: ID,
    /// Missing when the event could not be found
    pub event_title: Option<String>,
    pub message: String,
    pub read: bool,
    pub created: i64,
}

impl NotificationDTO {
    pub fn new(notification: Notification, event_title: Option<String>) -> Self {
        Self {
            id: notification.id,
            event_id: notification.event_id,
            event_title,
            message: notification.message,
            read: notification.read,
            created: notification.created,
        }
    }
}
