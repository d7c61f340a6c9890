use crate::dtos::NotificationDTO;
use flowerstation_domain::ID;
use serde::{Deserialize, Serialize};

pub mod get_notifications {
    use super::*;

    #[derive(Deserialize, Serialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub notifications: Vec<NotificationDTO>,
        pub unread_count: i64,
    }
}

pub mod mark_notification_read {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub notification_id: ID,
    }

    #[derive(Deserialize, Serialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub success: bool,
        /// Zero when the notification was already read or is not the user's
        pub updated: u64,
    }
}

pub mod mark_all_notifications_read {
    use super::*;

    #[derive(Deserialize, Serialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub success: bool,
        pub updated: u64,
    }
}
