use crate::dtos::ReminderResultDTO;
use serde::{Deserialize, Serialize};

pub mod send_reminders {
    use super::*;

    #[derive(Deserialize, Serialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub success: bool,
        pub message: String,
        pub results: Vec<ReminderResultDTO>,
    }

    impl APIResponse {
        pub fn new(processed: usize, results: Vec<ReminderResultDTO>) -> Self {
            Self {
                success: true,
                message: format!("Processed {} events", processed),
                results,
            }
        }
    }
}

pub mod send_test_email {
    use super::*;

    #[derive(Deserialize, Serialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub email: Option<String>,
    }

    #[derive(Deserialize, Serialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub success: bool,
        pub message: String,
        pub message_id: Option<String>,
        pub error: Option<String>,
    }
}
