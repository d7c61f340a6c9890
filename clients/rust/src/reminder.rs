use crate::{APIResponse, BaseClient};
use flowerstation_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// Triggers the reminder sweep. Needs the SDK to be created with the
    /// cron secret as its bearer token when the server has one configured.
    pub async fn send_reminders(&self) -> APIResponse<send_reminders::APIResponse> {
        self.base
            .get("cron/send-reminders".into(), StatusCode::OK)
            .await
    }

    pub async fn send_test_email(&self, email: &str) -> APIResponse<send_test_email::APIResponse> {
        self.base
            .get(format!("test-email-send?email={}", email), StatusCode::OK)
            .await
    }
}
