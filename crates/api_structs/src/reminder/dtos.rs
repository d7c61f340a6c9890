use flowerstation_domain::ID;
use serde::{Deserialize, Serialize};

/// Outcome of sending one reminder mail
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderResultDTO {
    pub event_id: ID,
    pub recipient: String,
    pub success: bool,
}
