use flowerstation_domain::{Event, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EventDTO {
    pub id: ID,
    pub title: String,
    pub description: Option<String>,
    pub date_ts: i64,
    pub time: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub event_type: String,
    pub custom_type: Option<String>,
    pub user_id: ID,
    pub attendees: Vec<String>,
    pub reminder_sent: bool,
    pub created: i64,
    pub updated: i64,
}

impl EventDTO {
    pub fn new(event: Event) -> Self {
        Self {
            event_type: event.event_type.kind().to_string(),
            custom_type: event.event_type.custom_label().map(String::from),
            id: event.id,
            title: event.title,
            description: event.description,
            date_ts: event.date_ts,
            time: event.time,
            location: event.location,
            user_id: event.user_id,
            attendees: event.attendees,
            reminder_sent: event.reminder_sent,
            created: event.created,
            updated: event.updated,
        }
    }
}
