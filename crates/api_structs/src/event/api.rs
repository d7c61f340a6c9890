use crate::dtos::EventDTO;
use flowerstation_domain::{Event, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub event: EventDTO,
}

impl EventResponse {
    pub fn new(event: Event) -> Self {
        Self {
            event: EventDTO::new(event),
        }
    }
}

/// Input of both creating and updating an event
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct EventInput {
    pub title: String,
    pub description: Option<String>,
    /// Calendar date formatted as YYYY-MM-DD
    pub date: String,
    pub time: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub event_type: String,
    /// Required when the type is Other
    pub custom_type: Option<String>,
    #[serde(default)]
    pub attendees: Vec<String>,
}

pub mod create_event {
    use super::*;

    pub type RequestBody = EventInput;

    pub type APIResponse = EventResponse;
}

pub mod get_events {
    use super::*;

    #[derive(Deserialize, Serialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub events: Vec<EventDTO>,
    }

    impl APIResponse {
        pub fn new(events: Vec<Event>) -> Self {
            Self {
                events: events.into_iter().map(EventDTO::new).collect(),
            }
        }
    }
}

pub mod get_event {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub event_id: ID,
    }

    pub type APIResponse = EventResponse;
}

pub mod update_event {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub event_id: ID,
    }

    pub type RequestBody = EventInput;

    pub type APIResponse = EventResponse;
}

pub mod delete_event {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub event_id: ID,
    }

    pub type APIResponse = EventResponse;
}
