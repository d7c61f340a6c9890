use crate::{
    date::format_short_date,
    event::Event,
    shared::entity::{Entity, ID},
};
use chrono_tz::Tz;

/// An in-app message to a `User` about one of their `Event`s
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: ID,
    pub user_id: ID,
    pub event_id: ID,
    pub message: String,
    pub read: bool,
    pub created: i64,
}

impl Notification {
    pub fn new(user_id: ID, event_id: ID, message: String, created: i64) -> Self {
        Self {
            id: Default::default(),
            user_id,
            event_id,
            message,
            read: false,
            created,
        }
    }

    /// Left for the owner by the reminder sweep on the day of the event
    pub fn event_today(event: &Event, created: i64) -> Self {
        Self::new(
            event.user_id.clone(),
            event.id.clone(),
            format!("Reminder: Your event \"{}\" is today!", event.title),
            created,
        )
    }

    pub fn event_created(event: &Event, tz: &Tz, created: i64) -> Self {
        Self::new(
            event.user_id.clone(),
            event.id.clone(),
            format!(
                "New event \"{}\" created for {}",
                event.title,
                format_short_date(event.date_ts, tz)
            ),
            created,
        )
    }

    pub fn mark_read(&mut self) {
        self.read = true;
    }
}

impl Entity for Notification {
    fn id(&self) -> &ID {
        &self.id
    }
}
