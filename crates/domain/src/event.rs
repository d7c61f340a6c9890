use crate::{
    reminder::ReminderWindow,
    shared::entity::{Entity, ID},
    user::{is_valid_email, User},
};
use thiserror::Error;

/// A calendar event owned by a `User`.
///
/// `reminder_sent` flips from false to true once, when the reminder sweep
/// has attempted every reminder mail for the event and persisted the flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: ID,
    pub title: String,
    pub description: Option<String>,
    /// Start of the event day in millis
    pub date_ts: i64,
    /// Free text time of day, e.g. "18:30" or "6 PM"
    pub time: Option<String>,
    pub location: Option<String>,
    pub event_type: EventType,
    pub user_id: ID,
    pub attendees: Vec<String>,
    pub reminder_sent: bool,
    pub created: i64,
    pub updated: i64,
}

impl Event {
    pub fn new(user_id: ID, title: String, date_ts: i64, event_type: EventType, now: i64) -> Self {
        Self {
            id: Default::default(),
            title,
            description: None,
            date_ts,
            time: None,
            location: None,
            event_type,
            user_id,
            attendees: Vec::new(),
            reminder_sent: false,
            created: now,
            updated: now,
        }
    }

    /// Whether the reminder sweep running for `window` should pick up this event
    pub fn needs_reminder(&self, window: &ReminderWindow) -> bool {
        !self.reminder_sent && window.contains(self.date_ts)
    }

    pub fn mark_reminded(&mut self) {
        self.reminder_sent = true;
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), InvalidEventError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(InvalidEventError::MissingTitle);
        }
        self.title = title.to_string();
        Ok(())
    }

    /// Replaces the attendee list. Addresses are trimmed and blank entries dropped.
    pub fn set_attendees(&mut self, attendees: &[String]) -> Result<(), InvalidEventError> {
        let mut parsed = Vec::with_capacity(attendees.len());
        for attendee in attendees {
            let attendee = attendee.trim();
            if attendee.is_empty() {
                continue;
            }
            if !is_valid_email(attendee) {
                return Err(InvalidEventError::InvalidAttendee(attendee.to_string()));
            }
            parsed.push(attendee.to_string());
        }
        self.attendees = parsed;
        Ok(())
    }
}

impl Entity for Event {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// The kind of occasion an `Event` is about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventType {
    Birthday,
    Anniversary,
    Wedding,
    Celebration,
    Custom(String),
}

impl EventType {
    /// Name used for `Custom` event types in requests and storage
    pub const OTHER: &'static str = "Other";

    pub fn parse(kind: &str, custom_label: Option<&str>) -> Result<Self, InvalidEventError> {
        match kind {
            "Birthday" => Ok(Self::Birthday),
            "Anniversary" => Ok(Self::Anniversary),
            "Wedding" => Ok(Self::Wedding),
            "Celebration" => Ok(Self::Celebration),
            Self::OTHER => match custom_label.map(|l| l.trim()) {
                Some(label) if !label.is_empty() => Ok(Self::Custom(label.to_string())),
                _ => Err(InvalidEventError::MissingCustomLabel),
            },
            _ => Err(InvalidEventError::UnknownType(kind.to_string())),
        }
    }

    pub fn kind(&self) -> &str {
        match self {
            Self::Birthday => "Birthday",
            Self::Anniversary => "Anniversary",
            Self::Wedding => "Wedding",
            Self::Celebration => "Celebration",
            Self::Custom(_) => Self::OTHER,
        }
    }

    pub fn custom_label(&self) -> Option<&str> {
        match self {
            Self::Custom(label) => Some(label),
            _ => None,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidEventError {
    #[error("Title is required")]
    MissingTitle,
    #[error("Unknown event type: {0}")]
    UnknownType(String),
    #[error("Events of type Other need a custom type")]
    MissingCustomLabel,
    #[error("Attendee: {0} is not a valid e-mail address")]
    InvalidAttendee(String),
}

/// An `Event` together with its owner, as selected by the reminder sweep.
/// The owner is missing when the user has been deleted.
#[derive(Debug, Clone)]
pub struct EventWithOwner {
    pub event: Event,
    pub owner: Option<User>,
}

impl EventWithOwner {
    pub fn owner_email(&self) -> Option<&str> {
        self.owner
            .as_ref()
            .map(|owner| owner.email.as_str())
            .filter(|email| !email.trim().is_empty())
    }
}
