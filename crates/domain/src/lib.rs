mod date;
mod event;
mod mail;
mod notification;
mod reminder;
mod shared;
mod user;

pub use date::{
    format_long_date, format_short_date, parse_calendar_date, start_of_day, to_local,
    InvalidDateError,
};
pub use event::{Event, EventType, EventWithOwner, InvalidEventError};
pub use mail::MailContent;
pub use notification::Notification;
pub use reminder::ReminderWindow;
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use user::{is_valid_email, User, UserSettings};

pub use chrono_tz::Tz;
