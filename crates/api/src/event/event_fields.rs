use flowerstation_api_structs::EventInput;
use flowerstation_domain::{
    parse_calendar_date, start_of_day, Event, EventType, InvalidDateError, InvalidEventError, Tz,
    ID,
};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum InvalidEventInput {
    #[error(transparent)]
    Event(#[from] InvalidEventError),
    #[error(transparent)]
    Date(#[from] InvalidDateError),
}

/// The user editable fields of an `Event`, validated
#[derive(Debug)]
pub struct EventFields {
    title: String,
    description: Option<String>,
    date_ts: i64,
    time: Option<String>,
    location: Option<String>,
    event_type: EventType,
    attendees: Vec<String>,
}

fn non_blank(val: &Option<String>) -> Option<String> {
    val.as_ref()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(String::from)
}

impl EventFields {
    /// The event date is placed at the start of the calendar day in `tz`
    pub fn parse(input: &EventInput, tz: &Tz) -> Result<Self, InvalidEventInput> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err(InvalidEventError::MissingTitle.into());
        }
        let date = parse_calendar_date(&input.date)?;
        let event_type = EventType::parse(input.event_type.trim(), input.custom_type.as_deref())?;

        Ok(Self {
            title: title.to_string(),
            description: non_blank(&input.description),
            date_ts: start_of_day(date, tz),
            time: non_blank(&input.time),
            location: non_blank(&input.location),
            event_type,
            attendees: input.attendees.clone(),
        })
    }

    pub fn into_event(self, user_id: ID, now: i64) -> Result<Event, InvalidEventInput> {
        let mut event = Event::new(
            user_id,
            self.title.clone(),
            self.date_ts,
            self.event_type.clone(),
            now,
        );
        self.apply_to(&mut event, now)?;
        Ok(event)
    }

    /// Replaces the editable fields. `reminder_sent` is left as it is.
    pub fn apply_to(self, event: &mut Event, now: i64) -> Result<(), InvalidEventInput> {
        event.set_title(&self.title)?;
        event.set_attendees(&self.attendees)?;
        event.description = self.description;
        event.date_ts = self.date_ts;
        event.time = self.time;
        event.location = self.location;
        event.event_type = self.event_type;
        event.updated = now;
        Ok(())
    }
}
