use crate::date::{start_of_day, to_local};
use chrono::Duration;
use chrono_tz::Tz;

/// The day the reminder sweep is looking at, as an inclusive range of
/// millisecond timestamps: `[start-of-day, end-of-day]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderWindow {
    start_ts: i64,
    end_ts: i64,
}

impl ReminderWindow {
    pub fn new(start_ts: i64, end_ts: i64) -> Self {
        Self { start_ts, end_ts }
    }

    /// The local calendar day in `tz` that `now` falls on. The end is the
    /// last millisecond before the next day starts (`23:59:59.999`).
    pub fn for_day_of(now: i64, tz: &Tz) -> Self {
        let today = to_local(now, tz).date_naive();
        let start_ts = start_of_day(today, tz);
        let end_ts = match today.checked_add_signed(Duration::days(1)) {
            Some(tomorrow) => start_of_day(tomorrow, tz) - 1,
            None => i64::MAX,
        };
        Self { start_ts, end_ts }
    }

    pub fn contains(&self, ts: i64) -> bool {
        self.start_ts <= ts && ts <= self.end_ts
    }

    pub fn start(&self) -> i64 {
        self.start_ts
    }

    pub fn end(&self) -> i64 {
        self.end_ts
    }
}
