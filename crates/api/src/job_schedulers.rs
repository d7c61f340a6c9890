use crate::{reminder::send_reminders::SendRemindersUseCase, shared::usecase::execute};
use actix_web::rt::time::sleep;
use chrono::{NaiveDate, TimeZone};
use flowerstation_domain::{to_local, Tz};
use flowerstation_infra::StationContext;
use std::time::Duration;
use tracing::{error, info};

const DAY_MILLIS: i64 = 1000 * 60 * 60 * 24;

/// Millis from `now_ts` until the next time the clock in `tz` shows `hour`
/// o'clock. A `now_ts` exactly on the hour waits until the next day.
pub fn get_start_delay(now_ts: i64, hour: u32, tz: &Tz) -> i64 {
    let now = to_local(now_ts, tz);
    let at_hour = |date: NaiveDate| {
        date.and_hms_opt(hour, 0, 0)
            .and_then(|dt| tz.from_local_datetime(&dt).earliest())
    };

    let today = now.date_naive();
    let next = match at_hour(today) {
        Some(at) if at > now => Some(at),
        _ => today.succ_opt().and_then(at_hour),
    };
    match next {
        Some(at) => (at - now).num_milliseconds(),
        // The hour does not exist tomorrow in this timezone
        None => DAY_MILLIS - now_ts.rem_euclid(DAY_MILLIS),
    }
}

/// Timestamp of the next sweep. Counting from the previous run keeps a timer
/// that fires slightly early from running the same day twice.
fn next_run_at(now_ts: i64, last_run: Option<i64>, hour: u32, tz: &Tz) -> i64 {
    let from = last_run.map_or(now_ts, |last| last.max(now_ts));
    from + get_start_delay(from, hour, tz)
}

/// Runs the reminder sweep once a day at the configured hour
pub fn start_send_reminders_job(ctx: StationContext) {
    if !ctx.config.reminder_job.enabled {
        info!("Reminder job is disabled, reminders are only sent when the cron endpoint is called");
        return;
    }

    actix_web::rt::spawn(async move {
        let hour = ctx.config.reminder_job.hour;
        let mut last_run = None;
        loop {
            let now = ctx.sys.get_timestamp_millis();
            let run_at = next_run_at(now, last_run, hour, &ctx.config.timezone);
            info!(
                "Reminder job scheduled to run in {} minutes",
                (run_at - now) / (1000 * 60)
            );
            sleep(Duration::from_millis((run_at - now).max(0) as u64)).await;
            last_run = Some(run_at);

            match execute(SendRemindersUseCase, &ctx).await {
                Ok(res) => info!(
                    "Reminder job processed {} events, {} mails attempted",
                    res.processed,
                    res.results.len()
                ),
                Err(e) => error!("Reminder job failed: {:?}", e),
            }
        }
    });
}
