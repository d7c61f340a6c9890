use crate::{
    error::StationError,
    shared::{
        auth::protect_cron_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use flowerstation_api_structs::{dtos::ReminderResultDTO, send_reminders::*};
use flowerstation_domain::{EventWithOwner, MailContent, Notification, ReminderWindow, ID};
use flowerstation_infra::StationContext;
use serde::Serialize;
use tracing::{error, info, warn};

#[derive(Serialize)]
struct FailureResponse {
    success: bool,
    error: String,
}

pub async fn send_reminders_controller(
    http_req: HttpRequest,
    ctx: web::Data<StationContext>,
) -> Result<HttpResponse, StationError> {
    if let Err(e) = protect_cron_route(&http_req, &ctx) {
        error!("Unauthorized cron job attempt");
        return Err(e);
    }

    let res = match execute(SendRemindersUseCase, &ctx).await {
        Ok(res) => res,
        Err(UseCaseErrors::StorageError(e)) => {
            return Ok(HttpResponse::InternalServerError().json(FailureResponse {
                success: false,
                error: e,
            }))
        }
    };

    let results = res
        .results
        .into_iter()
        .map(|r| ReminderResultDTO {
            event_id: r.event_id,
            recipient: r.recipient,
            success: r.success,
        })
        .collect();
    Ok(HttpResponse::Ok().json(APIResponse::new(res.processed, results)))
}

/// Outcome of one reminder mail
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderResult {
    pub event_id: ID,
    pub recipient: String,
    pub success: bool,
}

#[derive(Debug)]
pub struct SendRemindersResponse {
    /// Number of events picked up by the sweep
    pub processed: usize,
    pub results: Vec<ReminderResult>,
}

/// The daily reminder sweep.
///
/// Every event dated today that has not been reminded yet gets a reminder
/// mail to its owner and each attendee, a notification for the owner and
/// is then marked as reminded. Failures are isolated to the event or the
/// recipient they happen for. Only a failing event query fails the sweep.
#[derive(Debug)]
pub struct SendRemindersUseCase;

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError(String),
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendRemindersUseCase {
    type Response = SendRemindersResponse;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &StationContext) -> Result<Self::Response, Self::Errors> {
        let now = ctx.sys.get_timestamp_millis();
        let window = ReminderWindow::for_day_of(now, &ctx.config.timezone);
        info!(
            "Checking for events between {} and {}",
            window.start(),
            window.end()
        );

        let events = ctx
            .repos
            .events
            .find_unreminded(&window)
            .await
            .map_err(|e| UseCaseErrors::StorageError(e.to_string()))?;
        info!("Found {} events requiring reminders", events.len());

        let mut results = Vec::new();
        for event in &events {
            results.extend(remind(event, now, ctx).await);
        }

        info!(
            "Processed {} events, {} reminder mails attempted",
            events.len(),
            results.len()
        );
        Ok(SendRemindersResponse {
            processed: events.len(),
            results,
        })
    }
}

async fn send_reminder(
    event: &EventWithOwner,
    recipient: &str,
    content: &MailContent,
    ctx: &StationContext,
) -> ReminderResult {
    let success = match ctx.mailer.send(recipient, content).await {
        Ok(_) => true,
        Err(e) => {
            error!(
                "Failed to send reminder for event {} to {}: {}",
                event.event.id, recipient, e
            );
            false
        }
    };
    ReminderResult {
        event_id: event.event.id.clone(),
        recipient: recipient.to_string(),
        success,
    }
}

/// Mails the owner and the attendees, notifies the owner and marks the
/// event as reminded, in that order
async fn remind(event: &EventWithOwner, now: i64, ctx: &StationContext) -> Vec<ReminderResult> {
    let e = &event.event;
    info!("Processing event: {} - {}", e.id, e.title);

    let content = MailContent::event_reminder(e, &ctx.config.timezone, now);
    let mut results = Vec::with_capacity(e.attendees.len() + 1);

    match event.owner_email() {
        Some(owner_email) => results.push(send_reminder(event, owner_email, &content, ctx).await),
        None => warn!(
            "Event {} has no user email, skipping owner notification",
            e.id
        ),
    }

    for attendee in &e.attendees {
        results.push(send_reminder(event, attendee, &content, ctx).await);
    }

    let notification = Notification::event_today(e, now);
    if let Err(err) = ctx.repos.notifications.insert(&notification).await {
        error!("Error creating notification for event {}: {:?}", e.id, err);
    }

    match ctx.repos.events.set_reminded(&e.id).await {
        Ok(_) => info!("Event {} marked as reminded", e.id),
        Err(err) => error!("Error marking event {} as reminded: {:?}", e.id, err),
    }

    results
}
