use crate::{error::StationError, shared::auth::protect_cron_route};
use actix_web::{web, HttpRequest, HttpResponse};
use flowerstation_api_structs::send_test_email::*;
use flowerstation_domain::{is_valid_email, Event, EventType, MailContent, ID};
use flowerstation_infra::StationContext;
use tracing::info;

/// Sends a reminder for a made up event happening now, to check the mail setup
pub async fn send_test_email_controller(
    http_req: HttpRequest,
    query: web::Query<QueryParams>,
    ctx: web::Data<StationContext>,
) -> Result<HttpResponse, StationError> {
    protect_cron_route(&http_req, &ctx)?;
    info!("Manual email test endpoint called");

    let email = match query.email.as_deref().map(str::trim) {
        Some(email) if is_valid_email(email) => email.to_string(),
        _ => {
            return Ok(HttpResponse::BadRequest().json(APIResponse {
                success: false,
                message: "Email parameter is required".into(),
                message_id: None,
                error: None,
            }))
        }
    };

    let now = ctx.sys.get_timestamp_millis();
    let mut event = Event::new(ID::new(), "Test Event".into(), now, EventType::Celebration, now);
    event.time = Some("12:00 PM".into());
    event.location = Some("Test Location".into());
    let content = MailContent::event_reminder(&event, &ctx.config.timezone, now);

    let res = match ctx.mailer.send(&email, &content).await {
        Ok(sent) => APIResponse {
            success: true,
            message: "Test email sent successfully".into(),
            message_id: Some(sent.id),
            error: None,
        },
        Err(e) => APIResponse {
            success: false,
            message: "Failed to send test email".into(),
            message_id: None,
            error: Some(e.to_string()),
        },
    };
    Ok(HttpResponse::Ok().json(res))
}
