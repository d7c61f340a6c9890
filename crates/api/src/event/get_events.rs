use crate::{error::StationError, shared::auth::protect_route};
use actix_web::{web, HttpRequest, HttpResponse};
use flowerstation_api_structs::get_events::*;
use flowerstation_infra::StationContext;

pub async fn get_events_controller(
    http_req: HttpRequest,
    ctx: web::Data<StationContext>,
) -> Result<HttpResponse, StationError> {
    let user = protect_route(&http_req, &ctx).await?;

    let events = ctx.repos.events.find_by_user(&user.id).await;
    Ok(HttpResponse::Ok().json(APIResponse::new(events)))
}
