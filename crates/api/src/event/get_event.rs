use crate::{
    error::StationError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use flowerstation_api_structs::get_event::*;
use flowerstation_domain::{Event, ID};
use flowerstation_infra::StationContext;

fn handle_error(e: UseCaseErrors) -> StationError {
    match e {
        UseCaseErrors::NotFound(event_id) => StationError::NotFound(format!(
            "The event with id: {}, was not found.",
            event_id
        )),
    }
}

pub async fn get_event_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<StationContext>,
) -> Result<HttpResponse, StationError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetEventUseCase {
        user_id: user.id,
        event_id: path_params.event_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Ok().json(APIResponse::new(event)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct GetEventUseCase {
    pub event_id: ID,
    pub user_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetEventUseCase {
    type Response = Event;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &StationContext) -> Result<Self::Response, Self::Errors> {
        match ctx.repos.events.find(&self.event_id).await {
            Some(event) if event.user_id == self.user_id => Ok(event),
            _ => Err(UseCaseErrors::NotFound(self.event_id.clone())),
        }
    }
}
