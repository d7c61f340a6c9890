use crate::{
    error::StationError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use flowerstation_api_structs::delete_event::*;
use flowerstation_domain::{Event, ID};
use flowerstation_infra::StationContext;
use tracing::error;

fn handle_error(e: UseCaseErrors) -> StationError {
    match e {
        UseCaseErrors::NotFound(event_id) => StationError::NotFound(format!(
            "The event with id: {}, was not found.",
            event_id
        )),
        UseCaseErrors::StorageError => StationError::InternalError,
    }
}

pub async fn delete_event_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<StationContext>,
) -> Result<HttpResponse, StationError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = DeleteEventUseCase {
        user_id: user.id,
        event_id: path_params.event_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Ok().json(APIResponse::new(event)))
        .map_err(handle_error)
}

/// Deletes the event together with every notification about it
#[derive(Debug)]
pub struct DeleteEventUseCase {
    pub user_id: ID,
    pub event_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteEventUseCase {
    type Response = Event;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &StationContext) -> Result<Self::Response, Self::Errors> {
        match ctx.repos.events.find(&self.event_id).await {
            Some(event) if event.user_id == self.user_id => {
                // Notifications go first so that none are left pointing at a missing event
                ctx.repos
                    .notifications
                    .delete_by_event(&event.id)
                    .await
                    .map_err(|e| {
                        error!("Unable to delete notifications of event {}: {:?}", event.id, e);
                        UseCaseErrors::StorageError
                    })?;

                ctx.repos
                    .events
                    .delete(&event.id)
                    .await
                    .ok_or(UseCaseErrors::StorageError)
            }
            _ => Err(UseCaseErrors::NotFound(self.event_id.clone())),
        }
    }
}
