use crate::{
    error::StationError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use flowerstation_api_structs::mark_notification_read::*;
use flowerstation_domain::ID;
use flowerstation_infra::StationContext;

pub async fn mark_notification_read_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<StationContext>,
) -> Result<HttpResponse, StationError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = MarkNotificationReadUseCase {
        notification_id: path_params.notification_id.clone(),
        user_id: user.id,
    };

    execute(usecase, &ctx)
        .await
        .map(|updated| {
            HttpResponse::Ok().json(APIResponse {
                success: true,
                updated,
            })
        })
        .map_err(|_| StationError::InternalError)
}

/// Marks one notification of the user as read. Nothing happens when the
/// notification does not exist or belongs to someone else.
#[derive(Debug)]
pub struct MarkNotificationReadUseCase {
    pub notification_id: ID,
    pub user_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for MarkNotificationReadUseCase {
    type Response = u64;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &StationContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .notifications
            .mark_read(&self.notification_id, &self.user_id)
            .await
            .map_err(|_| UseCaseErrors::StorageError)
    }
}
