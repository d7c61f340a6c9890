use crate::{
    error::StationError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use flowerstation_api_structs::{dtos::NotificationDTO, get_notifications::*};
use flowerstation_domain::ID;
use flowerstation_infra::StationContext;
use std::collections::HashMap;

/// How many notifications are listed
const NOTIFICATIONS_LIMIT: usize = 10;

pub async fn get_notifications_controller(
    http_req: HttpRequest,
    ctx: web::Data<StationContext>,
) -> Result<HttpResponse, StationError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = GetNotificationsUseCase { user_id: user.id };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(res))
        .map_err(|_| StationError::InternalError)
}

#[derive(Debug)]
pub struct GetNotificationsUseCase {
    pub user_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetNotificationsUseCase {
    type Response = APIResponse;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &StationContext) -> Result<Self::Response, Self::Errors> {
        let notifications = ctx
            .repos
            .notifications
            .find_by_user(&self.user_id, NOTIFICATIONS_LIMIT)
            .await;

        let event_ids = notifications
            .iter()
            .map(|n| n.event_id.clone())
            .collect::<Vec<_>>();
        let titles = ctx
            .repos
            .events
            .find_many(&event_ids)
            .await
            .into_iter()
            .map(|e| (e.id, e.title))
            .collect::<HashMap<_, _>>();

        let unread_count = ctx
            .repos
            .notifications
            .count_unread(&self.user_id)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        Ok(APIResponse {
            notifications: notifications
                .into_iter()
                .map(|n| {
                    let title = titles.get(&n.event_id).cloned();
                    NotificationDTO::new(n, title)
                })
                .collect(),
            unread_count,
        })
    }
}
