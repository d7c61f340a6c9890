use crate::{
    error::StationError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use flowerstation_api_structs::mark_all_notifications_read::*;
use flowerstation_domain::ID;
use flowerstation_infra::StationContext;

pub async fn mark_all_notifications_read_controller(
    http_req: HttpRequest,
    ctx: web::Data<StationContext>,
) -> Result<HttpResponse, StationError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = MarkAllNotificationsReadUseCase { user_id: user.id };

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

#[derive(Debug)]
pub struct MarkAllNotificationsReadUseCase {
    pub user_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for MarkAllNotificationsReadUseCase {
    /// Number of notifications that were unread
    type Response = u64;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &StationContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .notifications
            .mark_all_read(&self.user_id)
            .await
            .map_err(|_| UseCaseErrors::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use flowerstation_domain::Notification;

    #[actix_web::main]
    #[test]
    async fn succeeds_without_unread_notifications() {
        let ctx = StationContext::create_inmemory();
        let user_id = ID::new();

        let usecase = MarkAllNotificationsReadUseCase {
            user_id: user_id.clone(),
        };
        assert_eq!(execute(usecase, &ctx).await.unwrap(), 0);

        let mut read = Notification::new(user_id.clone(), ID::new(), "Read".into(), 0);
        read.mark_read();
        ctx.repos.notifications.insert(&read).await.unwrap();
        let unread = Notification::new(user_id.clone(), ID::new(), "Unread".into(), 1);
        ctx.repos.notifications.insert(&unread).await.unwrap();

        let usecase = MarkAllNotificationsReadUseCase {
            user_id: user_id.clone(),
        };
        assert_eq!(execute(usecase, &ctx).await.unwrap(), 1);
        assert_eq!(ctx.repos.notifications.count_unread(&user_id).await.unwrap(), 0);
    }
}
