use crate::{
    error::StationError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use flowerstation_api_structs::update_me::*;
use flowerstation_domain::User;
use flowerstation_infra::StationContext;

fn handle_error(e: UseCaseErrors) -> StationError {
    match e {
        UseCaseErrors::MissingName => StationError::BadClientData("Name is required".into()),
        UseCaseErrors::StorageError => StationError::InternalError,
    }
}

pub async fn update_me_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<StationContext>,
) -> Result<HttpResponse, StationError> {
    let user = protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = UpdateMeUseCase {
        user,
        name: body.name,
        email_notifications: body.email_notifications,
    };

    execute(usecase, &ctx)
        .await
        .map(|user| HttpResponse::Ok().json(APIResponse::new(user)))
        .map_err(handle_error)
}

/// Updates the profile and settings of the session user
#[derive(Debug)]
pub struct UpdateMeUseCase {
    pub user: User,
    pub name: Option<String>,
    pub email_notifications: Option<bool>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    MissingName,
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateMeUseCase {
    type Response = User;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &StationContext) -> Result<Self::Response, Self::Errors> {
        let mut user = self.user.clone();
        if let Some(name) = &self.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(UseCaseErrors::MissingName);
            }
            user.name = name.to_string();
        }
        if let Some(email_notifications) = self.email_notifications {
            user.settings.email_notifications = email_notifications;
        }

        ctx.repos
            .users
            .save(&user)
            .await
            .map(|_| user)
            .map_err(|_| UseCaseErrors::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[actix_web::main]
    #[test]
    async fn updates_given_fields_only() {
        let ctx = StationContext::create_inmemory();
        let user = User::new("Ada".into(), "ada@example.com".into(), 0);
        ctx.repos.users.insert(&user).await.unwrap();

        let usecase = UpdateMeUseCase {
            user: user.clone(),
            name: None,
            email_notifications: Some(false),
        };
        let updated = execute(usecase, &ctx).await.unwrap();
        assert_eq!(updated.name, "Ada");
        assert!(!updated.settings.email_notifications);

        let stored = ctx.repos.users.find(&user.id).await.unwrap();
        assert!(!stored.settings.email_notifications);
    }

    #[actix_web::main]
    #[test]
    async fn rejects_blank_name() {
        let ctx = StationContext::create_inmemory();
        let user = User::new("Ada".into(), "ada@example.com".into(), 0);
        ctx.repos.users.insert(&user).await.unwrap();

        let usecase = UpdateMeUseCase {
            user,
            name: Some(" ".into()),
            email_notifications: None,
        };
        assert!(matches!(
            execute(usecase, &ctx).await,
            Err(UseCaseErrors::MissingName)
        ));
    }
}
