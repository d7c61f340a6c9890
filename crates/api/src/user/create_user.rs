use crate::{
    error::StationError,
    shared::{
        auth::{create_session_token, protect_create_user_route},
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use flowerstation_api_structs::create_user::*;
use flowerstation_domain::{is_valid_email, User};
use flowerstation_infra::StationContext;

fn handle_error(e: UseCaseErrors) -> StationError {
    match e {
        UseCaseErrors::MissingName => StationError::BadClientData("Name is required".into()),
        UseCaseErrors::InvalidEmail(email) => StationError::BadClientData(format!(
            "The given email: {}, is not valid",
            email
        )),
        UseCaseErrors::EmailTaken(email) => StationError::Conflict(format!(
            "A user with the email: {}, already exists",
            email
        )),
        UseCaseErrors::StorageError => StationError::InternalError,
    }
}

pub async fn create_user_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<StationContext>,
) -> Result<HttpResponse, StationError> {
    protect_create_user_route(&http_req, &ctx)?;

    let body = body.0;
    let usecase = CreateUserUseCase {
        name: body.name,
        email: body.email,
        password_hash: body.password_hash,
    };

    let user = execute(usecase, &ctx).await.map_err(handle_error)?;
    let token = create_session_token(&user.id, &ctx)?;
    Ok(HttpResponse::Created().json(APIResponse::new(user, token)))
}

#[derive(Debug)]
pub struct CreateUserUseCase {
    pub name: String,
    pub email: String,
    pub password_hash: Option<String>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    MissingName,
    InvalidEmail(String),
    EmailTaken(String),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateUserUseCase {
    type Response = User;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &StationContext) -> Result<Self::Response, Self::Errors> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(UseCaseErrors::MissingName);
        }
        let email = self.email.trim().to_lowercase();
        if !is_valid_email(&email) {
            return Err(UseCaseErrors::InvalidEmail(email));
        }
        if ctx.repos.users.find_by_email(&email).await.is_some() {
            return Err(UseCaseErrors::EmailTaken(email));
        }

        let mut user = User::new(name.to_string(), email, ctx.sys.get_timestamp_millis());
        user.password_hash = self.password_hash.take();

        ctx.repos
            .users
            .insert(&user)
            .await
            .map(|_| user)
            .map_err(|_| UseCaseErrors::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn usecase(email: &str) -> CreateUserUseCase {
        CreateUserUseCase {
            name: "Ada".into(),
            email: email.into(),
            password_hash: Some("hash".into()),
        }
    }

    #[actix_web::main]
    #[test]
    async fn creates_user_with_normalized_email() {
        let ctx = StationContext::create_inmemory();
        let user = execute(usecase(" Ada@Example.com "), &ctx).await.unwrap();
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.password_hash.as_deref(), Some("hash"));
        assert!(user.settings.email_notifications);
        assert!(ctx.repos.users.find(&user.id).await.is_some());
    }

    #[actix_web::main]
    #[test]
    async fn rejects_duplicate_email() {
        let ctx = StationContext::create_inmemory();
        execute(usecase("ada@example.com"), &ctx).await.unwrap();
        let res = execute(usecase("ADA@example.com"), &ctx).await;
        assert!(matches!(res, Err(UseCaseErrors::EmailTaken(_))));
    }

    #[actix_web::main]
    #[test]
    async fn rejects_invalid_input() {
        let ctx = StationContext::create_inmemory();
        let res = execute(usecase("not-an-email"), &ctx).await;
        assert!(matches!(res, Err(UseCaseErrors::InvalidEmail(_))));

        let mut missing_name = usecase("ada@example.com");
        missing_name.name = "  ".into();
        let res = execute(missing_name, &ctx).await;
        assert!(matches!(res, Err(UseCaseErrors::MissingName)));
    }
}
