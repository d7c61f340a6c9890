use super::{
    event_fields::{EventFields, InvalidEventInput},
    subscribers::NotifyOwnerOnEventCreated,
};
use crate::{
    error::StationError,
    shared::{
        auth::protect_route,
        usecase::{execute, Subscriber, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use flowerstation_api_structs::{create_event::*, EventInput};
use flowerstation_domain::{Event, ID};
use flowerstation_infra::StationContext;

fn handle_error(e: UseCaseErrors) -> StationError {
    match e {
        UseCaseErrors::InvalidInput(e) => StationError::BadClientData(e.to_string()),
        UseCaseErrors::StorageError => StationError::InternalError,
    }
}

pub async fn create_event_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<StationContext>,
) -> Result<HttpResponse, StationError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = CreateEventUseCase {
        user_id: user.id,
        input: body.0,
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Created().json(APIResponse::new(event)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct CreateEventUseCase {
    pub user_id: ID,
    pub input: EventInput,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    InvalidInput(InvalidEventInput),
    StorageError,
}

impl From<InvalidEventInput> for UseCaseErrors {
    fn from(e: InvalidEventInput) -> Self {
        Self::InvalidInput(e)
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateEventUseCase {
    type Response = Event;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &StationContext) -> Result<Self::Response, Self::Errors> {
        let now = ctx.sys.get_timestamp_millis();
        let event = EventFields::parse(&self.input, &ctx.config.timezone)?
            .into_event(self.user_id.clone(), now)?;

        ctx.repos
            .events
            .insert(&event)
            .await
            .map(|_| event)
            .map_err(|_| UseCaseErrors::StorageError)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(NotifyOwnerOnEventCreated)]
    }
}
