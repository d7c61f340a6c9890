use super::event_fields::{EventFields, InvalidEventInput};
use crate::{
    error::StationError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use flowerstation_api_structs::{update_event::*, EventInput};
use flowerstation_domain::{Event, ID};
use flowerstation_infra::StationContext;

fn handle_error(e: UseCaseErrors) -> StationError {
    match e {
        UseCaseErrors::NotFound(event_id) => StationError::NotFound(format!(
            "The event with id: {}, was not found.",
            event_id
        )),
        UseCaseErrors::InvalidInput(e) => StationError::BadClientData(e.to_string()),
        UseCaseErrors::StorageError => StationError::InternalError,
    }
}

pub async fn update_event_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<StationContext>,
) -> Result<HttpResponse, StationError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = UpdateEventUseCase {
        user_id: user.id,
        event_id: path_params.event_id.clone(),
        input: body.0,
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Ok().json(APIResponse::new(event)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct UpdateEventUseCase {
    pub user_id: ID,
    pub event_id: ID,
    pub input: EventInput,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    InvalidInput(InvalidEventInput),
    StorageError,
}

impl From<InvalidEventInput> for UseCaseErrors {
    fn from(e: InvalidEventInput) -> Self {
        Self::InvalidInput(e)
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateEventUseCase {
    type Response = Event;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &StationContext) -> Result<Self::Response, Self::Errors> {
        let mut event = match ctx.repos.events.find(&self.event_id).await {
            Some(event) if event.user_id == self.user_id => event,
            _ => return Err(UseCaseErrors::NotFound(self.event_id.clone())),
        };

        EventFields::parse(&self.input, &ctx.config.timezone)?
            .apply_to(&mut event, ctx.sys.get_timestamp_millis())?;

        ctx.repos
            .events
            .save(&event)
            .await
            .map(|_| event)
            .map_err(|_| UseCaseErrors::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use flowerstation_domain::{EventType, Tz};

    fn input(title: &str, date: &str) -> EventInput {
        EventInput {
            title: title.into(),
            date: date.into(),
            event_type: "Wedding".into(),
            ..Default::default()
        }
    }

    async fn setup(ctx: &StationContext, user_id: &ID) -> Event {
        let mut event = Event::new(
            user_id.clone(),
            "Wedding".into(),
            1792022400000,
            EventType::Wedding,
            0,
        );
        event.mark_reminded();
        ctx.repos.events.insert(&event).await.unwrap();
        event
    }

    #[actix_web::main]
    #[test]
    async fn updates_owned_event_and_keeps_reminder_flag() {
        let mut ctx = StationContext::create_inmemory();
        ctx.config.timezone = Tz::UTC;
        let user_id = ID::new();
        let event = setup(&ctx, &user_id).await;

        let usecase = UpdateEventUseCase {
            user_id: user_id.clone(),
            event_id: event.id.clone(),
            input: input("Our wedding", "2026-10-16"),
        };
        let updated = execute(usecase, &ctx).await.unwrap();
        assert_eq!(updated.title, "Our wedding");
        assert_eq!(updated.date_ts, 1792022400000 + 1000 * 60 * 60 * 24);
        assert!(updated.reminder_sent);

        let stored = ctx.repos.events.find(&event.id).await.unwrap();
        assert_eq!(stored.title, "Our wedding");
        assert!(stored.reminder_sent);
    }

    #[actix_web::main]
    #[test]
    async fn rejects_events_of_other_users() {
        let ctx = StationContext::create_inmemory();
        let event = setup(&ctx, &ID::new()).await;

        let usecase = UpdateEventUseCase {
            user_id: ID::new(),
            event_id: event.id.clone(),
            input: input("Hijacked", "2026-10-16"),
        };
        assert!(matches!(
            execute(usecase, &ctx).await,
            Err(UseCaseErrors::NotFound(_))
        ));
        assert_eq!(ctx.repos.events.find(&event.id).await.unwrap().title, "Wedding");
    }
}
