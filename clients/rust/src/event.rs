use crate::{APIResponse, BaseClient, ID};
use flowerstation_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct EventClient {
    base: Arc<BaseClient>,
}

pub type CreateEventInput = EventInput;

pub struct UpdateEventInput {
    pub event_id: ID,
    pub event: EventInput,
}

impl EventClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, input: CreateEventInput) -> APIResponse<create_event::APIResponse> {
        self.base
            .post(input, "events".into(), StatusCode::CREATED)
            .await
    }

    pub async fn list(&self) -> APIResponse<get_events::APIResponse> {
        self.base.get("events".into(), StatusCode::OK).await
    }

    pub async fn get(&self, event_id: ID) -> APIResponse<get_event::APIResponse> {
        self.base
            .get(format!("events/{}", event_id), StatusCode::OK)
            .await
    }

    pub async fn update(&self, input: UpdateEventInput) -> APIResponse<update_event::APIResponse> {
        self.base
            .put(
                input.event,
                format!("events/{}", input.event_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete(&self, event_id: ID) -> APIResponse<delete_event::APIResponse> {
        self.base
            .delete(format!("events/{}", event_id), StatusCode::OK)
            .await
    }
}
