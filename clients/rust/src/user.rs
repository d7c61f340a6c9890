use crate::{APIResponse, BaseClient};
use flowerstation_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct UserClient {
    base: Arc<BaseClient>,
}

pub type CreateUserInput = create_user::RequestBody;
pub type UpdateMeInput = update_me::RequestBody;

impl UserClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// Needs the SDK to be created with the create user api key
    pub async fn create(&self, input: CreateUserInput) -> APIResponse<create_user::APIResponse> {
        self.base
            .post(input, "user".into(), StatusCode::CREATED)
            .await
    }

    pub async fn me(&self) -> APIResponse<get_me::APIResponse> {
        self.base.get("me".into(), StatusCode::OK).await
    }

    pub async fn update_me(&self, input: UpdateMeInput) -> APIResponse<update_me::APIResponse> {
        self.base.put(input, "me".into(), StatusCode::OK).await
    }
}
