use crate::{APIResponse, BaseClient};
use reqwest::StatusCode;
use serde_json::{Map, Value};
use service_swap_api_structs::*;
use std::sync::Arc;

/// Sessions live in a cookie that the client stores and sends along with
/// every following request.
#[derive(Clone)]
pub struct SessionClient {
    base: Arc<BaseClient>,
}

impl SessionClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        email: String,
        extra: Map<String, Value>,
    ) -> APIResponse<create_session::APIResponse> {
        let body = create_session::RequestBody { email, extra };
        self.base.post(body, "jwt".into(), StatusCode::OK).await
    }

    pub async fn remove(&self) -> APIResponse<remove_session::APIResponse> {
        self.base
            .post(Map::new(), "jwtremove".into(), StatusCode::OK)
            .await
    }
}
