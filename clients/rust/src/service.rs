use crate::{APIResponse, BaseClient};
use reqwest::StatusCode;
use serde_json::{Map, Value};
use service_swap_api_structs::*;
use service_swap_domain::ServiceDetails;
use std::sync::Arc;

#[derive(Clone)]
pub struct ServiceClient {
    base: Arc<BaseClient>,
}

/// Every field is stored as given, the owner is the string `email` field
#[derive(Default)]
pub struct CreateServiceInput {
    pub fields: Map<String, Value>,
}

pub struct UpdateServiceInput {
    pub service_id: String,
    pub details: ServiceDetails,
}

impl ServiceClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        input: CreateServiceInput,
    ) -> APIResponse<create_service::APIResponse> {
        let body: create_service::RequestBody = input.fields;
        self.base
            .post(body, "services".into(), StatusCode::OK)
            .await
    }

    /// Every service, or only the ones owned by `email`
    pub async fn list(&self, email: Option<String>) -> APIResponse<get_services::APIResponse> {
        let query = get_services::QueryParams { email };
        self.base
            .get_with_query("services".into(), &query, StatusCode::OK)
            .await
    }

    pub async fn get(&self, service_id: String) -> APIResponse<get_service::APIResponse> {
        self.base
            .get(format!("service/{}", service_id), StatusCode::OK)
            .await
    }

    pub async fn update(
        &self,
        input: UpdateServiceInput,
    ) -> APIResponse<update_service::APIResponse> {
        self.base
            .put(
                input.details,
                format!("service/{}", input.service_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete(&self, service_id: String) -> APIResponse<delete_service::APIResponse> {
        self.base
            .delete(format!("services/{}", service_id), StatusCode::OK)
            .await
    }
}
