use crate::{
    error::ServiceSwapError,
    shared::{
        guard::Guard,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use service_swap_api_structs::dtos::UpdateResultDTO;
use service_swap_api_structs::update_service::*;
use service_swap_domain::{ServiceDetails, UpdateResult, ID};
use service_swap_infra::ServiceSwapContext;

pub async fn update_service_controller(
    body: web::Json<RequestBody>,
    path_params: web::Path<PathParams>,
    ctx: web::Data<ServiceSwapContext>,
) -> Result<HttpResponse, ServiceSwapError> {
    let service_id = Guard::against_malformed_id(&path_params.service_id)?;
    let usecase = UpdateServiceUseCase {
        service_id,
        details: body.into_inner(),
    };

    execute(usecase, &ctx)
        .await
        .map(|usecase_res| {
            let res: APIResponse = UpdateResultDTO::new(usecase_res.updated);
            HttpResponse::Ok().json(res)
        })
        .map_err(ServiceSwapError::from)
}

/// Replaces the listing fields of a service. A service that does not exist
/// yet is created with the given id.
#[derive(Debug)]
struct UpdateServiceUseCase {
    service_id: ID,
    details: ServiceDetails,
}

#[derive(Debug)]
struct UseCaseRes {
    pub updated: UpdateResult,
}

#[derive(Debug)]
enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for ServiceSwapError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateServiceUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateService";

    async fn execute(&mut self, ctx: &ServiceSwapContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .services
            .upsert_details(&self.service_id, &self.details)
            .await
            .map(|updated| UseCaseRes { updated })
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::{json, Value};
    use service_swap_domain::Service;

    #[actix_web::main]
    #[test]
    async fn replaces_details_of_existing_service() {
        let ctx = ServiceSwapContext::create_inmemory();
        let service = Service::new(
            json!({
                "email": "alice@example.com",
                "name": "Guitar lessons",
                "description": "Beginners welcome",
                "rating": 5
            })
            .as_object()
            .cloned()
            .unwrap(),
        );
        ctx.repos.services.insert(&service).await.unwrap();

        let details = ServiceDetails {
            email: Some(json!("alice@example.com")),
            name: Some(json!("Guitar lessons")),
            price: Some(json!(30)),
            ..Default::default()
        };
        let mut usecase = UpdateServiceUseCase {
            service_id: service.id.clone(),
            details: details.clone(),
        };
        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(res.updated.matched_count, 1);
        assert_eq!(res.updated.modified_count, 1);

        let stored = ctx.repos.services.find(&service.id).await.unwrap().unwrap();
        assert_eq!(stored.fields["price"], json!(30));
        assert_eq!(stored.fields["description"], Value::Null);
        assert_eq!(stored.fields["rating"], json!(5));
    }

    #[actix_web::main]
    #[test]
    async fn creates_missing_service() {
        let ctx = ServiceSwapContext::create_inmemory();
        let service_id = ID::new();
        let mut usecase = UpdateServiceUseCase {
            service_id: service_id.clone(),
            details: ServiceDetails {
                name: Some(json!("Bike repair")),
                ..Default::default()
            },
        };
        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(res.updated.matched_count, 0);
        assert_eq!(res.updated.upserted_id, Some(service_id.clone()));
        let stored = ctx.repos.services.find(&service_id).await.unwrap().unwrap();
        assert_eq!(stored.fields["name"], json!("Bike repair"));
        assert_eq!(stored.fields.len(), 8);
    }
}
