use crate::{
    error::ServiceSwapError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use service_swap_api_structs::create_service::*;
use service_swap_api_structs::dtos::InsertResultDTO;
use service_swap_domain::{InsertResult, Service};
use service_swap_infra::ServiceSwapContext;

pub async fn create_service_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<ServiceSwapContext>,
) -> Result<HttpResponse, ServiceSwapError> {
    let usecase = CreateServiceUseCase {
        service: Service::new(body.into_inner()),
    };

    execute(usecase, &ctx)
        .await
        .map(|usecase_res| {
            let res: APIResponse = InsertResultDTO::new(usecase_res.inserted);
            HttpResponse::Ok().json(res)
        })
        .map_err(ServiceSwapError::from)
}

#[derive(Debug)]
struct CreateServiceUseCase {
    service: Service,
}

#[derive(Debug)]
struct UseCaseRes {
    pub inserted: InsertResult,
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
impl UseCase for CreateServiceUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateService";

    async fn execute(&mut self, ctx: &ServiceSwapContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .services
            .insert(&self.service)
            .await
            .map(|inserted| UseCaseRes { inserted })
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[actix_web::main]
    #[test]
    async fn stores_every_submitted_field() {
        let ctx = ServiceSwapContext::create_inmemory();
        let body: RequestBody = serde_json::from_value(json!({
            "email": "alice@example.com",
            "authorName": "Alice",
            "name": 42,
            "price": { "amount": 25, "currency": "BDT" },
            "servicearea": null,
            "languages": ["en", "bn"]
        }))
        .unwrap();
        let mut usecase = CreateServiceUseCase {
            service: Service::new(body.clone()),
        };

        let res = usecase.execute(&ctx).await.unwrap();
        let stored = ctx
            .repos
            .services
            .find(&res.inserted.inserted_id)
            .await
            .unwrap()
            .expect("Service to be stored");
        assert_eq!(stored.fields, body);
    }
}
