use crate::{
    error::ServiceSwapError,
    shared::{
        guard::Guard,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use service_swap_api_structs::dtos::ServiceDTO;
use service_swap_api_structs::get_service::*;
use service_swap_domain::{Service, ID};
use service_swap_infra::ServiceSwapContext;

pub async fn get_service_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<ServiceSwapContext>,
) -> Result<HttpResponse, ServiceSwapError> {
    let service_id = Guard::against_malformed_id(&path_params.service_id)?;
    let usecase = GetServiceUseCase { service_id };

    execute(usecase, &ctx)
        .await
        .map(|usecase_res| {
            let services: APIResponse = usecase_res
                .service
                .into_iter()
                .map(ServiceDTO::new)
                .collect();
            HttpResponse::Ok().json(services)
        })
        .map_err(ServiceSwapError::from)
}

#[derive(Debug)]
struct GetServiceUseCase {
    service_id: ID,
}

#[derive(Debug)]
struct UseCaseRes {
    pub service: Option<Service>,
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
impl UseCase for GetServiceUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "GetService";

    async fn execute(&mut self, ctx: &ServiceSwapContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .services
            .find(&self.service_id)
            .await
            .map(|service| UseCaseRes { service })
            .map_err(|_| UseCaseError::StorageError)
    }
}
