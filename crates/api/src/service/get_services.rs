use crate::{
    error::ServiceSwapError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use service_swap_api_structs::dtos::ServiceDTO;
use service_swap_api_structs::get_services::*;
use service_swap_domain::Service;
use service_swap_infra::ServiceSwapContext;

pub async fn get_services_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<ServiceSwapContext>,
) -> Result<HttpResponse, ServiceSwapError> {
    let usecase = GetServicesUseCase {
        owner_email: query_params.0.email,
    };

    execute(usecase, &ctx)
        .await
        .map(|usecase_res| {
            let services: APIResponse = usecase_res
                .services
                .into_iter()
                .map(ServiceDTO::new)
                .collect();
            HttpResponse::Ok().json(services)
        })
        .map_err(ServiceSwapError::from)
}

#[derive(Debug)]
struct GetServicesUseCase {
    owner_email: Option<String>,
}

#[derive(Debug)]
struct UseCaseRes {
    pub services: Vec<Service>,
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
impl UseCase for GetServicesUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "GetServices";

    async fn execute(&mut self, ctx: &ServiceSwapContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .services
            .find_many(self.owner_email.as_deref())
            .await
            .map(|services| UseCaseRes { services })
            .map_err(|_| UseCaseError::StorageError)
    }
}
