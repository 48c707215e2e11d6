use crate::{
    error::ServiceSwapError,
    shared::{
        guard::Guard,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use service_swap_api_structs::delete_service::*;
use service_swap_api_structs::dtos::DeleteResultDTO;
use service_swap_domain::{DeleteResult, ID};
use service_swap_infra::ServiceSwapContext;

pub async fn delete_service_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<ServiceSwapContext>,
) -> Result<HttpResponse, ServiceSwapError> {
    let service_id = Guard::against_malformed_id(&path_params.service_id)?;
    let usecase = DeleteServiceUseCase { service_id };

    execute(usecase, &ctx)
        .await
        .map(|usecase_res| {
            let res: APIResponse = DeleteResultDTO::new(usecase_res.deleted);
            HttpResponse::Ok().json(res)
        })
        .map_err(ServiceSwapError::from)
}

#[derive(Debug)]
struct DeleteServiceUseCase {
    service_id: ID,
}

#[derive(Debug)]
struct UseCaseRes {
    pub deleted: DeleteResult,
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
impl UseCase for DeleteServiceUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteService";

    async fn execute(&mut self, ctx: &ServiceSwapContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .services
            .delete(&self.service_id)
            .await
            .map(|deleted| UseCaseRes { deleted })
            .map_err(|_| UseCaseError::StorageError)
    }
}
