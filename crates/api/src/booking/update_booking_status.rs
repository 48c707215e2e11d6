use crate::{
    error::ServiceSwapError,
    shared::{
        guard::Guard,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use service_swap_api_structs::dtos::UpdateResultDTO;
use service_swap_api_structs::update_booking_status::*;
use serde_json::Value;
use service_swap_domain::{UpdateResult, ID};
use service_swap_infra::ServiceSwapContext;

pub async fn update_booking_status_controller(
    body: web::Json<RequestBody>,
    query_params: web::Query<QueryParams>,
    ctx: web::Data<ServiceSwapContext>,
) -> Result<HttpResponse, ServiceSwapError> {
    let booking_id = Guard::against_missing_param(query_params.into_inner().id, "id")?;
    let booking_id = Guard::against_malformed_id(&booking_id)?;

    let usecase = UpdateBookingStatusUseCase {
        booking_id,
        status: body.into_inner().status,
    };

    execute(usecase, &ctx)
        .await
        .map(|usecase_res| {
            let res: APIResponse = UpdateResultDTO::new(usecase_res.updated);
            HttpResponse::Ok().json(res)
        })
        .map_err(ServiceSwapError::from)
}

#[derive(Debug)]
struct UpdateBookingStatusUseCase {
    booking_id: ID,
    status: Value,
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
impl UseCase for UpdateBookingStatusUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateBookingStatus";

    async fn execute(&mut self, ctx: &ServiceSwapContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .bookings
            .update_status(&self.booking_id, &self.status)
            .await
            .map(|updated| UseCaseRes { updated })
            .map_err(|_| UseCaseError::StorageError)
    }
}
