use crate::{
    error::ServiceSwapError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use service_swap_api_structs::create_booking::*;
use service_swap_api_structs::dtos::InsertResultDTO;
use service_swap_domain::{Booking, InsertResult};
use service_swap_infra::ServiceSwapContext;

pub async fn create_booking_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<ServiceSwapContext>,
) -> Result<HttpResponse, ServiceSwapError> {
    let usecase = CreateBookingUseCase {
        booking: Booking::new(body.into_inner()),
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
struct CreateBookingUseCase {
    booking: Booking,
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
impl UseCase for CreateBookingUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateBooking";

    async fn execute(&mut self, ctx: &ServiceSwapContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .bookings
            .insert(&self.booking)
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
    async fn stores_booking_as_submitted() {
        let ctx = ServiceSwapContext::create_inmemory();
        let body: RequestBody = serde_json::from_value(json!({
            "whoBooked": "alice@example.com",
            "serviceProvider": { "email": "bob@example.com" },
            "status": 1,
            "note": null,
            "date": "2024-05-01"
        }))
        .unwrap();
        let booking = Booking::new(body.clone());
        let mut usecase = CreateBookingUseCase {
            booking: booking.clone(),
        };

        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(res.inserted.inserted_id, booking.id);
        let stored = ctx.repos.bookings.find_many(None).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].fields, body);
    }
}
