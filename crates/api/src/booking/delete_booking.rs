use crate::{
    error::ServiceSwapError,
    shared::{
        guard::Guard,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use service_swap_api_structs::delete_booking::*;
use service_swap_api_structs::dtos::DeleteResultDTO;
use service_swap_domain::{DeleteResult, ID};
use service_swap_infra::ServiceSwapContext;

pub async fn delete_booking_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<ServiceSwapContext>,
) -> Result<HttpResponse, ServiceSwapError> {
    let query = query_params.into_inner();
    let booking_id = Guard::against_missing_param(query.id, "id")?;
    let booking_id = Guard::against_malformed_id(&booking_id)?;
    let who_booked = Guard::against_missing_param(query.who_booked, "whoBooked")?;

    let usecase = DeleteBookingUseCase {
        booking_id,
        who_booked,
    };

    execute(usecase, &ctx)
        .await
        .map(|usecase_res| {
            let res: APIResponse = DeleteResultDTO::new(usecase_res.deleted);
            HttpResponse::Ok().json(res)
        })
        .map_err(ServiceSwapError::from)
}

/// Cancels a booking. Nothing is deleted unless `who_booked` made the booking.
#[derive(Debug)]
struct DeleteBookingUseCase {
    booking_id: ID,
    who_booked: String,
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
impl UseCase for DeleteBookingUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteBooking";

    async fn execute(&mut self, ctx: &ServiceSwapContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .bookings
            .delete_by_booker(&self.booking_id, &self.who_booked)
            .await
            .map(|deleted| UseCaseRes { deleted })
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::{json, Map};
    use service_swap_domain::Booking;

    #[actix_web::main]
    #[test]
    async fn only_booker_can_delete() {
        let ctx = ServiceSwapContext::create_inmemory();
        let mut fields = Map::new();
        fields.insert("whoBooked".into(), json!("alice@example.com"));
        fields.insert("serviceProvider".into(), json!("bob@example.com"));
        let booking = Booking::new(fields);
        ctx.repos.bookings.insert(&booking).await.unwrap();

        let mut usecase = DeleteBookingUseCase {
            booking_id: booking.id.clone(),
            who_booked: "bob@example.com".into(),
        };
        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(res.deleted.deleted_count, 0);
        assert_eq!(ctx.repos.bookings.find_many(None).await.unwrap().len(), 1);

        let mut usecase = DeleteBookingUseCase {
            booking_id: booking.id.clone(),
            who_booked: "alice@example.com".into(),
        };
        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(res.deleted.deleted_count, 1);
        assert!(ctx.repos.bookings.find_many(None).await.unwrap().is_empty());
    }
}
