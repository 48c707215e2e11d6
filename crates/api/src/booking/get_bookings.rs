use crate::{
    error::ServiceSwapError,
    shared::{
        auth::{protect_route, Claims},
        guard::Guard,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use service_swap_api_structs::dtos::BookingDTO;
use service_swap_api_structs::get_bookings::*;
use service_swap_domain::{Booking, BookingParty, BookingPartyFilter};
use service_swap_infra::ServiceSwapContext;

pub async fn get_bookings_controller(
    http_req: HttpRequest,
    query_params: web::Query<QueryParams>,
    ctx: web::Data<ServiceSwapContext>,
) -> Result<HttpResponse, ServiceSwapError> {
    let claims = protect_route(&http_req, &ctx)?;
    let query = query_params.into_inner();
    let party = match query.party {
        Some(party) => Some(Guard::against_unknown_booking_party(&party)?),
        None => None,
    };

    let usecase = GetBookingsUseCase {
        claims,
        email: query.email,
        party,
    };

    execute(usecase, &ctx)
        .await
        .map(|usecase_res| {
            let bookings: APIResponse = usecase_res
                .bookings
                .into_iter()
                .map(BookingDTO::new)
                .collect();
            HttpResponse::Ok().json(bookings)
        })
        .map_err(ServiceSwapError::from)
}

/// Lists the bookings of the caller. Without a `party` every booking is
/// returned.
#[derive(Debug)]
struct GetBookingsUseCase {
    claims: Claims,
    email: Option<String>,
    party: Option<BookingParty>,
}

#[derive(Debug)]
struct UseCaseRes {
    pub bookings: Vec<Booking>,
}

#[derive(Debug)]
enum UseCaseError {
    IdentityMismatch {
        caller: String,
        requested: Option<String>,
    },
    StorageError,
}

impl From<UseCaseError> for ServiceSwapError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::IdentityMismatch { caller, requested } => Self::Forbidden(format!(
                "{} requested the bookings of {:?}",
                caller, requested
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetBookingsUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "GetBookings";

    async fn execute(&mut self, ctx: &ServiceSwapContext) -> Result<Self::Response, Self::Error> {
        let email = match &self.email {
            Some(email) if *email == self.claims.email => email.clone(),
            _ => {
                return Err(UseCaseError::IdentityMismatch {
                    caller: self.claims.email.clone(),
                    requested: self.email.clone(),
                })
            }
        };

        let filter = self.party.map(|party| BookingPartyFilter {
            party,
            identity: email,
        });

        ctx.repos
            .bookings
            .find_many(filter.as_ref())
            .await
            .map(|bookings| UseCaseRes { bookings })
            .map_err(|_| UseCaseError::StorageError)
    }
}
