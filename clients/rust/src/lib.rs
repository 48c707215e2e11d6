mod base;
mod booking;
mod service;
mod session;
mod status;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};
use booking::BookingClient;
pub use booking::{
    CreateBookingInput, DeleteBookingInput, GetBookingsInput, UpdateBookingStatusInput,
};
pub use reqwest::StatusCode;
use service::ServiceClient;
pub use service::{CreateServiceInput, UpdateServiceInput};
use session::SessionClient;
use status::StatusClient;
use std::sync::Arc;

pub use service_swap_api_structs::dtos::*;
pub use service_swap_domain::{ServiceDetails, ID};

// Domain
pub use service_swap_api_structs::dtos::BookingDTO as Booking;
pub use service_swap_api_structs::dtos::ServiceDTO as Service;

/// Service Swap Center SDK
///
/// The SDK contains methods for interacting with the Service Swap Center
/// server API. Clones share the same session.
#[derive(Clone)]
pub struct ServiceSwapSDK {
    pub booking: BookingClient,
    pub service: ServiceClient,
    pub session: SessionClient,
    pub status: StatusClient,
}

impl ServiceSwapSDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));
        let booking = BookingClient::new(base.clone());
        let service = ServiceClient::new(base.clone());
        let session = SessionClient::new(base.clone());
        let status = StatusClient::new(base);

        Self {
            booking,
            service,
            session,
            status,
        }
    }
}
