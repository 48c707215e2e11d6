use crate::{APIResponse, BaseClient};
use reqwest::StatusCode;
use serde_json::{Map, Value};
use service_swap_api_structs::*;
use std::sync::Arc;

#[derive(Clone)]
pub struct BookingClient {
    base: Arc<BaseClient>,
}

/// Stored as given, `whoBooked` and `serviceProvider` are the string
/// identities bookings are filtered by
#[derive(Default)]
pub struct CreateBookingInput {
    pub fields: Map<String, Value>,
}

pub struct GetBookingsInput {
    pub email: Option<String>,
    /// `whoBooked` or `serviceProvider`
    pub party: Option<String>,
}

pub struct DeleteBookingInput {
    pub booking_id: String,
    pub who_booked: String,
}

pub struct UpdateBookingStatusInput {
    pub booking_id: String,
    pub status: Value,
}

impl BookingClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        input: CreateBookingInput,
    ) -> APIResponse<create_booking::APIResponse> {
        let body: create_booking::RequestBody = input.fields;
        self.base.post(body, "booking".into(), StatusCode::OK).await
    }

    /// Requires a session for `input.email`
    pub async fn list(&self, input: GetBookingsInput) -> APIResponse<get_bookings::APIResponse> {
        let query = get_bookings::QueryParams {
            email: input.email,
            party: input.party,
        };
        self.base
            .get_with_query("booking".into(), &query, StatusCode::OK)
            .await
    }

    pub async fn delete(
        &self,
        input: DeleteBookingInput,
    ) -> APIResponse<delete_booking::APIResponse> {
        let query = delete_booking::QueryParams {
            who_booked: Some(input.who_booked),
            id: Some(input.booking_id),
        };
        self.base
            .delete_with_query("booking".into(), &query, StatusCode::OK)
            .await
    }

    pub async fn update_status(
        &self,
        input: UpdateBookingStatusInput,
    ) -> APIResponse<update_booking_status::APIResponse> {
        let query = update_booking_status::QueryParams {
            id: Some(input.booking_id),
        };
        let body = update_booking_status::RequestBody {
            status: input.status,
        };
        self.base
            .put_with_query(body, "booking".into(), &query, StatusCode::OK)
            .await
    }
}
