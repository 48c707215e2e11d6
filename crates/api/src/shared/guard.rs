use crate::error::ServiceSwapError;
use service_swap_domain::{BookingParty, ID};

pub struct Guard {}

impl Guard {
    pub fn against_malformed_id(val: &str) -> Result<ID, ServiceSwapError> {
        val.parse()
            .map_err(|e| ServiceSwapError::BadClientData(format!("{}", e)))
    }

    pub fn against_missing_param<T>(val: Option<T>, name: &str) -> Result<T, ServiceSwapError> {
        val.ok_or_else(|| {
            ServiceSwapError::BadClientData(format!("Missing `{}` query parameter", name))
        })
    }

    pub fn against_unknown_booking_party(val: &str) -> Result<BookingParty, ServiceSwapError> {
        val.parse()
            .map_err(|e| ServiceSwapError::BadClientData(format!("{}", e)))
    }
}
