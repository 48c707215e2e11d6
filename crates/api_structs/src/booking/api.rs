use crate::dtos::{BookingDTO, DeleteResultDTO, InsertResultDTO, UpdateResultDTO};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod create_booking {
    use super::*;

    /// Stored as is, the server only reads `whoBooked`, `serviceProvider`
    /// and `status`
    pub type RequestBody = Map<String, Value>;

    pub type APIResponse = InsertResultDTO;
}

pub mod get_bookings {
    use super::*;

    #[derive(Deserialize, Serialize, Default)]
    pub struct QueryParams {
        /// Identity of the caller
        pub email: Option<String>,
        /// Name of the booking field `email` is matched against
        #[serde(rename = "type")]
        pub party: Option<String>,
    }

    pub type APIResponse = Vec<BookingDTO>;
}

pub mod delete_booking {
    use super::*;

    #[derive(Deserialize, Serialize, Default)]
    pub struct QueryParams {
        #[serde(rename = "whoBooked")]
        pub who_booked: Option<String>,
        pub id: Option<String>,
    }

    pub type APIResponse = DeleteResultDTO;
}

pub mod update_booking_status {
    use super::*;

    #[derive(Deserialize, Serialize, Default)]
    pub struct QueryParams {
        pub id: Option<String>,
    }

    #[derive(Deserialize, Serialize)]
    pub struct RequestBody {
        pub status: Value,
    }

    pub type APIResponse = UpdateResultDTO;
}
