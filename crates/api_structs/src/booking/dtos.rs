use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use service_swap_domain::{Booking, ID};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BookingDTO {
    #[serde(rename = "_id")]
    pub id: ID,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl BookingDTO {
    pub fn new(booking: Booking) -> Self {
        Self {
            id: booking.id,
            fields: booking.fields,
        }
    }
}
