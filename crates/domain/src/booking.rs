use crate::shared::entity::{Entity, ID};
use serde_json::{Map, Value};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// A booking of a service. Its shape is decided by the client, only the
/// identities of the two parties and the `status` are read by the server.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: ID,
    pub fields: Map<String, Value>,
}

const STATUS_FIELD: &str = "status";

impl Booking {
    pub fn new(mut fields: Map<String, Value>) -> Self {
        fields.remove("_id");
        Self {
            id: ID::new(),
            fields,
        }
    }

    /// Identity stored in the `party` field, when it is a string
    pub fn party(&self, party: BookingParty) -> Option<&str> {
        self.fields.get(party.field_name()).and_then(Value::as_str)
    }

    pub fn status(&self) -> Option<&Value> {
        self.fields.get(STATUS_FIELD)
    }

    /// Returns whether the status changed
    pub fn set_status(&mut self, status: Value) -> bool {
        if self.status() == Some(&status) {
            return false;
        }
        self.fields.insert(STATUS_FIELD.to_string(), status);
        true
    }

    pub fn matches(&self, filter: &BookingPartyFilter) -> bool {
        self.party(filter.party) == Some(filter.identity.as_str())
    }
}

impl Entity for Booking {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// The identity fields a booking can be looked up by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingParty {
    /// The user that made the booking
    WhoBooked,
    /// The user offering the booked service
    ServiceProvider,
}

impl BookingParty {
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::WhoBooked => "whoBooked",
            Self::ServiceProvider => "serviceProvider",
        }
    }
}

impl Display for BookingParty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.field_name())
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidBookingPartyError {
    #[error("`{0}` is not a booking party, expected `whoBooked` or `serviceProvider`")]
    Unknown(String),
}

impl FromStr for BookingParty {
    type Err = InvalidBookingPartyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "whoBooked" => Ok(Self::WhoBooked),
            "serviceProvider" => Ok(Self::ServiceProvider),
            _ => Err(InvalidBookingPartyError::Unknown(s.to_string())),
        }
    }
}

/// Selects the bookings where the given party field equals `identity`
#[derive(Debug, Clone, PartialEq)]
pub struct BookingPartyFilter {
    pub party: BookingParty,
    pub identity: String,
}
