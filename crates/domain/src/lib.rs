mod booking;
mod service;
mod shared;

pub use booking::{Booking, BookingParty, BookingPartyFilter, InvalidBookingPartyError};
pub use service::{Service, ServiceDetails};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use shared::write_result::{DeleteResult, InsertResult, UpdateResult};
