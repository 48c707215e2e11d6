use super::IBookingRepo;
use crate::repos::shared::inmemory_repo::*;
use serde_json::Value;
use service_swap_domain::{
    Booking, BookingParty, BookingPartyFilter, DeleteResult, InsertResult, UpdateResult, ID,
};

pub struct InMemoryBookingRepo {
    bookings: std::sync::Mutex<Vec<Booking>>,
}

impl InMemoryBookingRepo {
    pub fn new() -> Self {
        Self {
            bookings: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IBookingRepo for InMemoryBookingRepo {
    async fn insert(&self, booking: &Booking) -> anyhow::Result<InsertResult> {
        Ok(insert(booking, &self.bookings))
    }

    async fn find_many(
        &self,
        filter: Option<&BookingPartyFilter>,
    ) -> anyhow::Result<Vec<Booking>> {
        Ok(find_by(&self.bookings, |booking| match filter {
            Some(filter) => booking.matches(filter),
            None => true,
        }))
    }

    async fn delete_by_booker(
        &self,
        booking_id: &ID,
        who_booked: &str,
    ) -> anyhow::Result<DeleteResult> {
        Ok(delete_one_by(&self.bookings, |booking| {
            booking.id == *booking_id
                && booking.party(BookingParty::WhoBooked) == Some(who_booked)
        }))
    }

    async fn update_status(
        &self,
        booking_id: &ID,
        status: &Value,
    ) -> anyhow::Result<UpdateResult> {
        Ok(update_one_by(
            &self.bookings,
            |booking| booking.id == *booking_id,
            |booking| booking.set_status(status.clone()),
        ))
    }
}
