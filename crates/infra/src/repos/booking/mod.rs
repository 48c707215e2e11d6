mod inmemory;
mod mongo;

pub use inmemory::InMemoryBookingRepo;
pub use mongo::MongoBookingRepo;
use serde_json::Value;
use service_swap_domain::{
    Booking, BookingPartyFilter, DeleteResult, InsertResult, UpdateResult, ID,
};

#[async_trait::async_trait]
pub trait IBookingRepo: Send + Sync {
    async fn insert(&self, booking: &Booking) -> anyhow::Result<InsertResult>;
    /// All bookings, or only those matching `filter` when given
    async fn find_many(&self, filter: Option<&BookingPartyFilter>)
        -> anyhow::Result<Vec<Booking>>;
    /// Deletes the booking with `booking_id` only if it was made by `who_booked`
    async fn delete_by_booker(
        &self,
        booking_id: &ID,
        who_booked: &str,
    ) -> anyhow::Result<DeleteResult>;
    async fn update_status(&self, booking_id: &ID, status: &Value)
        -> anyhow::Result<UpdateResult>;
}
