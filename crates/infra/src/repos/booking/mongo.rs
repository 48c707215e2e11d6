use super::IBookingRepo;
use crate::repos::shared::mongo_repo::{self, document_to_json, json_to_bson, json_to_document};
use mongo_repo::MongoDocument;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    Collection, Database,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use service_swap_domain::{
    Booking, BookingParty, BookingPartyFilter, DeleteResult, InsertResult, UpdateResult, ID,
};

pub struct MongoBookingRepo {
    collection: Collection<Document>,
}

impl MongoBookingRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("booking"),
        }
    }
}

#[async_trait::async_trait]
impl IBookingRepo for MongoBookingRepo {
    async fn insert(&self, booking: &Booking) -> anyhow::Result<InsertResult> {
        mongo_repo::insert::<_, BookingMongo>(&self.collection, booking).await
    }

    async fn find_many(
        &self,
        filter: Option<&BookingPartyFilter>,
    ) -> anyhow::Result<Vec<Booking>> {
        let filter = match filter {
            Some(filter) => {
                mongo_repo::string_field_filter(filter.party.field_name(), &filter.identity)
            }
            None => doc! {},
        };
        mongo_repo::find_many_by::<_, BookingMongo>(&self.collection, filter).await
    }

    async fn delete_by_booker(
        &self,
        booking_id: &ID,
        who_booked: &str,
    ) -> anyhow::Result<DeleteResult> {
        let mut filter =
            mongo_repo::string_field_filter(BookingParty::WhoBooked.field_name(), who_booked);
        filter.insert("_id", *booking_id.inner_ref());
        mongo_repo::delete_one_by(&self.collection, filter).await
    }

    async fn update_status(
        &self,
        booking_id: &ID,
        status: &Value,
    ) -> anyhow::Result<UpdateResult> {
        let update = doc! {
            "$set": {
                "status": json_to_bson(status)?
            }
        };
        mongo_repo::update_one(
            &self.collection,
            mongo_repo::get_id_filter(booking_id.inner_ref()),
            update,
            false,
        )
        .await
    }
}

/// Bookings have no fixed schema, everything besides `_id` is kept as is
#[derive(Debug, Serialize, Deserialize)]
struct BookingMongo {
    pub _id: ObjectId,
    #[serde(flatten)]
    pub fields: Document,
}

impl MongoDocument<Booking> for BookingMongo {
    fn to_domain(self) -> Booking {
        Booking {
            id: ID::from(self._id),
            fields: document_to_json(self.fields),
        }
    }

    fn from_domain(booking: &Booking) -> anyhow::Result<Self> {
        Ok(Self {
            _id: *booking.id.inner_ref(),
            fields: json_to_document(&booking.fields)?,
        })
    }
}
