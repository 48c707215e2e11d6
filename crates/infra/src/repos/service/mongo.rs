use super::IServiceRepo;
use crate::repos::shared::mongo_repo::{self, document_to_json, json_to_document};
use mongo_repo::MongoDocument;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    Collection, Database,
};
use serde::{Deserialize, Serialize};
use service_swap_domain::{DeleteResult, InsertResult, Service, ServiceDetails, UpdateResult, ID};

pub struct MongoServiceRepo {
    collection: Collection<Document>,
}

impl MongoServiceRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("services"),
        }
    }
}

#[async_trait::async_trait]
impl IServiceRepo for MongoServiceRepo {
    async fn insert(&self, service: &Service) -> anyhow::Result<InsertResult> {
        mongo_repo::insert::<_, ServiceMongo>(&self.collection, service).await
    }

    async fn find(&self, service_id: &ID) -> anyhow::Result<Option<Service>> {
        mongo_repo::find::<_, ServiceMongo>(&self.collection, service_id.inner_ref()).await
    }

    async fn find_many(&self, owner_email: Option<&str>) -> anyhow::Result<Vec<Service>> {
        let filter = match owner_email {
            Some(email) => mongo_repo::string_field_filter("email", email),
            None => doc! {},
        };
        mongo_repo::find_many_by::<_, ServiceMongo>(&self.collection, filter).await
    }

    async fn upsert_details(
        &self,
        service_id: &ID,
        details: &ServiceDetails,
    ) -> anyhow::Result<UpdateResult> {
        // Every whitelisted field is written, missing ones as null
        let update = doc! {
            "$set": json_to_document(&details.to_fields())?
        };
        mongo_repo::update_one(
            &self.collection,
            mongo_repo::get_id_filter(service_id.inner_ref()),
            update,
            true,
        )
        .await
    }

    async fn delete(&self, service_id: &ID) -> anyhow::Result<DeleteResult> {
        mongo_repo::delete_one_by(
            &self.collection,
            mongo_repo::get_id_filter(service_id.inner_ref()),
        )
        .await
    }
}

/// Services have no fixed schema, everything besides `_id` is kept as is
#[derive(Debug, Serialize, Deserialize)]
struct ServiceMongo {
    pub _id: ObjectId,
    #[serde(flatten)]
    pub fields: Document,
}

impl MongoDocument<Service> for ServiceMongo {
    fn to_domain(self) -> Service {
        Service {
            id: ID::from(self._id),
            fields: document_to_json(self.fields),
        }
    }

    fn from_domain(service: &Service) -> anyhow::Result<Self> {
        Ok(Self {
            _id: *service.id.inner_ref(),
            fields: json_to_document(&service.fields)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, Bson};
    use serde_json::{json, Value};

    #[test]
    fn it_maps_service_to_document_and_back() {
        let service = Service::new(
            json!({
                "email": "alice@example.com",
                "authorName": "Alice",
                "name": 42,
                "servicearea": { "city": "Dhaka" },
                "availability": ["mon", "tue"]
            })
            .as_object()
            .cloned()
            .unwrap(),
        );

        let raw = ServiceMongo::from_domain(&service).unwrap();
        let document = bson::to_document(&raw).unwrap();
        assert_eq!(document.get_str("authorName").unwrap(), "Alice");
        assert_eq!(document.get_document("servicearea").unwrap().get_str("city").unwrap(), "Dhaka");
        assert!(document.get("image").is_none());

        let raw: ServiceMongo = bson::from_document(document).unwrap();
        assert_eq!(raw.to_domain(), service);
    }

    #[test]
    fn it_reads_documents_of_any_shape() {
        let oid = ObjectId::new();
        let document = doc! {
            "_id": oid,
            "email": "alice@example.com",
            "name": Bson::Null,
            "price": 30,
            "image": true,
        };
        let raw: ServiceMongo = bson::from_document(document).unwrap();
        let service = raw.to_domain();
        assert_eq!(service.id, ID::from(oid));
        assert_eq!(service.fields["name"], Value::Null);
        assert_eq!(service.fields["price"], json!(30));
        assert_eq!(service.fields["image"], json!(true));
        assert!(service.is_owned_by("alice@example.com"));
    }
}
