mod inmemory;
mod mongo;

pub use inmemory::InMemoryServiceRepo;
pub use mongo::MongoServiceRepo;
use service_swap_domain::{DeleteResult, InsertResult, Service, ServiceDetails, UpdateResult, ID};

#[async_trait::async_trait]
pub trait IServiceRepo: Send + Sync {
    async fn insert(&self, service: &Service) -> anyhow::Result<InsertResult>;
    async fn find(&self, service_id: &ID) -> anyhow::Result<Option<Service>>;
    /// All services, or only those owned by `owner_email` when given
    async fn find_many(&self, owner_email: Option<&str>) -> anyhow::Result<Vec<Service>>;
    /// Replaces the details of the service, creating it when it does not exist
    async fn upsert_details(
        &self,
        service_id: &ID,
        details: &ServiceDetails,
    ) -> anyhow::Result<UpdateResult>;
    async fn delete(&self, service_id: &ID) -> anyhow::Result<DeleteResult>;
}

#[cfg(test)]
mod tests {
    use crate::setup_context;
    use serde_json::{json, Map, Value};
    use service_swap_domain::{Service, ServiceDetails, ID};
    use serial_test::serial;
    use service_swap_utils::create_random_secret;

    fn unique_email() -> String {
        format!("{}@example.com", create_random_secret(16))
    }

    fn service(email: &str, name: Value) -> Service {
        let mut fields = Map::new();
        fields.insert("email".into(), json!(email));
        fields.insert("name".into(), name);
        fields.insert("rating".into(), json!(4.5));
        fields.insert("tags".into(), json!(["music", "lessons"]));
        Service::new(fields)
    }

    #[tokio::test]
    #[serial]
    async fn it_inserts_and_finds_service() {
        let ctx = setup_context().await.unwrap();
        let service = service(&unique_email(), json!(42));

        let res = ctx.repos.services.insert(&service).await.unwrap();
        assert_eq!(res.inserted_id, service.id);
        assert_eq!(
            ctx.repos.services.find(&service.id).await.unwrap(),
            Some(service)
        );
        assert_eq!(ctx.repos.services.find(&ID::new()).await.unwrap(), None);
    }

    #[tokio::test]
    #[serial]
    async fn it_filters_by_owner() {
        let ctx = setup_context().await.unwrap();
        let alice = unique_email();
        let bob = unique_email();
        for (email, name) in [
            (&alice, "Guitar lessons"),
            (&bob, "Bike repair"),
            (&alice, "Piano lessons"),
        ] {
            ctx.repos
                .services
                .insert(&service(email, json!(name)))
                .await
                .unwrap();
        }

        let owned = ctx.repos.services.find_many(Some(&alice)).await.unwrap();
        assert_eq!(owned.len(), 2);
        assert!(owned.iter().all(|s| s.is_owned_by(&alice)));
        assert!(ctx.repos.services.find_many(None).await.unwrap().len() >= 3);
        assert!(ctx
            .repos
            .services
            .find_many(Some(&unique_email()))
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    #[serial]
    async fn it_upserts_details() {
        let ctx = setup_context().await.unwrap();
        let email = unique_email();
        let service = service(&email, json!("Guitar lessons"));
        ctx.repos.services.insert(&service).await.unwrap();

        let details = ServiceDetails {
            email: Some(json!(email)),
            name: Some(json!("Piano lessons")),
            price: Some(json!(20)),
            ..Default::default()
        };
        let res = ctx
            .repos
            .services
            .upsert_details(&service.id, &details)
            .await
            .unwrap();
        assert_eq!(res.matched_count, 1);
        assert_eq!(res.modified_count, 1);
        assert_eq!(res.upserted_id, None);

        let stored = ctx.repos.services.find(&service.id).await.unwrap().unwrap();
        assert_eq!(stored.fields["name"], json!("Piano lessons"));
        assert_eq!(stored.fields["description"], Value::Null);
        assert_eq!(stored.fields["rating"], json!(4.5));

        let res = ctx
            .repos
            .services
            .upsert_details(&service.id, &details)
            .await
            .unwrap();
        assert_eq!(res.matched_count, 1);
        assert_eq!(res.modified_count, 0);

        let missing_id = ID::new();
        let res = ctx
            .repos
            .services
            .upsert_details(&missing_id, &details)
            .await
            .unwrap();
        assert_eq!(res.matched_count, 0);
        assert_eq!(res.upserted_id, Some(missing_id.clone()));
        let created = ctx.repos.services.find(&missing_id).await.unwrap().unwrap();
        assert_eq!(created.fields, details.to_fields());
    }

    #[tokio::test]
    #[serial]
    async fn it_deletes_service() {
        let ctx = setup_context().await.unwrap();
        let service = service(&unique_email(), json!("Bike repair"));
        ctx.repos.services.insert(&service).await.unwrap();

        let res = ctx.repos.services.delete(&service.id).await.unwrap();
        assert_eq!(res.deleted_count, 1);
        let res = ctx.repos.services.delete(&service.id).await.unwrap();
        assert_eq!(res.deleted_count, 0);
        assert_eq!(ctx.repos.services.find(&service.id).await.unwrap(), None);
    }
}
