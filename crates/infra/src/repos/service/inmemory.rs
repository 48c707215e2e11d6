use super::IServiceRepo;
use crate::repos::shared::inmemory_repo::*;
use service_swap_domain::{DeleteResult, InsertResult, Service, ServiceDetails, UpdateResult, ID};

pub struct InMemoryServiceRepo {
    services: std::sync::Mutex<Vec<Service>>,
}

impl InMemoryServiceRepo {
    pub fn new() -> Self {
        Self {
            services: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IServiceRepo for InMemoryServiceRepo {
    async fn insert(&self, service: &Service) -> anyhow::Result<InsertResult> {
        Ok(insert(service, &self.services))
    }

    async fn find(&self, service_id: &ID) -> anyhow::Result<Option<Service>> {
        Ok(find(service_id, &self.services))
    }

    async fn find_many(&self, owner_email: Option<&str>) -> anyhow::Result<Vec<Service>> {
        Ok(find_by(&self.services, |service| match owner_email {
            Some(email) => service.is_owned_by(email),
            None => true,
        }))
    }

    async fn upsert_details(
        &self,
        service_id: &ID,
        details: &ServiceDetails,
    ) -> anyhow::Result<UpdateResult> {
        Ok(upsert(
            service_id,
            &self.services,
            |service| service.replace_details(details),
            || Service {
                id: service_id.clone(),
                fields: details.to_fields(),
            },
        ))
    }

    async fn delete(&self, service_id: &ID) -> anyhow::Result<DeleteResult> {
        Ok(delete_one_by(&self.services, |service| {
            service.id == *service_id
        }))
    }
}
