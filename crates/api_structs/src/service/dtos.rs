use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use service_swap_domain::{Service, ID};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ServiceDTO {
    #[serde(rename = "_id")]
    pub id: ID,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ServiceDTO {
    pub fn new(service: Service) -> Self {
        Self {
            id: service.id,
            fields: service.fields,
        }
    }
}
