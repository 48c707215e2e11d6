use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The listing fields an owner controls. An update replaces all of them at
/// once, so a field left out of an update body ends up `null`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDetails {
    /// Identity of the owner of the listing
    pub email: Option<Value>,
    pub author_name: Option<Value>,
    pub author_image: Option<Value>,
    pub name: Option<Value>,
    pub image: Option<Value>,
    pub price: Option<Value>,
    #[serde(rename = "servicearea")]
    pub service_area: Option<Value>,
    pub description: Option<Value>,
}

impl ServiceDetails {
    /// Every whitelisted field by its stored name, missing ones as `null`
    pub fn to_fields(&self) -> Map<String, Value> {
        let fields = [
            ("email", &self.email),
            ("authorName", &self.author_name),
            ("authorImage", &self.author_image),
            ("name", &self.name),
            ("image", &self.image),
            ("price", &self.price),
            ("servicearea", &self.service_area),
            ("description", &self.description),
        ];
        fields
            .into_iter()
            .map(|(key, value)| (key.to_string(), value.clone().unwrap_or(Value::Null)))
            .collect()
    }
}

/// A service offered by a user of the marketplace. The document is stored
/// exactly as it was submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub id: ID,
    pub fields: Map<String, Value>,
}

impl Service {
    pub fn new(mut fields: Map<String, Value>) -> Self {
        // The identifier is always assigned by the server
        fields.remove("_id");
        Self {
            id: ID::new(),
            fields,
        }
    }

    pub fn owner(&self) -> Option<&str> {
        self.fields.get("email").and_then(Value::as_str)
    }

    pub fn is_owned_by(&self, email: &str) -> bool {
        self.owner() == Some(email)
    }

    /// Overwrites every whitelisted field. Returns whether anything changed.
    pub fn replace_details(&mut self, details: &ServiceDetails) -> bool {
        let mut changed = false;
        for (key, value) in details.to_fields() {
            if self.fields.get(&key) != Some(&value) {
                self.fields.insert(key, value);
                changed = true;
            }
        }
        changed
    }
}

impl Entity for Service {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn it_accepts_any_json_in_listing_fields() {
        let details: ServiceDetails = serde_json::from_value(json!({
            "email": "alice@example.com",
            "authorName": { "first": "Alice" },
            "name": 42,
            "price": "25",
            "servicearea": ["Dhaka", "Khulna"],
            "rating": 5
        }))
        .unwrap();
        assert_eq!(details.name, Some(json!(42)));
        assert_eq!(details.service_area, Some(json!(["Dhaka", "Khulna"])));

        let stored = details.to_fields();
        assert_eq!(stored.len(), 8);
        assert_eq!(stored["authorName"], json!({ "first": "Alice" }));
        assert_eq!(stored["image"], Value::Null);
        assert!(stored.get("rating").is_none());
    }

    #[test]
    fn it_strips_client_supplied_id() {
        let service = Service::new(fields(json!({ "_id": "abc", "rating": 5 })));
        assert!(service.fields.get("_id").is_none());
        assert_eq!(service.fields.get("rating"), Some(&json!(5)));
    }

    #[test]
    fn it_replaces_all_details() {
        let mut service = Service::new(fields(json!({
            "email": "alice@example.com",
            "name": "Guitar lessons",
            "rating": 5
        })));
        let details = ServiceDetails {
            name: Some(json!("Piano lessons")),
            ..Default::default()
        };
        assert!(service.replace_details(&details));
        assert_eq!(service.fields["name"], json!("Piano lessons"));
        assert_eq!(service.fields["email"], Value::Null);
        assert_eq!(service.fields["rating"], json!(5));
        assert!(!service.replace_details(&details));
    }

    #[test]
    fn it_only_matches_owner_by_string_email() {
        let service = Service::new(fields(json!({ "email": "alice@example.com" })));
        assert!(service.is_owned_by("alice@example.com"));
        assert!(!service.is_owned_by("bob@example.com"));

        let service = Service::new(fields(json!({ "email": ["alice@example.com"] })));
        assert_eq!(service.owner(), None);
        assert!(!service.is_owned_by("alice@example.com"));
    }
}
