use mongodb::bson::oid::ObjectId;
use serde::{de::Visitor, Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

pub trait Entity {
    fn id(&self) -> &ID;
}

/// Identifier of a stored document. Backed by a MongoDB `ObjectId` and
/// exchanged with clients as its 24 character hex representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ID(ObjectId);

impl ID {
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    pub fn as_string(&self) -> String {
        self.0.to_hex()
    }

    pub fn inner(self) -> ObjectId {
        self.0
    }

    pub fn inner_ref(&self) -> &ObjectId {
        &self.0
    }
}

impl From<ObjectId> for ID {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl Default for ID {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for ID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidIDError {
    #[error("ID: {0} is malformed")]
    Malformed(String),
}

impl FromStr for ID {
    type Err = InvalidIDError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(s)
            .map(Self)
            .map_err(|_| InvalidIDError::Malformed(s.to_string()))
    }
}

impl Serialize for ID {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.as_string())
    }
}

impl<'de> Deserialize<'de> for ID {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct IDVisitor;

        impl<'de> Visitor<'de> for IDVisitor {
            type Value = ID;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("A valid string id representation")
            }

            fn visit_str<E>(self, value: &str) -> Result<ID, E>
            where
                E: serde::de::Error,
            {
                value
                    .parse::<ID>()
                    .map_err(|_| E::custom(format!("Malformed id: {}", value)))
            }
        }

        deserializer.deserialize_str(IDVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_parses_hex_representation() {
        let id = ID::new();
        let parsed = id.as_string().parse::<ID>().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn it_rejects_malformed_ids() {
        for bad in ["", "123", "not-an-object-id", "64b7f0c2e4b0a1a2b3c4d5e6f"] {
            assert_eq!(
                bad.parse::<ID>(),
                Err(InvalidIDError::Malformed(bad.to_string()))
            );
        }
    }

    #[test]
    fn it_serializes_as_hex_string() {
        let id: ID = "64b7f0c2e4b0a1a2b3c4d5e6".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"64b7f0c2e4b0a1a2b3c4d5e6\"");
        let back: ID = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
