use anyhow::Result;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{self, doc, oid::ObjectId, Bson, Document},
    options::UpdateOptions,
    Collection, Cursor,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use service_swap_domain::{DeleteResult, InsertResult, UpdateResult, ID};
use tracing::error;

pub trait MongoDocument<E>: Serialize + DeserializeOwned {
    fn to_domain(self) -> E;
    fn from_domain(entity: &E) -> Result<Self>;
}

pub fn get_id_filter(oid: &ObjectId) -> Document {
    doc! {
        "_id": oid
    }
}

/// Matches documents where `field` holds exactly the string `value`. Plain
/// equality would also match arrays containing `value`.
pub fn string_field_filter(field: &str, value: &str) -> Document {
    doc! {
        (field): value,
        "$expr": {
            "$eq": [{ "$type": (format!("${}", field)) }, "string"]
        }
    }
}

/// Client supplied fields are kept as json in the domain
pub fn document_to_json(document: Document) -> Map<String, Value> {
    match Bson::Document(document).into_relaxed_extjson() {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

pub fn json_to_document(map: &Map<String, Value>) -> Result<Document> {
    Ok(bson::to_document(map)?)
}

pub fn json_to_bson(value: &Value) -> Result<Bson> {
    Ok(bson::to_bson(value)?)
}

fn entity_to_persistence<E, D: MongoDocument<E>>(entity: &E) -> Result<Document> {
    let raw = D::from_domain(entity)?;
    Ok(bson::to_document(&raw)?)
}

fn persistence_to_entity<E, D: MongoDocument<E>>(doc: Document) -> Result<E> {
    let raw: D = bson::from_document(doc)?;
    Ok(raw.to_domain())
}

pub async fn insert<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    entity: &E,
) -> Result<InsertResult> {
    let doc = entity_to_persistence::<E, D>(entity)?;
    let res = collection.insert_one(doc, None).await?;
    match res.inserted_id.as_object_id() {
        Some(oid) => Ok(InsertResult {
            inserted_id: ID::from(oid),
        }),
        None => Err(anyhow::anyhow!(
            "Expected an ObjectId to be inserted, got: {}",
            res.inserted_id
        )),
    }
}

pub async fn find<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    id: &ObjectId,
) -> Result<Option<E>> {
    find_one_by::<E, D>(collection, get_id_filter(id)).await
}

pub async fn find_one_by<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    filter: Document,
) -> Result<Option<E>> {
    match collection.find_one(filter, None).await? {
        Some(doc) => persistence_to_entity::<E, D>(doc).map(Some),
        None => Ok(None),
    }
}

pub async fn find_many_by<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    filter: Document,
) -> Result<Vec<E>> {
    let cursor = collection.find(filter, None).await?;
    consume_cursor::<E, D>(cursor).await
}

pub async fn update_one(
    collection: &Collection<Document>,
    filter: Document,
    update: Document,
    upsert: bool,
) -> Result<UpdateResult> {
    let options = UpdateOptions::builder().upsert(upsert).build();
    let res = collection.update_one(filter, update, options).await?;
    Ok(UpdateResult {
        matched_count: res.matched_count,
        modified_count: res.modified_count,
        upserted_id: res
            .upserted_id
            .and_then(|id| id.as_object_id())
            .map(ID::from),
    })
}

pub async fn delete_one_by(
    collection: &Collection<Document>,
    filter: Document,
) -> Result<DeleteResult> {
    let res = collection.delete_one(filter, None).await?;
    Ok(DeleteResult {
        deleted_count: res.deleted_count,
    })
}

async fn consume_cursor<E, D: MongoDocument<E>>(mut cursor: Cursor<Document>) -> Result<Vec<E>> {
    let mut entities = vec![];
    while let Some(document) = cursor.try_next().await? {
        let id = document.get("_id").cloned();
        match persistence_to_entity::<E, D>(document) {
            Ok(entity) => entities.push(entity),
            Err(e) => {
                error!("Skipping document {:?} that could not be read: {:?}", id, e);
            }
        }
    }

    Ok(entities)
}
