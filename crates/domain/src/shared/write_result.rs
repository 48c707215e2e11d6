use super::entity::ID;

/// Acknowledgment of a single document insert
#[derive(Debug, Clone, PartialEq)]
pub struct InsertResult {
    pub inserted_id: ID,
}

/// Outcome of a single document update, possibly an upsert
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateResult {
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_id: Option<ID>,
}

impl UpdateResult {
    pub fn upserted_count(&self) -> u64 {
        if self.upserted_id.is_some() {
            1
        } else {
            0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeleteResult {
    pub deleted_count: u64,
}
