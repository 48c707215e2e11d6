use serde::{Deserialize, Serialize};
use service_swap_domain::{DeleteResult, InsertResult, UpdateResult, ID};

/// Acknowledgment returned after creating a document
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InsertResultDTO {
    pub acknowledged: bool,
    pub inserted_id: ID,
}

impl InsertResultDTO {
    pub fn new(res: InsertResult) -> Self {
        Self {
            acknowledged: true,
            inserted_id: res.inserted_id,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResultDTO {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_count: u64,
    pub upserted_id: Option<ID>,
}

impl UpdateResultDTO {
    pub fn new(res: UpdateResult) -> Self {
        Self {
            acknowledged: true,
            matched_count: res.matched_count,
            modified_count: res.modified_count,
            upserted_count: res.upserted_count(),
            upserted_id: res.upserted_id,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResultDTO {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteResultDTO {
    pub fn new(res: DeleteResult) -> Self {
        Self {
            acknowledged: true,
            deleted_count: res.deleted_count,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SuccessDTO {
    pub success: bool,
}

impl SuccessDTO {
    pub fn new() -> Self {
        Self { success: true }
    }
}

impl Default for SuccessDTO {
    fn default() -> Self {
        Self::new()
    }
}
