use service_swap_domain::{DeleteResult, Entity, InsertResult, UpdateResult, ID};
use std::sync::{Mutex, MutexGuard};

/// Useful functions for creating inmemory repositories

fn lock<T>(collection: &Mutex<Vec<T>>) -> MutexGuard<'_, Vec<T>> {
    collection.lock().unwrap_or_else(|e| e.into_inner())
}

pub fn insert<T: Clone + Entity>(val: &T, collection: &Mutex<Vec<T>>) -> InsertResult {
    let mut collection = lock(collection);
    collection.push(val.clone());
    InsertResult {
        inserted_id: val.id().clone(),
    }
}

pub fn find<T: Clone + Entity>(val_id: &ID, collection: &Mutex<Vec<T>>) -> Option<T> {
    let collection = lock(collection);
    collection.iter().find(|item| item.id() == val_id).cloned()
}

pub fn find_by<T: Clone, F: FnMut(&T) -> bool>(
    collection: &Mutex<Vec<T>>,
    mut compare: F,
) -> Vec<T> {
    let collection = lock(collection);
    collection
        .iter()
        .filter(|item| compare(*item))
        .cloned()
        .collect()
}

/// Deletes the first item matching `compare`
pub fn delete_one_by<T, F: Fn(&T) -> bool>(
    collection: &Mutex<Vec<T>>,
    compare: F,
) -> DeleteResult {
    let mut collection = lock(collection);
    match collection.iter().position(|item| compare(item)) {
        Some(index) => {
            collection.remove(index);
            DeleteResult { deleted_count: 1 }
        }
        None => DeleteResult { deleted_count: 0 },
    }
}

/// Applies `update` to the first item matching `compare`. `update` returns whether
/// it modified the item.
pub fn update_one_by<T, F: Fn(&T) -> bool, U: FnOnce(&mut T) -> bool>(
    collection: &Mutex<Vec<T>>,
    compare: F,
    update: U,
) -> UpdateResult {
    let mut collection = lock(collection);
    match collection.iter_mut().find(|item| compare(&**item)) {
        Some(item) => UpdateResult {
            matched_count: 1,
            modified_count: if update(item) { 1 } else { 0 },
            upserted_id: None,
        },
        None => UpdateResult::default(),
    }
}

/// Like `update_one_by` on the item with `val_id`, inserting the result of
/// `create` when there is no such item
pub fn upsert<T: Entity, U: FnOnce(&mut T) -> bool, C: FnOnce() -> T>(
    val_id: &ID,
    collection: &Mutex<Vec<T>>,
    update: U,
    create: C,
) -> UpdateResult {
    let mut collection = lock(collection);
    match collection.iter_mut().find(|item| item.id() == val_id) {
        Some(item) => UpdateResult {
            matched_count: 1,
            modified_count: if update(item) { 1 } else { 0 },
            upserted_id: None,
        },
        None => {
            collection.push(create());
            UpdateResult {
                matched_count: 0,
                modified_count: 0,
                upserted_id: Some(val_id.clone()),
            }
        }
    }
}
