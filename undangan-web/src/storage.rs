use gloo_storage::{errors::StorageError, LocalStorage, Storage};
use serde_json::Value;
use undangan_client::Store;

/// The browser's `localStorage`, where the page keeps one JSON document per
/// namespace
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl Store for LocalStore {
    fn get(&self, namespace: &str) -> Option<Value> {
        match LocalStorage::get::<Value>(namespace) {
            Ok(v) => Some(v),
            Err(StorageError::KeyNotFound(_)) => None,
            Err(err) => {
                tracing::warn!(namespace, ?err, "failed reading local storage");
                None
            }
        }
    }
}
