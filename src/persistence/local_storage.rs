//! Browser LocalStorage score store (wasm)

use web_sys::Storage;

use super::{ScoreStore, StorageError, item_name};
use crate::ledger::ScoreRecord;

/// LocalStorage-backed store
#[derive(Debug, Default)]
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    pub fn new() -> Self {
        Self { storage: None }
    }

    fn storage(&self) -> Result<&Storage, StorageError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StorageError::Unavailable("local storage not opened".into()))
    }

    fn js_error(op: &str, err: wasm_bindgen::JsValue) -> StorageError {
        StorageError::Unavailable(format!("local storage {op} failed: {err:?}"))
    }
}

impl ScoreStore for LocalStorageStore {
    async fn open(&mut self) -> Result<(), StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".into()))?;
        let storage = window
            .local_storage()
            .map_err(|e| Self::js_error("open", e))?
            .ok_or_else(|| StorageError::Unavailable("local storage disabled".into()))?;
        self.storage = Some(storage);
        Ok(())
    }

    async fn get(&self, key: u32) -> Result<Option<ScoreRecord>, StorageError> {
        let item = self
            .storage()?
            .get_item(&item_name(key))
            .map_err(|e| Self::js_error("get", e))?;
        item.map(|json| serde_json::from_str(&json).map_err(StorageError::from))
            .transpose()
    }

    async fn put(&mut self, key: u32, record: &ScoreRecord) -> Result<(), StorageError> {
        let json = serde_json::to_string(record)?;
        self.storage()?
            .set_item(&item_name(key), &json)
            .map_err(|e| Self::js_error("put", e))
    }

    async fn delete(&mut self, key: u32) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(&item_name(key))
            .map_err(|e| Self::js_error("delete", e))
    }
}
