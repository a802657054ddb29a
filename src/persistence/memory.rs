//! In-process score store
//!
//! Holds records as JSON text so a round trip exercises the same serde layout
//! the durable backends write. Failures can be injected per operation.

use std::collections::HashMap;

use super::{ScoreStore, StorageError};
use crate::ledger::ScoreRecord;

/// Operations that can be made to fail
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FailureFlags {
    pub open: bool,
    pub get: bool,
    pub put: bool,
    pub delete: bool,
}

/// Map-backed store
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: HashMap<u32, String>,
    opened: bool,
    /// Injected failures
    pub fail: FailureFlags,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that refuses every operation
    pub fn unavailable() -> Self {
        Self {
            fail: FailureFlags {
                open: true,
                get: true,
                put: true,
                delete: true,
            },
            ..Self::default()
        }
    }

    /// Seed a raw JSON item (e.g. a record written by an older layout)
    pub fn insert_raw(&mut self, key: u32, json: impl Into<String>) {
        self.items.insert(key, json.into());
    }

    pub fn contains(&self, key: u32) -> bool {
        self.items.contains_key(&key)
    }

    pub fn is_open(&self) -> bool {
        self.opened
    }

    fn refuse(op: &str) -> StorageError {
        StorageError::Unavailable(format!("memory store {op} refused"))
    }
}

impl ScoreStore for MemoryStore {
    async fn open(&mut self) -> Result<(), StorageError> {
        if self.fail.open {
            return Err(Self::refuse("open"));
        }
        self.opened = true;
        Ok(())
    }

    async fn get(&self, key: u32) -> Result<Option<ScoreRecord>, StorageError> {
        if self.fail.get {
            return Err(Self::refuse("get"));
        }
        self.items
            .get(&key)
            .map(|json| serde_json::from_str(json).map_err(StorageError::from))
            .transpose()
    }

    async fn put(&mut self, key: u32, record: &ScoreRecord) -> Result<(), StorageError> {
        if self.fail.put {
            return Err(Self::refuse("put"));
        }
        let json = serde_json::to_string(record)?;
        self.items.insert(key, json);
        Ok(())
    }

    async fn delete(&mut self, key: u32) -> Result<(), StorageError> {
        if self.fail.delete {
            return Err(Self::refuse("delete"));
        }
        self.items.remove(&key);
        Ok(())
    }
}
