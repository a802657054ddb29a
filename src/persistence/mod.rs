//! Score persistence
//!
//! A key-value boundary for the score record. Backends:
//! - `memory`: in-process map (tests, in-memory-only play)
//! - `file`: JSON files on disk (native)
//! - `local_storage`: browser LocalStorage (wasm)

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;
pub mod memory;

#[cfg(not(target_arch = "wasm32"))]
pub use file::JsonFileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;
pub use memory::MemoryStore;

use thiserror::Error;

use crate::ledger::ScoreRecord;

/// Database the score store lives in
pub const DB_NAME: &str = "guessTheNumberDB";
/// Store (table) holding score records
pub const STORE_NAME: &str = "scores";
/// Key of the singleton score record
pub const RECORD_KEY: u32 = 1;

/// Flat item name for backends without nested namespaces
pub fn item_name(key: u32) -> String {
    format!("{DB_NAME}.{STORE_NAME}.{key}")
}

/// Failures of the persistence backend
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("stored record is malformed: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Key-value store for score records
///
/// Each call stands alone (its own short transaction) and either completes or
/// fails terminally. Mutating calls take `&mut self`, so a caller can never
/// have two writes in flight against the same store.
#[allow(async_fn_in_trait)]
pub trait ScoreStore {
    /// Open the store, creating it if it does not exist yet
    async fn open(&mut self) -> Result<(), StorageError>;

    /// Fetch a record, `None` if the key is absent
    async fn get(&self, key: u32) -> Result<Option<ScoreRecord>, StorageError>;

    /// Insert or replace a record
    async fn put(&mut self, key: u32, record: &ScoreRecord) -> Result<(), StorageError>;

    /// Remove a record (absent keys are not an error)
    async fn delete(&mut self, key: u32) -> Result<(), StorageError>;
}
