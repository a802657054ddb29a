//! JSON file score store (native)
//!
//! One file per key under a data directory. Writes land in a temp file first
//! and are renamed over the target, so a crash mid-write leaves the previous
//! record intact.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{ScoreStore, StorageError, item_name};
use crate::ledger::ScoreRecord;

/// Directory-backed store
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: u32) -> PathBuf {
        self.dir.join(format!("{}.json", item_name(key)))
    }
}

impl ScoreStore for JsonFileStore {
    async fn open(&mut self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        if !self.dir.is_dir() {
            return Err(StorageError::Unavailable(format!(
                "{} is not a directory",
                self.dir.display()
            )));
        }
        log::debug!("Score store opened at {}", self.dir.display());
        Ok(())
    }

    async fn get(&self, key: u32) -> Result<Option<ScoreRecord>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(json) => Ok(Some(serde_json::from_str(&json)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn put(&mut self, key: u32, record: &ScoreRecord) -> Result<(), StorageError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    async fn delete(&mut self, key: u32) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
