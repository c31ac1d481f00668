//! Persistence gateway for game state.
//!
//! Single-record-per-key semantics: each save overwrites the session's
//! prior record in place; there is no history or versioning. Store failures
//! are real errors — the engine propagates them and the host must report
//! them, never swallow them.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use vg_core::{CoreError, GameState};

/// Errors from the persistence gateway.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing storage failed.
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),

    /// A stored record could not be encoded or decoded.
    #[error(transparent)]
    Record(#[from] CoreError),
}

/// Alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;

/// Key-value persistence for serialized game state.
pub trait StateStore {
    /// Persist the full state under `key`, overwriting any prior record.
    fn save(&mut self, key: &str, state: &GameState) -> StoreResult<()>;

    /// Load the state stored under `key`, or `None` if absent.
    fn load(&self, key: &str) -> StoreResult<Option<GameState>>;
}

/// File-backed store: one `{key}.json` document per session under a
/// directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `dir`. The directory is created on first
    /// save, not here.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The file a key maps to.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Directory this store writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Delete the record for `key`. Returns true if a file was removed.
    pub fn delete(&self, key: &str) -> StoreResult<bool> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(path)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

impl StateStore for JsonFileStore {
    fn save(&mut self, key: &str, state: &GameState) -> StoreResult<()> {
        fs::create_dir_all(&self.dir)?;
        let record = state.to_json()?;
        fs::write(self.path_for(key), record)?;
        Ok(())
    }

    fn load(&self, key: &str) -> StoreResult<Option<GameState>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let record = fs::read_to_string(path)?;
        Ok(Some(GameState::from_json(&record)?))
    }
}

/// In-memory store holding serialized records, so every save/load still
/// crosses the JSON boundary. Used by tests and embeddable hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if no record has been saved.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The raw JSON record for a key, if present.
    pub fn record(&self, key: &str) -> Option<&str> {
        self.records.get(key).map(String::as_str)
    }
}

impl StateStore for MemoryStore {
    fn save(&mut self, key: &str, state: &GameState) -> StoreResult<()> {
        self.records.insert(key.to_string(), state.to_json()?);
        Ok(())
    }

    fn load(&self, key: &str) -> StoreResult<Option<GameState>> {
        match self.records.get(key) {
            Some(record) => Ok(Some(GameState::from_json(record)?)),
            None => Ok(None),
        }
    }
}
