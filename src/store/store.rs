// Collections are replaced wholesale:
// no in-place edits
// no uniqueness enforcement
// callers own read-modify-write

use std::cell::RefCell;
use std::fs;
use std::io::Write;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::types::quote::QuoteRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Malformed collection at {path}: {detail}")]
    Malformed { path: PathBuf, detail: String },
    #[error("Input file not found: {0}")]
    MissingInput(PathBuf),
}

/// Persisted collection of approved quotes.
pub trait ApprovedStore {
    /// Missing state is an empty collection; malformed state is an error.
    fn load(&self) -> Result<Vec<QuoteRecord>, StoreError>;

    /// Atomically replace the whole collection.
    fn save(&self, records: &[QuoteRecord]) -> Result<(), StoreError>;

    /// Read path for distribution: any failure degrades to empty.
    fn load_or_empty(&self) -> Vec<QuoteRecord> {
        match self.load() {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(error = %e, "approved store unreadable, serving built-in quotes only");
                Vec::new()
            }
        }
    }
}

/// A moderation rejection kept for later review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedRecord {
    #[serde(alias = "quote")]
    pub record: Value,
    pub reasons: Vec<String>,
}

/// Append-only log of rejected imports, stored the same way.
pub trait RejectionLog {
    fn load(&self) -> Result<Vec<RejectedRecord>, StoreError>;
    fn save(&self, entries: &[RejectedRecord]) -> Result<(), StoreError>;
}

/// A JSON list on disk, pretty-printed with a trailing newline.
#[derive(Debug, Clone)]
pub struct JsonListFile<T> {
    path: PathBuf,
    _item: PhantomData<T>,
}

pub type JsonApprovedStore = JsonListFile<QuoteRecord>;
pub type JsonRejectionLog = JsonListFile<RejectedRecord>;

impl<T> JsonListFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _item: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_items(&self) -> Result<Vec<T>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        read_list(&self.path)
    }

    fn write_items(&self, items: &[T]) -> Result<(), StoreError> {
        let temp_path = self.path.with_extension("json.tmp");

        let mut f = fs::File::create(&temp_path)?;
        serde_json::to_writer_pretty(&mut f, items)?;
        f.write_all(b"\n")?;
        f.sync_all()?;

        fs::rename(&temp_path, &self.path)?;
        tracing::info!(path = %self.path.display(), count = items.len(), "saved collection");
        Ok(())
    }
}

impl ApprovedStore for JsonListFile<QuoteRecord> {
    fn load(&self) -> Result<Vec<QuoteRecord>, StoreError> {
        self.read_items()
    }

    fn save(&self, records: &[QuoteRecord]) -> Result<(), StoreError> {
        self.write_items(records)
    }
}

impl RejectionLog for JsonListFile<RejectedRecord> {
    fn load(&self) -> Result<Vec<RejectedRecord>, StoreError> {
        self.read_items()
    }

    fn save(&self, entries: &[RejectedRecord]) -> Result<(), StoreError> {
        self.write_items(entries)
    }
}

/// Read a JSON list that must exist. Used for import input.
pub fn read_required_list<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    if !path.exists() {
        return Err(StoreError::MissingInput(path.to_path_buf()));
    }
    read_list(path)
}

fn read_list<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    let raw = fs::read_to_string(path)?;
    let malformed = |detail: String| StoreError::Malformed {
        path: path.to_path_buf(),
        detail,
    };

    let value: Value = serde_json::from_str(&raw).map_err(|e| malformed(e.to_string()))?;
    if !value.is_array() {
        return Err(malformed("expected a JSON list".to_string()));
    }
    serde_json::from_value(value).map_err(|e| malformed(e.to_string()))
}

/// In-memory collection for hosts without durable state, and for tests.
#[derive(Debug)]
pub struct MemoryList<T> {
    items: RefCell<Vec<T>>,
}

impl<T> Default for MemoryList<T> {
    fn default() -> Self {
        Self {
            items: RefCell::new(Vec::new()),
        }
    }
}

impl<T: Clone> MemoryList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items: RefCell::new(items),
        }
    }

    pub fn snapshot(&self) -> Vec<T> {
        self.items.borrow().clone()
    }

    fn replace(&self, items: &[T]) {
        *self.items.borrow_mut() = items.to_vec();
    }
}

impl ApprovedStore for MemoryList<QuoteRecord> {
    fn load(&self) -> Result<Vec<QuoteRecord>, StoreError> {
        Ok(self.snapshot())
    }

    fn save(&self, records: &[QuoteRecord]) -> Result<(), StoreError> {
        self.replace(records);
        Ok(())
    }
}

impl RejectionLog for MemoryList<RejectedRecord> {
    fn load(&self) -> Result<Vec<RejectedRecord>, StoreError> {
        Ok(self.snapshot())
    }

    fn save(&self, entries: &[RejectedRecord]) -> Result<(), StoreError> {
        self.replace(entries);
        Ok(())
    }
}
