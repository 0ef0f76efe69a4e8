//! JSON-file evaluation store.
//!
//! The file holds a pretty-printed JSON array of results. It is read on
//! first access and rewritten in full on every upsert through a temporary
//! sibling file and a rename, so readers never see a partial write.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use tracing::debug;

use crate::domain::{EvaluationKey, EvaluationResult};
use crate::error::Result;
use crate::port::EvaluationStore;

type Records = BTreeMap<EvaluationKey, EvaluationResult>;

/// Evaluation store backed by a single JSON file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    cache: RwLock<Option<Records>>,
}

impl JsonFileStore {
    /// Open a store at `path`. The file is created on the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: RwLock::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(&self) -> Result<Records> {
        if !self.path.exists() {
            return Ok(Records::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Records::new());
        }
        let results: Vec<EvaluationResult> = serde_json::from_str(&content)?;
        debug!(path = %self.path.display(), count = results.len(), "Loaded evaluation store");
        Ok(results.into_iter().map(|r| (r.key(), r)).collect())
    }

    fn write_file(&self, records: &Records) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let results: Vec<&EvaluationResult> = records.values().collect();
        let content = serde_json::to_string_pretty(&results)?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Run `f` against the loaded records, loading them on first use.
    fn with_records<T>(&self, f: impl FnOnce(&Records) -> T) -> Result<T> {
        if let Some(records) = self.cache.read().as_ref() {
            return Ok(f(records));
        }
        let mut cache = self.cache.write();
        let records = match cache.take() {
            Some(records) => records,
            None => self.read_file()?,
        };
        Ok(f(cache.insert(records)))
    }
}

impl EvaluationStore for JsonFileStore {
    fn upsert(&self, results: &[EvaluationResult]) -> Result<usize> {
        let mut cache = self.cache.write();
        let mut records = match cache.take() {
            Some(records) => records,
            None => self.read_file()?,
        };
        let mut keys = BTreeSet::new();
        for result in results {
            let key = result.key();
            keys.insert(key.clone());
            records.insert(key, result.clone());
        }
        // A failed write leaves the cache empty so the next access reloads
        // what is on disk.
        self.write_file(&records)?;
        *cache = Some(records);

        debug!(path = %self.path.display(), count = keys.len(), "Upserted evaluations");
        Ok(keys.len())
    }

    fn get(&self, key: &EvaluationKey) -> Result<Option<EvaluationResult>> {
        self.with_records(|records| records.get(key).cloned())
    }

    fn list(&self) -> Result<Vec<EvaluationResult>> {
        self.with_records(|records| records.values().cloned().collect())
    }
}
