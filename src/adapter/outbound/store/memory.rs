//! In-memory evaluation store.

use std::collections::{BTreeMap, BTreeSet};

use parking_lot::RwLock;

use crate::domain::{EvaluationKey, EvaluationResult};
use crate::error::Result;
use crate::port::EvaluationStore;

/// In-memory store, used by tests and one-shot CLI runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    results: RwLock<BTreeMap<EvaluationKey, EvaluationResult>>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.read().is_empty()
    }
}

impl EvaluationStore for MemoryStore {
    fn upsert(&self, results: &[EvaluationResult]) -> Result<usize> {
        let mut stored = self.results.write();
        let mut keys = BTreeSet::new();
        for result in results {
            let key = result.key();
            keys.insert(key.clone());
            stored.insert(key, result.clone());
        }
        Ok(keys.len())
    }

    fn get(&self, key: &EvaluationKey) -> Result<Option<EvaluationResult>> {
        Ok(self.results.read().get(key).cloned())
    }

    fn list(&self) -> Result<Vec<EvaluationResult>> {
        Ok(self.results.read().values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Side;
    use crate::testkit::domain::result;

    #[test]
    fn upsert_overwrites_same_key() {
        let store = MemoryStore::new();
        store.upsert(&[result("A", "NYK", Side::Over, 70.0)]).unwrap();
        store.upsert(&[result("a", "NYK", Side::Over, 75.0)]).unwrap();

        assert_eq!(store.len(), 1);
        let listed = store.list().unwrap();
        assert_eq!(listed[0].composite, 75.0);
    }

    #[test]
    fn duplicate_keys_in_a_batch_count_once() {
        let store = MemoryStore::new();
        let written = store
            .upsert(&[
                result("A", "NYK", Side::Over, 70.0),
                result("B", "BOS", Side::Over, 72.0),
                result("a", "NYK", Side::Over, 75.0),
            ])
            .unwrap();
        assert_eq!(written, 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn distinct_keys_are_kept() {
        let store = MemoryStore::new();
        let written = store
            .upsert(&[
                result("A", "NYK", Side::Over, 70.0),
                result("B", "BOS", Side::Over, 75.0),
            ])
            .unwrap();
        assert_eq!(written, 2);
        assert_eq!(store.len(), 2);

        let key = result("B", "BOS", Side::Over, 75.0).key();
        assert_eq!(store.get(&key).unwrap().map(|r| r.composite), Some(75.0));
    }
}
