//! Persistence port for evaluation results.

use crate::domain::{EvaluationKey, EvaluationResult};
use crate::error::Result;

/// Storage operations for evaluation results.
///
/// Results are keyed by [`EvaluationKey`] (normalized player, canonical
/// statistic, slate date). Re-evaluating a proposition on the same key
/// replaces the stored record.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - `list` returns records ordered by key
pub trait EvaluationStore: Send + Sync {
    /// Insert or replace results. Returns the number of distinct keys
    /// written; later results in a batch replace earlier ones on the same key.
    fn upsert(&self, results: &[EvaluationResult]) -> Result<usize>;

    /// Get a result by key.
    fn get(&self, key: &EvaluationKey) -> Result<Option<EvaluationResult>>;

    /// List all stored results.
    fn list(&self) -> Result<Vec<EvaluationResult>>;
}
