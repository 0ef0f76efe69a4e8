//! Domain validation errors.
//!
//! The scoring core never validates its input. These errors are raised at
//! the boundary where raw text (CLI arguments, JSON records) is turned into
//! domain values.
//!
//! # Examples
//!
//! ```
//! use propedge::domain::error::DomainError;
//! use propedge::domain::Side;
//!
//! let result: Result<Side, _> = "sideways".parse();
//! assert!(matches!(result, Err(DomainError::InvalidSide { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when text cannot be mapped onto a domain value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Side must be `over` or `under`.
    #[error("invalid side '{value}', expected 'over' or 'under'")]
    InvalidSide {
        /// The rejected input.
        value: String,
    },

    /// Market type must be `Standard`, `Goblin` or `Demon`.
    #[error("invalid market type '{value}', expected Standard, Goblin or Demon")]
    InvalidMarketType {
        /// The rejected input.
        value: String,
    },
}
