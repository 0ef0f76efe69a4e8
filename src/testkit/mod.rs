//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for propositions and evaluation results.
//! - [`config`] - Canonical engine configurations.

pub mod config;
pub mod domain;
