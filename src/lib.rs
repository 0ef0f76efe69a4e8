//! Propedge - player-prop evaluation engine.
//!
//! Evaluates over/under propositions on individual player statistics and
//! produces a recommendation for each: `bet`, `lean` or `reject`.
//!
//! # Architecture
//!
//! Every proposition runs through the same pipeline:
//!
//! - **Veto rules** ([`application::VetoEngine`]) - five hard rules checked
//!   in order; the first match forces a rejection.
//! - **SES scoring** ([`application::Scorer`]) - five capped components
//!   (median gap, line structure, minutes, market type, environment) summed
//!   into a 0-100 composite.
//! - **Decision** ([`application::DecisionThresholds`]) - bet at 72 or more,
//!   lean at 64 or more, otherwise reject.
//!
//! Evaluated results can then be paired into a diversified two-leg
//! combination by [`application::CombinationBuilder`].
//!
//! # Modules
//!
//! - [`domain`] - Propositions, statistics, archetypes and evaluation records
//! - [`application`] - Veto engine, scorer, classifier and combination builder
//! - [`port`] - Trait seams for persistence
//! - [`adapter`] - CLI and store implementations
//! - [`infrastructure`] - TOML configuration and logging
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use propedge::application::{build_combination, evaluate};
//! use propedge::domain::{Proposition, Side};
//!
//! let props = vec![
//!     Proposition::new("Jalen Brunson", "points", 22.5, Side::Over)
//!         .with_team("NYK")
//!         .with_median(25.0)
//!         .with_minutes(34.0),
//!     Proposition::new("Rudy Gobert", "rebounds", 12.5, Side::Under)
//!         .with_team("MIN")
//!         .with_median(10.0)
//!         .with_minutes(33.0),
//! ];
//! let results = evaluate(&props);
//! assert_eq!(results.len(), 2);
//! let _ = build_combination(&results);
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
