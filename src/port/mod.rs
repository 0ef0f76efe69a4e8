//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                ┌─────────────────────────┐
//!   CLI  ───────▶│  Domain + Application   │───────▶  Store
//! (inbound)      └─────────────────────────┘        (outbound)
//! ```
//!
//! # Available Ports
//!
//! - [`EvaluationStore`] - Persistence for evaluation results

pub mod outbound;

pub use outbound::store::EvaluationStore;
