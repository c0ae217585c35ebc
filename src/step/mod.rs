//! Step status derivation and sequencing.
//!
//! This module provides:
//! - The governance step enumeration and its fixed dependency order
//! - Per-step timeline facts and feedback records
//! - The total `derive_status` function mapping facts to a closed status set
//! - Whole-snapshot derivation producing one consistent status table
//! - The sequencer answering "overall phase" and "is this step reachable"

pub mod derive;
pub mod sequence;
pub mod status;
pub mod types;

pub use derive::{derive_all, derive_status};
pub use sequence::{is_reachable, overall_phase};
pub use status::StepStatus;
pub use types::{AuthorRole, FeedbackAction, FeedbackRecord, GovernanceStep, StepFacts, StepStatuses};
