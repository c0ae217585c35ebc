//! GovBoard Core — transport-agnostic governance lifecycle engine.
//!
//! This library implements the derivation and command logic for a
//! multi-stage IT-governance approval workflow: per-step status derivation
//! from sparse timeline facts, step sequencing, the review-board reviewer
//! roster and voting model, asynchronous review window management, and
//! discussion thread ranking.
//!
//! ## Module Organization
//!
//! - `config` - Engine configuration (quorum fraction)
//! - `snapshot` - Immutable fact snapshots supplied by the caller
//! - `step` - Step status deriver and governance step sequencer
//! - `review` - Reviewer roster, vote casting, outcome tally, async windows
//! - `discussion` - Discussion thread ranking and partitioning
//!
//! ## Design Constraints
//!
//! - **Pure and synchronous** - Every derivation is a deterministic function
//!   of an immutable snapshot (and, where time matters, an explicit `now`).
//!   The engine performs no I/O and owns no concurrency; callers re-invoke
//!   derivation whenever they receive a fresh snapshot.
//! - **Rejected commands, not exceptions** - Vote casting and window
//!   management return closed `Result` taxonomies so callers can render
//!   role-appropriate messaging. Status derivation and ranking are total
//!   and have no error cases at all.
//! - **The caller persists** - Command methods validate and compute the
//!   resulting state; writing it back is the caller's responsibility.

pub mod config;
pub mod discussion;
pub mod review;
pub mod snapshot;
pub mod step;

pub use config::EngineConfig;
pub use discussion::{
    DiscussionBoard, DiscussionThread, Post, ThreadPartition, for_board, most_recent_activity,
    partition,
};
pub use review::{
    ReviewInstance, ReviewStatus, ReviewType, Reviewer, RosterError, Vote, VoteChoice, VoteError,
    VoteTally, VotingRole, WindowError, WindowState,
};
pub use snapshot::{GovernanceSnapshot, RequestSnapshot, StepFactsSet};
pub use step::{
    AuthorRole, FeedbackAction, FeedbackRecord, GovernanceStep, StepFacts, StepStatus,
    StepStatuses, derive_all, derive_status, is_reachable, overall_phase,
};
