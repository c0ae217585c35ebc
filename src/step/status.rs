//! Derived step status and its predicates.

use serde::{Deserialize, Serialize};

// ============================================================================
// Step Status
// ============================================================================

/// Derived status of one governance workflow step.
///
/// Never persisted; recomputed from [`StepFacts`](super::StepFacts) on every
/// read. The closed set below is the whole vocabulary — derivation always
/// lands on one of these, no matter how sparse or malformed the facts.
///
/// Artifact steps progress through:
/// - `Ready` → `InProgress` → `Submitted` → `Done` (or `Completed` for the
///   terminal decision step)
/// - `EditsRequested` loops back into `Submitted` on resubmission
///
/// Meeting-bearing steps additionally report `Scheduled` (future meeting
/// date) and `AwaitingDecision` (past meeting date, no completion signal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StepStatus {
    /// Step is unblocked and has not been started
    Ready,
    /// Step artifact has been edited but not submitted
    InProgress,
    /// Latest feedback asks the requester to revise and resubmit
    EditsRequested,
    /// Step artifact is submitted and awaiting review
    Submitted,
    /// Step finished; successors may proceed
    Done,
    /// A required predecessor step is not yet satisfied
    CantStart,
    /// Step explicitly skipped for this request
    NotNeeded,
    /// Meeting is on the calendar in the future
    Scheduled,
    /// Meeting has happened; outcome not yet recorded
    AwaitingDecision,
    /// Terminal decision step finished
    Completed,
}

impl StepStatus {
    /// Returns true if this status satisfies a successor's dependency.
    ///
    /// A step's facts are never consulted until every predecessor reports a
    /// satisfied status.
    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        matches!(self, Self::Done | Self::Completed | Self::NotNeeded)
    }

    /// Returns true if no further derivation can change this status.
    ///
    /// `NotNeeded` and `Completed` are terminal by contract; `Done` is not,
    /// because a later edits request can reopen an artifact step.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::NotNeeded | Self::Completed)
    }
}

impl std::fmt::Display for StepStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ready => write!(f, "ready"),
            Self::InProgress => write!(f, "in_progress"),
            Self::EditsRequested => write!(f, "edits_requested"),
            Self::Submitted => write!(f, "submitted"),
            Self::Done => write!(f, "done"),
            Self::CantStart => write!(f, "cant_start"),
            Self::NotNeeded => write!(f, "not_needed"),
            Self::Scheduled => write!(f, "scheduled"),
            Self::AwaitingDecision => write!(f, "awaiting_decision"),
            Self::Completed => write!(f, "completed"),
        }
    }
}
