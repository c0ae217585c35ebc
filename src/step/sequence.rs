//! Governance step sequencing: overall phase and reachability.
//!
//! The deriver guarantees that `CantStart` is monotonic in workflow order —
//! a later step is never unblocked while an earlier one is blocked — so the
//! sequencer reads the status table without re-checking dependencies.

use super::status::StepStatus;
use super::types::{GovernanceStep, StepStatuses};

/// Returns the overall phase of the request: the last step whose status is
/// not `CantStart`, i.e. the furthest point of observable progress.
///
/// The intake form has no predecessors and is therefore never `CantStart`
/// under derivation; the fallback to it only matters for hand-built tables.
#[must_use]
pub fn overall_phase(statuses: &StepStatuses) -> GovernanceStep {
    GovernanceStep::ALL
        .iter()
        .rev()
        .find(|&&step| statuses.get(step) != StepStatus::CantStart)
        .copied()
        .unwrap_or(GovernanceStep::IntakeForm)
}

/// Returns true if the step has become reachable.
#[must_use]
pub fn is_reachable(statuses: &StepStatuses, step: GovernanceStep) -> bool {
    statuses.get(step) != StepStatus::CantStart
}
