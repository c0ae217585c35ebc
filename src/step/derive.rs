//! Step status derivation.
//!
//! One total, pure function maps a step's timeline facts (plus the statuses
//! of its predecessors and an explicit `now`) onto the closed
//! [`StepStatus`] set. Malformed or sparse fact combinations degrade to the
//! closest defined state; nothing here ever errors.

use chrono::{DateTime, Utc};
use tracing::debug;

use super::status::StepStatus;
use super::types::{GovernanceStep, StepFacts, StepStatuses};
use crate::snapshot::GovernanceSnapshot;

// ============================================================================
// Single-Step Derivation
// ============================================================================

/// Derives the status of one workflow step.
///
/// Rules, in precedence order:
///
/// 1. Any predecessor status outside the satisfied set ⇒ `CantStart`. This
///    is absolute: the step's own facts are never consulted until every
///    predecessor is satisfied.
/// 2. An explicit not-applicable fact ⇒ `NotNeeded`, terminal.
/// 3. Meeting-bearing steps: completion signal ⇒ `Done`; future meeting
///    date ⇒ `Scheduled`; past meeting date ⇒ `AwaitingDecision`; no
///    meeting date ⇒ `Ready`.
/// 4. Artifact steps classify by the most recent submitted / edits-requested
///    pair: on resubmission after an edits request, the newer submission
///    wins. A completion signal holds only while nothing newer contradicts
///    it. See [`derive_artifact`] for the degradation rules.
///
/// `now` only matters for meeting-bearing steps; passing it explicitly keeps
/// the function deterministic for a given snapshot.
#[must_use]
pub fn derive_status(
    step: GovernanceStep,
    facts: &StepFacts,
    predecessor_statuses: &[StepStatus],
    now: DateTime<Utc>,
) -> StepStatus {
    if predecessor_statuses.iter().any(|s| !s.is_satisfied()) {
        return StepStatus::CantStart;
    }

    if facts.not_applicable {
        return StepStatus::NotNeeded;
    }

    if step.is_meeting() {
        derive_meeting(facts, now)
    } else {
        derive_artifact(step, facts)
    }
}

/// Classifies a meeting-bearing step (GRT/GRB).
fn derive_meeting(facts: &StepFacts, now: DateTime<Utc>) -> StepStatus {
    if facts.completed_at.is_some() {
        return StepStatus::Done;
    }
    match facts.meeting_date {
        Some(date) if date > now => StepStatus::Scheduled,
        Some(_) => StepStatus::AwaitingDecision,
        None => StepStatus::Ready,
    }
}

/// Classifies an artifact step (forms, business cases, feedback, decision).
fn derive_artifact(step: GovernanceStep, facts: &StepFacts) -> StepStatus {
    let finished = if step.is_decision() {
        StepStatus::Completed
    } else {
        StepStatus::Done
    };

    let submitted = facts.submitted_at;
    let edits = facts.latest_edits_request(step);

    // A completion signal holds unless something newer reopened the step.
    if let Some(completed) = facts.completed_at {
        let resubmitted_after = submitted.is_some_and(|s| s > completed);
        let edits_after = edits.is_some_and(|e| e > completed);
        if !resubmitted_after && !edits_after {
            return finished;
        }
        debug!(
            %step,
            %completed,
            "completion signal superseded by newer submission or edits request"
        );
    }

    match (submitted, edits) {
        // Most recent pair wins: edits request strictly newer than the
        // latest submission sends the step back to the requester. An equal
        // timestamp resolves to the submission.
        (Some(s), Some(e)) if e > s => StepStatus::EditsRequested,
        (Some(_), _) => StepStatus::Submitted,
        // Edits requested without any submission on record: degrade to the
        // closest defined state rather than erroring.
        (None, Some(_)) => StepStatus::EditsRequested,
        (None, None) if facts.updated_at.is_some() => StepStatus::InProgress,
        (None, None) => StepStatus::Ready,
    }
}

// ============================================================================
// Whole-Snapshot Derivation
// ============================================================================

/// Derives every step's status in one pass over the snapshot.
///
/// Steps are walked in workflow order, feeding each step its predecessor's
/// freshly derived status, so the blocking rule is applied uniformly: if
/// step *i* is `CantStart`, step *i + 1* is too. A recorded request
/// decision (`request.decided_at`) counts as the decision step's completion
/// signal when the step's own facts lack one.
#[must_use]
pub fn derive_all(snapshot: &GovernanceSnapshot, now: DateTime<Utc>) -> StepStatuses {
    let mut statuses = StepStatuses::default();
    let mut previous: Option<StepStatus> = None;

    for step in GovernanceStep::ALL {
        let facts = snapshot.steps.get(step);
        let predecessors = match previous {
            Some(ref status) => std::slice::from_ref(status),
            None => &[],
        };

        let status = if step.is_decision() && facts.completed_at.is_none() {
            let mut merged = facts.clone();
            merged.completed_at = snapshot.request.decided_at;
            derive_status(step, &merged, predecessors, now)
        } else {
            derive_status(step, facts, predecessors, now)
        };

        statuses.set(step, status);
        previous = Some(status);
    }

    statuses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::types::{AuthorRole, FeedbackAction, FeedbackRecord};
    use chrono::TimeZone;

    const SATISFIED: &[StepStatus] = &[StepStatus::Done];
    const BLOCKED: &[StepStatus] = &[StepStatus::Submitted];

    fn t(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, day, hour, 0, 0).unwrap()
    }

    fn edits_request(step: GovernanceStep, at: DateTime<Utc>) -> FeedbackRecord {
        FeedbackRecord {
            target_step: step,
            author_role: AuthorRole::ReviewTeam,
            action: FeedbackAction::RequestEdits,
            created_at: at,
        }
    }

    // ========================================================================
    // Predecessor Precedence
    // ========================================================================

    /// An unsatisfied predecessor blocks the step regardless of its own facts.
    #[test]
    fn test_blocked_predecessor_overrides_own_facts() {
        let facts = StepFacts {
            submitted_at: Some(t(10, 0)),
            completed_at: Some(t(11, 0)),
            ..StepFacts::default()
        };

        assert_eq!(
            derive_status(GovernanceStep::DraftBusinessCase, &facts, BLOCKED, t(12, 0)),
            StepStatus::CantStart
        );
    }

    /// Not-applicable blocks too: predecessor precedence is absolute.
    #[test]
    fn test_blocked_predecessor_overrides_not_applicable() {
        let facts = StepFacts {
            not_applicable: true,
            ..StepFacts::default()
        };

        assert_eq!(
            derive_status(GovernanceStep::DraftBusinessCase, &facts, BLOCKED, t(12, 0)),
            StepStatus::CantStart
        );
    }

    #[test]
    fn test_not_needed_is_terminal_over_other_facts() {
        let facts = StepFacts {
            submitted_at: Some(t(10, 0)),
            not_applicable: true,
            feedback: vec![edits_request(GovernanceStep::DraftBusinessCase, t(11, 0))],
            ..StepFacts::default()
        };

        assert_eq!(
            derive_status(GovernanceStep::DraftBusinessCase, &facts, SATISFIED, t(12, 0)),
            StepStatus::NotNeeded
        );
    }

    // ========================================================================
    // Artifact Classification
    // ========================================================================

    #[test]
    fn test_no_facts_is_ready() {
        assert_eq!(
            derive_status(
                GovernanceStep::IntakeForm,
                &StepFacts::default(),
                &[],
                t(12, 0)
            ),
            StepStatus::Ready
        );
    }

    #[test]
    fn test_updated_without_submission_is_in_progress() {
        let facts = StepFacts {
            updated_at: Some(t(9, 0)),
            ..StepFacts::default()
        };
        assert_eq!(
            derive_status(GovernanceStep::IntakeForm, &facts, &[], t(12, 0)),
            StepStatus::InProgress
        );
    }

    #[test]
    fn test_submitted_without_feedback_is_submitted() {
        let facts = StepFacts {
            submitted_at: Some(t(10, 0)),
            updated_at: Some(t(9, 0)),
            ..StepFacts::default()
        };
        assert_eq!(
            derive_status(GovernanceStep::DraftBusinessCase, &facts, SATISFIED, t(12, 0)),
            StepStatus::Submitted
        );
    }

    #[test]
    fn test_newer_edits_request_wins() {
        let facts = StepFacts {
            submitted_at: Some(t(10, 0)),
            feedback: vec![edits_request(GovernanceStep::DraftBusinessCase, t(11, 0))],
            ..StepFacts::default()
        };
        assert_eq!(
            derive_status(GovernanceStep::DraftBusinessCase, &facts, SATISFIED, t(12, 0)),
            StepStatus::EditsRequested
        );
    }

    /// Resubmission precedence: submitted T1, edits requested T2 > T1, then
    /// resubmitted T3 > T2 — the newest submission wins.
    #[test]
    fn test_resubmission_beats_older_edits_request() {
        let facts = StepFacts {
            submitted_at: Some(t(13, 0)),
            feedback: vec![edits_request(GovernanceStep::DraftBusinessCase, t(11, 0))],
            ..StepFacts::default()
        };
        assert_eq!(
            derive_status(GovernanceStep::DraftBusinessCase, &facts, SATISFIED, t(14, 0)),
            StepStatus::Submitted
        );
    }

    /// Equal timestamps resolve to the submission.
    #[test]
    fn test_tied_pair_resolves_to_submission() {
        let facts = StepFacts {
            submitted_at: Some(t(10, 0)),
            feedback: vec![edits_request(GovernanceStep::DraftBusinessCase, t(10, 0))],
            ..StepFacts::default()
        };
        assert_eq!(
            derive_status(GovernanceStep::DraftBusinessCase, &facts, SATISFIED, t(12, 0)),
            StepStatus::Submitted
        );
    }

    #[test]
    fn test_completion_after_submission_is_done() {
        let facts = StepFacts {
            submitted_at: Some(t(10, 0)),
            completed_at: Some(t(11, 0)),
            ..StepFacts::default()
        };
        assert_eq!(
            derive_status(GovernanceStep::DraftBusinessCase, &facts, SATISFIED, t(12, 0)),
            StepStatus::Done
        );
    }

    /// The decision step finishes as Completed, not Done.
    #[test]
    fn test_decision_step_completes() {
        let facts = StepFacts {
            completed_at: Some(t(11, 0)),
            ..StepFacts::default()
        };
        assert_eq!(
            derive_status(
                GovernanceStep::DecisionAndNextSteps,
                &facts,
                SATISFIED,
                t(12, 0)
            ),
            StepStatus::Completed
        );
    }

    /// A resubmission after completion reopens the step.
    #[test]
    fn test_resubmission_supersedes_completion() {
        let facts = StepFacts {
            submitted_at: Some(t(12, 0)),
            completed_at: Some(t(11, 0)),
            ..StepFacts::default()
        };
        assert_eq!(
            derive_status(GovernanceStep::DraftBusinessCase, &facts, SATISFIED, t(13, 0)),
            StepStatus::Submitted
        );
    }

    /// An edits request after completion reopens the step.
    #[test]
    fn test_edits_request_supersedes_completion() {
        let facts = StepFacts {
            submitted_at: Some(t(10, 0)),
            completed_at: Some(t(11, 0)),
            feedback: vec![edits_request(GovernanceStep::DraftBusinessCase, t(12, 0))],
            ..StepFacts::default()
        };
        assert_eq!(
            derive_status(GovernanceStep::DraftBusinessCase, &facts, SATISFIED, t(13, 0)),
            StepStatus::EditsRequested
        );
    }

    /// Malformed: edits requested though nothing was ever submitted.
    /// Degrades to EditsRequested rather than erroring.
    #[test]
    fn test_edits_request_without_submission_degrades() {
        let facts = StepFacts {
            feedback: vec![edits_request(GovernanceStep::IntakeForm, t(11, 0))],
            ..StepFacts::default()
        };
        assert_eq!(
            derive_status(GovernanceStep::IntakeForm, &facts, &[], t(12, 0)),
            StepStatus::EditsRequested
        );
    }

    /// Completion with no submission at all still counts as finished:
    /// review-team-owned steps are completed without a requester submission.
    #[test]
    fn test_completion_without_submission_is_done() {
        let facts = StepFacts {
            completed_at: Some(t(11, 0)),
            ..StepFacts::default()
        };
        assert_eq!(
            derive_status(
                GovernanceStep::FeedbackFromInitialReview,
                &facts,
                SATISFIED,
                t(12, 0)
            ),
            StepStatus::Done
        );
    }

    // ========================================================================
    // Meeting Classification
    // ========================================================================

    #[test]
    fn test_meeting_without_date_is_ready() {
        assert_eq!(
            derive_status(
                GovernanceStep::GrtMeeting,
                &StepFacts::default(),
                SATISFIED,
                t(12, 0)
            ),
            StepStatus::Ready
        );
    }

    #[test]
    fn test_future_meeting_is_scheduled() {
        let facts = StepFacts {
            meeting_date: Some(t(20, 0)),
            ..StepFacts::default()
        };
        assert_eq!(
            derive_status(GovernanceStep::GrtMeeting, &facts, SATISFIED, t(12, 0)),
            StepStatus::Scheduled
        );
    }

    #[test]
    fn test_past_meeting_awaits_decision() {
        let facts = StepFacts {
            meeting_date: Some(t(10, 0)),
            ..StepFacts::default()
        };
        assert_eq!(
            derive_status(GovernanceStep::GrbMeeting, &facts, SATISFIED, t(12, 0)),
            StepStatus::AwaitingDecision
        );
    }

    #[test]
    fn test_completed_meeting_is_done_regardless_of_date() {
        let facts = StepFacts {
            meeting_date: Some(t(20, 0)),
            completed_at: Some(t(11, 0)),
            ..StepFacts::default()
        };
        assert_eq!(
            derive_status(GovernanceStep::GrbMeeting, &facts, SATISFIED, t(12, 0)),
            StepStatus::Done
        );
    }

    // ========================================================================
    // Whole-Snapshot Derivation
    // ========================================================================

    #[test]
    fn test_derive_all_blocks_successors() {
        let mut snapshot = GovernanceSnapshot::default();
        snapshot.steps.intake_form.submitted_at = Some(t(10, 0));
        snapshot.steps.intake_form.completed_at = Some(t(11, 0));

        let statuses = derive_all(&snapshot, t(12, 0));
        assert_eq!(statuses.get(GovernanceStep::IntakeForm), StepStatus::Done);
        assert_eq!(
            statuses.get(GovernanceStep::FeedbackFromInitialReview),
            StepStatus::Ready
        );
        // Everything past the first unsatisfied step is blocked
        assert_eq!(
            statuses.get(GovernanceStep::DraftBusinessCase),
            StepStatus::CantStart
        );
        assert_eq!(
            statuses.get(GovernanceStep::DecisionAndNextSteps),
            StepStatus::CantStart
        );
    }

    #[test]
    fn test_derive_all_skips_not_applicable_steps() {
        let mut snapshot = GovernanceSnapshot::default();
        snapshot.steps.intake_form.completed_at = Some(t(9, 0));
        snapshot.steps.initial_feedback.completed_at = Some(t(10, 0));
        snapshot.steps.draft_business_case.not_applicable = true;
        snapshot.steps.grt_meeting.not_applicable = true;

        let statuses = derive_all(&snapshot, t(12, 0));
        assert_eq!(
            statuses.get(GovernanceStep::DraftBusinessCase),
            StepStatus::NotNeeded
        );
        // NotNeeded satisfies the successor's dependency
        assert_eq!(
            statuses.get(GovernanceStep::FinalBusinessCase),
            StepStatus::Ready
        );
    }

    #[test]
    fn test_derive_all_uses_request_decision_for_decision_step() {
        let mut snapshot = GovernanceSnapshot::default();
        for step in GovernanceStep::ALL {
            snapshot.steps.get_mut(step).completed_at = Some(t(10, 0));
        }
        snapshot.steps.decision.completed_at = None;
        snapshot.request.decided_at = Some(t(11, 0));

        let statuses = derive_all(&snapshot, t(12, 0));
        assert_eq!(
            statuses.get(GovernanceStep::DecisionAndNextSteps),
            StepStatus::Completed
        );
    }
}
