//! Immutable fact snapshots supplied by the caller.
//!
//! The engine never fetches anything itself: the surrounding data layer
//! hydrates these structs from its query responses and hands them in on
//! every re-evaluation. Calling any derivation twice with the same snapshot
//! yields the same result, so callers may re-run derivation after every
//! fact refresh without diffing prior derived state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::step::{GovernanceStep, StepFacts};

// ============================================================================
// Request Snapshot
// ============================================================================

/// The unit of work moving through governance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestSnapshot {
    /// Opaque request identifier
    pub id: String,
    /// When the intake form was first submitted
    pub submitted_at: Option<DateTime<Utc>>,
    /// When the request was last touched by any workflow action
    pub updated_at: Option<DateTime<Utc>>,
    /// When the final decision was issued
    pub decided_at: Option<DateTime<Utc>>,
    /// Request closed or archived (terminal; never physically deleted)
    pub archived: bool,
}

// ============================================================================
// Per-Step Facts
// ============================================================================

/// Timeline facts for every workflow step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepFactsSet {
    /// Intake form facts
    pub intake_form: StepFacts,
    /// Initial review feedback facts
    pub initial_feedback: StepFacts,
    /// Draft business case facts
    pub draft_business_case: StepFacts,
    /// GRT meeting facts
    pub grt_meeting: StepFacts,
    /// Final business case facts
    pub final_business_case: StepFacts,
    /// GRB meeting facts
    pub grb_meeting: StepFacts,
    /// Decision step facts
    pub decision: StepFacts,
}

impl StepFactsSet {
    /// Facts for the given step.
    #[must_use]
    pub fn get(&self, step: GovernanceStep) -> &StepFacts {
        match step {
            GovernanceStep::IntakeForm => &self.intake_form,
            GovernanceStep::FeedbackFromInitialReview => &self.initial_feedback,
            GovernanceStep::DraftBusinessCase => &self.draft_business_case,
            GovernanceStep::GrtMeeting => &self.grt_meeting,
            GovernanceStep::FinalBusinessCase => &self.final_business_case,
            GovernanceStep::GrbMeeting => &self.grb_meeting,
            GovernanceStep::DecisionAndNextSteps => &self.decision,
        }
    }

    /// Mutable facts for the given step. Intended for callers assembling a
    /// snapshot, not for mutation after derivation.
    pub fn get_mut(&mut self, step: GovernanceStep) -> &mut StepFacts {
        match step {
            GovernanceStep::IntakeForm => &mut self.intake_form,
            GovernanceStep::FeedbackFromInitialReview => &mut self.initial_feedback,
            GovernanceStep::DraftBusinessCase => &mut self.draft_business_case,
            GovernanceStep::GrtMeeting => &mut self.grt_meeting,
            GovernanceStep::FinalBusinessCase => &mut self.final_business_case,
            GovernanceStep::GrbMeeting => &mut self.grb_meeting,
            GovernanceStep::DecisionAndNextSteps => &mut self.decision,
        }
    }
}

// ============================================================================
// Governance Snapshot
// ============================================================================

/// Everything the step deriver and sequencer consume for one request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GovernanceSnapshot {
    /// The request itself
    pub request: RequestSnapshot,
    /// Per-step timeline facts
    pub steps: StepFactsSet,
}
