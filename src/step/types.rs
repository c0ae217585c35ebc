//! Step domain types: the governance step enumeration, per-step timeline
//! facts, feedback records, and the derived status table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::status::StepStatus;

// ============================================================================
// Governance Step
// ============================================================================

/// One stage of the governance workflow, in fixed order.
///
/// The ordering is the dependency chain: each step requires its immediate
/// predecessor to be satisfied before its own facts are consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GovernanceStep {
    /// Requester fills out and submits the intake form
    IntakeForm,
    /// Review team issues initial feedback or a next-step recommendation
    FeedbackFromInitialReview,
    /// Requester drafts the business case
    DraftBusinessCase,
    /// Governance review team meeting
    GrtMeeting,
    /// Requester finalizes the business case
    FinalBusinessCase,
    /// Governance review board meeting
    GrbMeeting,
    /// Final decision and next steps are recorded
    DecisionAndNextSteps,
}

impl GovernanceStep {
    /// All steps in workflow order.
    pub const ALL: [GovernanceStep; 7] = [
        Self::IntakeForm,
        Self::FeedbackFromInitialReview,
        Self::DraftBusinessCase,
        Self::GrtMeeting,
        Self::FinalBusinessCase,
        Self::GrbMeeting,
        Self::DecisionAndNextSteps,
    ];

    /// Position of this step in the workflow order.
    #[must_use]
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|s| s == self)
            .unwrap_or_default()
    }

    /// The step immediately before this one, if any.
    #[must_use]
    pub fn predecessor(&self) -> Option<GovernanceStep> {
        match self.index() {
            0 => None,
            i => Some(Self::ALL[i - 1]),
        }
    }

    /// Returns true if this step is anchored to a meeting date rather than
    /// a submitted artifact.
    #[must_use]
    pub fn is_meeting(&self) -> bool {
        matches!(self, Self::GrtMeeting | Self::GrbMeeting)
    }

    /// Returns true if this is the terminal decision step.
    #[must_use]
    pub fn is_decision(&self) -> bool {
        matches!(self, Self::DecisionAndNextSteps)
    }
}

impl std::fmt::Display for GovernanceStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IntakeForm => write!(f, "intake_form"),
            Self::FeedbackFromInitialReview => write!(f, "feedback_from_initial_review"),
            Self::DraftBusinessCase => write!(f, "draft_business_case"),
            Self::GrtMeeting => write!(f, "grt_meeting"),
            Self::FinalBusinessCase => write!(f, "final_business_case"),
            Self::GrbMeeting => write!(f, "grb_meeting"),
            Self::DecisionAndNextSteps => write!(f, "decision_and_next_steps"),
        }
    }
}

// ============================================================================
// Feedback
// ============================================================================

/// Who authored a feedback record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthorRole {
    /// Governance review team
    ReviewTeam,
    /// Governance review board
    ReviewBoard,
    /// The requester themselves
    Requester,
}

/// What a feedback record asks of the requester.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeedbackAction {
    /// The targeted artifact must be revised and resubmitted
    RequestEdits,
    /// Informational feedback; no action required
    General,
}

/// One feedback record on the request timeline. Append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// Step whose artifact the feedback targets
    pub target_step: GovernanceStep,
    /// Who authored the feedback
    pub author_role: AuthorRole,
    /// What the feedback asks for
    pub action: FeedbackAction,
    /// When the feedback was recorded (server-assigned)
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Step Facts
// ============================================================================

/// Raw timeline facts for one workflow step.
///
/// Everything is optional: a freshly created request has no facts at all,
/// and partially-filled workflow data is the expected common case. The
/// deriver is total over every combination of these fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepFacts {
    /// When the step's artifact was last submitted
    pub submitted_at: Option<DateTime<Utc>>,
    /// When the step's artifact was last edited
    pub updated_at: Option<DateTime<Utc>>,
    /// When the step was explicitly accepted or closed out
    pub completed_at: Option<DateTime<Utc>>,
    /// Scheduled meeting date (meeting-bearing steps only)
    pub meeting_date: Option<DateTime<Utc>>,
    /// Step explicitly skipped for this request (e.g. business case not
    /// required); terminal, overrides every other fact
    pub not_applicable: bool,
    /// Feedback records targeting this request, in creation order
    pub feedback: Vec<FeedbackRecord>,
}

impl StepFacts {
    /// Latest edits-request feedback aimed at `step`, if any.
    ///
    /// General feedback never changes a step's status, so only
    /// [`FeedbackAction::RequestEdits`] records are considered. The maximum
    /// is taken over the full set rather than trusting list order, since
    /// records may arrive from concurrent writers.
    #[must_use]
    pub fn latest_edits_request(&self, step: GovernanceStep) -> Option<DateTime<Utc>> {
        self.feedback
            .iter()
            .filter(|f| f.target_step == step && f.action == FeedbackAction::RequestEdits)
            .map(|f| f.created_at)
            .max()
    }
}

// ============================================================================
// Step Status Table
// ============================================================================

/// Derived status for every workflow step.
///
/// Produced in one pass by [`derive_all`](super::derive_all) so that no two
/// call sites can disagree about a step's status given identical facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepStatuses([StepStatus; GovernanceStep::ALL.len()]);

impl Default for StepStatuses {
    fn default() -> Self {
        Self([StepStatus::CantStart; GovernanceStep::ALL.len()])
    }
}

impl StepStatuses {
    /// Status of the given step.
    #[must_use]
    pub fn get(&self, step: GovernanceStep) -> StepStatus {
        self.0[step.index()]
    }

    /// Sets the status of the given step.
    pub fn set(&mut self, step: GovernanceStep, status: StepStatus) {
        self.0[step.index()] = status;
    }

    /// Iterates `(step, status)` pairs in workflow order.
    pub fn iter(&self) -> impl Iterator<Item = (GovernanceStep, StepStatus)> + '_ {
        GovernanceStep::ALL.iter().map(|&step| (step, self.get(step)))
    }
}
