//! Review domain types: the review instance, reviewer roster entries,
//! votes, and the outcome tally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Review Instance
// ============================================================================

/// How a review-board review is conducted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewType {
    /// Single live board meeting
    Standard,
    /// Time-boxed asynchronous review, no live meeting
    Async,
}

/// Derived status of a review instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewStatus {
    /// Review has been set up but not started
    NotStarted,
    /// Standard review with a meeting on the calendar
    Scheduled,
    /// Review underway
    InProgress,
    /// Voting closed or meeting decision recorded
    Completed,
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotStarted => write!(f, "not_started"),
            Self::Scheduled => write!(f, "scheduled"),
            Self::InProgress => write!(f, "in_progress"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// State of an asynchronous review's voting window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WindowState {
    /// Window has not opened
    NotStarted,
    /// Window is open for voting
    Open,
    /// Deadline passed without the review being completed
    Expired,
    /// Review completed; timestamps no longer matter
    Completed,
}

impl std::fmt::Display for WindowState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotStarted => write!(f, "not_started"),
            Self::Open => write!(f, "open"),
            Self::Expired => write!(f, "expired"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

// ============================================================================
// Reviewers and Votes
// ============================================================================

/// Whether a reviewer's vote counts toward quorum and outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VotingRole {
    /// Counts toward quorum and outcome
    Voting,
    /// Participates in discussion only
    NonVoting,
    /// May be promoted to voting by an explicit admin action
    Alternate,
}

impl std::fmt::Display for VotingRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Voting => write!(f, "voting"),
            Self::NonVoting => write!(f, "non_voting"),
            Self::Alternate => write!(f, "alternate"),
        }
    }
}

/// A reviewer's ballot choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoteChoice {
    /// No objection to the request proceeding
    Approve,
    /// Objection to the request proceeding
    Disapprove,
    /// Present but taking no position
    Abstain,
}

impl std::fmt::Display for VoteChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Approve => write!(f, "approve"),
            Self::Disapprove => write!(f, "disapprove"),
            Self::Abstain => write!(f, "abstain"),
        }
    }
}

/// A cast vote. Mutable until the window closes; the latest cast wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    /// The ballot choice
    pub choice: VoteChoice,
    /// When the vote was cast
    pub cast_at: DateTime<Utc>,
}

/// Membership of one person in a review instance.
///
/// A person appears at most once per instance, keyed by `person_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reviewer {
    /// Opaque person identifier
    pub person_id: String,
    /// Whether this reviewer's vote counts
    pub voting_role: VotingRole,
    /// Committee seat label (e.g. "CIO", "Budget Lead")
    pub grb_role: String,
    /// Latest vote cast by this reviewer, if any
    pub vote: Option<Vote>,
}

impl Reviewer {
    /// Creates a roster entry with no vote on record.
    #[must_use]
    pub fn new(
        person_id: impl Into<String>,
        voting_role: VotingRole,
        grb_role: impl Into<String>,
    ) -> Self {
        Self {
            person_id: person_id.into(),
            voting_role,
            grb_role: grb_role.into(),
            vote: None,
        }
    }
}

// ============================================================================
// Vote Tally
// ============================================================================

/// Counts of voting reviewers' latest votes.
///
/// A tally, not a verdict: recording the actual decision is a separate
/// admin action outside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    /// Voting reviewers whose latest vote is Approve
    pub approve: usize,
    /// Voting reviewers whose latest vote is Disapprove
    pub disapprove: usize,
    /// Voting reviewers whose latest vote is Abstain
    pub abstain: usize,
    /// Voting reviewers with no vote on record
    pub not_yet_voted: usize,
    /// Whether participation meets the configured quorum fraction
    pub quorum_met: bool,
}

// ============================================================================
// Review Instance
// ============================================================================

/// One review-board review cycle attached to a request.
///
/// Created when an admin sets up the review. Command methods live in the
/// `roster` and `window` modules; this type holds the facts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewInstance {
    /// Opaque review identifier
    pub id: String,
    /// How the review is conducted
    pub review_type: ReviewType,
    /// When the review started; `None` means not yet started
    pub started_at: Option<DateTime<Utc>>,
    /// Voting window deadline (asynchronous reviews only)
    pub window_end_at: Option<DateTime<Utc>>,
    /// When voting was closed or the meeting decision recorded
    pub completed_at: Option<DateTime<Utc>>,
    /// Board meeting date (standard reviews only)
    pub meeting_date: Option<DateTime<Utc>>,
    /// Reviewer roster, at most one entry per person
    pub reviewers: Vec<Reviewer>,
}

impl ReviewInstance {
    /// Creates a freshly set-up review with an empty roster.
    #[must_use]
    pub fn new(id: impl Into<String>, review_type: ReviewType) -> Self {
        Self {
            id: id.into(),
            review_type,
            started_at: None,
            window_end_at: None,
            completed_at: None,
            meeting_date: None,
            reviewers: Vec::new(),
        }
    }

    /// Derived status of this review at `now`.
    #[must_use]
    pub fn status(&self, now: DateTime<Utc>) -> ReviewStatus {
        if self.completed_at.is_some() {
            return ReviewStatus::Completed;
        }
        if self.started_at.is_some() {
            return ReviewStatus::InProgress;
        }
        match self.meeting_date {
            Some(date) if date > now => ReviewStatus::Scheduled,
            _ => ReviewStatus::NotStarted,
        }
    }

    /// Returns true if the review no longer accepts votes: completed, or an
    /// asynchronous review past its window deadline.
    #[must_use]
    pub fn is_closed(&self, now: DateTime<Utc>) -> bool {
        if self.completed_at.is_some() {
            return true;
        }
        self.review_type == ReviewType::Async
            && self.window_end_at.is_some_and(|end| now > end)
    }

    /// Marks the review completed at `now`.
    pub fn complete(&mut self, now: DateTime<Utc>) {
        self.completed_at = Some(now);
    }

    /// Roster entry for `person_id`, if present.
    #[must_use]
    pub fn reviewer(&self, person_id: &str) -> Option<&Reviewer> {
        self.reviewers.iter().find(|r| r.person_id == person_id)
    }

    pub(super) fn reviewer_index(&self, person_id: &str) -> Option<usize> {
        self.reviewers.iter().position(|r| r.person_id == person_id)
    }
}
