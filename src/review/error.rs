//! Review command rejections.
//!
//! All variants are rejected commands, not exceptions: callers surface them
//! as user-facing validation messages and need to know which rule fired.

use thiserror::Error;

use super::types::VotingRole;

// ============================================================================
// Voting
// ============================================================================

/// Why a vote was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VoteError {
    /// The person has no roster entry on this review.
    #[error("'{person_id}' is not a reviewer on review '{review_id}'")]
    NotAReviewer {
        /// The review instance
        review_id: String,
        /// The person who tried to vote
        person_id: String,
    },

    /// The person is on the roster but their role does not carry a vote.
    /// Alternates fall here until explicitly promoted.
    #[error("'{person_id}' holds non-voting role '{role}' on review '{review_id}'")]
    NonVotingReviewer {
        /// The review instance
        review_id: String,
        /// The person who tried to vote
        person_id: String,
        /// The role that blocked the vote
        role: VotingRole,
    },

    /// The review is completed or its voting window has passed.
    #[error("review '{review_id}' is closed to voting")]
    ReviewClosed {
        /// The review instance
        review_id: String,
    },
}

// ============================================================================
// Roster
// ============================================================================

/// Why a roster operation was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// The person has no roster entry on this review.
    #[error("'{person_id}' is not a reviewer on review '{review_id}'")]
    NotAReviewer {
        /// The review instance
        review_id: String,
        /// The person the operation targeted
        person_id: String,
    },

    /// Promotion targeted a reviewer who is not an alternate.
    #[error("'{person_id}' on review '{review_id}' holds role '{role}', not alternate")]
    NotAnAlternate {
        /// The review instance
        review_id: String,
        /// The person the promotion targeted
        person_id: String,
        /// Their actual role
        role: VotingRole,
    },
}

// ============================================================================
// Window Management
// ============================================================================

/// Why a window operation was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// The requested window change is not valid for this review.
    #[error("invalid window for review '{review_id}': {reason}")]
    InvalidWindow {
        /// The review instance
        review_id: String,
        /// What made the change invalid
        reason: String,
    },
}
