//! Discussion thread ranking and partitioning.
//!
//! Threads are scoped to a review instance and a board type. Ranking runs
//! on read, is stateless, and has no side effects: per-thread "latest
//! activity" is the max over the initial post and the full reply set, so
//! replies that arrived out of order under concurrent posting are still
//! ranked correctly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Discussion Types
// ============================================================================

/// Which discussion board a thread belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscussionBoard {
    /// Visible to governance admins and the board only
    Internal,
    /// Visible to all review participants
    Primary,
}

impl std::fmt::Display for DiscussionBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Internal => write!(f, "internal"),
            Self::Primary => write!(f, "primary"),
        }
    }
}

/// One discussion post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Opaque post identifier
    pub id: String,
    /// Author's person identifier
    pub author_id: String,
    /// When the post was created (server-assigned)
    pub created_at: DateTime<Utc>,
    /// Post body
    pub content: String,
}

/// One top-level post plus its replies.
///
/// `replies` is append-only and ordered by creation within the thread, but
/// ranking never relies on that ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscussionThread {
    /// Board the thread lives on
    pub board: DiscussionBoard,
    /// The thread-opening post
    pub initial_post: Post,
    /// Replies in creation order
    pub replies: Vec<Post>,
}

impl DiscussionThread {
    /// Timestamp of the thread's most recent activity: the latest of the
    /// initial post and every reply.
    #[must_use]
    pub fn latest_activity(&self) -> DateTime<Utc> {
        self.replies
            .iter()
            .map(|p| p.created_at)
            .fold(self.initial_post.created_at, DateTime::max)
    }

    /// Returns true if anyone has replied.
    #[must_use]
    pub fn has_replies(&self) -> bool {
        !self.replies.is_empty()
    }
}

// ============================================================================
// Ranking
// ============================================================================

/// The thread with the most recent activity, or `None` only when `threads`
/// is empty. A lone thread with no replies is still a valid candidate.
///
/// Ties resolve to the first thread in input order; timestamps are
/// server-assigned with enough resolution that a tie is a defensive edge
/// case, not an expected one.
#[must_use]
pub fn most_recent_activity(threads: &[DiscussionThread]) -> Option<&DiscussionThread> {
    let mut best: Option<(&DiscussionThread, DateTime<Utc>)> = None;
    for thread in threads {
        let activity = thread.latest_activity();
        // Strictly greater, so the earliest of tied threads stays
        if best.map_or(true, |(_, current)| activity > current) {
            best = Some((thread, activity));
        }
    }
    best.map(|(thread, _)| thread)
}

// ============================================================================
// Partitioning
// ============================================================================

/// Threads split by whether they have replies, each side in input order.
#[derive(Debug, Clone, Default)]
pub struct ThreadPartition<'a> {
    /// Threads with at least one reply
    pub with_replies: Vec<&'a DiscussionThread>,
    /// Threads nobody has replied to
    pub without_replies: Vec<&'a DiscussionThread>,
}

/// Partitions threads on `replies.is_empty()`, preserving relative order in
/// each bucket. Display layers impose their own sort and limit.
#[must_use]
pub fn partition(threads: &[DiscussionThread]) -> ThreadPartition<'_> {
    let mut result = ThreadPartition::default();
    for thread in threads {
        if thread.has_replies() {
            result.with_replies.push(thread);
        } else {
            result.without_replies.push(thread);
        }
    }
    result
}

/// Threads on the given board, in input order.
#[must_use]
pub fn for_board(threads: &[DiscussionThread], board: DiscussionBoard) -> Vec<&DiscussionThread> {
    threads.iter().filter(|t| t.board == board).collect()
}
