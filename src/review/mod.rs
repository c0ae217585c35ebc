//! Review-board review: reviewer roster, voting, and async windows.
//!
//! This module provides:
//! - The review instance and its derived status
//! - Roster set operations keyed by person, including alternate promotion
//! - Vote casting with a closed rejection taxonomy (last vote counts)
//! - The outcome tally with configurable quorum
//! - Asynchronous voting window extension, restart, and state

pub mod error;
pub mod roster;
pub mod types;
pub mod window;

pub use error::{RosterError, VoteError, WindowError};
pub use types::{
    ReviewInstance, ReviewStatus, ReviewType, Reviewer, Vote, VoteChoice, VoteTally, VotingRole,
    WindowState,
};
