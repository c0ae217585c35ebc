//! Reviewer roster and voting model.
//!
//! Roster operations are set operations keyed by `person_id`. Vote casting
//! validates against the closed rejection taxonomy and always overwrites
//! any prior vote from the same reviewer: votes are mutable until the
//! window closes, and the last vote counts. The outcome computation is a
//! tally only; recording the actual decision is a separate admin action.

use chrono::{DateTime, Utc};
use tracing::debug;

use super::error::{RosterError, VoteError};
use super::types::{ReviewInstance, Reviewer, Vote, VoteChoice, VoteTally, VotingRole};
use crate::config::EngineConfig;

impl ReviewInstance {
    // ========================================================================
    // Roster Operations
    // ========================================================================

    /// Adds a person to the roster, or updates their roles in place if they
    /// are already on it.
    ///
    /// A role update preserves any cast vote; removal is the only path that
    /// discards one. Re-adding after removal therefore starts fresh with no
    /// vote on record.
    pub fn add_reviewer(
        &mut self,
        person_id: impl Into<String>,
        voting_role: VotingRole,
        grb_role: impl Into<String>,
    ) {
        let person_id = person_id.into();
        match self.reviewer_index(&person_id) {
            Some(i) => {
                debug!(
                    review_id = %self.id,
                    person_id = %person_id,
                    %voting_role,
                    "updating roles of existing reviewer"
                );
                self.reviewers[i].voting_role = voting_role;
                self.reviewers[i].grb_role = grb_role.into();
            }
            None => {
                self.reviewers
                    .push(Reviewer::new(person_id, voting_role, grb_role));
            }
        }
    }

    /// Removes a person from the roster, discarding their vote.
    ///
    /// Returns true if an entry was removed.
    pub fn remove_reviewer(&mut self, person_id: &str) -> bool {
        match self.reviewer_index(person_id) {
            Some(i) => {
                let removed = self.reviewers.remove(i);
                if removed.vote.is_some() {
                    debug!(
                        review_id = %self.id,
                        person_id,
                        "removed reviewer had a cast vote, discarding it"
                    );
                }
                true
            }
            None => false,
        }
    }

    /// Promotes an alternate to a voting seat.
    ///
    /// Promotion is an explicit admin action; it is never automatic.
    pub fn promote_alternate(&mut self, person_id: &str) -> Result<(), RosterError> {
        let i = self
            .reviewer_index(person_id)
            .ok_or_else(|| RosterError::NotAReviewer {
                review_id: self.id.clone(),
                person_id: person_id.to_string(),
            })?;

        let reviewer = &mut self.reviewers[i];
        if reviewer.voting_role != VotingRole::Alternate {
            return Err(RosterError::NotAnAlternate {
                review_id: self.id.clone(),
                person_id: person_id.to_string(),
                role: reviewer.voting_role,
            });
        }

        reviewer.voting_role = VotingRole::Voting;
        Ok(())
    }

    // ========================================================================
    // Vote Casting
    // ========================================================================

    /// Casts (or re-casts) a vote for `person_id` at `now`.
    ///
    /// On success the recorded vote replaces any prior one from the same
    /// reviewer, so concurrent submissions collapse to the most recent
    /// `cast_at`. The caller persists the resulting state.
    pub fn cast_vote(
        &mut self,
        person_id: &str,
        choice: VoteChoice,
        now: DateTime<Utc>,
    ) -> Result<Vote, VoteError> {
        let i = self
            .reviewer_index(person_id)
            .ok_or_else(|| VoteError::NotAReviewer {
                review_id: self.id.clone(),
                person_id: person_id.to_string(),
            })?;

        let role = self.reviewers[i].voting_role;
        if role != VotingRole::Voting {
            return Err(VoteError::NonVotingReviewer {
                review_id: self.id.clone(),
                person_id: person_id.to_string(),
                role,
            });
        }

        if self.is_closed(now) {
            return Err(VoteError::ReviewClosed {
                review_id: self.id.clone(),
            });
        }

        if let Some(prior) = self.reviewers[i].vote {
            debug!(
                review_id = %self.id,
                person_id,
                prior = %prior.choice,
                new = %choice,
                "overwriting prior vote"
            );
        }

        let vote = Vote {
            choice,
            cast_at: now,
        };
        self.reviewers[i].vote = Some(vote);
        Ok(vote)
    }

    // ========================================================================
    // Outcome
    // ========================================================================

    /// Tallies the latest votes of voting reviewers.
    ///
    /// Non-voting and unpromoted alternate reviewers are invisible here.
    /// Quorum is met when the fraction of voting reviewers who cast any
    /// vote (including abstentions) reaches `config.quorum_fraction`; an
    /// empty voting roster never meets quorum.
    #[must_use]
    pub fn compute_outcome(&self, config: &EngineConfig) -> VoteTally {
        let mut tally = VoteTally {
            approve: 0,
            disapprove: 0,
            abstain: 0,
            not_yet_voted: 0,
            quorum_met: false,
        };

        for reviewer in &self.reviewers {
            if reviewer.voting_role != VotingRole::Voting {
                continue;
            }
            match reviewer.vote {
                Some(vote) => match vote.choice {
                    VoteChoice::Approve => tally.approve += 1,
                    VoteChoice::Disapprove => tally.disapprove += 1,
                    VoteChoice::Abstain => tally.abstain += 1,
                },
                None => tally.not_yet_voted += 1,
            }
        }

        let cast = tally.approve + tally.disapprove + tally.abstain;
        let total = cast + tally.not_yet_voted;
        tally.quorum_met =
            total > 0 && (cast as f64) / (total as f64) >= config.quorum_fraction;

        tally
    }
}
