//! Asynchronous review window management.
//!
//! The window is a pair of timestamps, not a timer: expiry is a pure time
//! comparison re-evaluated on each read, never a scheduled callback.

use chrono::{DateTime, Utc};
use tracing::debug;

use super::error::WindowError;
use super::types::{ReviewInstance, ReviewType, WindowState};

impl ReviewInstance {
    /// Extends the voting window deadline to `new_end_at`.
    ///
    /// An extension must move the deadline forward; a first deadline on a
    /// window that never had one is always forward. Only asynchronous
    /// reviews have a window.
    pub fn extend_window(&mut self, new_end_at: DateTime<Utc>) -> Result<(), WindowError> {
        if self.review_type != ReviewType::Async {
            return Err(WindowError::InvalidWindow {
                review_id: self.id.clone(),
                reason: "only asynchronous reviews have a voting window".to_string(),
            });
        }

        if let Some(end) = self.window_end_at {
            if new_end_at <= end {
                return Err(WindowError::InvalidWindow {
                    review_id: self.id.clone(),
                    reason: format!(
                        "extension must move the deadline forward (current end {end}, requested {new_end_at})"
                    ),
                });
            }
        }

        self.window_end_at = Some(new_end_at);
        Ok(())
    }

    /// Restarts the voting window: `started_at` becomes `now` and the
    /// deadline becomes `new_end_at`.
    ///
    /// Restarting changes the deadline, not participation: cast votes are
    /// left intact. This asymmetry with `remove_reviewer` (which discards a
    /// vote) is deliberate.
    pub fn restart_window(
        &mut self,
        now: DateTime<Utc>,
        new_end_at: DateTime<Utc>,
    ) -> Result<(), WindowError> {
        if self.review_type != ReviewType::Async {
            return Err(WindowError::InvalidWindow {
                review_id: self.id.clone(),
                reason: "only asynchronous reviews have a voting window".to_string(),
            });
        }

        debug!(
            review_id = %self.id,
            %now,
            %new_end_at,
            "restarting voting window, votes untouched"
        );
        self.started_at = Some(now);
        self.window_end_at = Some(new_end_at);
        Ok(())
    }

    /// State of the voting window at `now`.
    ///
    /// Pure in `now`, `started_at`, `window_end_at`, and completion;
    /// completion short-circuits regardless of timestamps.
    #[must_use]
    pub fn window_state(&self, now: DateTime<Utc>) -> WindowState {
        if self.completed_at.is_some() {
            return WindowState::Completed;
        }
        if self.started_at.is_none() {
            return WindowState::NotStarted;
        }
        match self.window_end_at {
            Some(end) if now > end => WindowState::Expired,
            _ => WindowState::Open,
        }
    }
}
