//! Delayed governance of the minimal refund window.
//!
//! Changing the minimal window takes effect only after a configured delay,
//! so an operator can never retroactively shrink or stretch the refund
//! rights of obligations already promised to users.
//!
//! # State machine
//!
//! ```text
//! Stable --change(new != current)--> PendingChange { value, effective_height }
//! PendingChange --change(other)----> PendingChange (overwritten, delay reset)
//! PendingChange --height >= effective_height--> Stable (lazy commit)
//! ```
//!
//! The commit is lazy: it happens on the next height-sensitive read (the
//! transfer engine's window clamp) rather than on a timer. Because it is a
//! pure function of the supplied height it is deterministic and replay
//! safe.

use serde::{Deserialize, Serialize};

use crate::types::{Height, Window};

/// A requested minimal-window change that has not yet taken effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingWindowChange {
    /// Value that will become the minimal window.
    pub value: Window,
    /// Height at which the value takes effect.
    pub effective_height: Height,
}

/// Governor for the minimal refund window parameter.
///
/// At most one change request is outstanding at a time; a new request
/// before the prior one commits overwrites it and restarts the delay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowGovernor {
    current: Window,
    pending: Option<PendingWindowChange>,
    delay: Height,
}

impl WindowGovernor {
    /// Creates a governor in the `Stable` state.
    #[must_use]
    pub const fn new(initial_window: Window, delay: Height) -> Self {
        Self {
            current: initial_window,
            pending: None,
            delay,
        }
    }

    /// Requests a minimal-window change, effective `delay` heights from
    /// now. Requesting the already-effective value is a no-op; requesting
    /// while a change is pending overwrites it.
    pub fn change(&mut self, new_value: Window, height: Height) {
        self.commit_if_due(height);
        if new_value == self.current {
            return;
        }
        let effective_height = height.saturating_add(self.delay);
        if let Some(previous) = self.pending.replace(PendingWindowChange {
            value: new_value,
            effective_height,
        }) {
            tracing::debug!(
                overwritten = previous.value,
                new_value,
                effective_height,
                "pending minimal-window change overwritten"
            );
        } else {
            tracing::debug!(new_value, effective_height, "minimal-window change requested");
        }
    }

    /// Returns the minimal window effective at `height`, committing any
    /// due pending change first. Height-sensitive validation must use
    /// this, never [`Self::current`].
    pub fn effective_minimal(&mut self, height: Height) -> Window {
        self.commit_if_due(height);
        self.current
    }

    /// Returns the committed value as of the last height-sensitive read.
    /// Pure observability; performs no commit.
    #[must_use]
    pub const fn current(&self) -> Window {
        self.current
    }

    /// Returns the outstanding change request, if any. Performs no commit.
    #[must_use]
    pub const fn pending(&self) -> Option<PendingWindowChange> {
        self.pending
    }

    fn commit_if_due(&mut self, height: Height) {
        if let Some(change) = self.pending {
            if height >= change.effective_height {
                self.current = change.value;
                self.pending = None;
                tracing::info!(
                    value = change.value,
                    effective_height = change.effective_height,
                    height,
                    "minimal-window change committed"
                );
            }
        }
    }
}
