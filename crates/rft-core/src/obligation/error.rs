//! Registry-specific error types.

use thiserror::Error;

use crate::types::{AccountId, ObligationIndex};

/// Errors raised by obligation lookups.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ObligationError {
    /// The index is out of range for the account, or the obligation at
    /// that index has already been retired.
    #[error("no such obligation for {account} at index {index}")]
    NoSuchObligation {
        /// Account whose registry entry was queried.
        account: AccountId,
        /// Index that did not resolve to a live obligation.
        index: ObligationIndex,
    },
}
