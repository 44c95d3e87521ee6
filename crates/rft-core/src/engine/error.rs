//! Engine-level error types.
//!
//! Every operation either fully commits or fails with one of these kinds,
//! surfaced verbatim to the execution environment. There is no partial
//! success and no internal retry.

use thiserror::Error;

use crate::ledger::LedgerError;
use crate::obligation::ObligationError;
use crate::types::{AccountId, Amount, Height, ObligationIndex};

/// Errors raised by transfers, refunds and governance operations.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum EngineError {
    /// A balance mutation failed (insufficient balance or overflow).
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// An obligation lookup failed.
    #[error(transparent)]
    Obligation(#[from] ObligationError),

    /// The transfer draws on encumbered balance but named no debt indices.
    ///
    /// The caller must explicitly list which of its own active obligations
    /// it intends to hold against, proving it knows it is moving
    /// encumbered tokens forward.
    #[error("debt indices not specified")]
    DebtIndicesNotSpecified {
        /// Sender whose free balance was exceeded.
        account: AccountId,
        /// Amount the transfer asked for.
        requested: Amount,
        /// Unencumbered balance actually available.
        free_balance: Amount,
    },

    /// A named debt index does not resolve to one of the sender's
    /// currently active obligations.
    #[error("invalid debt index {index} for {account}")]
    InvalidDebtIndex {
        /// Sender that named the index.
        account: AccountId,
        /// The index that failed to resolve.
        index: ObligationIndex,
    },

    /// The refund requester is not the obligation's issuer.
    #[error("{caller} is not the issuer of obligation {index} on {account}")]
    NotIssuer {
        /// Account the obligation is held against.
        account: AccountId,
        /// Index of the obligation.
        index: ObligationIndex,
        /// Identity that requested the refund.
        caller: AccountId,
    },

    /// The refund window has passed.
    #[error(
        "obligation {index} on {account} expired at height {expiry_height}, current height {height}"
    )]
    Expired {
        /// Account the obligation is held against.
        account: AccountId,
        /// Index of the obligation.
        index: ObligationIndex,
        /// Last height at which the refund was still allowed.
        expiry_height: Height,
        /// Height the refund was attempted at.
        height: Height,
    },

    /// The requested refund amount does not equal the obligation amount.
    /// Partial refunds are not supported.
    #[error(
        "amount mismatch for obligation {index} on {account}: requested {requested}, obligation holds {expected}"
    )]
    AmountMismatch {
        /// Account the obligation is held against.
        account: AccountId,
        /// Index of the obligation.
        index: ObligationIndex,
        /// Amount the caller asked to reclaim.
        requested: Amount,
        /// Amount the obligation actually holds.
        expected: Amount,
    },
}
