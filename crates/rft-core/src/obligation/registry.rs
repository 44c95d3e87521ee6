//! Obligation records and the per-account registry.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::error::ObligationError;
use crate::types::{AccountId, Amount, Height, ObligationIndex};

/// One sender's claim against one recipient, created by a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obligation {
    /// Account entitled to reclaim the amount.
    pub issuer: AccountId,
    /// Reclaimable quantity, fixed at creation. Zero once retired.
    pub amount: Amount,
    /// Last height (inclusive) at which the issuer may still reclaim.
    pub expiry_height: Height,
}

impl Obligation {
    /// Creates a new obligation.
    #[must_use]
    pub fn new(issuer: AccountId, amount: Amount, expiry_height: Height) -> Self {
        Self {
            issuer,
            amount,
            expiry_height,
        }
    }

    /// Returns `true` if the obligation has been refunded or cleared.
    #[must_use]
    pub const fn is_retired(&self) -> bool {
        self.amount == 0
    }

    /// Returns `true` if the obligation still counts toward the
    /// recipient's debt at `height`.
    #[must_use]
    pub const fn is_active(&self, height: Height) -> bool {
        self.amount > 0 && height <= self.expiry_height
    }

    /// Returns `true` if the refund window has passed but the obligation
    /// has not yet been cleared.
    #[must_use]
    pub const fn is_expired(&self, height: Height) -> bool {
        self.amount > 0 && height > self.expiry_height
    }
}

/// Per-account ordered collections of obligations, keyed by the account
/// that owes the refund (the transfer recipient).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObligationRegistry {
    entries: HashMap<AccountId, Vec<Obligation>>,
}

impl ObligationRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an obligation to the account's sequence and returns its
    /// stable index.
    pub fn append(&mut self, account: &AccountId, obligation: Obligation) -> ObligationIndex {
        let entry = self.entries.entry(account.clone()).or_default();
        entry.push(obligation);
        entry.len() - 1
    }

    /// Looks up a live obligation by stable index.
    ///
    /// Retired slots are indistinguishable from absent ones by design:
    /// both fail with [`ObligationError::NoSuchObligation`].
    pub fn get(
        &self,
        account: &AccountId,
        index: ObligationIndex,
    ) -> Result<&Obligation, ObligationError> {
        self.entries
            .get(account)
            .and_then(|entry| entry.get(index))
            .filter(|obligation| !obligation.is_retired())
            .ok_or_else(|| ObligationError::NoSuchObligation {
                account: account.clone(),
                index,
            })
    }

    /// Sum of amounts over the account's currently active obligations.
    /// This is the balance the account cannot safely spend.
    #[must_use]
    pub fn active_debt(&self, account: &AccountId, height: Height) -> Amount {
        self.entries
            .get(account)
            .map(|entry| {
                entry
                    .iter()
                    .filter(|obligation| obligation.is_active(height))
                    .fold(0, |debt: Amount, obligation| {
                        debt.saturating_add(obligation.amount)
                    })
            })
            .unwrap_or(0)
    }

    /// Zeroes the obligation at `index` in place. Idempotent; out-of-range
    /// indices are ignored so clearance sweeps can be best-effort.
    pub fn retire(&mut self, account: &AccountId, index: ObligationIndex) {
        if let Some(obligation) = self
            .entries
            .get_mut(account)
            .and_then(|entry| entry.get_mut(index))
        {
            obligation.amount = 0;
        }
    }

    /// Indices of uncleared obligations whose refund window has passed, in
    /// ascending order.
    #[must_use]
    pub fn expired_indices(&self, account: &AccountId, height: Height) -> Vec<ObligationIndex> {
        self.indices_where(account, |obligation| obligation.is_expired(height))
    }

    /// Indices of all uncleared obligations (active or expired), in
    /// ascending order. Backs the `fetch_refunds` query.
    #[must_use]
    pub fn unretired_indices(&self, account: &AccountId) -> Vec<ObligationIndex> {
        self.indices_where(account, |obligation| !obligation.is_retired())
    }

    /// Number of slots ever appended for the account, retired ones
    /// included (stable-index semantics).
    #[must_use]
    pub fn len(&self, account: &AccountId) -> usize {
        self.entries.get(account).map_or(0, Vec::len)
    }

    /// Returns `true` if the account has never been a transfer recipient.
    #[must_use]
    pub fn is_empty(&self, account: &AccountId) -> bool {
        self.len(account) == 0
    }

    fn indices_where(
        &self,
        account: &AccountId,
        predicate: impl Fn(&Obligation) -> bool,
    ) -> Vec<ObligationIndex> {
        self.entries
            .get(account)
            .map(|entry| {
                entry
                    .iter()
                    .enumerate()
                    .filter(|(_, obligation)| predicate(obligation))
                    .map(|(index, _)| index)
                    .collect()
            })
            .unwrap_or_default()
    }
}
