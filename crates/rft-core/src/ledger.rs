//! Balance ledger with checked debit/credit primitives.
//!
//! The ledger owns every account balance. It knows nothing about
//! obligations or windows; encumbrance is enforced one layer up by the
//! transfer engine. Debits and credits are the only mutations, both
//! fail-closed: a debit that would underflow and a credit that would
//! overflow leave the ledger untouched.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{AccountId, Amount};

/// Errors raised by balance mutations.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum LedgerError {
    /// A debit exceeded the account's balance.
    #[error("insufficient balance for {account}: requested {requested}, available {available}")]
    InsufficientBalance {
        /// Account being debited.
        account: AccountId,
        /// Amount requested.
        requested: Amount,
        /// Balance actually available.
        available: Amount,
    },

    /// A credit would exceed the integer width of [`Amount`].
    #[error("balance overflow crediting {amount} to {account}")]
    Overflow {
        /// Account being credited.
        account: AccountId,
        /// Amount that did not fit.
        amount: Amount,
    },
}

/// Account balances, keyed by address. Absent accounts hold zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balances {
    accounts: HashMap<AccountId, Amount>,
}

impl Balances {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ledger holding the genesis supply in a single account.
    #[must_use]
    pub fn with_genesis(account: &AccountId, supply: Amount) -> Self {
        let mut balances = Self::new();
        balances.accounts.insert(account.clone(), supply);
        balances
    }

    /// Returns the balance of an account (zero if it has never been
    /// credited).
    #[must_use]
    pub fn balance(&self, account: &AccountId) -> Amount {
        self.accounts.get(account).copied().unwrap_or(0)
    }

    /// Returns `true` if crediting `amount` to `account` would not
    /// overflow. Read-only; used by callers that must validate a full
    /// operation before mutating anything.
    #[must_use]
    pub fn has_credit_headroom(&self, account: &AccountId, amount: Amount) -> bool {
        self.balance(account).checked_add(amount).is_some()
    }

    /// Reduces an account's balance.
    pub fn debit(&mut self, account: &AccountId, amount: Amount) -> Result<(), LedgerError> {
        let available = self.balance(account);
        let remaining =
            available
                .checked_sub(amount)
                .ok_or_else(|| LedgerError::InsufficientBalance {
                    account: account.clone(),
                    requested: amount,
                    available,
                })?;
        self.accounts.insert(account.clone(), remaining);
        Ok(())
    }

    /// Increases an account's balance.
    pub fn credit(&mut self, account: &AccountId, amount: Amount) -> Result<(), LedgerError> {
        let updated = self
            .balance(account)
            .checked_add(amount)
            .ok_or_else(|| LedgerError::Overflow {
                account: account.clone(),
                amount,
            })?;
        self.accounts.insert(account.clone(), updated);
        Ok(())
    }
}
