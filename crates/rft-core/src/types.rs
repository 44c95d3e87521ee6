//! Core scalar types shared by every module.
//!
//! Amounts are 128-bit unsigned integers and heights are 64-bit block
//! counters. All arithmetic on them is checked at the call sites that can
//! fail; nothing in this crate uses floating point.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Token quantity. Checked arithmetic only; overflow and underflow are
/// surfaced as errors by the ledger, never wrapped.
pub type Amount = u128;

/// Block-height counter supplied by the execution environment. Strictly
/// monotonic between operations; never advanced by this crate.
pub type Height = u64;

/// Refund window length, measured in heights.
pub type Window = u64;

/// Stable position of an obligation inside an account's registry entry.
///
/// Indices are append-only and survive retirement of earlier entries
/// (retirement zeroes in place, it never shifts).
pub type ObligationIndex = usize;

/// Opaque account address.
///
/// The execution environment owns authentication; the core only compares
/// addresses for equality and uses them as map keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Creates an account ID from any string-like address.
    #[must_use]
    pub fn new(addr: impl Into<String>) -> Self {
        Self(addr.into())
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountId {
    fn from(addr: &str) -> Self {
        Self(addr.to_string())
    }
}

impl From<String> for AccountId {
    fn from(addr: String) -> Self {
        Self(addr)
    }
}

/// Per-operation context supplied by the execution environment.
///
/// The current height is passed explicitly into every operation rather than
/// read from ambient state, which keeps the core replayable and testable
/// without a live environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpContext {
    /// Height the operation executes at.
    pub height: Height,
    /// Authenticated identity issuing the operation.
    pub caller: AccountId,
}

impl OpContext {
    /// Creates a context for one operation.
    #[must_use]
    pub fn new(height: Height, caller: impl Into<AccountId>) -> Self {
        Self {
            height,
            caller: caller.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_id_round_trips_through_display() {
        let id = AccountId::new("0xabc");
        assert_eq!(id.to_string(), "0xabc");
        assert_eq!(id.as_str(), "0xabc");
    }

    #[test]
    fn account_ids_compare_by_address() {
        assert_eq!(AccountId::from("a"), AccountId::new(String::from("a")));
        assert_ne!(AccountId::from("a"), AccountId::from("b"));
    }
}
