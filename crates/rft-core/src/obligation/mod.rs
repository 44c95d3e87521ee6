//! Refund obligation registry.
//!
//! Every conditional transfer records an [`Obligation`] against the
//! recipient: the sender's right to reclaim the exact amount until an
//! expiry height. The registry owns these records per account and is the
//! source of truth for how much of a balance is encumbered.
//!
//! # Lifecycle
//!
//! ```text
//! transfer --> Obligation (ACTIVE, amount > 0, height <= expiry_height)
//!                 |
//!                 v
//! height passes expiry_height --> EXPIRED (still counted by fetch, not by debt)
//!                 |
//!                 v
//! refund / clearance --> RETIRED (amount zeroed in place)
//! ```
//!
//! # Stable indices
//!
//! External callers reference obligations by `(account, index)`. Indices
//! are append-only: retirement zeroes the record in place and never shifts
//! later entries, so a handed-out index stays valid for the lifetime of
//! the account's registry entry.

mod error;
mod registry;

#[cfg(test)]
mod tests;

pub use error::ObligationError;
pub use registry::{Obligation, ObligationRegistry};
