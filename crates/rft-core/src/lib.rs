//! Deterministic refundable-token ledger core.
//!
//! `rft-core` implements a token ledger whose transfers are conditional
//! and clawback-able: the sender of every transfer keeps a time-bounded
//! right to reclaim the exact amount, and the recipient's balance stays
//! partially encumbered (debt) until that window expires or the sender
//! exercises the claim. A delayed-effect governance parameter bounds how
//! short refund windows may be.
//!
//! # Module overview
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`types`] | Amounts, heights, account IDs, per-operation context |
//! | [`config`] | Genesis parameters, TOML loading |
//! | [`ledger`] | Balances with checked debit/credit |
//! | [`obligation`] | Per-account refund obligation registry |
//! | [`governance`] | Minimal-window governor with delayed commits |
//! | [`engine`] | Transfer/refund/clearance orchestration and queries |
//!
//! # Execution model
//!
//! The core is a single-threaded, synchronous state-transition function.
//! The execution environment sequences operations, supplies the current
//! height and caller through [`types::OpContext`], and persists the
//! [`engine::TokenLedger`] between calls. Every operation fully commits
//! or fails with a typed error and no state change.
//!
//! # Example
//!
//! ```rust
//! use rft_core::config::GenesisConfig;
//! use rft_core::engine::TokenLedger;
//! use rft_core::types::{AccountId, OpContext};
//!
//! let config = GenesisConfig::builder("alice").total_supply(10_000).build()?;
//! let mut ledger = TokenLedger::new(&config);
//! let bob = AccountId::from("bob");
//!
//! // alice sends 100 tokens, reclaimable for 20 heights.
//! let index = ledger.transfer(&OpContext::new(5, "alice"), &bob, 100, 20, &[])?;
//! assert_eq!(ledger.see_addr_debt_amount(&bob, 5), 100);
//!
//! // ...and changes her mind before the window closes.
//! ledger.get_refund(&OpContext::new(10, "alice"), &bob, index, 100)?;
//! assert_eq!(ledger.balance_of(&bob), 0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod engine;
pub mod governance;
pub mod ledger;
pub mod obligation;
pub mod types;

pub use config::{ConfigError, GenesisConfig};
pub use engine::{EngineError, TokenLedger};
pub use governance::{PendingWindowChange, WindowGovernor};
pub use ledger::{Balances, LedgerError};
pub use obligation::{Obligation, ObligationError, ObligationRegistry};
pub use types::{AccountId, Amount, Height, ObligationIndex, OpContext, Window};
