//! The transfer, refund and clearance engine.
//!
//! [`TokenLedger`] is the composition root of the crate: it owns the
//! balance ledger, the obligation registry and the window governor, and is
//! the only mutator of either. Every operation is a synchronous, total
//! state transition that either fully commits or fails without side
//! effects; the surrounding execution environment sequences operations and
//! supplies the height and caller via [`OpContext`].
//!
//! # Operation surface
//!
//! | Operation | Mutates | Notes |
//! |---|---|---|
//! | [`transfer`](TokenLedger::transfer) | yes | records a refund obligation against the recipient |
//! | [`get_refund`](TokenLedger::get_refund) | yes | issuer reclaims the full amount before expiry |
//! | [`clear_debt`](TokenLedger::clear_debt) | yes | best-effort sweep of expired obligations |
//! | [`change_minimal_window`](TokenLedger::change_minimal_window) | yes | delayed-effect governance |
//! | `see_*` / `fetch_refunds` / `balance_of` | no | pure queries |
//!
//! # Concurrency
//!
//! The core assumes the single-writer, strictly sequential contract of the
//! execution environment. A multi-threaded host must serialize all calls
//! behind one exclusive lock around the whole [`TokenLedger`].

mod error;


pub use error::EngineError;
use serde::{Deserialize, Serialize};

use crate::config::GenesisConfig;
use crate::governance::{PendingWindowChange, WindowGovernor};
use crate::ledger::{Balances, LedgerError};
use crate::obligation::{Obligation, ObligationRegistry};
use crate::types::{AccountId, Amount, Height, ObligationIndex, OpContext, Window};

/// Deterministic refundable-token ledger.
///
/// See the [module documentation](self) for the operation surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenLedger {
    balances: Balances,
    registry: ObligationRegistry,
    governor: WindowGovernor,
    total_supply: Amount,
}

impl TokenLedger {
    /// Creates a ledger with the full supply minted to the genesis
    /// account and the governor in its stable state.
    #[must_use]
    pub fn new(config: &GenesisConfig) -> Self {
        Self {
            balances: Balances::with_genesis(&config.genesis_account, config.total_supply),
            registry: ObligationRegistry::new(),
            governor: WindowGovernor::new(config.minimal_window, config.governance_delay),
            total_supply: config.total_supply,
        }
    }

    /// Transfers `amount` from the caller to `recipient` and records a
    /// refund obligation with the given window, returning the
    /// obligation's stable index.
    ///
    /// A transfer that draws on encumbered balance must name, in
    /// `debt_indices`, active obligations the caller itself owes; an empty
    /// list fails with [`EngineError::DebtIndicesNotSpecified`] and an
    /// index that does not resolve to an active obligation fails with
    /// [`EngineError::InvalidDebtIndex`]. Naming indices changes no
    /// obligation amounts; the encumbrance is carried forward in the
    /// caller's own bookkeeping.
    ///
    /// Nonzero windows below the minimal window are clamped up to it. A
    /// window of zero is allowed and records an obligation with no refund
    /// rights beyond the current height.
    pub fn transfer(
        &mut self,
        ctx: &OpContext,
        recipient: &AccountId,
        amount: Amount,
        window: Window,
        debt_indices: &[ObligationIndex],
    ) -> Result<ObligationIndex, EngineError> {
        let sender = &ctx.caller;
        let minimal = self.governor.effective_minimal(ctx.height);

        let free_balance = self
            .balances
            .balance(sender)
            .saturating_sub(self.registry.active_debt(sender, ctx.height));
        if amount > free_balance {
            if debt_indices.is_empty() {
                return Err(EngineError::DebtIndicesNotSpecified {
                    account: sender.clone(),
                    requested: amount,
                    free_balance,
                });
            }
            for &index in debt_indices {
                let active = self
                    .registry
                    .get(sender, index)
                    .is_ok_and(|obligation| obligation.is_active(ctx.height));
                if !active {
                    return Err(EngineError::InvalidDebtIndex {
                        account: sender.clone(),
                        index,
                    });
                }
            }
        }

        let effective_window = if window != 0 && window < minimal {
            tracing::debug!(window, minimal, "transfer window clamped to minimal");
            minimal
        } else {
            window
        };
        let expiry_height = ctx.height.saturating_add(effective_window);

        // All-or-nothing: the credit side is validated before the debit
        // side mutates anything. A self-transfer nets out, so the headroom
        // check does not apply there.
        if sender != recipient && !self.balances.has_credit_headroom(recipient, amount) {
            return Err(LedgerError::Overflow {
                account: recipient.clone(),
                amount,
            }
            .into());
        }
        self.balances.debit(sender, amount)?;
        self.balances.credit(recipient, amount)?;

        let index = self
            .registry
            .append(recipient, Obligation::new(sender.clone(), amount, expiry_height));
        tracing::debug!(
            %sender,
            %recipient,
            amount,
            window = effective_window,
            expiry_height,
            index,
            "transfer recorded"
        );
        Ok(index)
    }

    /// Reclaims the full amount of the obligation at `(recipient, index)`
    /// back to its issuer (the caller), reversing the original transfer's
    /// ledger effect and retiring the obligation.
    pub fn get_refund(
        &mut self,
        ctx: &OpContext,
        recipient: &AccountId,
        index: ObligationIndex,
        amount: Amount,
    ) -> Result<(), EngineError> {
        let obligation = self.registry.get(recipient, index)?;
        if obligation.issuer != ctx.caller {
            return Err(EngineError::NotIssuer {
                account: recipient.clone(),
                index,
                caller: ctx.caller.clone(),
            });
        }
        if ctx.height > obligation.expiry_height {
            return Err(EngineError::Expired {
                account: recipient.clone(),
                index,
                expiry_height: obligation.expiry_height,
                height: ctx.height,
            });
        }
        if amount != obligation.amount {
            return Err(EngineError::AmountMismatch {
                account: recipient.clone(),
                index,
                requested: amount,
                expected: obligation.amount,
            });
        }

        let issuer = obligation.issuer.clone();
        if issuer != *recipient && !self.balances.has_credit_headroom(&issuer, amount) {
            return Err(LedgerError::Overflow {
                account: issuer,
                amount,
            }
            .into());
        }
        // The debit can still fail: the recipient may have moved the
        // encumbered balance forward by naming this obligation in a later
        // transfer. Nothing has been mutated at that point.
        self.balances.debit(recipient, amount)?;
        self.balances.credit(&issuer, amount)?;
        self.registry.retire(recipient, index);
        tracing::info!(%issuer, %recipient, index, amount, "obligation refunded");
        Ok(())
    }

    /// Best-effort sweep converting expired obligations of `account` into
    /// permanently unencumbered balance.
    ///
    /// Each named index is retired only if its obligation is expired and
    /// uncleared; everything else (active, already retired, out of range)
    /// is skipped silently. No balances move: the funds stop counting
    /// toward the account's active debt, nothing more.
    pub fn clear_debt(
        &mut self,
        ctx: &OpContext,
        account: &AccountId,
        indices: &[ObligationIndex],
    ) {
        for &index in indices {
            let expired = self
                .registry
                .get(account, index)
                .is_ok_and(|obligation| obligation.is_expired(ctx.height));
            if expired {
                self.registry.retire(account, index);
                tracing::debug!(%account, index, "expired obligation cleared");
            }
        }
    }

    /// Requests a change of the minimal refund window, effective after
    /// the configured governance delay.
    pub fn change_minimal_window(&mut self, ctx: &OpContext, new_value: Window) {
        self.governor.change(new_value, ctx.height);
    }

    /// Returns the obligation recorded at `(account, index)`.
    pub fn see_refund(
        &self,
        account: &AccountId,
        index: ObligationIndex,
    ) -> Result<&Obligation, EngineError> {
        Ok(self.registry.get(account, index)?)
    }

    /// Number of obligation slots ever recorded against `account`,
    /// retired ones included (stable-index semantics).
    #[must_use]
    pub fn see_refund_size(&self, account: &AccountId) -> usize {
        self.registry.len(account)
    }

    /// Sum of the account's currently active obligation amounts.
    #[must_use]
    pub fn see_addr_debt_amount(&self, account: &AccountId, height: Height) -> Amount {
        self.registry.active_debt(account, height)
    }

    /// Indices of the account's uncleared obligations, active and
    /// expired-but-uncleared alike.
    #[must_use]
    pub fn fetch_refunds(&self, account: &AccountId) -> Vec<ObligationIndex> {
        self.registry.unretired_indices(account)
    }

    /// Indices of the account's obligations whose refund window has
    /// passed without clearance.
    #[must_use]
    pub fn expired_refunds(&self, account: &AccountId, height: Height) -> Vec<ObligationIndex> {
        self.registry.expired_indices(account, height)
    }

    /// Current balance of an account.
    #[must_use]
    pub fn balance_of(&self, account: &AccountId) -> Amount {
        self.balances.balance(account)
    }

    /// Total token supply fixed at genesis.
    #[must_use]
    pub const fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// The minimal window as committed by the last height-sensitive read,
    /// plus the outstanding change request if one exists.
    #[must_use]
    pub const fn window_change_status(&self) -> (Window, Option<PendingWindowChange>) {
        (self.governor.current(), self.governor.pending())
    }
}
