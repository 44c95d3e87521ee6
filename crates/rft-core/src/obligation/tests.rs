//! Unit tests for the obligation registry.

use super::*;
use crate::types::AccountId;

fn acct(name: &str) -> AccountId {
    AccountId::from(name)
}

fn obligation(issuer: &str, amount: u128, expiry: u64) -> Obligation {
    Obligation::new(acct(issuer), amount, expiry)
}

#[test]
fn append_returns_sequential_stable_indices() {
    let mut registry = ObligationRegistry::new();
    let bob = acct("bob");
    assert_eq!(registry.append(&bob, obligation("alice", 100, 10)), 0);
    assert_eq!(registry.append(&bob, obligation("alice", 200, 20)), 1);
    assert_eq!(registry.len(&bob), 2);
}

#[test]
fn get_fails_for_out_of_range_index() {
    let registry = ObligationRegistry::new();
    let err = registry.get(&acct("bob"), 0).unwrap_err();
    assert_eq!(
        err,
        ObligationError::NoSuchObligation {
            account: acct("bob"),
            index: 0,
        }
    );
}

#[test]
fn get_fails_for_retired_slot() {
    let mut registry = ObligationRegistry::new();
    let bob = acct("bob");
    let index = registry.append(&bob, obligation("alice", 100, 10));
    registry.retire(&bob, index);
    assert!(registry.get(&bob, index).is_err());
}

#[test]
fn retirement_preserves_later_indices() {
    let mut registry = ObligationRegistry::new();
    let bob = acct("bob");
    registry.append(&bob, obligation("alice", 100, 10));
    let second = registry.append(&bob, obligation("carol", 200, 20));
    registry.retire(&bob, 0);

    // Slot count is unchanged and the second obligation is still at its
    // original position.
    assert_eq!(registry.len(&bob), 2);
    let kept = registry.get(&bob, second).unwrap();
    assert_eq!(kept.issuer, acct("carol"));
    assert_eq!(kept.amount, 200);
}

#[test]
fn retire_is_idempotent_and_ignores_out_of_range() {
    let mut registry = ObligationRegistry::new();
    let bob = acct("bob");
    let index = registry.append(&bob, obligation("alice", 100, 10));
    registry.retire(&bob, index);
    registry.retire(&bob, index);
    registry.retire(&bob, 99);
    assert_eq!(registry.active_debt(&bob, 0), 0);
}

#[test]
fn active_debt_counts_only_unexpired_unretired_amounts() {
    let mut registry = ObligationRegistry::new();
    let bob = acct("bob");
    registry.append(&bob, obligation("alice", 100, 10));
    registry.append(&bob, obligation("alice", 50, 5));
    let retired = registry.append(&bob, obligation("alice", 1000, 10));
    registry.retire(&bob, retired);

    assert_eq!(registry.active_debt(&bob, 0), 150);
    assert_eq!(registry.active_debt(&bob, 5), 150);
    // Second obligation expires after height 5.
    assert_eq!(registry.active_debt(&bob, 6), 100);
    assert_eq!(registry.active_debt(&bob, 11), 0);
}

#[test]
fn expiry_boundary_is_inclusive() {
    let mut registry = ObligationRegistry::new();
    let bob = acct("bob");
    registry.append(&bob, obligation("alice", 100, 10));
    let held = registry.get(&bob, 0).unwrap();
    assert!(held.is_active(10));
    assert!(!held.is_active(11));
    assert!(held.is_expired(11));
    assert!(!held.is_expired(10));
}

#[test]
fn expired_indices_reports_only_uncleared_past_window_entries() {
    let mut registry = ObligationRegistry::new();
    let bob = acct("bob");
    registry.append(&bob, obligation("alice", 100, 5));
    registry.append(&bob, obligation("alice", 100, 50));
    registry.append(&bob, obligation("alice", 100, 5));
    registry.retire(&bob, 2);

    assert_eq!(registry.expired_indices(&bob, 6), vec![0]);
    assert_eq!(registry.expired_indices(&bob, 5), Vec::<usize>::new());
}

#[test]
fn unretired_indices_includes_expired_but_uncleared_entries() {
    let mut registry = ObligationRegistry::new();
    let bob = acct("bob");
    registry.append(&bob, obligation("alice", 100, 5));
    registry.append(&bob, obligation("alice", 100, 50));
    registry.retire(&bob, 1);
    assert_eq!(registry.unretired_indices(&bob), vec![0]);
}

#[test]
fn unknown_account_is_empty() {
    let registry = ObligationRegistry::new();
    let ghost = acct("ghost");
    assert!(registry.is_empty(&ghost));
    assert_eq!(registry.active_debt(&ghost, 100), 0);
    assert!(registry.unretired_indices(&ghost).is_empty());
}
