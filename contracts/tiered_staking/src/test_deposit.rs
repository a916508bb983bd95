//! Deposit admission, capacity enforcement and record creation tests.

#![cfg(test)]

use crate::test_helpers::*;
use crate::ContractError;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{vec, Address, Env};

// ═══════════════════════════════════════════════════════════════════
// 1. Happy path
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_deposit_creates_locked_record() {
    let e = Env::default();
    let s = setup(&e);

    let index = s.client.deposit(&s.depositor, &7, &WEEK_MIN);
    assert_eq!(index, 0);

    let record = s.client.get_stake(&s.depositor, &0);
    assert_eq!(record.index, 0);
    assert_eq!(record.depositor, s.depositor);
    assert_eq!(record.term_days, 7);
    assert_eq!(record.principal, WEEK_MIN);
    assert_eq!(record.tier, 0);
    assert_eq!(record.created_at, GENESIS);
    assert_eq!(record.released_at, None);
    assert!(!record.released);
}

#[test]
fn test_deposit_indices_strictly_increase() {
    let e = Env::default();
    let s = setup(&e);

    for expected in 0..5_u32 {
        let index = s.client.deposit(&s.depositor, &30, &10_000);
        assert_eq!(index, expected);
    }
    assert_eq!(s.client.stake_count(&s.depositor), 5);
}

#[test]
fn test_indices_are_per_depositor() {
    let e = Env::default();
    let s = setup(&e);
    let other = new_depositor(&e, &s.asset, &s.token, &s.contract_id, DEFAULT_MINT);

    assert_eq!(s.client.deposit(&s.depositor, &7, &1_000), 0);
    assert_eq!(s.client.deposit(&s.depositor, &7, &1_000), 1);
    assert_eq!(s.client.deposit(&other, &7, &1_000), 0);
    assert_eq!(s.client.deposit(&s.depositor, &30, &1_000), 2);
    assert_eq!(s.client.stake_count(&other), 1);
}

#[test]
fn test_deposit_moves_tokens_into_contract() {
    let e = Env::default();
    let s = setup(&e);

    s.client.deposit(&s.depositor, &90, &250_000);

    assert_eq!(s.token.balance(&s.contract_id), 250_000);
    assert_eq!(s.token.balance(&s.depositor), DEFAULT_MINT - 250_000);
}

#[test]
fn test_deposit_resolves_tier_at_deposit_time() {
    let e = Env::default();
    let s = setup(&e);

    s.client.deposit(&s.depositor, &7, &(WEEK_TIER_1 - 1));
    s.client.deposit(&s.depositor, &7, &WEEK_TIER_1);
    s.client.deposit(&s.depositor, &7, &WEEK_TIER_2);

    assert_eq!(s.client.get_stake(&s.depositor, &0).tier, 0);
    assert_eq!(s.client.get_stake(&s.depositor, &1).tier, 1);
    assert_eq!(s.client.get_stake(&s.depositor, &2).tier, 2);
    assert_eq!(s.client.tier_for(&7, &WEEK_TIER_2), 2);
}

#[test]
fn test_deposit_records_creation_time() {
    let e = Env::default();
    let s = setup(&e);

    s.client.deposit(&s.depositor, &7, &1_000);
    advance(&e, 3 * ONE_DAY);
    s.client.deposit(&s.depositor, &7, &1_000);

    assert_eq!(s.client.get_stake(&s.depositor, &1).created_at, GENESIS + 3 * ONE_DAY);
    assert_eq!(s.client.maturity(&s.depositor, &1), GENESIS + 3 * ONE_DAY + ONE_WEEK);
}

// ═══════════════════════════════════════════════════════════════════
// 2. Admission errors
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_deposit_unknown_term() {
    let e = Env::default();
    let s = setup(&e);
    assert_eq!(
        s.client.try_deposit(&s.depositor, &14, &10_000),
        Err(Ok(ContractError::UnknownTerm))
    );
}

#[test]
fn test_deposit_below_minimum() {
    let e = Env::default();
    let s = setup(&e);
    assert_eq!(
        s.client.try_deposit(&s.depositor, &7, &(WEEK_MIN - 1)),
        Err(Ok(ContractError::BelowMinimumDeposit))
    );
    assert_eq!(
        s.client.try_deposit(&s.depositor, &7, &0),
        Err(Ok(ContractError::BelowMinimumDeposit))
    );
    assert_eq!(
        s.client.try_deposit(&s.depositor, &7, &-1),
        Err(Ok(ContractError::BelowMinimumDeposit))
    );
    assert_eq!(s.client.stake_count(&s.depositor), 0);
}

#[test]
fn test_deposit_at_minimum_accepted() {
    let e = Env::default();
    let s = setup(&e);
    assert_eq!(s.client.deposit(&s.depositor, &7, &WEEK_MIN), 0);
}

#[test]
fn test_deposit_above_minimum_below_lowest_tier() {
    let e = Env::default();
    let terms = vec![&e, term(&e, 7, 100, 1_000_000, &[(1_000, 400)])];
    let s = setup_with_terms(&e, &terms);

    assert_eq!(
        s.client.try_deposit(&s.depositor, &7, &99),
        Err(Ok(ContractError::BelowMinimumDeposit))
    );
    assert_eq!(
        s.client.try_deposit(&s.depositor, &7, &500),
        Err(Ok(ContractError::NoEligibleTier))
    );
    assert_eq!(
        s.client.try_tier_for(&7, &500),
        Err(Ok(ContractError::NoEligibleTier))
    );
    assert_eq!(s.client.deposit(&s.depositor, &7, &1_000), 0);
}

#[test]
fn test_deposit_insufficient_allowance() {
    let e = Env::default();
    let s = setup(&e);

    let stingy = Address::generate(&e);
    s.asset.mint(&stingy, &1_000_000);
    let expiry = e.ledger().sequence().saturating_add(10_000);
    s.token.approve(&stingy, &s.contract_id, &999, &expiry);

    assert_eq!(
        s.client.try_deposit(&stingy, &7, &1_000),
        Err(Ok(ContractError::InsufficientAllowance))
    );
    assert_eq!(s.client.pool_snapshot().get(7).unwrap().locked, 0);
    assert_eq!(s.token.balance(&stingy), 1_000_000);
}

#[test]
fn test_deposit_insufficient_balance() {
    let e = Env::default();
    let s = setup(&e);
    let poor = new_depositor(&e, &s.asset, &s.token, &s.contract_id, 999);
    s.token.approve(
        &poor,
        &s.contract_id,
        &1_000_000,
        &e.ledger().sequence().saturating_add(10_000),
    );

    assert_eq!(
        s.client.try_deposit(&poor, &7, &1_000),
        Err(Ok(ContractError::InsufficientBalance))
    );
    assert_eq!(s.client.pool_snapshot().get(7).unwrap().locked, 0);
    assert_eq!(s.client.stake_count(&poor), 0);
}

// ═══════════════════════════════════════════════════════════════════
// 3. Capacity
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_capacity_fills_exactly_then_rejects() {
    let e = Env::default();
    let s = setup(&e);

    s.client.deposit(&s.depositor, &7, &500_000);
    s.client.deposit(&s.depositor, &7, &500_000);
    assert_eq!(s.client.pool_snapshot().get(7).unwrap().locked, WEEK_CAPACITY);

    assert_eq!(
        s.client.try_deposit(&s.depositor, &7, &500_000),
        Err(Ok(ContractError::PoolCapacityExceeded))
    );
    assert_eq!(s.client.pool_snapshot().get(7).unwrap().locked, WEEK_CAPACITY);
    assert_eq!(s.client.stake_count(&s.depositor), 2);
    assert_eq!(s.token.balance(&s.contract_id), WEEK_CAPACITY);
}

#[test]
fn test_capacity_shared_across_depositors() {
    let e = Env::default();
    let s = setup(&e);
    let other = new_depositor(&e, &s.asset, &s.token, &s.contract_id, DEFAULT_MINT);

    s.client.deposit(&s.depositor, &7, &(WEEK_CAPACITY - 1_000));
    assert_eq!(
        s.client.try_deposit(&other, &7, &1_001),
        Err(Ok(ContractError::PoolCapacityExceeded))
    );
    assert_eq!(s.client.deposit(&other, &7, &1_000), 0);
}

#[test]
fn test_capacity_is_per_term() {
    let e = Env::default();
    let s = setup(&e);

    s.client.deposit(&s.depositor, &7, &WEEK_CAPACITY);
    assert_eq!(
        s.client.try_deposit(&s.depositor, &7, &WEEK_MIN),
        Err(Ok(ContractError::PoolCapacityExceeded))
    );
    // Other terms are unaffected by a full 7-day pool.
    assert_eq!(s.client.deposit(&s.depositor, &30, &WEEK_CAPACITY), 1);

    let snapshot = s.client.pool_snapshot();
    assert_eq!(snapshot.get(7).unwrap().locked, WEEK_CAPACITY);
    assert_eq!(snapshot.get(30).unwrap().locked, WEEK_CAPACITY);
    assert_eq!(snapshot.get(90).unwrap().locked, 0);
}

#[test]
fn test_single_deposit_over_capacity_rejected() {
    let e = Env::default();
    let s = setup(&e);
    assert_eq!(
        s.client.try_deposit(&s.depositor, &7, &(WEEK_CAPACITY + 1)),
        Err(Ok(ContractError::PoolCapacityExceeded))
    );
}

#[test]
fn test_capacity_checked_before_allowance() {
    let e = Env::default();
    let s = setup(&e);
    let unapproved = Address::generate(&e);
    s.asset.mint(&unapproved, &DEFAULT_MINT);

    assert_eq!(
        s.client.try_deposit(&unapproved, &7, &(WEEK_CAPACITY + 1)),
        Err(Ok(ContractError::PoolCapacityExceeded))
    );
    assert_eq!(
        s.client.try_deposit(&unapproved, &7, &WEEK_CAPACITY),
        Err(Ok(ContractError::InsufficientAllowance))
    );
}
