//! Per-term pool accounting.
//!
//! `Pool(days)` holds the principal currently locked under a term. It equals
//! the sum of `principal` over that term's unreleased records at all times and
//! never exceeds the term's capacity. Interest is not capacity-bearing.

use soroban_sdk::{Env, Map};
use staking_errors::ContractError;

use crate::catalog;
use crate::math::{add_i128, sub_non_negative};
use crate::types::{DataKey, PoolInfo, TermOption};

/// Principal currently locked under the term with `duration_days`.
pub fn locked(e: &Env, duration_days: u32) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::Pool(duration_days))
        .unwrap_or(0)
}

/// Reserve `amount` of `term`'s capacity. Returns the new locked total.
pub fn try_reserve(e: &Env, term: &TermOption, amount: i128) -> Result<i128, ContractError> {
    let current = locked(e, term.duration_days);
    let next = add_i128(current, amount)?;
    if next > term.capacity {
        return Err(ContractError::PoolCapacityExceeded);
    }
    e.storage()
        .instance()
        .set(&DataKey::Pool(term.duration_days), &next);
    Ok(next)
}

/// Return a released record's principal to the pool.
pub fn release(e: &Env, duration_days: u32, principal: i128) -> i128 {
    let next = sub_non_negative(
        locked(e, duration_days),
        principal,
        "pool locked total would go negative",
    );
    e.storage()
        .instance()
        .set(&DataKey::Pool(duration_days), &next);
    next
}

/// Sum of locked principal across every term.
pub fn total_locked(e: &Env) -> Result<i128, ContractError> {
    let mut total = 0_i128;
    for days in catalog::durations(e).iter() {
        total = add_i128(total, locked(e, days))?;
    }
    Ok(total)
}

/// Capacity and locked principal of every term, keyed by duration.
pub fn snapshot(e: &Env) -> Result<Map<u32, PoolInfo>, ContractError> {
    let mut out: Map<u32, PoolInfo> = Map::new(e);
    for term in catalog::all(e)?.iter() {
        out.set(
            term.duration_days,
            PoolInfo {
                capacity: term.capacity,
                locked: locked(e, term.duration_days),
            },
        );
    }
    Ok(out)
}
