//! Read-only views over the stake ledger.
//!
//! Counts come from the per (depositor, term) tallies, so they cost one read
//! per catalog term. Pages walk records in creation order.

use soroban_sdk::{Address, Env, Map, Vec};
use staking_errors::ContractError;

use crate::catalog;
use crate::ledger::{read_stake, stake_count, tally};
use crate::math::{add_i128, add_u32};
use crate::pool;
use crate::types::{PoolInfo, StakeRecord};

/// Records of `depositor` still locked.
pub fn active_count(e: &Env, depositor: &Address) -> Result<u32, ContractError> {
    count_by_release(e, depositor, false)
}

/// Principal of `depositor` still locked, across all terms.
pub fn total_active(e: &Env, depositor: &Address) -> Result<i128, ContractError> {
    let mut total = 0_i128;
    for days in catalog::durations(e).iter() {
        total = add_i128(total, tally(e, depositor, days).locked)?;
    }
    Ok(total)
}

/// Records of `depositor` under `term_days`, in any state.
pub fn count_by_term(e: &Env, depositor: &Address, term_days: u32) -> u32 {
    tally(e, depositor, term_days).total
}

pub fn count_by_term_and_release(
    e: &Env,
    depositor: &Address,
    term_days: u32,
    released: bool,
) -> u32 {
    let t = tally(e, depositor, term_days);
    if released {
        t.released
    } else {
        t.total - t.released
    }
}

pub fn count_by_release(
    e: &Env,
    depositor: &Address,
    released: bool,
) -> Result<u32, ContractError> {
    let mut count = 0_u32;
    for days in catalog::durations(e).iter() {
        count = add_u32(count, count_by_term_and_release(e, depositor, days, released))?;
    }
    Ok(count)
}

/// Up to `limit` records starting at `offset`, in creation order.
/// An offset past the end yields an empty page.
pub fn page(e: &Env, depositor: &Address, offset: u32, limit: u32) -> Vec<StakeRecord> {
    let mut out: Vec<StakeRecord> = Vec::new(e);
    let count = stake_count(e, depositor);
    let end = offset.saturating_add(limit).min(count);
    for index in offset..end {
        out.push_back(read_stake(e, depositor, index));
    }
    out
}

/// Like [`page`], but over the records of `term_days` only. `offset` and
/// `limit` count matching records.
pub fn page_by_term(
    e: &Env,
    depositor: &Address,
    term_days: u32,
    offset: u32,
    limit: u32,
) -> Vec<StakeRecord> {
    let mut out: Vec<StakeRecord> = Vec::new(e);
    let matching = count_by_term(e, depositor, term_days);
    if limit == 0 || offset >= matching {
        return out;
    }

    let mut skipped = 0_u32;
    for index in 0..stake_count(e, depositor) {
        if out.len() >= limit {
            break;
        }
        let record = read_stake(e, depositor, index);
        if record.term_days != term_days {
            continue;
        }
        if skipped < offset {
            skipped += 1;
            continue;
        }
        out.push_back(record);
    }
    out
}

/// Capacity and locked principal per term.
pub fn pool_snapshot(e: &Env) -> Result<Map<u32, PoolInfo>, ContractError> {
    pool::snapshot(e)
}
