//! Interest tier resolution and simple-interest payout math.
//!
//! Interest is non-compounding on a 360-day year:
//! `principal * rate_bps * elapsed_days / (10_000 * 360)`, computed with one
//! final division so rounding error stays below one unit.

use staking_errors::ContractError;

use crate::math::{add_i128, mul_i128};
use crate::types::{TermOption, BPS_DENOMINATOR, DAY_COUNT_BASIS, SECONDS_PER_DAY};

/// Index of the highest tier whose lower bound is at or below `amount`.
///
/// The minimum-deposit check is a separate rule and must run first; this
/// only answers whether the amount reaches the term's lowest tier.
pub fn tier_index(term: &TermOption, amount: i128) -> Result<u32, ContractError> {
    let mut found: Option<u32> = None;
    for (i, tier) in term.tiers.iter().enumerate() {
        if tier.min_amount > amount {
            break;
        }
        found = Some(i as u32);
    }
    found.ok_or(ContractError::NoEligibleTier)
}

/// Admission rule shared by `deposit` and `tier_for`: the minimum deposit
/// first, then the lowest tier.
pub fn admit(term: &TermOption, amount: i128) -> Result<u32, ContractError> {
    if amount < term.min_deposit {
        return Err(ContractError::BelowMinimumDeposit);
    }
    tier_index(term, amount)
}

/// Annual rate in bps for a tier index that `tier_index` produced.
pub fn rate(term: &TermOption, tier: u32) -> u32 {
    term.tiers
        .get(tier)
        .unwrap_or_else(|| panic!("tier index out of range"))
        .rate_bps
}

/// Whole days between `created_at` and `now`, rounded down.
pub fn elapsed_days(created_at: u64, now: u64) -> u64 {
    now.saturating_sub(created_at) / SECONDS_PER_DAY
}

/// Simple interest on `principal` at `rate_bps` for `elapsed_days`.
pub fn interest(principal: i128, rate_bps: u32, elapsed_days: u64) -> Result<i128, ContractError> {
    let numerator = mul_i128(
        mul_i128(principal, rate_bps as i128)?,
        elapsed_days as i128,
    )?;
    Ok(numerator / (BPS_DENOMINATOR * DAY_COUNT_BASIS))
}

/// Principal plus simple interest.
pub fn payout(principal: i128, rate_bps: u32, elapsed_days: u64) -> Result<i128, ContractError> {
    add_i128(principal, interest(principal, rate_bps, elapsed_days)?)
}
