//! Term catalog: the fixed table of lock options, keyed by duration in days.
//!
//! Written once by `initialize` and never rewritten. Lives in `instance()`
//! storage since it is small, bounded and needed by every deposit.

use soroban_sdk::{Env, Vec};
use staking_errors::ContractError;

use crate::types::{DataKey, TermOption, MAX_RATE_BPS};

/// Check a single term against the catalog rules.
pub fn validate_term(term: &TermOption) -> Result<(), ContractError> {
    if term.duration_days == 0 {
        return Err(ContractError::InvalidTermDuration);
    }
    if term.min_deposit <= 0 {
        return Err(ContractError::InvalidMinimumDeposit);
    }
    if term.capacity < term.min_deposit {
        return Err(ContractError::CapacityBelowMinimum);
    }
    if term.tiers.is_empty() {
        return Err(ContractError::EmptyTierTable);
    }

    let mut prev: Option<i128> = None;
    for tier in term.tiers.iter() {
        let increasing = match prev {
            None => tier.min_amount > 0,
            Some(p) => tier.min_amount > p,
        };
        if !increasing {
            return Err(ContractError::TiersNotIncreasing);
        }
        if tier.rate_bps > MAX_RATE_BPS {
            return Err(ContractError::InvalidRate);
        }
        prev = Some(tier.min_amount);
    }
    Ok(())
}

/// Validate the whole catalog, then persist it and zero every pool counter.
/// Nothing is written unless every term passes.
pub fn store(e: &Env, terms: &Vec<TermOption>) -> Result<(), ContractError> {
    if terms.is_empty() {
        return Err(ContractError::EmptyTermCatalog);
    }

    let mut prev_days: Option<u32> = None;
    for term in terms.iter() {
        if let Some(p) = prev_days {
            if term.duration_days <= p {
                return Err(ContractError::TermsNotOrdered);
            }
        }
        validate_term(&term)?;
        prev_days = Some(term.duration_days);
    }

    let storage = e.storage().instance();
    let mut durations: Vec<u32> = Vec::new(e);
    for term in terms.iter() {
        durations.push_back(term.duration_days);
        storage.set(&DataKey::Pool(term.duration_days), &0_i128);
        storage.set(&DataKey::Term(term.duration_days), &term);
    }
    storage.set(&DataKey::TermList, &durations);
    Ok(())
}

/// Look up the term for `duration_days`.
pub fn resolve(e: &Env, duration_days: u32) -> Result<TermOption, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Term(duration_days))
        .ok_or(ContractError::UnknownTerm)
}

/// Ordered term durations; empty before initialization.
pub fn durations(e: &Env) -> Vec<u32> {
    e.storage()
        .instance()
        .get(&DataKey::TermList)
        .unwrap_or_else(|| Vec::new(e))
}

/// Every term in catalog order.
pub fn all(e: &Env) -> Result<Vec<TermOption>, ContractError> {
    let mut out: Vec<TermOption> = Vec::new(e);
    for days in durations(e).iter() {
        out.push_back(resolve(e, days)?);
    }
    Ok(out)
}
