//! Tiered Term Staking Contract
//!
//! Depositors lock the staked token into one of a fixed set of term options
//! (e.g. 7, 30, 90 or 180 days). Each term has a minimum deposit, a global
//! pool capacity and an amount-tiered annual rate. After the lock matures the
//! depositor releases the record and receives principal plus simple interest.
//!
//! ## Key design decisions
//!
//! - **Parameters fixed at initialization**: the term catalog has no setter.
//! - **Append-only records**: each deposit gets the next per-depositor index;
//!   release sets a tombstone flag instead of removing the record.
//! - **Capacity before transfer**: the pool reservation is checked before the
//!   token pull, and both roll back together if either fails.
//! - **Checks-Effects-Interactions**: storage is updated *before* the payout
//!   transfer.
//! - **Interest reserve**: interest is paid from tokens held beyond the locked
//!   principal; `fund_reserve` tops it up.

#![no_std]

mod apr;
mod catalog;
mod events;
mod ledger;
mod math;
mod pool;
mod query;
mod token;
mod types;

pub use staking_errors::{ContractError, ErrorCategory, ErrorExt};
pub use types::{PoolInfo, RateTier, StakeRecord, TermOption};

use soroban_sdk::{contract, contractimpl, Address, Env, Map, Vec};


#[cfg(test)]
mod test_deposit;

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct TieredStaking;

#[contractimpl]
impl TieredStaking {
    // ── Setup ──────────────────────────────────────────────────────────────

    /// One-time initialization. Stores the staked `token` and the validated
    /// term catalog, and zeroes every pool counter.
    ///
    /// # Errors
    /// * `AlreadyInitialized`: called a second time
    /// * any catalog error: see `ContractError` codes 101-108
    pub fn initialize(e: Env, token: Address, terms: Vec<TermOption>) -> Result<(), ContractError> {
        if e.storage().instance().has(&types::DataKey::Token) {
            return Err(ContractError::AlreadyInitialized);
        }
        catalog::store(&e, &terms)?;
        token::set_token(&e, &token);
        ledger::bump_instance(&e);
        events::emit_initialized(&e, &token, terms.len());
        Ok(())
    }

    // ── Stake lifecycle ────────────────────────────────────────────────────

    /// Lock `amount` into the term with `term_days` and return the record
    /// index. The depositor must have approved the contract for `amount`.
    ///
    /// # Errors
    /// * `UnknownTerm`, `BelowMinimumDeposit`, `NoEligibleTier`
    /// * `PoolCapacityExceeded`: the term pool cannot take `amount`
    /// * `InsufficientAllowance`, `InsufficientBalance`
    pub fn deposit(
        e: Env,
        depositor: Address,
        term_days: u32,
        amount: i128,
    ) -> Result<u32, ContractError> {
        depositor.require_auth();
        ledger::deposit(&e, &depositor, term_days, amount)
    }

    /// Release the record at `index` once matured. Returns the payout.
    ///
    /// # Errors
    /// * `IndexOutOfBounds`, `AlreadyReleased`, `NotYetMatured`
    /// * `InsufficientPoolBalance`: contract cannot cover principal + interest
    pub fn release(e: Env, depositor: Address, index: u32) -> Result<i128, ContractError> {
        depositor.require_auth();
        ledger::release(&e, &depositor, index)
    }

    /// Add `amount` to the interest reserve. Returns the contract's new token
    /// balance. Pool counters are not touched.
    pub fn fund_reserve(e: Env, funder: Address, amount: i128) -> Result<i128, ContractError> {
        funder.require_auth();
        token::debit(&e, &funder, amount)?;
        let balance = token::contract_balance(&e)?;
        ledger::bump_instance(&e);
        events::emit_reserve_funded(&e, &funder, amount, balance);
        Ok(balance)
    }

    // ── Catalog ────────────────────────────────────────────────────────────

    pub fn get_token(e: Env) -> Result<Address, ContractError> {
        token::get_token(&e)
    }

    /// Every term option, ordered by duration.
    pub fn get_terms(e: Env) -> Result<Vec<TermOption>, ContractError> {
        token::get_token(&e)?;
        catalog::all(&e)
    }

    pub fn get_term(e: Env, term_days: u32) -> Result<TermOption, ContractError> {
        catalog::resolve(&e, term_days)
    }

    /// Tier a deposit of `amount` would be assigned under `term_days`,
    /// applying the same minimum-deposit rule as `deposit`.
    pub fn tier_for(e: Env, term_days: u32, amount: i128) -> Result<u32, ContractError> {
        let term = catalog::resolve(&e, term_days)?;
        apr::admit(&term, amount)
    }

    // ── Records ────────────────────────────────────────────────────────────

    pub fn get_stake(e: Env, depositor: Address, index: u32) -> Result<StakeRecord, ContractError> {
        ledger::load_stake(&e, &depositor, index)
    }

    /// Number of records ever created for `depositor`, released or not.
    pub fn stake_count(e: Env, depositor: Address) -> u32 {
        ledger::stake_count(&e, &depositor)
    }

    /// Timestamp at which the record at `index` becomes releasable.
    pub fn maturity(e: Env, depositor: Address, index: u32) -> Result<u64, ContractError> {
        let record = ledger::load_stake(&e, &depositor, index)?;
        ledger::maturity_of(&record)
    }

    /// Seconds until maturity; 0 once matured.
    pub fn time_remaining(e: Env, depositor: Address, index: u32) -> Result<u64, ContractError> {
        ledger::time_remaining(&e, &depositor, index)
    }

    /// Payout if the record were released now (maturity not enforced).
    pub fn preview_payout(e: Env, depositor: Address, index: u32) -> Result<i128, ContractError> {
        ledger::preview_payout(&e, &depositor, index)
    }

    // ── Queries ────────────────────────────────────────────────────────────

    pub fn active_count(e: Env, depositor: Address) -> Result<u32, ContractError> {
        query::active_count(&e, &depositor)
    }

    pub fn total_active(e: Env, depositor: Address) -> Result<i128, ContractError> {
        query::total_active(&e, &depositor)
    }

    pub fn count_by_term(e: Env, depositor: Address, term_days: u32) -> u32 {
        query::count_by_term(&e, &depositor, term_days)
    }

    pub fn count_by_term_and_release(
        e: Env,
        depositor: Address,
        term_days: u32,
        released: bool,
    ) -> u32 {
        query::count_by_term_and_release(&e, &depositor, term_days, released)
    }

    pub fn count_by_release(
        e: Env,
        depositor: Address,
        released: bool,
    ) -> Result<u32, ContractError> {
        query::count_by_release(&e, &depositor, released)
    }

    /// Records in creation order, `limit` at a time from `offset`.
    pub fn page(e: Env, depositor: Address, offset: u32, limit: u32) -> Vec<StakeRecord> {
        query::page(&e, &depositor, offset, limit)
    }

    /// Records of one term in creation order; offset/limit count matches only.
    pub fn page_by_term(
        e: Env,
        depositor: Address,
        term_days: u32,
        offset: u32,
        limit: u32,
    ) -> Vec<StakeRecord> {
        query::page_by_term(&e, &depositor, term_days, offset, limit)
    }

    pub fn pool_snapshot(e: Env) -> Result<Map<u32, PoolInfo>, ContractError> {
        query::pool_snapshot(&e)
    }

    /// Token balance held beyond the locked principal of every term.
    pub fn reserve_balance(e: Env) -> Result<i128, ContractError> {
        ledger::reserve_balance(&e)
    }
}
