//! Stake ledger: per-depositor append-only records and the lock/release
//! state machine.
//!
//! ## Storage Layout
//!
//! | Key                        | Tier           | Lifecycle        |
//! |----------------------------|----------------|------------------|
//! | `DataKey::StakeCount(addr)`| `persistent()` | Per depositor    |
//! | `DataKey::Stake(addr, i)`  | `persistent()` | Per record       |
//! | `DataKey::Tally(addr, d)`  | `persistent()` | Per (depositor, term) |
//!
//! Records are addressed by their position in the depositor's sequence.
//! Release flips `released` and keeps the record, so indices never shift.
//!
//! ## States
//!
//! `Locked` (released = false) → `Released` (released = true). No other
//! transition exists.

use soroban_sdk::{Address, Env};
use staking_errors::ContractError;

use crate::math::{add_i128, add_u64, incr_u32, mul_u64, sub_i128, sub_non_negative};
use crate::types::{
    DataKey, StakeRecord, TermTally, BUMP_TARGET, BUMP_THRESHOLD, SECONDS_PER_DAY,
};
use crate::{apr, catalog, events, pool, token};

// ─── Storage helpers ───────────────────────────────────────────────────────

pub(crate) fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(BUMP_THRESHOLD, BUMP_TARGET);
}

/// Number of records ever created for `depositor`.
pub fn stake_count(e: &Env, depositor: &Address) -> u32 {
    let key = DataKey::StakeCount(depositor.clone());
    let storage = e.storage().persistent();
    match storage.get::<_, u32>(&key) {
        Some(count) => {
            storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
            count
        }
        None => 0,
    }
}

fn set_stake_count(e: &Env, depositor: &Address, count: u32) {
    let key = DataKey::StakeCount(depositor.clone());
    let storage = e.storage().persistent();
    storage.set(&key, &count);
    storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
}

/// Read the record at `index`, bumping its TTL.
pub fn load_stake(e: &Env, depositor: &Address, index: u32) -> Result<StakeRecord, ContractError> {
    if index >= stake_count(e, depositor) {
        return Err(ContractError::IndexOutOfBounds);
    }
    Ok(read_stake(e, depositor, index))
}

/// Read a record the caller already knows is below the stake count.
pub(crate) fn read_stake(e: &Env, depositor: &Address, index: u32) -> StakeRecord {
    let key = DataKey::Stake(depositor.clone(), index);
    let storage = e.storage().persistent();
    let record: StakeRecord = storage
        .get(&key)
        .unwrap_or_else(|| panic!("stake record missing below count"));
    storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
    record
}

fn save_stake(e: &Env, record: &StakeRecord) {
    let key = DataKey::Stake(record.depositor.clone(), record.index);
    let storage = e.storage().persistent();
    storage.set(&key, record);
    storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
}

/// Aggregate of `depositor`'s records under `term_days`.
pub fn tally(e: &Env, depositor: &Address, term_days: u32) -> TermTally {
    let key = DataKey::Tally(depositor.clone(), term_days);
    let storage = e.storage().persistent();
    match storage.get::<_, TermTally>(&key) {
        Some(t) => {
            storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
            t
        }
        None => TermTally::default(),
    }
}

fn save_tally(e: &Env, depositor: &Address, term_days: u32, t: &TermTally) {
    let key = DataKey::Tally(depositor.clone(), term_days);
    let storage = e.storage().persistent();
    storage.set(&key, t);
    storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
}

// ─── Lifecycle ─────────────────────────────────────────────────────────────

/// Timestamp at which `record` becomes releasable.
pub fn maturity_of(record: &StakeRecord) -> Result<u64, ContractError> {
    let lock_secs = mul_u64(record.term_days as u64, SECONDS_PER_DAY)?;
    add_u64(record.created_at, lock_secs)
}

/// Accept a deposit of `amount` into the term with `term_days`.
///
/// Checks run in order: term exists, minimum deposit, tier eligibility,
/// capacity (reserved before the token pull), allowance and balance.
/// Returns the new record's index.
pub fn deposit(
    e: &Env,
    depositor: &Address,
    term_days: u32,
    amount: i128,
) -> Result<u32, ContractError> {
    token::get_token(e)?;
    let term = catalog::resolve(e, term_days)?;
    let tier = apr::admit(&term, amount)?;

    pool::try_reserve(e, &term, amount)?;
    token::debit(e, depositor, amount)?;

    let index = stake_count(e, depositor);
    let record = StakeRecord {
        index,
        depositor: depositor.clone(),
        term_days,
        principal: amount,
        tier,
        created_at: e.ledger().timestamp(),
        released_at: None,
        released: false,
    };
    save_stake(e, &record);
    set_stake_count(e, depositor, incr_u32(index)?);

    let mut t = tally(e, depositor, term_days);
    t.total = incr_u32(t.total)?;
    t.locked = add_i128(t.locked, amount)?;
    save_tally(e, depositor, term_days, &t);

    bump_instance(e);
    events::emit_staked(e, depositor, index, term_days, amount, tier);
    Ok(index)
}

/// Release the matured record at `index` and pay principal plus interest.
///
/// Interest is drawn from the reserve only, never from principal other
/// records still hold. The record is flipped and the pool decremented
/// before the outgoing transfer; a failing transfer aborts the whole
/// invocation.
pub fn release(e: &Env, depositor: &Address, index: u32) -> Result<i128, ContractError> {
    let mut record = load_stake(e, depositor, index)?;
    if record.released {
        return Err(ContractError::AlreadyReleased);
    }

    let now = e.ledger().timestamp();
    if now < maturity_of(&record)? {
        return Err(ContractError::NotYetMatured);
    }

    let term = catalog::resolve(e, record.term_days)?;
    let interest = apr::interest(
        record.principal,
        apr::rate(&term, record.tier),
        apr::elapsed_days(record.created_at, now),
    )?;
    // Principal is covered by the pool; interest only by the reserve.
    if reserve_balance(e)? < interest {
        return Err(ContractError::InsufficientPoolBalance);
    }
    let amount = add_i128(record.principal, interest)?;

    record.released = true;
    record.released_at = Some(now);
    save_stake(e, &record);

    let mut t = tally(e, depositor, record.term_days);
    t.released = incr_u32(t.released)?;
    t.locked = sub_non_negative(t.locked, record.principal, "tally locked would go negative");
    save_tally(e, depositor, record.term_days, &t);

    pool::release(e, record.term_days, record.principal);
    token::credit(e, depositor, amount)?;

    bump_instance(e);
    events::emit_released(
        e,
        depositor,
        index,
        record.term_days,
        record.principal,
        amount,
    );
    Ok(amount)
}

/// Contract token balance beyond the principal locked in every term.
pub fn reserve_balance(e: &Env) -> Result<i128, ContractError> {
    sub_i128(token::contract_balance(e)?, pool::total_locked(e)?)
}

/// Payout the record would receive if released at the current timestamp.
/// Ignores maturity and contract balance.
pub fn preview_payout(e: &Env, depositor: &Address, index: u32) -> Result<i128, ContractError> {
    let record = load_stake(e, depositor, index)?;
    if record.released {
        return Err(ContractError::AlreadyReleased);
    }
    let term = catalog::resolve(e, record.term_days)?;
    apr::payout(
        record.principal,
        apr::rate(&term, record.tier),
        apr::elapsed_days(record.created_at, e.ledger().timestamp()),
    )
}

/// Seconds until the record at `index` matures; 0 once matured.
pub fn time_remaining(e: &Env, depositor: &Address, index: u32) -> Result<u64, ContractError> {
    let record = load_stake(e, depositor, index)?;
    Ok(maturity_of(&record)?.saturating_sub(e.ledger().timestamp()))
}
