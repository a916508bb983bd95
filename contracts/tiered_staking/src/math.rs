//! Overflow-safe arithmetic helpers for ledger calculations.
//!
//! Every helper returns `ContractError::Overflow` instead of wrapping, so the
//! caller can propagate with `?` and the host rolls the invocation back.

use staking_errors::ContractError;

/// Checked `i128` addition.
#[inline]
pub fn add_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_add(b).ok_or(ContractError::Overflow)
}

/// Checked `i128` multiplication.
#[inline]
pub fn mul_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_mul(b).ok_or(ContractError::Overflow)
}

/// Checked `u64` multiplication.
#[inline]
pub fn mul_u64(a: u64, b: u64) -> Result<u64, ContractError> {
    a.checked_mul(b).ok_or(ContractError::Overflow)
}

/// Checked `u64` addition.
#[inline]
pub fn add_u64(a: u64, b: u64) -> Result<u64, ContractError> {
    a.checked_add(b).ok_or(ContractError::Overflow)
}

/// Checked `i128` subtraction.
#[inline]
pub fn sub_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_sub(b).ok_or(ContractError::Overflow)
}

/// Checked `u32` addition, used when summing record counters.
#[inline]
pub fn add_u32(a: u32, b: u32) -> Result<u32, ContractError> {
    a.checked_add(b).ok_or(ContractError::Overflow)
}

/// Checked `u32` increment, used for record counters.
#[inline]
pub fn incr_u32(a: u32) -> Result<u32, ContractError> {
    a.checked_add(1).ok_or(ContractError::Overflow)
}

/// Subtraction that must not go negative. A negative result means the
/// ledger's bookkeeping is broken, so it aborts instead of returning.
#[inline]
#[must_use]
pub fn sub_non_negative(a: i128, b: i128, msg: &'static str) -> i128 {
    match a.checked_sub(b) {
        Some(v) if v >= 0 => v,
        _ => panic!("{msg}"),
    }
}
