#![no_std]

use soroban_sdk::contracterror;

/// @title  ErrorCategory
/// @notice Groups errors by domain for monitoring, alerting, and dashboards.
/// @dev    Off-chain consumers should switch on this value first, then on the
///         specific `ContractError` code for fine-grained handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Contract setup and initialization errors (codes 1-99).
    Initialization,
    /// Term catalog lookup and configuration errors (codes 100-199).
    Catalog,
    /// Deposit admission errors (codes 200-299).
    Deposit,
    /// Release / withdrawal errors (codes 300-399).
    Release,
    /// Safe-math errors (codes 700-799).
    Arithmetic,
}

/// @title  ContractError
/// @notice Canonical error enum for the tiered staking contracts.
/// @dev    Codes are wire-stable. Never renumber a variant after deployment.
///         Append new variants at the end of their category block only.
///         Use the ErrorExt trait to retrieve the category and description.
///
/// Error Code Layout:
///   1  -  99  : Initialization
///   100 - 199 : Catalog
///   200 - 299 : Deposit
///   300 - 399 : Release
///   700 - 799 : Arithmetic
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum ContractError {
    // --- Initialization (1-99) ---
    /// Contract has not been initialized yet.
    NotInitialized = 1,

    /// Contract has already been initialized and cannot be re-initialized.
    AlreadyInitialized = 2,

    // --- Catalog (100-199) ---
    /// No term option exists for the requested lock duration.
    UnknownTerm = 100,

    /// The term catalog passed to `initialize` has no entries.
    EmptyTermCatalog = 101,

    /// Term durations must be listed in strictly increasing order.
    TermsNotOrdered = 102,

    /// A term has a zero-day lock duration.
    InvalidTermDuration = 103,

    /// A term's minimum deposit is zero or negative.
    InvalidMinimumDeposit = 104,

    /// A term's pool capacity is smaller than its minimum deposit.
    CapacityBelowMinimum = 105,

    /// A term has no interest tiers.
    EmptyTierTable = 106,

    /// Tier lower bounds must be positive and strictly increasing.
    TiersNotIncreasing = 107,

    /// A tier's annual rate exceeds the configured maximum.
    InvalidRate = 108,

    // --- Deposit (200-299) ---
    /// Deposit amount is below the term's minimum deposit.
    BelowMinimumDeposit = 200,

    /// Deposit amount does not reach the lowest interest tier of the term.
    NoEligibleTier = 201,

    /// Accepting the deposit would push the term's locked total over capacity.
    PoolCapacityExceeded = 202,

    /// The depositor has not approved the contract for the full amount.
    InsufficientAllowance = 203,

    /// The depositor's token balance is smaller than the amount.
    InsufficientBalance = 204,

    /// Amount argument must be strictly positive (> 0).
    InvalidAmount = 205,

    // --- Release (300-399) ---
    /// No stake record exists at the given index for this depositor.
    IndexOutOfBounds = 300,

    /// The stake record has already been released.
    AlreadyReleased = 301,

    /// The stake's lock period has not elapsed yet.
    NotYetMatured = 302,

    /// The contract's token balance cannot cover principal plus interest.
    InsufficientPoolBalance = 303,

    // --- Arithmetic (700-799) ---
    /// Integer overflow detected during a checked arithmetic operation.
    Overflow = 700,
}

/// @title  ErrorExt
/// @notice Provides category() and description() on every ContractError variant.
/// @dev    Use this for structured logging, monitoring, and off-chain display.
pub trait ErrorExt {
    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return A static string description safe for logging or display.
    fn description(&self) -> &'static str;
}

impl ErrorExt for ContractError {
    fn category(&self) -> ErrorCategory {
        match self {
            ContractError::NotInitialized | ContractError::AlreadyInitialized => {
                ErrorCategory::Initialization
            }

            ContractError::UnknownTerm
            | ContractError::EmptyTermCatalog
            | ContractError::TermsNotOrdered
            | ContractError::InvalidTermDuration
            | ContractError::InvalidMinimumDeposit
            | ContractError::CapacityBelowMinimum
            | ContractError::EmptyTierTable
            | ContractError::TiersNotIncreasing
            | ContractError::InvalidRate => ErrorCategory::Catalog,

            ContractError::BelowMinimumDeposit
            | ContractError::NoEligibleTier
            | ContractError::PoolCapacityExceeded
            | ContractError::InsufficientAllowance
            | ContractError::InsufficientBalance
            | ContractError::InvalidAmount => ErrorCategory::Deposit,

            ContractError::IndexOutOfBounds
            | ContractError::AlreadyReleased
            | ContractError::NotYetMatured
            | ContractError::InsufficientPoolBalance => ErrorCategory::Release,

            ContractError::Overflow => ErrorCategory::Arithmetic,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract has not been initialized",
            ContractError::AlreadyInitialized => "Contract has already been initialized",
            ContractError::UnknownTerm => "No term option exists for this duration",
            ContractError::EmptyTermCatalog => "Term catalog must contain at least one term",
            ContractError::TermsNotOrdered => "Term durations must be strictly increasing",
            ContractError::InvalidTermDuration => "Term duration must be at least one day",
            ContractError::InvalidMinimumDeposit => "Term minimum deposit must be positive",
            ContractError::CapacityBelowMinimum => {
                "Term capacity must be at least the minimum deposit"
            }
            ContractError::EmptyTierTable => "Term must define at least one interest tier",
            ContractError::TiersNotIncreasing => {
                "Tier lower bounds must be positive and strictly increasing"
            }
            ContractError::InvalidRate => "Tier rate exceeds the maximum annual rate",
            ContractError::BelowMinimumDeposit => "Amount is below the term minimum deposit",
            ContractError::NoEligibleTier => "Amount does not qualify for any interest tier",
            ContractError::PoolCapacityExceeded => "Deposit would exceed the term pool capacity",
            ContractError::InsufficientAllowance => "Token allowance is below the amount",
            ContractError::InsufficientBalance => "Token balance is below the amount",
            ContractError::InvalidAmount => "Amount must be strictly positive (> 0)",
            ContractError::IndexOutOfBounds => "No stake record at this index",
            ContractError::AlreadyReleased => "Stake record has already been released",
            ContractError::NotYetMatured => "Lock period has not elapsed yet",
            ContractError::InsufficientPoolBalance => {
                "Contract balance cannot cover the payout"
            }
            ContractError::Overflow => "Integer overflow in checked arithmetic",
        }
    }
}
