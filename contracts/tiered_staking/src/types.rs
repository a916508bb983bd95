use soroban_sdk::{contracttype, Address, Vec};

// ─── Constants ─────────────────────────────────────────────────────────────

/// One day in seconds.
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Day-count basis for simple interest (360-day year).
pub const DAY_COUNT_BASIS: i128 = 360;

/// Basis-point denominator (10_000 bps = 100 %).
pub const BPS_DENOMINATOR: i128 = 10_000;

/// Highest annual rate a tier may carry (100 %).
pub const MAX_RATE_BPS: u32 = 10_000;

/// Minimum ledger sequence TTL before a bump is requested (~1 day at 5 s/ledger).
pub const BUMP_THRESHOLD: u32 = 17_280;
/// Target TTL after a bump (~30 days).
pub const BUMP_TARGET: u32 = 518_400;

// ─── Catalog ───────────────────────────────────────────────────────────────

/// One interest breakpoint: deposits of at least `min_amount` earn `rate_bps`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RateTier {
    pub min_amount: i128,
    /// Annual rate in basis points (1_500 = 15 %).
    pub rate_bps: u32,
}

/// A fixed-duration lock option with its own floor, capacity and tier table.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TermOption {
    /// Lock duration in whole days. Also the term's identifier.
    pub duration_days: u32,
    /// Smallest accepted principal.
    pub min_deposit: i128,
    /// Maximum principal locked at once across all depositors.
    pub capacity: i128,
    /// Breakpoints ordered by strictly increasing `min_amount`.
    pub tiers: Vec<RateTier>,
}

// ─── Ledger state ──────────────────────────────────────────────────────────

/// One accepted deposit. Never deleted; `released` is the tombstone.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeRecord {
    /// Position in the depositor's record sequence.
    pub index: u32,
    pub depositor: Address,
    pub term_days: u32,
    pub principal: i128,
    /// Tier resolved at deposit time.
    pub tier: u32,
    /// Ledger timestamp at deposit.
    pub created_at: u64,
    /// Ledger timestamp at release; `None` while locked.
    pub released_at: Option<u64>,
    pub released: bool,
}

/// Capacity and currently-locked principal of one term pool.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolInfo {
    pub capacity: i128,
    pub locked: i128,
}

/// Per (depositor, term) aggregate kept in step with the records.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TermTally {
    /// Records ever created for this term.
    pub total: u32,
    /// Records of this term already released.
    pub released: u32,
    /// Principal of this term still locked.
    pub locked: i128,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Staked token contract address. Stored in `instance()`.
    Token,
    /// Ordered list of term durations. Stored in `instance()`.
    TermList,
    /// Term configuration keyed by duration. Stored in `instance()`.
    Term(u32),
    /// Currently-locked principal keyed by duration. Stored in `instance()`.
    Pool(u32),
    /// Number of records ever created for a depositor. Stored in `persistent()`.
    StakeCount(Address),
    /// Stake record keyed by (depositor, index). Stored in `persistent()`.
    Stake(Address, u32),
    /// Per (depositor, duration) aggregate. Stored in `persistent()`.
    Tally(Address, u32),
}
