use soroban_sdk::{Address, Env, Symbol};

/// Emitted once when the catalog and token are configured.
///
/// # Topics
/// * `Symbol` - "initialized"
///
/// # Data
/// * `Address` - The staked token contract
/// * `u32` - Number of term options in the catalog
pub fn emit_initialized(e: &Env, token: &Address, term_count: u32) {
    let topics = (Symbol::new(e, "initialized"),);
    e.events().publish(topics, (token.clone(), term_count));
}

/// Emitted when a deposit is accepted.
///
/// # Topics
/// * `Symbol` - "staked"
/// * `Address` - The depositor
///
/// # Data
/// * `u32` - Record index assigned to the deposit
/// * `u32` - Term duration in days
/// * `i128` - Principal locked
/// * `u32` - Resolved tier index
pub fn emit_staked(
    e: &Env,
    depositor: &Address,
    index: u32,
    term_days: u32,
    principal: i128,
    tier: u32,
) {
    let topics = (Symbol::new(e, "staked"), depositor.clone());
    e.events().publish(topics, (index, term_days, principal, tier));
}

/// Emitted when a matured record is released and paid out.
///
/// # Topics
/// * `Symbol` - "released"
/// * `Address` - The depositor
///
/// # Data
/// * `u32` - Record index
/// * `u32` - Term duration in days
/// * `i128` - Original principal
/// * `i128` - Principal plus interest sent to the depositor
pub fn emit_released(
    e: &Env,
    depositor: &Address,
    index: u32,
    term_days: u32,
    principal: i128,
    payout: i128,
) {
    let topics = (Symbol::new(e, "released"), depositor.clone());
    e.events().publish(topics, (index, term_days, principal, payout));
}

/// Emitted when tokens are added to the interest reserve.
pub fn emit_reserve_funded(e: &Env, funder: &Address, amount: i128, new_balance: i128) {
    let topics = (Symbol::new(e, "reserve_funded"), funder.clone());
    e.events().publish(topics, (amount, new_balance));
}
