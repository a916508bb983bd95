//! Staked-token integration.
//! Centralizes token configuration, allowance checks, and transfer operations.

use soroban_sdk::token::TokenClient;
use soroban_sdk::{Address, Env};
use staking_errors::ContractError;

use crate::types::DataKey;

/// @notice Stores the token contract used by every transfer.
pub fn set_token(e: &Env, token: &Address) {
    e.storage().instance().set(&DataKey::Token, token);
}

/// @notice Returns the configured token address.
pub fn get_token(e: &Env) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(ContractError::NotInitialized)
}

fn token_client(e: &Env) -> Result<TokenClient<'_>, ContractError> {
    let token = get_token(e)?;
    Ok(TokenClient::new(e, &token))
}

/// @notice Token balance of `holder`.
pub fn balance_of(e: &Env, holder: &Address) -> Result<i128, ContractError> {
    Ok(token_client(e)?.balance(holder))
}

/// @notice Token balance held by this contract (locked principal + reserve).
pub fn contract_balance(e: &Env) -> Result<i128, ContractError> {
    balance_of(e, &e.current_contract_address())
}

/// @notice Checks that `owner` approved the contract for `amount` and holds it.
/// @dev Checked up front so the token contract never has to trap on our behalf.
pub fn require_funds(e: &Env, owner: &Address, amount: i128) -> Result<(), ContractError> {
    let client = token_client(e)?;
    let contract = e.current_contract_address();
    if client.allowance(owner, &contract) < amount {
        return Err(ContractError::InsufficientAllowance);
    }
    if client.balance(owner) < amount {
        return Err(ContractError::InsufficientBalance);
    }
    Ok(())
}

/// @notice Pulls `amount` from `owner` into the contract.
/// @dev Requires prior approval for the contract as spender.
pub fn debit(e: &Env, owner: &Address, amount: i128) -> Result<(), ContractError> {
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    require_funds(e, owner, amount)?;
    let contract = e.current_contract_address();
    token_client(e)?.transfer_from(&contract, owner, &contract, &amount);
    Ok(())
}

/// @notice Sends `amount` from the contract to `recipient`.
pub fn credit(e: &Env, recipient: &Address, amount: i128) -> Result<(), ContractError> {
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    let contract = e.current_contract_address();
    token_client(e)?.transfer(&contract, recipient, &amount);
    Ok(())
}
