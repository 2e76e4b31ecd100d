//! Owner configuration handlers.
//!
//! This module handles:
//! - Representation authorization (mint/burn rights on the ledger)
//! - Supply ceilings (global max supply, per-chain inbound limits)
//! - Supply manager delegation
//! - Migrator and adapter code id wiring

use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::state::{
    AUTHORIZED_REPRESENTATIONS, CHAIN_SUPPLY_LIMIT, CONFIG, CURRENT_SUPPLY, MAX_SUPPLY,
    SUPPLY_MANAGERS, TOTAL_SUPPLY,
};

// ============================================================================
// Representation Authorization
// ============================================================================

/// Toggle mint/burn authorization for a representation contract.
///
/// De-authorization never erases origin or supply history; a de-authorized
/// representation can be re-authorized later and picks up where it left off.
pub fn execute_set_authorized_representation(
    deps: DepsMut,
    info: MessageInfo,
    representation: String,
    authorized: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let repr_addr = deps.api.addr_validate(&representation)?;
    AUTHORIZED_REPRESENTATIONS.save(deps.storage, &repr_addr, &authorized)?;

    Ok(Response::new()
        .add_attribute("method", "set_authorized_representation")
        .add_attribute("representation", representation)
        .add_attribute("authorized", authorized.to_string()))
}

// ============================================================================
// Supply Ceilings
// ============================================================================

/// Set a token's global supply ceiling. Zero means unlimited.
pub fn execute_set_token_max_supply(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    max_supply: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let token_addr = deps.api.addr_validate(&token)?;
    let total = TOTAL_SUPPLY
        .may_load(deps.storage, &token_addr)?
        .unwrap_or_default();

    // Cannot cap below what is already committed.
    if !max_supply.is_zero() && max_supply < total {
        return Err(ContractError::MaxSupplyBelowCommitted {
            requested: max_supply,
            committed: total,
        });
    }

    MAX_SUPPLY.save(deps.storage, &token_addr, &max_supply)?;

    Ok(Response::new()
        .add_attribute("method", "set_token_max_supply")
        .add_attribute("token", token)
        .add_attribute("max_supply", max_supply.to_string()))
}

/// Set a token's inbound supply limit for a chain. Zero means unlimited.
pub fn execute_set_chain_supply_limit(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    chain: u32,
    limit: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let token_addr = deps.api.addr_validate(&token)?;
    let current = CURRENT_SUPPLY
        .may_load(deps.storage, (&token_addr, chain))?
        .unwrap_or_default();

    if !limit.is_zero() && limit < current {
        return Err(ContractError::ChainLimitBelowCurrent {
            chain,
            requested: limit,
            current,
        });
    }

    CHAIN_SUPPLY_LIMIT.save(deps.storage, (&token_addr, chain), &limit)?;

    Ok(Response::new()
        .add_attribute("method", "set_chain_supply_limit")
        .add_attribute("token", token)
        .add_attribute("chain", chain.to_string())
        .add_attribute("limit", limit.to_string()))
}

// ============================================================================
// Supply Manager Delegation
// ============================================================================

/// Grant delegated supply-operator rights for a token.
pub fn execute_add_supply_manager(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    manager: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let token_addr = deps.api.addr_validate(&token)?;
    let manager_addr = deps.api.addr_validate(&manager)?;
    SUPPLY_MANAGERS.save(deps.storage, (&token_addr, &manager_addr), &true)?;

    Ok(Response::new()
        .add_attribute("method", "add_token_supply_manager")
        .add_attribute("token", token)
        .add_attribute("manager", manager))
}

/// Revoke delegated supply-operator rights for a token.
pub fn execute_remove_supply_manager(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    manager: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let token_addr = deps.api.addr_validate(&token)?;
    let manager_addr = deps.api.addr_validate(&manager)?;
    SUPPLY_MANAGERS.remove(deps.storage, (&token_addr, &manager_addr));

    Ok(Response::new()
        .add_attribute("method", "remove_token_supply_manager")
        .add_attribute("token", token)
        .add_attribute("manager", manager))
}

// ============================================================================
// Migrator & Adapter Code Id
// ============================================================================

/// Point the gateway at a migrator contract.
pub fn execute_set_migrator(
    deps: DepsMut,
    info: MessageInfo,
    migrator: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    config.migrator = Some(deps.api.addr_validate(&migrator)?);
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_migrator")
        .add_attribute("migrator", migrator))
}

/// Change the token code id used for adapter deployment.
pub fn execute_set_adapter_code_id(
    deps: DepsMut,
    info: MessageInfo,
    code_id: u64,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    config.adapter_code_id = code_id;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_adapter_code_id")
        .add_attribute("code_id", code_id.to_string()))
}
