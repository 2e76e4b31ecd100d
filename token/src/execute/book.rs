//! Balance bookkeeping for native and messaging tokens.
//!
//! This is the minimal subset of cw20 semantics the custody bridge and the
//! migrator need: transfer, allowance-based transfer, a monotonic allowance
//! grant, and mint/burn. Adapters have no balance book and reject all of it.

use cosmwasm_std::{
    to_json_binary, Addr, CosmosMsg, DepsMut, MessageInfo, Response, StdError, Storage, Uint128,
    WasmMsg,
};
use cw20::Expiration;

use common::gateway::GatewayExecuteMsg;
use common::token::TokenMode;

use crate::error::ContractError;
use crate::state::{Config, ALLOWANCES, AUTHORIZED_CALLERS, BALANCES, CONFIG, TOTAL};

// ============================================================================
// Book Primitives
// ============================================================================

/// Remove `amount` from an address's balance.
pub fn debit(storage: &mut dyn Storage, addr: &Addr, amount: Uint128) -> Result<(), ContractError> {
    let balance = BALANCES.may_load(storage, addr)?.unwrap_or_default();
    if amount > balance {
        return Err(ContractError::InsufficientBalance {
            needed: amount,
            available: balance,
        });
    }
    BALANCES.save(storage, addr, &(balance - amount))?;
    Ok(())
}

/// Add `amount` to an address's balance.
pub fn credit(storage: &mut dyn Storage, addr: &Addr, amount: Uint128) -> Result<(), ContractError> {
    let balance = BALANCES.may_load(storage, addr)?.unwrap_or_default();
    BALANCES.save(
        storage,
        addr,
        &balance.checked_add(amount).map_err(StdError::overflow)?,
    )?;
    Ok(())
}

/// Consume part of the allowance `owner` granted `spender`.
pub fn spend_allowance(
    storage: &mut dyn Storage,
    owner: &Addr,
    spender: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    let allowance = ALLOWANCES
        .may_load(storage, (owner, spender))?
        .unwrap_or_default();
    if amount > allowance {
        return Err(ContractError::InsufficientAllowance {
            needed: amount,
            available: allowance,
        });
    }
    ALLOWANCES.save(storage, (owner, spender), &(allowance - amount))?;
    Ok(())
}

/// Grow the local total supply.
fn grow_total(storage: &mut dyn Storage, amount: Uint128) -> Result<(), ContractError> {
    let total = TOTAL.load(storage)?;
    TOTAL.save(
        storage,
        &total.checked_add(amount).map_err(StdError::overflow)?,
    )?;
    Ok(())
}

/// Shrink the local total supply. Callers debit a balance first, so the
/// total always covers the amount.
fn shrink_total(storage: &mut dyn Storage, amount: Uint128) -> Result<(), ContractError> {
    let total = TOTAL.load(storage)?;
    TOTAL.save(storage, &total.saturating_sub(amount))?;
    Ok(())
}

// ============================================================================
// Authorization Helpers
// ============================================================================

/// Owner, custody bridge, or an authorized caller.
fn ensure_mint_burn_rights(
    storage: &dyn Storage,
    config: &Config,
    caller: &Addr,
) -> Result<(), ContractError> {
    if *caller == config.owner {
        return Ok(());
    }
    if config.custody_bridge.as_ref() == Some(caller) {
        return Ok(());
    }
    if AUTHORIZED_CALLERS
        .may_load(storage, caller)?
        .unwrap_or(false)
    {
        return Ok(());
    }
    Err(ContractError::UnauthorizedCaller)
}

fn ensure_balance_book(config: &Config, operation: &str) -> Result<(), ContractError> {
    if !config.has_balance_book() {
        return Err(ContractError::UnsupportedForMode {
            operation: operation.to_string(),
        });
    }
    Ok(())
}

// ============================================================================
// Handlers
// ============================================================================

/// Move tokens from the sender to `recipient`.
pub fn execute_transfer(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_balance_book(&config, "transfer")?;
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    let recipient_addr = deps.api.addr_validate(&recipient)?;
    debit(deps.storage, &info.sender, amount)?;
    credit(deps.storage, &recipient_addr, amount)?;

    Ok(Response::new()
        .add_attribute("method", "transfer")
        .add_attribute("from", info.sender.to_string())
        .add_attribute("to", recipient)
        .add_attribute("amount", amount.to_string()))
}

/// Move tokens from `owner` to `recipient` against the sender's allowance.
pub fn execute_transfer_from(
    deps: DepsMut,
    info: MessageInfo,
    owner: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_balance_book(&config, "transfer_from")?;
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    let owner_addr = deps.api.addr_validate(&owner)?;
    let recipient_addr = deps.api.addr_validate(&recipient)?;

    spend_allowance(deps.storage, &owner_addr, &info.sender, amount)?;
    debit(deps.storage, &owner_addr, amount)?;
    credit(deps.storage, &recipient_addr, amount)?;

    Ok(Response::new()
        .add_attribute("method", "transfer_from")
        .add_attribute("spender", info.sender.to_string())
        .add_attribute("from", owner)
        .add_attribute("to", recipient)
        .add_attribute("amount", amount.to_string()))
}

/// Grant `spender` an additional spending allowance. The expiry is accepted
/// for cw20 shape compatibility; allowances here never expire.
pub fn execute_increase_allowance(
    deps: DepsMut,
    info: MessageInfo,
    spender: String,
    amount: Uint128,
    _expires: Option<Expiration>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_balance_book(&config, "increase_allowance")?;

    let spender_addr = deps.api.addr_validate(&spender)?;
    if spender_addr == info.sender {
        return Err(ContractError::InvalidAddress {
            reason: "cannot set allowance to own account".to_string(),
        });
    }

    let allowance = ALLOWANCES
        .may_load(deps.storage, (&info.sender, &spender_addr))?
        .unwrap_or_default();
    ALLOWANCES.save(
        deps.storage,
        (&info.sender, &spender_addr),
        &allowance.checked_add(amount).map_err(StdError::overflow)?,
    )?;

    Ok(Response::new()
        .add_attribute("method", "increase_allowance")
        .add_attribute("owner", info.sender.to_string())
        .add_attribute("spender", spender)
        .add_attribute("amount", amount.to_string()))
}

/// Mint new tokens to `recipient`. Native tokens reflect the mint into the
/// gateway ledger in the same transaction.
pub fn execute_mint(
    deps: DepsMut,
    env: cosmwasm_std::Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_balance_book(&config, "mint")?;
    ensure_mint_burn_rights(deps.storage, &config, &info.sender)?;
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    let recipient_addr = deps.api.addr_validate(&recipient)?;
    credit(deps.storage, &recipient_addr, amount)?;
    grow_total(deps.storage, amount)?;

    let mut resp = Response::new()
        .add_attribute("method", "mint")
        .add_attribute("to", recipient)
        .add_attribute("amount", amount.to_string());

    // The ledger update rides in the same transaction, so a ceiling breach
    // there rolls the mint back too.
    if matches!(config.mode, TokenMode::Native { .. }) {
        resp = resp.add_message(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: config.gateway.to_string(),
            msg: to_json_binary(&GatewayExecuteMsg::MintSupply {
                token: env.contract.address.to_string(),
                amount,
            })?,
            funds: vec![],
        }));
    }
    Ok(resp)
}

/// Burn tokens from the sender's balance. Native tokens reflect the burn
/// into the gateway ledger in the same transaction.
pub fn execute_burn(
    deps: DepsMut,
    env: cosmwasm_std::Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_balance_book(&config, "burn")?;
    ensure_mint_burn_rights(deps.storage, &config, &info.sender)?;
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    debit(deps.storage, &info.sender, amount)?;
    shrink_total(deps.storage, amount)?;

    let mut resp = Response::new()
        .add_attribute("method", "burn")
        .add_attribute("from", info.sender.to_string())
        .add_attribute("amount", amount.to_string());

    if matches!(config.mode, TokenMode::Native { .. }) {
        resp = resp.add_message(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: config.gateway.to_string(),
            msg: to_json_binary(&GatewayExecuteMsg::BurnSupply {
                token: env.contract.address.to_string(),
                amount,
            })?,
            funds: vec![],
        }));
    }
    Ok(resp)
}
