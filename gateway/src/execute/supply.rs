//! Origin registration and the supply ledger.
//!
//! The ledger tracks, per token, the supply resident on this network
//! (`CURRENT_SUPPLY`) and the global committed supply (`TOTAL_SUPPLY`),
//! against their ceilings. The conservation invariant is
//! `total_supply == sum of current_supply over all chains` as observed by
//! this ledger; mint and burn keep it by always moving both counters
//! together on the local network key.

use cosmwasm_std::{Addr, DepsMut, MessageInfo, Response, StdError, Storage, Uint128};

use common::address::{parse_wire_address, to_hex_address};

use crate::error::ContractError;
use crate::state::{
    OriginBinding, TokenOriginInfo, AUTHORIZED_REPRESENTATIONS, CHAIN_SUPPLY_LIMIT, CONFIG,
    CURRENT_SUPPLY, EXITS, MAX_SUPPLY, ORIGIN_INDEX, SUPPLY_MANAGERS, TOKEN_ORIGINS, TOTAL_SUPPLY,
};

// ============================================================================
// Authorization Helpers
// ============================================================================

/// Whether `caller` may mutate the supply ledger for `token`.
fn is_supply_operator(
    storage: &dyn Storage,
    token: &Addr,
    caller: &Addr,
) -> Result<bool, ContractError> {
    if AUTHORIZED_REPRESENTATIONS
        .may_load(storage, caller)?
        .unwrap_or(false)
    {
        return Ok(true);
    }
    Ok(SUPPLY_MANAGERS
        .may_load(storage, (token, caller))?
        .unwrap_or(false))
}

// ============================================================================
// Origin Registration
// ============================================================================

/// Record a token's origin and index it for inbound resolution.
///
/// First-writer-wins: once an origin is stored it is never overwritten, so
/// a later caller cannot redirect a token whose trust is established.
/// Returns whether this call performed the write.
pub fn register_origin(
    storage: &mut dyn Storage,
    token: &Addr,
    representation: &Addr,
    origin_network: u32,
    origin_address: &[u8; 20],
) -> Result<bool, ContractError> {
    if TOKEN_ORIGINS.may_load(storage, token)?.is_some() {
        return Ok(false);
    }

    TOKEN_ORIGINS.save(
        storage,
        token,
        &TokenOriginInfo {
            origin_network,
            origin_address: origin_address.to_vec().into(),
            registered: true,
        },
    )?;

    if ORIGIN_INDEX
        .may_load(storage, (origin_network, origin_address.as_slice()))?
        .is_none()
    {
        ORIGIN_INDEX.save(
            storage,
            (origin_network, origin_address.as_slice()),
            &OriginBinding {
                token: token.clone(),
                representation: representation.clone(),
            },
        )?;
    }

    Ok(true)
}

/// Register a token's origin. Owner or authorized representation only.
pub fn execute_register_token_origin(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    origin_network: u32,
    origin_address: cosmwasm_std::Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let is_repr = AUTHORIZED_REPRESENTATIONS
        .may_load(deps.storage, &info.sender)?
        .unwrap_or(false);
    if info.sender != config.owner && !is_repr {
        return Err(ContractError::UnauthorizedRepresentation {
            caller: info.sender.to_string(),
        });
    }

    let token_addr = deps.api.addr_validate(&token)?;
    let origin = parse_wire_address(origin_address.as_slice())?;

    // A native token registers itself; it is its own representation on the
    // ledger. Adapter bindings are written by the factory instead.
    let written = register_origin(deps.storage, &token_addr, &token_addr, origin_network, &origin)?;

    Ok(Response::new()
        .add_attribute("method", "register_token_origin")
        .add_attribute("token", token)
        .add_attribute("origin_network", origin_network.to_string())
        .add_attribute("origin_address", to_hex_address(&origin))
        .add_attribute("registered", written.to_string()))
}

// ============================================================================
// Supply Accounting
// ============================================================================

/// Credit `amount` of `token` supply onto the local network, enforcing
/// the global ceiling always and the per-chain ceiling unless bypassed.
pub fn credit_supply(
    storage: &mut dyn Storage,
    token: &Addr,
    local_network: u32,
    amount: Uint128,
    bypass_chain_cap: bool,
) -> Result<(), ContractError> {
    let total = TOTAL_SUPPLY.may_load(storage, token)?.unwrap_or_default();
    let max_supply = MAX_SUPPLY.may_load(storage, token)?.unwrap_or_default();
    let new_total = total.checked_add(amount).map_err(StdError::overflow)?;
    if !max_supply.is_zero() && new_total > max_supply {
        return Err(ContractError::MaxSupplyExceeded {
            token: token.to_string(),
            requested: amount,
            total_supply: total,
            max_supply,
        });
    }

    let current = CURRENT_SUPPLY
        .may_load(storage, (token, local_network))?
        .unwrap_or_default();
    let new_current = current.checked_add(amount).map_err(StdError::overflow)?;
    if !bypass_chain_cap {
        let limit = CHAIN_SUPPLY_LIMIT
            .may_load(storage, (token, local_network))?
            .unwrap_or_default();
        if !limit.is_zero() && new_current > limit {
            return Err(ContractError::ChainSupplyLimitExceeded {
                chain: local_network,
                requested: amount,
                current,
                limit,
            });
        }
    }

    TOTAL_SUPPLY.save(storage, token, &new_total)?;
    CURRENT_SUPPLY.save(storage, (token, local_network), &new_current)?;
    Ok(())
}

/// Record newly minted supply. Authorized representation or supply manager.
pub fn execute_mint_supply(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let token_addr = deps.api.addr_validate(&token)?;
    if !is_supply_operator(deps.storage, &token_addr, &info.sender)? {
        return Err(ContractError::UnauthorizedRepresentation {
            caller: info.sender.to_string(),
        });
    }
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    let config = CONFIG.load(deps.storage)?;
    let origin = TOKEN_ORIGINS
        .may_load(deps.storage, &token_addr)?
        .ok_or(ContractError::OriginNotRegistered {
            token: token.clone(),
        })?;

    // A token minting on its own origin chain has no inbound cap against
    // itself; the global ceiling still applies.
    let bypass_chain_cap = origin.origin_network == config.local_network;
    credit_supply(
        deps.storage,
        &token_addr,
        config.local_network,
        amount,
        bypass_chain_cap,
    )?;

    Ok(Response::new()
        .add_attribute("method", "mint_supply")
        .add_attribute("token", token)
        .add_attribute("amount", amount.to_string()))
}

/// Record burned supply. Authorized representation or supply manager.
pub fn execute_burn_supply(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let token_addr = deps.api.addr_validate(&token)?;
    if !is_supply_operator(deps.storage, &token_addr, &info.sender)? {
        return Err(ContractError::UnauthorizedRepresentation {
            caller: info.sender.to_string(),
        });
    }
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    let config = CONFIG.load(deps.storage)?;
    let total = TOTAL_SUPPLY
        .may_load(deps.storage, &token_addr)?
        .unwrap_or_default();
    if amount > total {
        return Err(ContractError::InsufficientSupply {
            requested: amount,
            available: total,
        });
    }

    TOTAL_SUPPLY.save(deps.storage, &token_addr, &(total - amount))?;

    // Per-chain counter floors at zero; the excess is bookkeeping only and
    // lands in the cumulative exit counter below either way.
    let current = CURRENT_SUPPLY
        .may_load(deps.storage, (&token_addr, config.local_network))?
        .unwrap_or_default();
    CURRENT_SUPPLY.save(
        deps.storage,
        (&token_addr, config.local_network),
        &current.saturating_sub(amount),
    )?;

    let exits = EXITS
        .may_load(deps.storage, (&token_addr, config.local_network))?
        .unwrap_or_default();
    EXITS.save(
        deps.storage,
        (&token_addr, config.local_network),
        &exits.checked_add(amount).map_err(StdError::overflow)?,
    )?;

    Ok(Response::new()
        .add_attribute("method", "burn_supply")
        .add_attribute("token", token)
        .add_attribute("amount", amount.to_string()))
}
