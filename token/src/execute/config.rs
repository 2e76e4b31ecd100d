//! Owner configuration handlers.

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::{AUTHORIZED_CALLERS, AUTHORIZED_CHAINS, CONFIG};

/// Toggle whether sends to `chain` are authorized.
pub fn execute_set_authorized_chain(
    deps: DepsMut,
    info: MessageInfo,
    chain: u32,
    authorized: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    AUTHORIZED_CHAINS.save(deps.storage, chain, &authorized)?;

    Ok(Response::new()
        .add_attribute("method", "set_authorized_chain")
        .add_attribute("chain", chain.to_string())
        .add_attribute("authorized", authorized.to_string()))
}

/// Toggle mint/burn rights for a caller.
pub fn execute_set_caller_status(
    deps: DepsMut,
    info: MessageInfo,
    caller: String,
    authorized: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let caller_addr = deps.api.addr_validate(&caller)?;
    AUTHORIZED_CALLERS.save(deps.storage, &caller_addr, &authorized)?;

    Ok(Response::new()
        .add_attribute("method", "set_caller_status")
        .add_attribute("caller", caller)
        .add_attribute("authorized", authorized.to_string()))
}
