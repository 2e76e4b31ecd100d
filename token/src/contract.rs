//! Omnigate Token Representation - Entry Points
//!
//! One contract serves the three bridged-token variants; the mode chosen at
//! instantiation decides which handlers are live. The implementation is
//! modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    Uint128,
};
use cw2::set_contract_version;

use common::address::parse_wire_address;

use crate::error::ContractError;
use crate::execute::send::{reply_custody_claim, reply_custody_lock, reply_endpoint_send};
use crate::execute::{
    execute_burn, execute_claim, execute_increase_allowance, execute_mint,
    execute_send_with_compose, execute_set_authorized_chain, execute_set_caller_status,
    execute_transfer, execute_transfer_from,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::query::{
    query_allowance, query_authorized_chains, query_balance, query_is_authorized_caller,
    query_is_authorized_chain, query_token_info,
};
use crate::state::{
    Config, AUTHORIZED_CHAINS, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, GUARD,
    REPLY_CUSTODY_CLAIM, REPLY_CUSTODY_LOCK, REPLY_ENDPOINT_SEND, TOTAL,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.gateway.is_empty() {
        return Err(ContractError::InvalidAddress {
            reason: "gateway must not be empty".to_string(),
        });
    }
    parse_wire_address(msg.origin_address.as_slice())?;

    let config = Config {
        owner: deps.api.addr_validate(&msg.owner)?,
        gateway: deps.api.addr_validate(&msg.gateway)?,
        endpoint: deps.api.addr_validate(&msg.endpoint)?,
        custody_bridge: msg
            .custody_bridge
            .map(|c| deps.api.addr_validate(&c))
            .transpose()?,
        local_network: msg.local_network,
        origin_network: msg.origin_network,
        origin_address: msg.origin_address,
        mode: msg.mode,
    };
    CONFIG.save(deps.storage, &config)?;
    TOTAL.save(deps.storage, &Uint128::zero())?;
    GUARD.save(deps.storage, &false)?;

    for chain in msg.authorized_chains {
        AUTHORIZED_CHAINS.save(deps.storage, chain, &true)?;
    }

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner.to_string())
        .add_attribute("gateway", config.gateway.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SendWithCompose {
            dest_network,
            recipient,
            amount,
            min_amount,
            refund_address,
            compose,
        } => execute_send_with_compose(
            deps,
            env,
            info,
            dest_network,
            recipient,
            amount,
            min_amount,
            refund_address,
            compose,
        ),
        ExecuteMsg::Claim {
            proof_local_exit_root,
            proof_rollup_exit_root,
            global_index,
            mainnet_exit_root,
            rollup_exit_root,
            origin_network,
            origin_token,
            destination_address,
            amount,
            metadata,
        } => execute_claim(
            deps,
            env,
            info,
            proof_local_exit_root,
            proof_rollup_exit_root,
            global_index,
            mainnet_exit_root,
            rollup_exit_root,
            origin_network,
            origin_token,
            destination_address,
            amount,
            metadata,
        ),
        ExecuteMsg::Transfer { recipient, amount } => {
            execute_transfer(deps, info, recipient, amount)
        }
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => execute_transfer_from(deps, info, owner, recipient, amount),
        ExecuteMsg::IncreaseAllowance {
            spender,
            amount,
            expires,
        } => execute_increase_allowance(deps, info, spender, amount, expires),
        ExecuteMsg::Mint { recipient, amount } => execute_mint(deps, env, info, recipient, amount),
        ExecuteMsg::Burn { amount } => execute_burn(deps, env, info, amount),
        ExecuteMsg::SetAuthorizedChain { chain, authorized } => {
            execute_set_authorized_chain(deps, info, chain, authorized)
        }
        ExecuteMsg::SetCallerStatus { caller, authorized } => {
            execute_set_caller_status(deps, info, caller, authorized)
        }
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        REPLY_ENDPOINT_SEND => reply_endpoint_send(deps, msg),
        REPLY_CUSTODY_LOCK => reply_custody_lock(deps, msg),
        REPLY_CUSTODY_CLAIM => reply_custody_claim(deps, msg),
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::TokenInfo {} => Ok(to_json_binary(&query_token_info(deps)?)?),
        QueryMsg::Balance { address } => Ok(to_json_binary(&query_balance(deps, address)?)?),
        QueryMsg::Allowance { owner, spender } => {
            Ok(to_json_binary(&query_allowance(deps, owner, spender)?)?)
        }
        QueryMsg::IsAuthorizedChain { chain } => {
            Ok(to_json_binary(&query_is_authorized_chain(deps, chain)?)?)
        }
        QueryMsg::IsAuthorizedCaller { caller } => {
            Ok(to_json_binary(&query_is_authorized_caller(deps, caller)?)?)
        }
        QueryMsg::AuthorizedChains { start_after, limit } => Ok(to_json_binary(
            &query_authorized_chains(deps, start_after, limit)?,
        )?),
    }
}
