//! Omnigate Gateway Ledger - Entry Points
//!
//! The gateway is the per-network accounting authority for bridged tokens.
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers
//! - `factory` - Deterministic adapter deployment

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_add_supply_manager, execute_burn_supply, execute_deploy_adapter, execute_mint_supply,
    execute_on_message, execute_register_token_origin, execute_remove_supply_manager,
    execute_set_adapter_code_id, execute_set_authorized_representation,
    execute_set_chain_supply_limit, execute_set_migrator, execute_set_token_max_supply,
};
use crate::factory::handle_deploy_reply;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_adapter_by_origin, query_chain_supply, query_config,
    query_is_authorized_representation, query_is_supply_manager, query_predict_adapter_address,
    query_representations, query_supply_info, query_token_origin,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, REPLY_DEPLOY_ADAPTER};

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

    if msg.custody_bridge.is_empty() {
        return Err(ContractError::InvalidAddress {
            reason: "custody bridge must not be empty".to_string(),
        });
    }
    if msg.endpoint.is_empty() {
        return Err(ContractError::InvalidAddress {
            reason: "endpoint must not be empty".to_string(),
        });
    }

    let config = Config {
        owner: deps.api.addr_validate(&msg.owner)?,
        custody_bridge: deps.api.addr_validate(&msg.custody_bridge)?,
        endpoint: deps.api.addr_validate(&msg.endpoint)?,
        local_network: msg.local_network,
        adapter_code_id: msg.adapter_code_id,
        migrator: msg
            .migrator
            .map(|m| deps.api.addr_validate(&m))
            .transpose()?,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner.to_string())
        .add_attribute("local_network", config.local_network.to_string()))
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
        ExecuteMsg::OnMessage {
            origin,
            delivery_id,
            message,
        } => execute_on_message(deps, env, info, origin, delivery_id, message),
        ExecuteMsg::RegisterTokenOrigin {
            token,
            origin_network,
            origin_address,
        } => execute_register_token_origin(deps, info, token, origin_network, origin_address),
        ExecuteMsg::MintSupply { token, amount } => execute_mint_supply(deps, info, token, amount),
        ExecuteMsg::BurnSupply { token, amount } => execute_burn_supply(deps, info, token, amount),
        ExecuteMsg::DeployAdapter {
            token,
            origin_network,
            origin_address,
            initial_chains,
        } => execute_deploy_adapter(
            deps,
            env,
            info,
            token,
            origin_network,
            origin_address,
            initial_chains,
        ),
        ExecuteMsg::SetAuthorizedRepresentation {
            representation,
            authorized,
        } => execute_set_authorized_representation(deps, info, representation, authorized),
        ExecuteMsg::SetTokenMaxSupply { token, max_supply } => {
            execute_set_token_max_supply(deps, info, token, max_supply)
        }
        ExecuteMsg::SetChainSupplyLimit {
            token,
            chain,
            limit,
        } => execute_set_chain_supply_limit(deps, info, token, chain, limit),
        ExecuteMsg::AddTokenSupplyManager { token, manager } => {
            execute_add_supply_manager(deps, info, token, manager)
        }
        ExecuteMsg::RemoveTokenSupplyManager { token, manager } => {
            execute_remove_supply_manager(deps, info, token, manager)
        }
        ExecuteMsg::SetMigrator { migrator } => execute_set_migrator(deps, info, migrator),
        ExecuteMsg::SetAdapterCodeId { code_id } => {
            execute_set_adapter_code_id(deps, info, code_id)
        }
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        REPLY_DEPLOY_ADAPTER => handle_deploy_reply(deps, msg),
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::Config {} => Ok(to_json_binary(&query_config(deps)?)?),
        QueryMsg::TokenOrigin { token } => Ok(to_json_binary(&query_token_origin(deps, token)?)?),
        QueryMsg::SupplyInfo { token } => Ok(to_json_binary(&query_supply_info(deps, token)?)?),
        QueryMsg::ChainSupply { token, chain } => {
            Ok(to_json_binary(&query_chain_supply(deps, token, chain)?)?)
        }
        QueryMsg::IsAuthorizedRepresentation { address } => Ok(to_json_binary(
            &query_is_authorized_representation(deps, address)?,
        )?),
        QueryMsg::IsSupplyManager { token, manager } => Ok(to_json_binary(
            &query_is_supply_manager(deps, token, manager)?,
        )?),
        QueryMsg::AdapterByOrigin {
            origin_network,
            origin_address,
        } => Ok(to_json_binary(&query_adapter_by_origin(
            deps,
            origin_network,
            origin_address,
        )?)?),
        QueryMsg::PredictAdapterAddress {
            origin_network,
            origin_address,
        } => Ok(to_json_binary(&query_predict_adapter_address(
            deps,
            env,
            origin_network,
            origin_address,
        )?)?),
        QueryMsg::Representations { start_after, limit } => Ok(to_json_binary(
            &query_representations(deps, start_after, limit)?,
        )?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("method", "migrate"))
}
