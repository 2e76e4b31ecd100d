//! Omnigate Migrator - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{execute_downgrade_token, execute_upgrade_to_adapter, handle_deploy_reply};
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::query::{
    query_config, query_downgraded_messaging, query_downgraded_plain,
    query_predict_downgrade_address, query_upgraded_adapter,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, REPLY_DEPLOY_TARGET};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        owner: deps.api.addr_validate(&msg.owner)?,
        gateway: deps.api.addr_validate(&msg.gateway)?,
        endpoint: deps.api.addr_validate(&msg.endpoint)?,
        token_code_id: msg.token_code_id,
        plain_code_id: msg.plain_code_id,
        local_network: msg.local_network,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner.to_string())
        .add_attribute("gateway", config.gateway.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::UpgradeToAdapter {
            source_token,
            initial_chains,
            amount,
        } => execute_upgrade_to_adapter(deps, env, info, source_token, initial_chains, amount),
        ExecuteMsg::DowngradeToken {
            source_token,
            target,
            amount,
        } => execute_downgrade_token(deps, env, info, source_token, target, amount),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        REPLY_DEPLOY_TARGET => handle_deploy_reply(deps, msg),
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::Config {} => Ok(to_json_binary(&query_config(deps)?)?),
        QueryMsg::DowngradedPlain { source_token } => {
            Ok(to_json_binary(&query_downgraded_plain(deps, source_token)?)?)
        }
        QueryMsg::DowngradedMessaging { source_token } => Ok(to_json_binary(
            &query_downgraded_messaging(deps, source_token)?,
        )?),
        QueryMsg::UpgradedAdapter { source_token } => {
            Ok(to_json_binary(&query_upgraded_adapter(deps, source_token)?)?)
        }
        QueryMsg::PredictDowngradeAddress {
            source_token,
            target,
        } => Ok(to_json_binary(&query_predict_downgrade_address(
            deps,
            env,
            source_token,
            target,
        )?)?),
    }
}
