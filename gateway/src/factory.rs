//! Deterministic adapter deployment.
//!
//! Adapters are deployed with `Instantiate2` under a salt derived from the
//! token origin, so the address is knowable before deployment and identical
//! across retries. The reply handler verifies the chain actually placed the
//! contract at the predicted address and aborts otherwise.

use cosmwasm_std::{
    instantiate2_address, to_json_binary, Addr, Binary, Deps, DepsMut, Env, Reply, Response,
    StdError, SubMsg, WasmMsg,
};

use common::address::keccak256;
use common::token::{TokenInstantiateMsg, TokenMode};

use crate::error::ContractError;
use crate::state::{Config, PENDING_DEPLOYMENT, REPLY_DEPLOY_ADAPTER};

/// Salt for an adapter deployment: the token origin, hashed.
pub fn adapter_salt(origin_network: u32, origin_address: &[u8; 20]) -> [u8; 32] {
    let mut preimage = Vec::with_capacity(24);
    preimage.extend_from_slice(&origin_network.to_be_bytes());
    preimage.extend_from_slice(origin_address);
    keccak256(&preimage)
}

/// Predict the `Instantiate2` address of the adapter for a token origin.
pub fn predict_adapter_address(
    deps: Deps,
    env: &Env,
    code_id: u64,
    origin_network: u32,
    origin_address: &[u8; 20],
) -> Result<Addr, ContractError> {
    let code_info = deps.querier.query_wasm_code_info(code_id)?;
    let creator = deps.api.addr_canonicalize(env.contract.address.as_str())?;
    let salt = adapter_salt(origin_network, origin_address);
    let canonical = instantiate2_address(&code_info.checksum, &creator, &salt)
        .map_err(|e| StdError::generic_err(format!("instantiate2 address: {e}")))?;
    Ok(deps.api.addr_humanize(&canonical)?)
}

/// Build the `Instantiate2` submessage deploying an adapter around
/// `wrapped`, and park the predicted address for reply verification.
pub fn adapter_deploy_submsg(
    deps: DepsMut,
    env: &Env,
    config: &Config,
    predicted: &Addr,
    wrapped: &Addr,
    origin_network: u32,
    origin_address: &[u8; 20],
    initial_chains: Vec<u32>,
) -> Result<SubMsg, ContractError> {
    let init = TokenInstantiateMsg {
        owner: config.owner.to_string(),
        gateway: env.contract.address.to_string(),
        endpoint: config.endpoint.to_string(),
        custody_bridge: Some(config.custody_bridge.to_string()),
        local_network: config.local_network,
        origin_network,
        origin_address: origin_address.to_vec().into(),
        mode: TokenMode::Adapter {
            wrapped: wrapped.to_string(),
        },
        authorized_chains: initial_chains,
    };

    PENDING_DEPLOYMENT.save(
        deps.storage,
        &crate::state::PendingDeployment {
            predicted: predicted.clone(),
        },
    )?;

    let salt = adapter_salt(origin_network, origin_address);
    let msg = WasmMsg::Instantiate2 {
        admin: Some(config.owner.to_string()),
        code_id: config.adapter_code_id,
        label: format!("omnigate adapter {}/{}", origin_network, hex::encode(origin_address)),
        msg: to_json_binary(&init)?,
        funds: vec![],
        salt: Binary::from(salt.to_vec()),
    };
    Ok(SubMsg::reply_on_success(msg, REPLY_DEPLOY_ADAPTER))
}

/// Verify an adapter deployment reply against the parked prediction.
pub fn handle_deploy_reply(deps: DepsMut, msg: Reply) -> Result<Response, ContractError> {
    let pending = PENDING_DEPLOYMENT
        .may_load(deps.storage)?
        .ok_or(ContractError::NoPendingDeployment)?;
    PENDING_DEPLOYMENT.remove(deps.storage);

    let result = msg
        .result
        .into_result()
        .map_err(StdError::generic_err)?;
    let actual = result
        .events
        .iter()
        .find(|e| e.ty == "instantiate")
        .and_then(|e| {
            e.attributes
                .iter()
                .find(|a| a.key == "_contract_address")
                .map(|a| a.value.clone())
        })
        .ok_or_else(|| StdError::generic_err("instantiate reply missing contract address"))?;

    if actual != pending.predicted.as_str() {
        return Err(ContractError::DeploymentAddressMismatch {
            predicted: pending.predicted.to_string(),
            actual,
        });
    }

    Ok(Response::new()
        .add_attribute("method", "adapter_deploy_reply")
        .add_attribute("adapter", actual))
}
