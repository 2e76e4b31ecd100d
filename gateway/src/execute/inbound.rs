//! Inbound message delivery and lazy adapter provisioning.
//!
//! Inbound messages arrive exclusively through the configured messaging
//! endpoint. Resolution of the origin token is fail-closed: if no local
//! binding exists and the custody bridge knows no wrapped form, the message
//! is rejected rather than minting supply no collateral backs.

use cosmwasm_std::{
    Addr, Binary, DepsMut, Env, MessageInfo, QuerierWrapper, Response, SubMsg,
};

use common::address::{is_zero_address, parse_wire_address, to_hex_address};
use common::custody::{CustodyQueryMsg, WrappedAddressResponse};
use common::endpoint::MessageOrigin;
use common::payload::{ComposePayload, GatewayMessage};

use crate::error::ContractError;
use crate::execute::supply::{credit_supply, register_origin};
use crate::factory::{adapter_deploy_submsg, predict_adapter_address};
use crate::state::{Config, AUTHORIZED_REPRESENTATIONS, CONFIG, ORIGIN_INDEX};

/// Ask the custody bridge for the local wrapped form of a foreign token.
fn query_wrapped_address(
    querier: &QuerierWrapper,
    custody_bridge: &Addr,
    origin_network: u32,
    origin_address: &[u8; 20],
) -> Result<Option<Addr>, ContractError> {
    let resp: WrappedAddressResponse = querier.query_wasm_smart(
        custody_bridge,
        &CustodyQueryMsg::WrappedAddress {
            origin_network,
            origin_token: origin_address.to_vec().into(),
        },
    )?;
    Ok(resp.address)
}

/// Process an inbound cross-chain message. Endpoint only.
pub fn execute_on_message(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    origin: MessageOrigin,
    delivery_id: Binary,
    message: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.endpoint {
        return Err(ContractError::NotEndpoint);
    }

    let decoded = GatewayMessage::decode(message.as_slice()).map_err(|e| {
        ContractError::MalformedPayload {
            reason: e.to_string(),
        }
    })?;
    if decoded.amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }
    if is_zero_address(&decoded.beneficiary) {
        return Err(ContractError::InvalidAddress {
            reason: "null beneficiary".to_string(),
        });
    }
    if is_zero_address(&decoded.origin.address) {
        return Err(ContractError::InvalidAddress {
            reason: "null origin token".to_string(),
        });
    }

    let mut submsgs: Vec<SubMsg> = vec![];
    let mut attrs: Vec<(String, String)> = vec![];

    let binding = ORIGIN_INDEX.may_load(
        deps.storage,
        (decoded.origin.network, decoded.origin.address.as_slice()),
    )?;
    let token = match binding {
        Some(binding) => {
            // Registered but de-authorized representations fail closed.
            let authorized = AUTHORIZED_REPRESENTATIONS
                .may_load(deps.storage, &binding.representation)?
                .unwrap_or(false);
            if !authorized {
                return Err(ContractError::RepresentationNotAuthorized {
                    representation: binding.representation.to_string(),
                });
            }
            binding.token
        }
        None => {
            // No local binding yet: provision an adapter for the wrapped
            // form the custody bridge knows, or fail closed.
            let wrapped = query_wrapped_address(
                &deps.querier,
                &config.custody_bridge,
                decoded.origin.network,
                &decoded.origin.address,
            )?
            .ok_or(ContractError::UnknownInboundToken {
                origin_network: decoded.origin.network,
                origin_address: to_hex_address(&decoded.origin.address),
            })?;

            let (adapter, submsg) = provision_adapter(
                deps.branch(),
                &env,
                &config,
                &wrapped,
                decoded.origin.network,
                &decoded.origin.address,
                vec![origin.network],
            )?;
            submsgs.push(submsg);
            attrs.push(("adapter_deployed".to_string(), adapter.to_string()));
            wrapped
        }
    };

    // Home-origin tokens never left this ledger on the outbound path, so
    // the return leg leaves the counters unchanged.
    if decoded.origin.network != config.local_network {
        credit_supply(
            deps.storage,
            &token,
            config.local_network,
            decoded.amount,
            false,
        )?;
    }

    finish_on_message(&decoded, &origin, &delivery_id, token, submsgs, attrs)
}

/// Deploy an adapter around `wrapped`, registering and authorizing the
/// predicted address before the instantiate submessage fires.
#[allow(clippy::too_many_arguments)]
fn provision_adapter(
    mut deps: DepsMut,
    env: &Env,
    config: &Config,
    wrapped: &Addr,
    origin_network: u32,
    origin_address: &[u8; 20],
    initial_chains: Vec<u32>,
) -> Result<(Addr, SubMsg), ContractError> {
    let predicted = predict_adapter_address(
        deps.as_ref(),
        env,
        config.adapter_code_id,
        origin_network,
        origin_address,
    )?;

    register_origin(deps.storage, wrapped, &predicted, origin_network, origin_address)?;
    AUTHORIZED_REPRESENTATIONS.save(deps.storage, &predicted, &true)?;

    let submsg = adapter_deploy_submsg(
        deps.branch(),
        env,
        config,
        &predicted,
        wrapped,
        origin_network,
        origin_address,
        initial_chains,
    )?;

    Ok((predicted, submsg))
}

fn finish_on_message(
    decoded: &GatewayMessage,
    origin: &MessageOrigin,
    delivery_id: &Binary,
    token: Addr,
    submsgs: Vec<SubMsg>,
    extra_attrs: Vec<(String, String)>,
) -> Result<Response, ContractError> {
    let mut resp = Response::new()
        .add_submessages(submsgs)
        .add_attribute("method", "on_message")
        .add_attribute("source_network", origin.network.to_string())
        .add_attribute("sequence", origin.sequence.to_string())
        .add_attribute("delivery_id", delivery_id.to_string())
        .add_attribute("token", token.to_string())
        .add_attribute("origin_network", decoded.origin.network.to_string())
        .add_attribute("origin_address", to_hex_address(&decoded.origin.address))
        .add_attribute("beneficiary", to_hex_address(&decoded.beneficiary))
        .add_attribute("amount", decoded.amount.to_string());

    // Compose sections are decoded for observability; execution of the
    // inner payload is the receiving application's business.
    if let Some(compose) = &decoded.compose {
        let parsed = ComposePayload::decode(compose).map_err(|e| {
            ContractError::MalformedPayload {
                reason: format!("compose: {e}"),
            }
        })?;
        resp = resp
            .add_attribute("compose_sender", to_hex_address(&parsed.sender))
            .add_attribute("compose_amount", parsed.amount.to_string())
            .add_attribute("compose_inner_len", parsed.inner.len().to_string());
    }

    for (k, v) in extra_attrs {
        resp = resp.add_attribute(k, v);
    }
    Ok(resp)
}

/// Deploy (or reuse) the deterministic adapter for a token origin.
/// Owner or configured migrator only.
pub fn execute_deploy_adapter(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
    origin_network: u32,
    origin_address: Binary,
    initial_chains: Vec<u32>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let is_migrator = config.migrator.as_ref() == Some(&info.sender);
    if info.sender != config.owner && !is_migrator {
        return Err(ContractError::NotMigrator);
    }

    let token_addr = deps.api.addr_validate(&token)?;
    let origin = parse_wire_address(origin_address.as_slice())?;
    if is_zero_address(&origin) {
        return Err(ContractError::InvalidAddress {
            reason: "null origin token".to_string(),
        });
    }

    // Idempotent get-or-create: a recorded binding short-circuits.
    if let Some(binding) =
        ORIGIN_INDEX.may_load(deps.storage, (origin_network, origin.as_slice()))?
    {
        return Ok(Response::new()
            .add_attribute("method", "deploy_adapter")
            .add_attribute("adapter", binding.representation.to_string())
            .add_attribute("deployed", "false"));
    }

    let (adapter, submsg) = provision_adapter(
        deps.branch(),
        &env,
        &config,
        &token_addr,
        origin_network,
        &origin,
        initial_chains,
    )?;

    Ok(Response::new()
        .add_submessage(submsg)
        .add_attribute("method", "deploy_adapter")
        .add_attribute("adapter", adapter.to_string())
        .add_attribute("deployed", "true"))
}
