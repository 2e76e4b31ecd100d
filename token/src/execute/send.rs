//! Cross-chain send and custody claim handlers, plus their replies.
//!
//! Both entry points take the re-entrancy guard before dispatching custody
//! submessages; the guard is released in the final reply of the
//! transaction. Custody lock failures are classified back into the three
//! distinguishable shapes instead of collapsing into one generic error.

use cosmwasm_std::{
    from_json, to_json_binary, Binary, CosmosMsg, DepsMut, Env, MessageInfo, QuerierWrapper,
    Reply, Response, Storage, SubMsg, Uint128, WasmMsg,
};

use common::address::{is_zero_address, parse_wire_address, to_hex_address, wire_address};
use common::custody::{classify_failure, CustodyExecuteMsg, CustodyFailure};
use common::endpoint::{
    DeliveryReceipt, EndpointExecuteMsg, EndpointQueryMsg, HasPeerResponse,
};
use common::gateway::GatewayExecuteMsg;
use common::payload::{ComposePayload, GatewayMessage, OriginHeader};
use common::token::TokenMode;

use crate::error::ContractError;
use crate::execute::book::{credit, debit};
use crate::state::{
    Config, ALLOWANCES, AUTHORIZED_CHAINS, CONFIG, GUARD, REPLY_CUSTODY_CLAIM,
    REPLY_CUSTODY_LOCK, REPLY_ENDPOINT_SEND, TOTAL,
};

// ============================================================================
// Re-entrancy Guard
// ============================================================================

fn take_guard(storage: &mut dyn Storage) -> Result<(), ContractError> {
    if GUARD.may_load(storage)?.unwrap_or(false) {
        return Err(ContractError::ReentrancyGuard);
    }
    GUARD.save(storage, &true)?;
    Ok(())
}

fn release_guard(storage: &mut dyn Storage) -> Result<(), ContractError> {
    GUARD.save(storage, &false)?;
    Ok(())
}

// ============================================================================
// Send
// ============================================================================

fn has_peer(
    querier: &QuerierWrapper,
    endpoint: &cosmwasm_std::Addr,
    network: u32,
) -> Result<bool, ContractError> {
    let resp: HasPeerResponse =
        querier.query_wasm_smart(endpoint, &EndpointQueryMsg::HasPeer { network })?;
    Ok(resp.has_peer)
}

/// Send tokens to a destination network, optionally composing a payload.
///
/// The per-mode debit runs first, then custody lock (where a custody bridge
/// is involved) and the endpoint dispatch as submessages; any failure in
/// either rolls the whole send back.
#[allow(clippy::too_many_arguments)]
pub fn execute_send_with_compose(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    dest_network: u32,
    recipient: Binary,
    amount: Uint128,
    min_amount: Uint128,
    refund_address: String,
    compose: Option<Binary>,
) -> Result<Response, ContractError> {
    take_guard(deps.storage)?;
    let config = CONFIG.load(deps.storage)?;

    if !AUTHORIZED_CHAINS
        .may_load(deps.storage, dest_network)?
        .unwrap_or(false)
    {
        return Err(ContractError::ChainNotAuthorized {
            chain: dest_network,
        });
    }
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }
    let recipient_wire = parse_wire_address(recipient.as_slice())?;
    if is_zero_address(&recipient_wire) {
        return Err(ContractError::InvalidAddress {
            reason: "null recipient".to_string(),
        });
    }
    if refund_address.is_empty() {
        return Err(ContractError::InvalidAddress {
            reason: "refund address must not be empty".to_string(),
        });
    }
    deps.api.addr_validate(&refund_address)?;
    if amount < min_amount {
        return Err(ContractError::SlippageExceeded { amount, min_amount });
    }
    if !has_peer(&deps.querier, &config.endpoint, dest_network)? {
        return Err(ContractError::MessageDispatchFailed);
    }

    let origin_address = parse_wire_address(config.origin_address.as_slice())?;
    let compose_section = compose.map(|inner| {
        ComposePayload {
            origin_network: config.origin_network,
            origin_address,
            amount,
            sender: wire_address(&info.sender),
            inner: inner.to_vec(),
        }
        .encode()
    });
    let message = GatewayMessage {
        origin: OriginHeader::new(config.origin_network, origin_address),
        beneficiary: recipient_wire,
        amount,
        compose: compose_section,
    }
    .encode();

    let mut resp = Response::new();
    resp = add_debit_leg(deps.branch(), &env, &info, &config, dest_network, &recipient, amount, resp)?;

    // The endpoint dispatch goes last so its reply both checks the receipt
    // and releases the guard.
    resp = resp.add_submessage(SubMsg::reply_on_success(
        WasmMsg::Execute {
            contract_addr: config.endpoint.to_string(),
            msg: to_json_binary(&EndpointExecuteMsg::Send {
                dest_network,
                receiver: Binary::default(),
                message: Binary::from(message),
                options: Binary::default(),
                pay_in_alt_token: false,
            })?,
            funds: vec![],
        },
        REPLY_ENDPOINT_SEND,
    ));

    Ok(resp
        .add_attribute("method", "send_with_compose")
        .add_attribute("dest_network", dest_network.to_string())
        .add_attribute("recipient", to_hex_address(&recipient_wire))
        .add_attribute("amount", amount.to_string())
        .add_attribute("refund_address", refund_address))
}

/// Attach the mode-specific debit and custody messages to the response.
#[allow(clippy::too_many_arguments)]
fn add_debit_leg(
    deps: DepsMut,
    env: &Env,
    info: &MessageInfo,
    config: &Config,
    dest_network: u32,
    recipient: &Binary,
    amount: Uint128,
    resp: Response,
) -> Result<Response, ContractError> {
    let lock = |token: String| -> Result<SubMsg, ContractError> {
        let custody = config
            .custody_bridge
            .as_ref()
            .ok_or(ContractError::UnsupportedForMode {
                operation: "custody lock".to_string(),
            })?;
        Ok(SubMsg::reply_always(
            WasmMsg::Execute {
                contract_addr: custody.to_string(),
                msg: to_json_binary(&CustodyExecuteMsg::Lock {
                    dest_network,
                    recipient: recipient.clone(),
                    amount,
                    token,
                    force_sync: false,
                    permit_data: Binary::default(),
                })?,
                funds: vec![],
            },
            REPLY_CUSTODY_LOCK,
        ))
    };

    match &config.mode {
        TokenMode::Native { .. } => {
            // Park the sender's balance under this contract and let the
            // custody bridge pull it against an allowance.
            let custody = config
                .custody_bridge
                .as_ref()
                .ok_or(ContractError::UnsupportedForMode {
                    operation: "custody lock".to_string(),
                })?;
            debit(deps.storage, &info.sender, amount)?;
            credit(deps.storage, &env.contract.address, amount)?;
            let allowance = ALLOWANCES
                .may_load(deps.storage, (&env.contract.address, custody))?
                .unwrap_or_default();
            ALLOWANCES.save(
                deps.storage,
                (&env.contract.address, custody),
                &(allowance + amount),
            )?;
            Ok(resp.add_submessage(lock(env.contract.address.to_string())?))
        }
        TokenMode::Adapter { wrapped } => {
            // Pull the wrapped cw20 from the sender, hand the custody
            // bridge an allowance, lock, and reflect the burn on the
            // gateway ledger.
            let custody = config
                .custody_bridge
                .as_ref()
                .ok_or(ContractError::UnsupportedForMode {
                    operation: "custody lock".to_string(),
                })?;
            let pull: CosmosMsg = WasmMsg::Execute {
                contract_addr: wrapped.clone(),
                msg: to_json_binary(&cw20::Cw20ExecuteMsg::TransferFrom {
                    owner: info.sender.to_string(),
                    recipient: env.contract.address.to_string(),
                    amount,
                })?,
                funds: vec![],
            }
            .into();
            let allow: CosmosMsg = WasmMsg::Execute {
                contract_addr: wrapped.clone(),
                msg: to_json_binary(&cw20::Cw20ExecuteMsg::IncreaseAllowance {
                    spender: custody.to_string(),
                    amount,
                    expires: None,
                })?,
                funds: vec![],
            }
            .into();
            let burn: CosmosMsg = WasmMsg::Execute {
                contract_addr: config.gateway.to_string(),
                msg: to_json_binary(&GatewayExecuteMsg::BurnSupply {
                    token: wrapped.clone(),
                    amount,
                })?,
                funds: vec![],
            }
            .into();
            Ok(resp
                .add_message(pull)
                .add_message(allow)
                .add_submessage(lock(wrapped.clone())?)
                .add_message(burn))
        }
        TokenMode::Messaging { .. } => {
            // No custody: the send burns locally, the inbound leg mints.
            debit(deps.storage, &info.sender, amount)?;
            let total = TOTAL.load(deps.storage)?;
            TOTAL.save(deps.storage, &total.saturating_sub(amount))?;
            Ok(resp)
        }
    }
}

// ============================================================================
// Claim
// ============================================================================

/// Claim collateral from the custody bridge.
#[allow(clippy::too_many_arguments)]
pub fn execute_claim(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    proof_local_exit_root: Vec<Binary>,
    proof_rollup_exit_root: Vec<Binary>,
    global_index: Uint128,
    mainnet_exit_root: Binary,
    rollup_exit_root: Binary,
    origin_network: u32,
    origin_token: Binary,
    destination_address: String,
    amount: Uint128,
    metadata: Binary,
) -> Result<Response, ContractError> {
    take_guard(deps.storage)?;
    let config = CONFIG.load(deps.storage)?;
    let custody = config
        .custody_bridge
        .as_ref()
        .ok_or(ContractError::UnsupportedForMode {
            operation: "claim".to_string(),
        })?;

    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }
    if destination_address.is_empty() {
        return Err(ContractError::InvalidAddress {
            reason: "null recipient".to_string(),
        });
    }
    deps.api.addr_validate(&destination_address)?;
    let origin_wire = parse_wire_address(origin_token.as_slice())?;
    if is_zero_address(&origin_wire) {
        return Err(ContractError::InvalidAddress {
            reason: "null origin token".to_string(),
        });
    }

    let claim = SubMsg::reply_always(
        WasmMsg::Execute {
            contract_addr: custody.to_string(),
            msg: to_json_binary(&CustodyExecuteMsg::Claim {
                proof_local_exit_root,
                proof_rollup_exit_root,
                global_index,
                mainnet_exit_root,
                rollup_exit_root,
                origin_network,
                origin_token,
                destination_network: config.local_network,
                destination_address: destination_address.clone(),
                amount,
                metadata,
            })?,
            funds: vec![],
        },
        REPLY_CUSTODY_CLAIM,
    );

    Ok(Response::new()
        .add_submessage(claim)
        .add_attribute("method", "claim")
        .add_attribute("origin_network", origin_network.to_string())
        .add_attribute("recipient", destination_address)
        .add_attribute("amount", amount.to_string()))
}

// ============================================================================
// Replies
// ============================================================================

/// Inspect the endpoint's delivery receipt and release the guard.
pub fn reply_endpoint_send(deps: DepsMut, msg: Reply) -> Result<Response, ContractError> {
    release_guard(deps.storage)?;

    let result = msg
        .result
        .into_result()
        .map_err(|_| ContractError::MessageDispatchFailed)?;
    let receipt: DeliveryReceipt = result
        .data
        .as_ref()
        .map(|d| from_json(d))
        .transpose()?
        .ok_or(ContractError::MessageDispatchFailed)?;
    if !receipt.accepted() {
        return Err(ContractError::MessageDispatchFailed);
    }

    Ok(Response::new()
        .add_attribute("method", "send_receipt")
        .add_attribute("delivery_id", receipt.delivery_id.to_string())
        .add_attribute("sequence", receipt.sequence.to_string()))
}

/// Re-raise custody lock failures as their distinguishable shapes.
pub fn reply_custody_lock(_deps: DepsMut, msg: Reply) -> Result<Response, ContractError> {
    match msg.result.into_result() {
        Ok(_) => Ok(Response::new().add_attribute("method", "custody_locked")),
        Err(err) => match classify_failure(&err) {
            CustodyFailure::Rejected(reason) => Err(ContractError::CustodyRejected { reason }),
            CustodyFailure::Panicked(code) => Err(ContractError::CustodyPanicked { code }),
            CustodyFailure::Opaque => Err(ContractError::CustodyFailed),
        },
    }
}

/// Wrap custody claim failures and release the guard on success.
pub fn reply_custody_claim(deps: DepsMut, msg: Reply) -> Result<Response, ContractError> {
    match msg.result.into_result() {
        Ok(_) => {
            release_guard(deps.storage)?;
            Ok(Response::new().add_attribute("method", "custody_claimed"))
        }
        Err(reason) => Err(ContractError::ClaimFailed { reason }),
    }
}
