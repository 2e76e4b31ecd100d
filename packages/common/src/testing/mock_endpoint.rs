//! Mock messaging endpoint.
//!
//! Accepts [`EndpointExecuteMsg::Send`]-shaped messages, records each
//! packet, and answers with a [`DeliveryReceipt`] in the response data.
//! A `Deliver` knob lets tests relay a recorded packet into a gateway with
//! the endpoint as the caller, standing in for the transport.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{
    to_json_binary, Binary, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Response,
    StdError, StdResult, Uint128, WasmMsg,
};
use cw_storage_plus::{Item, Map};

use crate::address::keccak256;
use crate::endpoint::{DeliveryReceipt, HasPeerResponse, MessageOrigin};
use crate::gateway::GatewayExecuteMsg;

// ============================================================================
// State
// ============================================================================

/// Networks this endpoint has a peer on.
pub const PEERS: Map<u32, bool> = Map::new("peers");

/// Monotonic outbound sequence counter.
pub const SEQUENCE: Item<u64> = Item::new("sequence");

/// When set, `Send` answers with an empty delivery id (dispatch failure).
pub const EMPTY_DELIVERY_ID: Item<bool> = Item::new("empty_delivery_id");

/// Recorded outbound packets, keyed by sequence.
pub const SENT: Map<u64, SentPacket> = Map::new("sent");

#[cw_serde]
pub struct SentPacket {
    pub dest_network: u32,
    pub receiver: Binary,
    pub message: Binary,
    pub sender: String,
}

// ============================================================================
// Messages
// ============================================================================

#[cw_serde]
pub struct InstantiateMsg {
    pub peers: Vec<u32>,
    /// Simulate transport dispatch failure via an empty delivery id.
    pub empty_delivery_id: bool,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Wire-compatible with [`EndpointExecuteMsg::Send`].
    Send {
        dest_network: u32,
        receiver: Binary,
        message: Binary,
        options: Binary,
        pay_in_alt_token: bool,
    },
    /// Test-only: relay a packet into a gateway as this endpoint.
    Deliver {
        gateway: String,
        origin: MessageOrigin,
        delivery_id: Binary,
        message: Binary,
    },
    /// Test-only: toggle dispatch failure simulation.
    SetEmptyDeliveryId { value: bool },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Wire-compatible with [`crate::endpoint::EndpointQueryMsg::HasPeer`].
    #[returns(HasPeerResponse)]
    HasPeer { network: u32 },
    #[returns(SentPacket)]
    Sent { sequence: u64 },
    #[returns(u64)]
    SentCount {},
}

// ============================================================================
// Entry Points
// ============================================================================


pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> StdResult<Response> {
    for network in msg.peers {
        PEERS.save(deps.storage, network, &true)?;
    }
    SEQUENCE.save(deps.storage, &0u64)?;
    EMPTY_DELIVERY_ID.save(deps.storage, &msg.empty_delivery_id)?;
    Ok(Response::new().add_attribute("method", "instantiate"))
}


pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> StdResult<Response> {
    match msg {
        ExecuteMsg::Send {
            dest_network,
            receiver,
            message,
            options: _,
            pay_in_alt_token: _,
        } => {
            if !PEERS.may_load(deps.storage, dest_network)?.unwrap_or(false) {
                return Err(StdError::generic_err(format!(
                    "no peer on network {dest_network}"
                )));
            }

            let sequence = SEQUENCE.load(deps.storage)? + 1;
            SEQUENCE.save(deps.storage, &sequence)?;

            let delivery_id = if EMPTY_DELIVERY_ID.load(deps.storage)? {
                Binary::default()
            } else {
                let mut preimage = Vec::with_capacity(12 + message.len());
                preimage.extend_from_slice(&dest_network.to_be_bytes());
                preimage.extend_from_slice(&sequence.to_be_bytes());
                preimage.extend_from_slice(message.as_slice());
                Binary::from(keccak256(&preimage).to_vec())
            };

            SENT.save(
                deps.storage,
                sequence,
                &SentPacket {
                    dest_network,
                    receiver,
                    message,
                    sender: info.sender.to_string(),
                },
            )?;

            let receipt = DeliveryReceipt {
                delivery_id,
                sequence,
                fee: Uint128::zero(),
            };
            Ok(Response::new()
                .set_data(to_json_binary(&receipt)?)
                .add_attribute("method", "send")
                .add_attribute("sequence", sequence.to_string()))
        }
        ExecuteMsg::Deliver {
            gateway,
            origin,
            delivery_id,
            message,
        } => {
            let deliver: CosmosMsg = WasmMsg::Execute {
                contract_addr: gateway,
                msg: to_json_binary(&GatewayExecuteMsg::OnMessage {
                    origin,
                    delivery_id,
                    message,
                })?,
                funds: vec![],
            }
            .into();
            Ok(Response::new()
                .add_message(deliver)
                .add_attribute("method", "deliver"))
        }
        ExecuteMsg::SetEmptyDeliveryId { value } => {
            EMPTY_DELIVERY_ID.save(deps.storage, &value)?;
            Ok(Response::new().add_attribute("method", "set_empty_delivery_id"))
        }
    }
}


pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::HasPeer { network } => to_json_binary(&HasPeerResponse {
            has_peer: PEERS.may_load(deps.storage, network)?.unwrap_or(false),
        }),
        QueryMsg::Sent { sequence } => to_json_binary(&SENT.load(deps.storage, sequence)?),
        QueryMsg::SentCount {} => to_json_binary(&SEQUENCE.load(deps.storage)?),
    }
}
