//! Messaging endpoint interface.
//!
//! The endpoint is an external collaborator: it sends packets to peer
//! networks and delivers inbound packets by executing the gateway's
//! `OnMessage`. The transport guarantees at-most-one delivery per delivery
//! id; the contracts rely on that but do not enforce it.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Uint128};

/// Execute interface consumed on the endpoint contract.
#[cw_serde]
pub enum EndpointExecuteMsg {
    /// Dispatch a message to a peer network.
    ///
    /// The endpoint answers with a [`DeliveryReceipt`] in the response data.
    /// An empty `receiver` routes to the endpoint's configured peer for the
    /// destination network.
    Send {
        dest_network: u32,
        /// Receiver id on the destination network (20 bytes, may be empty).
        receiver: Binary,
        /// Opaque message payload.
        message: Binary,
        /// Transport-specific options, passed through untouched.
        options: Binary,
        /// Pay the transport fee in the alternative fee token.
        pay_in_alt_token: bool,
    },
}

/// Query interface consumed on the endpoint contract.
#[cw_serde]
#[derive(QueryResponses)]
pub enum EndpointQueryMsg {
    /// Whether the endpoint has a configured peer on `network`.
    #[returns(HasPeerResponse)]
    HasPeer { network: u32 },
}

#[cw_serde]
pub struct HasPeerResponse {
    pub has_peer: bool,
}

/// Receipt returned in response data by [`EndpointExecuteMsg::Send`].
///
/// A receipt with an empty `delivery_id` means the transport failed to
/// accept the packet; callers must treat that as a dispatch failure.
#[cw_serde]
pub struct DeliveryReceipt {
    /// Unique 32-byte delivery identifier, empty on dispatch failure.
    pub delivery_id: Binary,
    /// Monotonic per-endpoint sequence number.
    pub sequence: u64,
    /// Fee charged by the transport.
    pub fee: Uint128,
}

impl DeliveryReceipt {
    /// Whether the transport accepted the packet.
    pub fn accepted(&self) -> bool {
        !self.delivery_id.is_empty() && self.delivery_id.iter().any(|b| *b != 0)
    }
}

/// Provenance of an inbound message, supplied by the endpoint on delivery.
#[cw_serde]
pub struct MessageOrigin {
    /// Network the message was sent from.
    pub network: u32,
    /// Wire identity of the sending contract (20 bytes).
    pub sender: Binary,
    /// Transport sequence number of the packet.
    pub sequence: u64,
}
