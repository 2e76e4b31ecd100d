//! Gateway ledger interface subset.
//!
//! The variants here mirror the gateway contract's own message enums
//! byte-for-byte on the wire; they exist so the token and migrator crates
//! can drive the ledger without depending on the gateway crate itself.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

use crate::endpoint::MessageOrigin;

/// Supply operations the token representations and migrator invoke, plus
/// the delivery entry point the endpoint pushes inbound messages through.
#[cw_serde]
pub enum GatewayExecuteMsg {
    /// Inbound message delivery, invoked by the messaging endpoint.
    OnMessage {
        origin: MessageOrigin,
        delivery_id: Binary,
        message: Binary,
    },
    /// Record newly minted supply for `token` on the local network.
    MintSupply { token: String, amount: Uint128 },
    /// Record burned/exited supply for `token` on the local network.
    BurnSupply { token: String, amount: Uint128 },
    /// Register a token's origin (first-writer-wins).
    RegisterTokenOrigin {
        token: String,
        origin_network: u32,
        /// Origin token address (20 bytes, wire form).
        origin_address: Binary,
    },
    /// Deploy (or reuse) a deterministic adapter for `token`.
    DeployAdapter {
        token: String,
        origin_network: u32,
        origin_address: Binary,
        initial_chains: Vec<u32>,
    },
}

/// Ledger lookups the migrator and tokens rely on.
#[cw_serde]
#[derive(QueryResponses)]
pub enum GatewayQueryMsg {
    /// Whether an address is an authorized representation.
    #[returns(AuthorizedRepresentationResponse)]
    IsAuthorizedRepresentation { address: String },
    /// Deterministic adapter address for a token origin.
    #[returns(PredictAdapterAddressResponse)]
    PredictAdapterAddress {
        origin_network: u32,
        origin_address: Binary,
    },
    /// Registered origin of a local token.
    #[returns(TokenOriginResponse)]
    TokenOrigin { token: String },
}

#[cw_serde]
pub struct AuthorizedRepresentationResponse {
    pub authorized: bool,
}

#[cw_serde]
pub struct PredictAdapterAddressResponse {
    pub address: Addr,
}

#[cw_serde]
pub struct TokenOriginResponse {
    pub origin_network: u32,
    pub origin_address: Binary,
    pub registered: bool,
}
