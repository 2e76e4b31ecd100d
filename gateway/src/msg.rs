//! Message types for the gateway ledger.
//!
//! The `MintSupply`/`BurnSupply`/`RegisterTokenOrigin`/`DeployAdapter` and
//! `OnMessage` variants are wire-compatible with the interface subset in
//! `common::gateway`, which is what token representations, the migrator,
//! and the endpoint actually construct.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

use common::endpoint::MessageOrigin;
use common::gateway::{
    AuthorizedRepresentationResponse, PredictAdapterAddressResponse, TokenOriginResponse,
};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    /// Owner address for privileged operations.
    pub owner: String,
    /// Custody bridge address; must be a valid, non-empty address.
    pub custody_bridge: String,
    /// Messaging endpoint address allowed to deliver inbound messages.
    pub endpoint: String,
    /// Network id of the chain this gateway lives on.
    pub local_network: u32,
    /// Code id of the token contract, used for lazy adapter deployment.
    pub adapter_code_id: u64,
    /// Migrator contract allowed to drive adapter deployment.
    pub migrator: Option<String>,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Inbound Message Delivery
    // ========================================================================
    /// Process an inbound cross-chain message.
    ///
    /// Authorization: configured messaging endpoint only
    OnMessage {
        origin: MessageOrigin,
        delivery_id: Binary,
        message: Binary,
    },

    // ========================================================================
    // Supply Ledger
    // ========================================================================
    /// Register a token's origin. First-writer-wins: re-registration is an
    /// idempotent no-op regardless of the arguments.
    ///
    /// Authorization: owner or an authorized representation
    RegisterTokenOrigin {
        token: String,
        origin_network: u32,
        /// Origin token address (20 bytes, wire form).
        origin_address: Binary,
    },

    /// Record newly minted supply for `token` on the local network.
    ///
    /// Authorization: authorized representation or supply manager for `token`
    MintSupply { token: String, amount: Uint128 },

    /// Record burned/exited supply for `token` on the local network.
    ///
    /// Authorization: authorized representation or supply manager for `token`
    BurnSupply { token: String, amount: Uint128 },

    // ========================================================================
    // Factory
    // ========================================================================
    /// Deploy (or reuse) the deterministic adapter for a token origin.
    ///
    /// Authorization: owner or configured migrator
    DeployAdapter {
        /// Local token the adapter wraps.
        token: String,
        origin_network: u32,
        origin_address: Binary,
        /// Destination networks authorized on the new adapter.
        initial_chains: Vec<u32>,
    },

    // ========================================================================
    // Owner Configuration
    // ========================================================================
    /// Toggle mint/burn authorization for a representation contract.
    ///
    /// Authorization: owner only
    SetAuthorizedRepresentation {
        representation: String,
        authorized: bool,
    },

    /// Set a token's global supply ceiling (0 = unlimited).
    ///
    /// Authorization: owner only
    SetTokenMaxSupply { token: String, max_supply: Uint128 },

    /// Set a token's inbound supply ceiling for a chain (0 = unlimited).
    ///
    /// Authorization: owner only
    SetChainSupplyLimit {
        token: String,
        chain: u32,
        limit: Uint128,
    },

    /// Grant delegated supply-operator rights for a token.
    ///
    /// Authorization: owner only
    AddTokenSupplyManager { token: String, manager: String },

    /// Revoke delegated supply-operator rights for a token.
    ///
    /// Authorization: owner only
    RemoveTokenSupplyManager { token: String, manager: String },

    /// Point the gateway at a migrator contract.
    ///
    /// Authorization: owner only
    SetMigrator { migrator: String },

    /// Change the token code id used for adapter deployment.
    ///
    /// Authorization: owner only
    SetAdapterCodeId { code_id: u64 },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns contract configuration.
    #[returns(ConfigResponse)]
    Config {},

    /// Returns a token's registered origin.
    #[returns(TokenOriginResponse)]
    TokenOrigin { token: String },

    /// Returns a token's global supply and ceiling.
    #[returns(SupplyInfoResponse)]
    SupplyInfo { token: String },

    /// Returns a token's per-chain counters.
    #[returns(ChainSupplyResponse)]
    ChainSupply { token: String, chain: u32 },

    /// Whether an address is an authorized representation.
    #[returns(AuthorizedRepresentationResponse)]
    IsAuthorizedRepresentation { address: String },

    /// Whether an address is a supply manager for a token.
    #[returns(SupplyManagerResponse)]
    IsSupplyManager { token: String, manager: String },

    /// Local adapter binding for a wire-level token origin, if any.
    #[returns(AdapterByOriginResponse)]
    AdapterByOrigin {
        origin_network: u32,
        origin_address: Binary,
    },

    /// Deterministic adapter address for a token origin.
    #[returns(PredictAdapterAddressResponse)]
    PredictAdapterAddress {
        origin_network: u32,
        origin_address: Binary,
    },

    /// Enumerate authorized representations.
    #[returns(RepresentationsResponse)]
    Representations {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub custody_bridge: Addr,
    pub endpoint: Addr,
    pub local_network: u32,
    pub adapter_code_id: u64,
    pub migrator: Option<Addr>,
}

#[cw_serde]
pub struct SupplyInfoResponse {
    pub total_supply: Uint128,
    /// 0 = unlimited.
    pub max_supply: Uint128,
}

#[cw_serde]
pub struct ChainSupplyResponse {
    pub current_supply: Uint128,
    /// 0 = unlimited.
    pub limit: Uint128,
    pub exits: Uint128,
}

#[cw_serde]
pub struct SupplyManagerResponse {
    pub authorized: bool,
}

#[cw_serde]
pub struct AdapterByOriginResponse {
    pub token: Option<Addr>,
    pub representation: Option<Addr>,
}

#[cw_serde]
pub struct RepresentationEntry {
    pub address: Addr,
    pub authorized: bool,
}

#[cw_serde]
pub struct RepresentationsResponse {
    pub representations: Vec<RepresentationEntry>,
}
