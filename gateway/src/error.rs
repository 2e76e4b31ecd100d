//! Error types for the gateway ledger.

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    #[error("Unauthorized: {caller} is not an authorized representation or supply manager")]
    UnauthorizedRepresentation { caller: String },

    #[error("Unauthorized: only the messaging endpoint may deliver messages")]
    NotEndpoint,

    #[error("Unauthorized: only owner or migrator may deploy adapters")]
    NotMigrator,

    // ========================================================================
    // Input Validation Errors
    // ========================================================================

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    #[error("Amount must be greater than zero")]
    ZeroAmount,

    #[error("Token origin not registered: {token}")]
    OriginNotRegistered { token: String },

    #[error("Malformed message payload: {reason}")]
    MalformedPayload { reason: String },

    // ========================================================================
    // Supply Invariant Errors
    // ========================================================================

    #[error("Max supply exceeded for {token}: minting {requested} onto {total_supply} breaches cap {max_supply}")]
    MaxSupplyExceeded {
        token: String,
        requested: Uint128,
        total_supply: Uint128,
        max_supply: Uint128,
    },

    #[error("Chain supply limit exceeded on chain {chain}: minting {requested} onto {current} breaches limit {limit}")]
    ChainSupplyLimitExceeded {
        chain: u32,
        requested: Uint128,
        current: Uint128,
        limit: Uint128,
    },

    #[error("Insufficient supply: requested {requested}, available {available}")]
    InsufficientSupply {
        requested: Uint128,
        available: Uint128,
    },

    #[error("Cannot set max supply {requested} below committed supply {committed}")]
    MaxSupplyBelowCommitted {
        requested: Uint128,
        committed: Uint128,
    },

    #[error("Cannot set chain {chain} limit {requested} below current supply {current}")]
    ChainLimitBelowCurrent {
        chain: u32,
        requested: Uint128,
        current: Uint128,
    },

    // ========================================================================
    // Inbound Message Errors
    // ========================================================================

    #[error("Unknown inbound token {origin_address} from network {origin_network}: no local wrapped form exists")]
    UnknownInboundToken {
        origin_network: u32,
        origin_address: String,
    },

    #[error("Representation {representation} is not authorized")]
    RepresentationNotAuthorized { representation: String },

    // ========================================================================
    // Deterministic Deployment Errors
    // ========================================================================

    #[error("Deployment address mismatch: predicted {predicted}, got {actual}")]
    DeploymentAddressMismatch { predicted: String, actual: String },

    #[error("No deployment pending for reply")]
    NoPendingDeployment,

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },
}
