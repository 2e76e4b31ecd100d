//! Error types for the migrator.

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    // ========================================================================
    // Migration Preconditions
    // ========================================================================

    #[error("Token {token} is already an authorized representation; upgrade is not applicable")]
    AlreadyRepresentation { token: String },

    #[error("Token {token} is not an authorized representation; downgrade is not applicable")]
    NotRepresentation { token: String },

    #[error("Token {token} has no registered origin")]
    OriginNotRegistered { token: String },

    #[error("Nothing to migrate: the caller holds no balance")]
    NothingToMigrate,

    #[error("Insufficient allowance toward the migrator: needed {needed}, available {available}")]
    InsufficientAllowance { needed: Uint128, available: Uint128 },

    #[error("Insufficient balance: needed {needed}, available {available}")]
    InsufficientBalance { needed: Uint128, available: Uint128 },

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
