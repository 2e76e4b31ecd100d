//! Error types for the token representation.

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

    #[error("Unauthorized: caller may not mint or burn")]
    UnauthorizedCaller,

    #[error("Unauthorized: only the custody bridge may perform this action")]
    NotCustodyBridge,

    // ========================================================================
    // Input Validation Errors
    // ========================================================================

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    #[error("Amount must be greater than zero")]
    ZeroAmount,

    #[error("Destination chain {chain} is not authorized")]
    ChainNotAuthorized { chain: u32 },

    #[error("Slippage exceeded: amount {amount} is below minimum {min_amount}")]
    SlippageExceeded { amount: Uint128, min_amount: Uint128 },

    #[error("Operation {operation} is not supported in this token mode")]
    UnsupportedForMode { operation: String },

    // ========================================================================
    // Balance Book Errors
    // ========================================================================

    #[error("Insufficient balance: needed {needed}, available {available}")]
    InsufficientBalance { needed: Uint128, available: Uint128 },

    #[error("Insufficient allowance: needed {needed}, available {available}")]
    InsufficientAllowance { needed: Uint128, available: Uint128 },

    // ========================================================================
    // External Dependency Errors
    // ========================================================================

    #[error("Message dispatch failed: the endpoint returned no delivery id")]
    MessageDispatchFailed,

    #[error("Custody rejected the transfer: {reason}")]
    CustodyRejected { reason: String },

    #[error("Custody panicked: {code}")]
    CustodyPanicked { code: String },

    #[error("Custody failed with no decodable reason")]
    CustodyFailed,

    #[error("Claim failed: {reason}")]
    ClaimFailed { reason: String },

    // ========================================================================
    // Guards & Replies
    // ========================================================================

    #[error("Reentrant call blocked")]
    ReentrancyGuard,

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },
}
