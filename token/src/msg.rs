//! Message types for the token representation.
//!
//! The balance-book variants (`Transfer`, `TransferFrom`,
//! `IncreaseAllowance`, `Mint`, `Burn`) and the `Balance`/`Allowance`
//! queries are shaped like their cw20 counterparts, so the custody bridge
//! and the migrator can drive native tokens and plain cw20s with the same
//! messages.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};
use cw20::Expiration;

use common::token::TokenMode;

pub use common::token::TokenInstantiateMsg as InstantiateMsg;

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Cross-Chain
    // ========================================================================
    /// Send tokens to a destination network, optionally composing a user
    /// payload onto the message.
    SendWithCompose {
        dest_network: u32,
        /// Recipient on the destination network (20 bytes, wire form).
        recipient: Binary,
        amount: Uint128,
        /// Slippage floor; the send fails if `amount` falls below it.
        min_amount: Uint128,
        /// Local address refunded if the transfer is rolled back.
        refund_address: String,
        /// Application payload delivered to the recipient, if any.
        compose: Option<Binary>,
    },

    /// Claim collateral from the custody bridge.
    ///
    /// The proof fields are forwarded verbatim; production custody bridges
    /// verify real Merkle proofs.
    Claim {
        proof_local_exit_root: Vec<Binary>,
        proof_rollup_exit_root: Vec<Binary>,
        global_index: Uint128,
        mainnet_exit_root: Binary,
        rollup_exit_root: Binary,
        origin_network: u32,
        /// Origin token address (20 bytes, wire form).
        origin_token: Binary,
        /// Local recipient address.
        destination_address: String,
        amount: Uint128,
        metadata: Binary,
    },

    // ========================================================================
    // Balance Book (cw20-shaped)
    // ========================================================================
    /// Move tokens from the sender to `recipient`.
    Transfer { recipient: String, amount: Uint128 },

    /// Move tokens from `owner` to `recipient` against an allowance.
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },

    /// Grant `spender` an additional spending allowance.
    IncreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },

    /// Mint new tokens to `recipient`. Owner, custody bridge, or an
    /// authorized caller; native and messaging modes only.
    Mint { recipient: String, amount: Uint128 },

    /// Burn tokens from the sender's balance. Owner, custody bridge, or an
    /// authorized caller; native and messaging modes only.
    Burn { amount: Uint128 },

    // ========================================================================
    // Owner Configuration
    // ========================================================================
    /// Toggle a destination network.
    SetAuthorizedChain { chain: u32, authorized: bool },

    /// Toggle mint/burn rights for a caller.
    SetCallerStatus { caller: String, authorized: bool },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns mode, references, and origin metadata.
    #[returns(TokenInfoResponse)]
    TokenInfo {},

    /// Returns an address's balance on the local balance book.
    #[returns(cw20::BalanceResponse)]
    Balance { address: String },

    /// Returns the allowance granted by `owner` to `spender`.
    #[returns(cw20::AllowanceResponse)]
    Allowance { owner: String, spender: String },

    /// Whether sends to `chain` are authorized.
    #[returns(AuthorizedChainResponse)]
    IsAuthorizedChain { chain: u32 },

    /// Whether `caller` holds mint/burn rights.
    #[returns(AuthorizedCallerResponse)]
    IsAuthorizedCaller { caller: String },

    /// Enumerate authorized destination networks.
    #[returns(AuthorizedChainsResponse)]
    AuthorizedChains {
        start_after: Option<u32>,
        limit: Option<u32>,
    },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct TokenInfoResponse {
    pub owner: Addr,
    pub gateway: Addr,
    pub endpoint: Addr,
    pub custody_bridge: Option<Addr>,
    pub local_network: u32,
    pub origin_network: u32,
    pub origin_address: Binary,
    pub mode: TokenMode,
    pub total_supply: Uint128,
}

#[cw_serde]
pub struct AuthorizedChainResponse {
    pub authorized: bool,
}

#[cw_serde]
pub struct AuthorizedCallerResponse {
    pub authorized: bool,
}

#[cw_serde]
pub struct AuthorizedChainsResponse {
    pub chains: Vec<u32>,
}
