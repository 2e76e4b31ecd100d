//! Token representation instantiation interface.
//!
//! Shared here because the gateway factory and the migrator both deploy
//! token contracts deterministically and must construct this message.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Binary;

/// The three behavioral modes of a token representation.
#[cw_serde]
pub enum TokenMode {
    /// Mints/burns its own balance book and reports into the gateway ledger.
    Native {
        name: String,
        symbol: String,
        decimals: u8,
    },
    /// Wraps a pre-existing cw20: moves balances by custody transfer, never
    /// mints, and reports burns into the gateway ledger.
    Adapter { wrapped: String },
    /// Downgraded messaging-only token: own balance book, no custody bridge
    /// and no gateway reporting.
    Messaging {
        name: String,
        symbol: String,
        decimals: u8,
    },
}

/// Instantiate message of the token representation contract.
#[cw_serde]
pub struct TokenInstantiateMsg {
    pub owner: String,
    /// Gateway ledger this representation reports into. Must be non-empty.
    pub gateway: String,
    /// Messaging endpoint for cross-chain sends.
    pub endpoint: String,
    /// Custody bridge holding collateral; absent for messaging-only tokens.
    pub custody_bridge: Option<String>,
    /// Network id of the chain this contract lives on.
    pub local_network: u32,
    /// Origin network of the represented token.
    pub origin_network: u32,
    /// Origin token address (20 bytes, wire form).
    pub origin_address: Binary,
    pub mode: TokenMode,
    /// Destination networks this representation may send to initially.
    pub authorized_chains: Vec<u32>,
}
