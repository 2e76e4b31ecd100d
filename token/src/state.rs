//! State definitions for the token representation.
//!
//! One contract serves three behavioral modes (native, adapter, messaging);
//! the mode is fixed at instantiation. Native and messaging tokens keep
//! their own balance book here; adapters delegate balances to the wrapped
//! cw20 and keep only authorization state.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Uint128};
use cw_storage_plus::{Item, Map};

use common::token::TokenMode;

// ============================================================================
// Core Configuration
// ============================================================================

#[cw_serde]
pub struct Config {
    /// Owner address for privileged operations.
    pub owner: Addr,
    /// Gateway ledger this representation reports into.
    pub gateway: Addr,
    /// Messaging endpoint for cross-chain sends.
    pub endpoint: Addr,
    /// Custody bridge holding collateral; absent for messaging-only tokens.
    pub custody_bridge: Option<Addr>,
    /// Network id of the chain this contract lives on.
    pub local_network: u32,
    /// Origin network of the represented token.
    pub origin_network: u32,
    /// Origin token address (20 bytes, wire form).
    pub origin_address: Binary,
    /// Behavioral mode, fixed at instantiation.
    pub mode: TokenMode,
}

impl Config {
    /// The wrapped cw20 for adapters, `None` otherwise.
    pub fn wrapped(&self) -> Option<&str> {
        match &self.mode {
            TokenMode::Adapter { wrapped } => Some(wrapped),
            _ => None,
        }
    }

    /// Whether this mode keeps its own balance book.
    pub fn has_balance_book(&self) -> bool {
        !matches!(self.mode, TokenMode::Adapter { .. })
    }

    /// Whether supply changes are reflected into the gateway ledger.
    pub fn reports_to_gateway(&self) -> bool {
        !matches!(self.mode, TokenMode::Messaging { .. })
    }
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info.
pub const CONTRACT_NAME: &str = "crates.io:omnigate-token";

/// Contract version for cw2 migration info.
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reply id for the endpoint send receipt.
pub const REPLY_ENDPOINT_SEND: u64 = 1;

/// Reply id for the custody lock submessage.
pub const REPLY_CUSTODY_LOCK: u64 = 2;

/// Reply id for the custody claim submessage.
pub const REPLY_CUSTODY_CLAIM: u64 = 3;

// ============================================================================
// Storage
// ============================================================================

/// Primary config storage.
pub const CONFIG: Item<Config> = Item::new("config");

/// Balance book (native and messaging modes).
pub const BALANCES: Map<&Addr, Uint128> = Map::new("balances");

/// Spending allowances. Key: (owner, spender).
pub const ALLOWANCES: Map<(&Addr, &Addr), Uint128> = Map::new("allowances");

/// Total supply of the local balance book.
pub const TOTAL: Item<Uint128> = Item::new("total");

/// Destination networks this token may send to.
pub const AUTHORIZED_CHAINS: Map<u32, bool> = Map::new("authorized_chains");

/// Callers granted mint/burn rights besides the owner and custody bridge.
pub const AUTHORIZED_CALLERS: Map<&Addr, bool> = Map::new("authorized_callers");

/// Re-entrancy lock, held across custody and endpoint submessages.
pub const GUARD: Item<bool> = Item::new("guard");
