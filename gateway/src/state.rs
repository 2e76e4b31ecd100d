//! State definitions for the gateway ledger.
//!
//! The gateway is a per-network singleton. It owns the token origin
//! registry, the supply ledger (global and per-chain counters with their
//! ceilings), the representation/manager authorization sets, and the
//! registry of lazily deployed adapters.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration, fixed at instantiation except where noted.
#[cw_serde]
pub struct Config {
    /// Owner address for privileged operations.
    pub owner: Addr,
    /// Custody bridge holding the real collateral.
    pub custody_bridge: Addr,
    /// Messaging endpoint allowed to deliver inbound messages.
    pub endpoint: Addr,
    /// Network id of the chain this gateway lives on.
    pub local_network: u32,
    /// Code id of the token contract used for lazy adapter deployment.
    pub adapter_code_id: u64,
    /// Migrator contract allowed to drive adapter deployment.
    pub migrator: Option<Addr>,
}

/// A token's registered origin. Written at most once (first-writer-wins).
#[cw_serde]
pub struct TokenOriginInfo {
    /// Network the token was first registered on.
    pub origin_network: u32,
    /// Token address on the origin network (20 bytes, wire form).
    pub origin_address: Binary,
    /// Always true once stored; exposed instead of a sentinel value.
    pub registered: bool,
}

/// Resolution of a wire-level token origin to local contracts.
#[cw_serde]
pub struct OriginBinding {
    /// Local ledger key for the token (native contract or wrapped cw20).
    pub token: Addr,
    /// Representation contract authorized to move supply for the token.
    pub representation: Addr,
}

/// Context carried across the adapter deployment submessage.
#[cw_serde]
pub struct PendingDeployment {
    /// Address the deployment must land at.
    pub predicted: Addr,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info.
pub const CONTRACT_NAME: &str = "crates.io:omnigate-gateway";

/// Contract version for cw2 migration info.
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reply id for adapter deployment verification.
pub const REPLY_DEPLOY_ADAPTER: u64 = 1;

// ============================================================================
// Storage
// ============================================================================

/// Primary config storage.
pub const CONFIG: Item<Config> = Item::new("config");

/// Token origin registry. Key: local token identifier.
pub const TOKEN_ORIGINS: Map<&Addr, TokenOriginInfo> = Map::new("token_origins");

/// Reverse index from wire origin to local binding.
/// Key: (origin network, origin address bytes).
pub const ORIGIN_INDEX: Map<(u32, &[u8]), OriginBinding> = Map::new("origin_index");

/// Global supply per token.
pub const TOTAL_SUPPLY: Map<&Addr, Uint128> = Map::new("total_supply");

/// Global supply ceiling per token (0 = unlimited).
pub const MAX_SUPPLY: Map<&Addr, Uint128> = Map::new("max_supply");

/// Supply resident on a chain. Key: (token, chain id).
pub const CURRENT_SUPPLY: Map<(&Addr, u32), Uint128> = Map::new("current_supply");

/// Inbound supply ceiling per chain (0 = unlimited). Key: (token, chain id).
pub const CHAIN_SUPPLY_LIMIT: Map<(&Addr, u32), Uint128> = Map::new("chain_supply_limit");

/// Cumulative exited (burned) supply per chain. Key: (token, chain id).
pub const EXITS: Map<(&Addr, u32), Uint128> = Map::new("exits");

/// Representation contracts allowed to mint/burn ledger supply.
pub const AUTHORIZED_REPRESENTATIONS: Map<&Addr, bool> = Map::new("authorized_representations");

/// Delegated supply operators. Key: (token, manager).
pub const SUPPLY_MANAGERS: Map<(&Addr, &Addr), bool> = Map::new("supply_managers");

/// In-flight adapter deployment awaiting reply verification.
pub const PENDING_DEPLOYMENT: Item<PendingDeployment> = Item::new("pending_deployment");
