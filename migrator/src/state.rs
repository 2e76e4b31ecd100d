//! State definitions for the migrator.
//!
//! The migrator owns the downgrade registries: each source token maps to at
//! most one downgraded plain cw20, one downgraded messaging token, and one
//! upgraded adapter. Targets are deployed with `Instantiate2`, so their
//! addresses are knowable before deployment and stable across retries.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    /// Owner address for privileged operations.
    pub owner: Addr,
    /// Gateway ledger consulted for representation status and origins.
    pub gateway: Addr,
    /// Messaging endpoint wired into downgraded messaging tokens.
    pub endpoint: Addr,
    /// Code id of the token contract (messaging downgrades).
    pub token_code_id: u64,
    /// Code id of the plain cw20 (plain downgrades).
    pub plain_code_id: u64,
    /// Network id of the chain this migrator lives on.
    pub local_network: u32,
}

/// Context carried across a downgrade deployment submessage.
#[cw_serde]
pub struct PendingDeployment {
    /// Address the deployment must land at.
    pub predicted: Addr,
}

/// Contract name for cw2 migration info.
pub const CONTRACT_NAME: &str = "crates.io:omnigate-migrator";

/// Contract version for cw2 migration info.
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reply id for downgrade deployment verification.
pub const REPLY_DEPLOY_TARGET: u64 = 1;

/// Primary config storage.
pub const CONFIG: Item<Config> = Item::new("config");

/// Downgraded plain cw20 per source token. Set at most once.
pub const DOWNGRADED_PLAIN: Map<&Addr, Addr> = Map::new("downgraded_plain");

/// Downgraded messaging token per source token. Set at most once.
pub const DOWNGRADED_MESSAGING: Map<&Addr, Addr> = Map::new("downgraded_messaging");

/// Upgraded adapter per source token. Set at most once.
pub const UPGRADED_ADAPTER: Map<&Addr, Addr> = Map::new("upgraded_adapter");

/// In-flight downgrade deployment awaiting reply verification.
pub const PENDING_DEPLOYMENT: Item<PendingDeployment> = Item::new("pending_deployment");
