//! Message types for the migrator.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

// ============================================================================
// Instantiate
// ============================================================================

#[cw_serde]
pub struct InstantiateMsg {
    /// Owner address for privileged operations.
    pub owner: String,
    /// Gateway ledger consulted for representation status and origins.
    pub gateway: String,
    /// Messaging endpoint wired into downgraded messaging tokens.
    pub endpoint: String,
    /// Code id of the token contract (messaging downgrades).
    pub token_code_id: u64,
    /// Code id of the plain cw20 (plain downgrades).
    pub plain_code_id: u64,
    /// Network id of the chain this migrator lives on.
    pub local_network: u32,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// What a downgrade turns the source token into.
#[cw_serde]
pub enum DowngradeTarget {
    /// A plain cw20 with the migrator as minter.
    Plain,
    /// A messaging-only token with the migrator as owner.
    Messaging,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Move a caller's holdings of a plain token into its deterministic
    /// adapter, deploying the adapter through the gateway if needed.
    ///
    /// Fails if `source_token` is already an authorized representation.
    UpgradeToAdapter {
        source_token: String,
        /// Destination networks authorized on a newly deployed adapter.
        initial_chains: Vec<u32>,
        /// Defaults to the caller's full balance.
        amount: Option<Uint128>,
    },

    /// Burn a caller's holdings of a bridged representation and mint the
    /// same amount on a deterministic ledger-free target.
    ///
    /// Fails if `source_token` is not an authorized representation.
    DowngradeToken {
        source_token: String,
        target: DowngradeTarget,
        /// Defaults to the caller's full balance.
        amount: Option<Uint128>,
    },
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

    /// Recorded plain downgrade target for a source token.
    #[returns(MigrationTargetResponse)]
    DowngradedPlain { source_token: String },

    /// Recorded messaging downgrade target for a source token.
    #[returns(MigrationTargetResponse)]
    DowngradedMessaging { source_token: String },

    /// Recorded adapter for an upgraded source token.
    #[returns(MigrationTargetResponse)]
    UpgradedAdapter { source_token: String },

    /// Deterministic address a downgrade of `source_token` would deploy to.
    #[returns(PredictDowngradeResponse)]
    PredictDowngradeAddress {
        source_token: String,
        target: DowngradeTarget,
    },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub gateway: Addr,
    pub endpoint: Addr,
    pub token_code_id: u64,
    pub plain_code_id: u64,
    pub local_network: u32,
}

#[cw_serde]
pub struct MigrationTargetResponse {
    pub address: Option<Addr>,
}

#[cw_serde]
pub struct PredictDowngradeResponse {
    pub address: Addr,
}
