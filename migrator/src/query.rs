//! Query message handlers.

use cosmwasm_std::{Deps, Env, StdResult};

use crate::error::ContractError;
use crate::execute::predict_downgrade_address;
use crate::msg::{
    ConfigResponse, DowngradeTarget, MigrationTargetResponse, PredictDowngradeResponse,
};
use crate::state::{CONFIG, DOWNGRADED_MESSAGING, DOWNGRADED_PLAIN, UPGRADED_ADAPTER};

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        gateway: config.gateway,
        endpoint: config.endpoint,
        token_code_id: config.token_code_id,
        plain_code_id: config.plain_code_id,
        local_network: config.local_network,
    })
}

/// Recorded plain downgrade target for a source token.
pub fn query_downgraded_plain(deps: Deps, source_token: String) -> StdResult<MigrationTargetResponse> {
    let source = deps.api.addr_validate(&source_token)?;
    Ok(MigrationTargetResponse {
        address: DOWNGRADED_PLAIN.may_load(deps.storage, &source)?,
    })
}

/// Recorded messaging downgrade target for a source token.
pub fn query_downgraded_messaging(
    deps: Deps,
    source_token: String,
) -> StdResult<MigrationTargetResponse> {
    let source = deps.api.addr_validate(&source_token)?;
    Ok(MigrationTargetResponse {
        address: DOWNGRADED_MESSAGING.may_load(deps.storage, &source)?,
    })
}

/// Recorded adapter for an upgraded source token.
pub fn query_upgraded_adapter(deps: Deps, source_token: String) -> StdResult<MigrationTargetResponse> {
    let source = deps.api.addr_validate(&source_token)?;
    Ok(MigrationTargetResponse {
        address: UPGRADED_ADAPTER.may_load(deps.storage, &source)?,
    })
}

/// Deterministic address a downgrade of `source_token` would deploy to.
pub fn query_predict_downgrade_address(
    deps: Deps,
    env: Env,
    source_token: String,
    target: DowngradeTarget,
) -> Result<PredictDowngradeResponse, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let source = deps.api.addr_validate(&source_token)?;
    let address = predict_downgrade_address(deps, &env, &config, &source, &target)?;
    Ok(PredictDowngradeResponse { address })
}
