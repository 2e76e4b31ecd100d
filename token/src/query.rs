//! Query message handlers.

use cosmwasm_std::{Deps, Order, StdResult, Uint128};
use cw20::{AllowanceResponse, BalanceResponse, Expiration};
use cw_storage_plus::Bound;

use crate::msg::{
    AuthorizedCallerResponse, AuthorizedChainResponse, AuthorizedChainsResponse,
    TokenInfoResponse,
};
use crate::state::{
    ALLOWANCES, AUTHORIZED_CALLERS, AUTHORIZED_CHAINS, BALANCES, CONFIG, TOTAL,
};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

/// Query mode, references, and origin metadata.
pub fn query_token_info(deps: Deps) -> StdResult<TokenInfoResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(TokenInfoResponse {
        owner: config.owner,
        gateway: config.gateway,
        endpoint: config.endpoint,
        custody_bridge: config.custody_bridge,
        local_network: config.local_network,
        origin_network: config.origin_network,
        origin_address: config.origin_address,
        mode: config.mode,
        total_supply: TOTAL.may_load(deps.storage)?.unwrap_or_default(),
    })
}

/// Query a balance on the local book. cw20-shaped response.
pub fn query_balance(deps: Deps, address: String) -> StdResult<BalanceResponse> {
    let addr = deps.api.addr_validate(&address)?;
    Ok(BalanceResponse {
        balance: BALANCES
            .may_load(deps.storage, &addr)?
            .unwrap_or_default(),
    })
}

/// Query an allowance. Allowances here never expire.
pub fn query_allowance(deps: Deps, owner: String, spender: String) -> StdResult<AllowanceResponse> {
    let owner_addr = deps.api.addr_validate(&owner)?;
    let spender_addr = deps.api.addr_validate(&spender)?;
    let allowance: Uint128 = ALLOWANCES
        .may_load(deps.storage, (&owner_addr, &spender_addr))?
        .unwrap_or_default();
    Ok(AllowanceResponse {
        allowance,
        expires: Expiration::Never {},
    })
}

/// Whether sends to `chain` are authorized.
pub fn query_is_authorized_chain(deps: Deps, chain: u32) -> StdResult<AuthorizedChainResponse> {
    Ok(AuthorizedChainResponse {
        authorized: AUTHORIZED_CHAINS
            .may_load(deps.storage, chain)?
            .unwrap_or(false),
    })
}

/// Whether `caller` holds mint/burn rights.
pub fn query_is_authorized_caller(
    deps: Deps,
    caller: String,
) -> StdResult<AuthorizedCallerResponse> {
    let addr = deps.api.addr_validate(&caller)?;
    Ok(AuthorizedCallerResponse {
        authorized: AUTHORIZED_CALLERS
            .may_load(deps.storage, &addr)?
            .unwrap_or(false),
    })
}

/// List authorized destination networks with cursor-based pagination.
pub fn query_authorized_chains(
    deps: Deps,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> StdResult<AuthorizedChainsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let chains: Vec<u32> = AUTHORIZED_CHAINS
        .range(deps.storage, start, None, Order::Ascending)
        .filter(|item| matches!(item, Ok((_, true))))
        .take(limit)
        .map(|item| Ok(item?.0))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(AuthorizedChainsResponse { chains })
}
