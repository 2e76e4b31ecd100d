//! Query message handlers. All lookups are pure and total: unknown keys
//! resolve to zeroed counters or unregistered/unauthorized defaults.

use cosmwasm_std::{Binary, Deps, Env, Order, StdResult};
use cw_storage_plus::Bound;

use common::gateway::{
    AuthorizedRepresentationResponse, PredictAdapterAddressResponse, TokenOriginResponse,
};

use crate::error::ContractError;
use crate::factory::predict_adapter_address;
use crate::msg::{
    AdapterByOriginResponse, ChainSupplyResponse, ConfigResponse, RepresentationEntry,
    RepresentationsResponse, SupplyInfoResponse, SupplyManagerResponse,
};
use crate::state::{
    AUTHORIZED_REPRESENTATIONS, CHAIN_SUPPLY_LIMIT, CONFIG, CURRENT_SUPPLY, EXITS, MAX_SUPPLY,
    ORIGIN_INDEX, SUPPLY_MANAGERS, TOKEN_ORIGINS, TOTAL_SUPPLY,
};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        custody_bridge: config.custody_bridge,
        endpoint: config.endpoint,
        local_network: config.local_network,
        adapter_code_id: config.adapter_code_id,
        migrator: config.migrator,
    })
}

/// Query a token's registered origin. Unregistered tokens report
/// `registered: false` with zeroed fields rather than failing.
pub fn query_token_origin(deps: Deps, token: String) -> StdResult<TokenOriginResponse> {
    let token_addr = deps.api.addr_validate(&token)?;
    match TOKEN_ORIGINS.may_load(deps.storage, &token_addr)? {
        Some(info) => Ok(TokenOriginResponse {
            origin_network: info.origin_network,
            origin_address: info.origin_address,
            registered: true,
        }),
        None => Ok(TokenOriginResponse {
            origin_network: 0,
            origin_address: Binary::default(),
            registered: false,
        }),
    }
}

/// Query a token's global supply and ceiling.
pub fn query_supply_info(deps: Deps, token: String) -> StdResult<SupplyInfoResponse> {
    let token_addr = deps.api.addr_validate(&token)?;
    Ok(SupplyInfoResponse {
        total_supply: TOTAL_SUPPLY
            .may_load(deps.storage, &token_addr)?
            .unwrap_or_default(),
        max_supply: MAX_SUPPLY
            .may_load(deps.storage, &token_addr)?
            .unwrap_or_default(),
    })
}

/// Query a token's per-chain counters.
pub fn query_chain_supply(deps: Deps, token: String, chain: u32) -> StdResult<ChainSupplyResponse> {
    let token_addr = deps.api.addr_validate(&token)?;
    Ok(ChainSupplyResponse {
        current_supply: CURRENT_SUPPLY
            .may_load(deps.storage, (&token_addr, chain))?
            .unwrap_or_default(),
        limit: CHAIN_SUPPLY_LIMIT
            .may_load(deps.storage, (&token_addr, chain))?
            .unwrap_or_default(),
        exits: EXITS
            .may_load(deps.storage, (&token_addr, chain))?
            .unwrap_or_default(),
    })
}

/// Whether an address is an authorized representation.
pub fn query_is_authorized_representation(
    deps: Deps,
    address: String,
) -> StdResult<AuthorizedRepresentationResponse> {
    let addr = deps.api.addr_validate(&address)?;
    Ok(AuthorizedRepresentationResponse {
        authorized: AUTHORIZED_REPRESENTATIONS
            .may_load(deps.storage, &addr)?
            .unwrap_or(false),
    })
}

/// Whether an address is a supply manager for a token.
pub fn query_is_supply_manager(
    deps: Deps,
    token: String,
    manager: String,
) -> StdResult<SupplyManagerResponse> {
    let token_addr = deps.api.addr_validate(&token)?;
    let manager_addr = deps.api.addr_validate(&manager)?;
    Ok(SupplyManagerResponse {
        authorized: SUPPLY_MANAGERS
            .may_load(deps.storage, (&token_addr, &manager_addr))?
            .unwrap_or(false),
    })
}

/// Local adapter binding for a wire-level token origin.
pub fn query_adapter_by_origin(
    deps: Deps,
    origin_network: u32,
    origin_address: Binary,
) -> StdResult<AdapterByOriginResponse> {
    let binding = ORIGIN_INDEX.may_load(deps.storage, (origin_network, origin_address.as_slice()))?;
    Ok(AdapterByOriginResponse {
        token: binding.as_ref().map(|b| b.token.clone()),
        representation: binding.map(|b| b.representation),
    })
}

/// Deterministic adapter address for a token origin.
pub fn query_predict_adapter_address(
    deps: Deps,
    env: Env,
    origin_network: u32,
    origin_address: Binary,
) -> Result<PredictAdapterAddressResponse, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let origin: [u8; 20] = common::address::parse_wire_address(origin_address.as_slice())?;
    let address = predict_adapter_address(
        deps,
        &env,
        config.adapter_code_id,
        origin_network,
        &origin,
    )?;
    Ok(PredictAdapterAddressResponse { address })
}

/// List authorized representations with cursor-based pagination.
pub fn query_representations(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<RepresentationsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_addr = start_after
        .map(|s| deps.api.addr_validate(&s))
        .transpose()?;
    let start = start_addr.as_ref().map(Bound::exclusive);

    let representations: Vec<RepresentationEntry> = AUTHORIZED_REPRESENTATIONS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (address, authorized) = item?;
            Ok(RepresentationEntry {
                address,
                authorized,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(RepresentationsResponse { representations })
}
