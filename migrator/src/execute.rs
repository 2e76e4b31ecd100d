//! Migration handlers.
//!
//! Upgrade moves holdings of a plain token into its deterministic adapter
//! (deployed through the gateway's factory); downgrade burns holdings of a
//! bridged representation and mints the same amount on a ledger-free
//! target deployed here with `Instantiate2`. Both directions are
//! get-or-create: repeating a migration reuses the recorded target and
//! never redeploys.

use cosmwasm_std::{
    instantiate2_address, to_json_binary, Addr, Binary, CosmosMsg, Deps, DepsMut, Env,
    MessageInfo, QuerierWrapper, Reply, Response, StdError, SubMsg, Uint128, WasmMsg,
};
use cw20::MinterResponse;

use common::address::{keccak256, wire_address};
use common::gateway::{
    AuthorizedRepresentationResponse, GatewayExecuteMsg, GatewayQueryMsg,
    PredictAdapterAddressResponse, TokenOriginResponse,
};
use common::token::{TokenInstantiateMsg, TokenMode};

use crate::error::ContractError;
use crate::msg::DowngradeTarget;
use crate::state::{
    Config, PendingDeployment, CONFIG, DOWNGRADED_MESSAGING, DOWNGRADED_PLAIN,
    PENDING_DEPLOYMENT, REPLY_DEPLOY_TARGET, UPGRADED_ADAPTER,
};

// ============================================================================
// Gateway & Token Lookups
// ============================================================================

fn is_authorized_representation(
    querier: &QuerierWrapper,
    gateway: &Addr,
    token: &Addr,
) -> Result<bool, ContractError> {
    let resp: AuthorizedRepresentationResponse = querier.query_wasm_smart(
        gateway,
        &GatewayQueryMsg::IsAuthorizedRepresentation {
            address: token.to_string(),
        },
    )?;
    Ok(resp.authorized)
}

fn token_origin(
    querier: &QuerierWrapper,
    gateway: &Addr,
    token: &Addr,
) -> Result<TokenOriginResponse, ContractError> {
    let resp: TokenOriginResponse = querier.query_wasm_smart(
        gateway,
        &GatewayQueryMsg::TokenOrigin {
            token: token.to_string(),
        },
    )?;
    if !resp.registered {
        return Err(ContractError::OriginNotRegistered {
            token: token.to_string(),
        });
    }
    Ok(resp)
}

/// Name, symbol, and decimals of the source token. Adapters delegate to
/// the wrapped cw20 they represent.
fn source_metadata(
    querier: &QuerierWrapper,
    source: &Addr,
) -> Result<(String, String, u8), ContractError> {
    let info: token::msg::TokenInfoResponse =
        querier.query_wasm_smart(source, &token::msg::QueryMsg::TokenInfo {})?;
    match info.mode {
        TokenMode::Native {
            name,
            symbol,
            decimals,
        }
        | TokenMode::Messaging {
            name,
            symbol,
            decimals,
        } => Ok((name, symbol, decimals)),
        TokenMode::Adapter { wrapped } => {
            let wrapped_info: cw20::TokenInfoResponse =
                querier.query_wasm_smart(wrapped, &cw20::Cw20QueryMsg::TokenInfo {})?;
            Ok((
                wrapped_info.name,
                wrapped_info.symbol,
                wrapped_info.decimals,
            ))
        }
    }
}

/// Resolve the migration amount against the caller's balance and the
/// allowance granted to the migrator. Defaults to the full balance.
fn resolve_amount(
    querier: &QuerierWrapper,
    source: &Addr,
    caller: &Addr,
    migrator: &Addr,
    requested: Option<Uint128>,
) -> Result<Uint128, ContractError> {
    let balance: cw20::BalanceResponse = querier.query_wasm_smart(
        source,
        &cw20::Cw20QueryMsg::Balance {
            address: caller.to_string(),
        },
    )?;
    let amount = requested.unwrap_or(balance.balance);
    if amount.is_zero() {
        return Err(ContractError::NothingToMigrate);
    }
    if amount > balance.balance {
        return Err(ContractError::InsufficientBalance {
            needed: amount,
            available: balance.balance,
        });
    }

    let allowance: cw20::AllowanceResponse = querier.query_wasm_smart(
        source,
        &cw20::Cw20QueryMsg::Allowance {
            owner: caller.to_string(),
            spender: migrator.to_string(),
        },
    )?;
    if amount > allowance.allowance {
        return Err(ContractError::InsufficientAllowance {
            needed: amount,
            available: allowance.allowance,
        });
    }
    Ok(amount)
}

// ============================================================================
// Upgrade
// ============================================================================

/// Move the caller's holdings into the deterministic adapter for
/// `source_token`, deploying it through the gateway if needed.
pub fn execute_upgrade_to_adapter(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    source_token: String,
    initial_chains: Vec<u32>,
    amount: Option<Uint128>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let source = deps.api.addr_validate(&source_token)?;

    if is_authorized_representation(&deps.querier, &config.gateway, &source)? {
        return Err(ContractError::AlreadyRepresentation {
            token: source.to_string(),
        });
    }
    let origin = token_origin(&deps.querier, &config.gateway, &source)?;

    let predicted: PredictAdapterAddressResponse = deps.querier.query_wasm_smart(
        &config.gateway,
        &GatewayQueryMsg::PredictAdapterAddress {
            origin_network: origin.origin_network,
            origin_address: origin.origin_address.clone(),
        },
    )?;
    let adapter = predicted.address;

    let amount = resolve_amount(
        &deps.querier,
        &source,
        &info.sender,
        &env.contract.address,
        amount,
    )?;

    if UPGRADED_ADAPTER.may_load(deps.storage, &source)?.is_none() {
        UPGRADED_ADAPTER.save(deps.storage, &source, &adapter)?;
    }

    // The gateway's deploy is idempotent; an already-recorded adapter is a
    // no-op there, so repeating the upgrade only moves more funds.
    let deploy: CosmosMsg = WasmMsg::Execute {
        contract_addr: config.gateway.to_string(),
        msg: to_json_binary(&GatewayExecuteMsg::DeployAdapter {
            token: source.to_string(),
            origin_network: origin.origin_network,
            origin_address: origin.origin_address,
            initial_chains,
        })?,
        funds: vec![],
    }
    .into();
    let fund: CosmosMsg = WasmMsg::Execute {
        contract_addr: source.to_string(),
        msg: to_json_binary(&cw20::Cw20ExecuteMsg::TransferFrom {
            owner: info.sender.to_string(),
            recipient: adapter.to_string(),
            amount,
        })?,
        funds: vec![],
    }
    .into();

    Ok(Response::new()
        .add_message(deploy)
        .add_message(fund)
        .add_attribute("method", "upgrade_to_adapter")
        .add_attribute("source_token", source.to_string())
        .add_attribute("adapter", adapter.to_string())
        .add_attribute("amount", amount.to_string()))
}

// ============================================================================
// Downgrade
// ============================================================================

fn downgrade_tag(target: &DowngradeTarget) -> &'static [u8] {
    match target {
        DowngradeTarget::Plain => b"plain",
        DowngradeTarget::Messaging => b"messaging",
    }
}

/// Salt for a downgrade deployment: source identity, network, target kind.
pub fn downgrade_salt(source: &Addr, local_network: u32, target: &DowngradeTarget) -> [u8; 32] {
    let mut preimage = Vec::with_capacity(33);
    preimage.extend_from_slice(&wire_address(source));
    preimage.extend_from_slice(&local_network.to_be_bytes());
    preimage.extend_from_slice(downgrade_tag(target));
    keccak256(&preimage)
}

/// Predict the `Instantiate2` address of a downgrade target.
pub fn predict_downgrade_address(
    deps: Deps,
    env: &Env,
    config: &Config,
    source: &Addr,
    target: &DowngradeTarget,
) -> Result<Addr, ContractError> {
    let code_id = match target {
        DowngradeTarget::Plain => config.plain_code_id,
        DowngradeTarget::Messaging => config.token_code_id,
    };
    let code_info = deps.querier.query_wasm_code_info(code_id)?;
    let creator = deps.api.addr_canonicalize(env.contract.address.as_str())?;
    let salt = downgrade_salt(source, config.local_network, target);
    let canonical = instantiate2_address(&code_info.checksum, &creator, &salt)
        .map_err(|e| StdError::generic_err(format!("instantiate2 address: {e}")))?;
    Ok(deps.api.addr_humanize(&canonical)?)
}

/// Burn the caller's holdings of `source_token` and mint the same amount
/// on the deterministic downgrade target.
pub fn execute_downgrade_token(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    source_token: String,
    target: DowngradeTarget,
    amount: Option<Uint128>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let source = deps.api.addr_validate(&source_token)?;

    if !is_authorized_representation(&deps.querier, &config.gateway, &source)? {
        return Err(ContractError::NotRepresentation {
            token: source.to_string(),
        });
    }

    let registry = match target {
        DowngradeTarget::Plain => &DOWNGRADED_PLAIN,
        DowngradeTarget::Messaging => &DOWNGRADED_MESSAGING,
    };
    let recorded = registry.may_load(deps.storage, &source)?;
    let target_addr = match &recorded {
        Some(addr) => addr.clone(),
        None => predict_downgrade_address(deps.as_ref(), &env, &config, &source, &target)?,
    };

    let amount = resolve_amount(
        &deps.querier,
        &source,
        &info.sender,
        &env.contract.address,
        amount,
    )?;

    let mut resp = Response::new();

    // First downgrade of this source deploys the target; later calls mint
    // onto the recorded contract without redeploying.
    if recorded.is_none() {
        let (name, symbol, decimals) = source_metadata(&deps.querier, &source)?;
        let (code_id, init) = match target {
            DowngradeTarget::Plain => (
                config.plain_code_id,
                to_json_binary(&cw20_base::msg::InstantiateMsg {
                    name,
                    symbol,
                    decimals,
                    initial_balances: vec![],
                    mint: Some(MinterResponse {
                        minter: env.contract.address.to_string(),
                        cap: None,
                    }),
                    marketing: None,
                })?,
            ),
            DowngradeTarget::Messaging => {
                let origin = token_origin(&deps.querier, &config.gateway, &source)?;
                (
                    config.token_code_id,
                    to_json_binary(&TokenInstantiateMsg {
                        owner: env.contract.address.to_string(),
                        gateway: config.gateway.to_string(),
                        endpoint: config.endpoint.to_string(),
                        custody_bridge: None,
                        local_network: config.local_network,
                        origin_network: origin.origin_network,
                        origin_address: origin.origin_address,
                        mode: TokenMode::Messaging {
                            name,
                            symbol,
                            decimals,
                        },
                        authorized_chains: vec![],
                    })?,
                )
            }
        };

        registry.save(deps.storage, &source, &target_addr)?;
        PENDING_DEPLOYMENT.save(
            deps.storage,
            &PendingDeployment {
                predicted: target_addr.clone(),
            },
        )?;

        let salt = downgrade_salt(&source, config.local_network, &target);
        resp = resp.add_submessage(SubMsg::reply_on_success(
            WasmMsg::Instantiate2 {
                admin: Some(config.owner.to_string()),
                code_id,
                label: format!("omnigate downgrade {source}"),
                msg: init,
                funds: vec![],
                salt: Binary::from(salt.to_vec()),
            },
            REPLY_DEPLOY_TARGET,
        ));
    }

    // Pull, burn on the source (reflecting into the gateway ledger for
    // native sources), and mint on the target.
    let pull: CosmosMsg = WasmMsg::Execute {
        contract_addr: source.to_string(),
        msg: to_json_binary(&cw20::Cw20ExecuteMsg::TransferFrom {
            owner: info.sender.to_string(),
            recipient: env.contract.address.to_string(),
            amount,
        })?,
        funds: vec![],
    }
    .into();
    let burn: CosmosMsg = WasmMsg::Execute {
        contract_addr: source.to_string(),
        msg: to_json_binary(&cw20::Cw20ExecuteMsg::Burn { amount })?,
        funds: vec![],
    }
    .into();
    let mint: CosmosMsg = WasmMsg::Execute {
        contract_addr: target_addr.to_string(),
        msg: to_json_binary(&cw20::Cw20ExecuteMsg::Mint {
            recipient: info.sender.to_string(),
            amount,
        })?,
        funds: vec![],
    }
    .into();

    Ok(resp
        .add_message(pull)
        .add_message(burn)
        .add_message(mint)
        .add_attribute("method", "downgrade_token")
        .add_attribute("source_token", source.to_string())
        .add_attribute("target", target_addr.to_string())
        .add_attribute("deployed", recorded.is_none().to_string())
        .add_attribute("amount", amount.to_string()))
}

// ============================================================================
// Reply
// ============================================================================

/// Verify a downgrade deployment against the parked prediction.
pub fn handle_deploy_reply(deps: DepsMut, msg: Reply) -> Result<Response, ContractError> {
    let pending = PENDING_DEPLOYMENT
        .may_load(deps.storage)?
        .ok_or(ContractError::NoPendingDeployment)?;
    PENDING_DEPLOYMENT.remove(deps.storage);

    let result = msg.result.into_result().map_err(StdError::generic_err)?;
    let actual = result
        .events
        .iter()
        .find(|e| e.ty == "instantiate")
        .and_then(|e| {
            e.attributes
                .iter()
                .find(|a| a.key == "_contract_address")
                .map(|a| a.value.clone())
        })
        .ok_or_else(|| StdError::generic_err("instantiate reply missing contract address"))?;

    if actual != pending.predicted.as_str() {
        return Err(ContractError::DeploymentAddressMismatch {
            predicted: pending.predicted.to_string(),
            actual,
        });
    }

    Ok(Response::new()
        .add_attribute("method", "downgrade_deploy_reply")
        .add_attribute("target", actual))
}
