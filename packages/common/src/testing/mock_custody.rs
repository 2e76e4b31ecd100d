//! Mock custody bridge.
//!
//! Wire-compatible with [`crate::custody::CustodyExecuteMsg`] and
//! [`crate::custody::CustodyQueryMsg`]. Collateral handling:
//!
//! - `Lock` pulls the escrowed amount from the caller via cw20
//!   `TransferFrom` (the caller granted an allowance beforehand).
//! - `Claim` releases collateral: for home-origin tokens it transfers out
//!   of the bridge's own balance; for foreign tokens it mints the locally
//!   registered wrapped form (the bridge is the wrapped token's minter in
//!   tests). Proofs are accepted without verification.
//!
//! Failure knobs produce the three distinguishable lock/claim failure
//! shapes, plus a re-entrancy probe that calls back into the caller with a
//! message the test supplies through `permit_data`/`metadata`.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{
    to_json_binary, Binary, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Response, StdError,
    StdResult, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;
use cw_storage_plus::{Item, Map};

use crate::custody::{WrappedAddressResponse, PANICKED_MARKER, REJECTED_MARKER};

// ============================================================================
// State
// ============================================================================

/// Network id of the chain this mock lives on.
pub const LOCAL_NETWORK: Item<u32> = Item::new("local_network");

/// Wrapped/local form of a token origin. Key: (origin network, origin address).
pub const WRAPPED: Map<(u32, &[u8]), String> = Map::new("wrapped");

/// Failure steering for `Lock` / `Claim`.
pub const LOCK_FAILURE: Item<Option<FailureKind>> = Item::new("lock_failure");
pub const CLAIM_FAILURE: Item<Option<FailureKind>> = Item::new("claim_failure");

/// Recorded locks, keyed by an incrementing index.
pub const LOCKS: Map<u64, LockRecord> = Map::new("locks");
pub const LOCK_COUNT: Item<u64> = Item::new("lock_count");

#[cw_serde]
pub struct LockRecord {
    pub dest_network: u32,
    pub recipient: Binary,
    pub amount: Uint128,
    pub token: String,
    pub locker: String,
}

#[cw_serde]
pub enum FailureKind {
    /// Business-rule rejection with a reason string.
    Rejected { reason: String },
    /// Panic-style failure with a code.
    Panicked { code: String },
    /// Failure with no decodable reason.
    Opaque,
    /// Call back into the caller with the supplied payload before failing.
    Reenter,
}

// ============================================================================
// Messages
// ============================================================================

#[cw_serde]
pub struct InstantiateMsg {
    pub local_network: u32,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Wire-compatible with [`crate::custody::CustodyExecuteMsg::Lock`].
    Lock {
        dest_network: u32,
        recipient: Binary,
        amount: Uint128,
        token: String,
        force_sync: bool,
        permit_data: Binary,
    },
    /// Wire-compatible with [`crate::custody::CustodyExecuteMsg::Claim`].
    Claim {
        proof_local_exit_root: Vec<Binary>,
        proof_rollup_exit_root: Vec<Binary>,
        global_index: Uint128,
        mainnet_exit_root: Binary,
        rollup_exit_root: Binary,
        origin_network: u32,
        origin_token: Binary,
        destination_network: u32,
        destination_address: String,
        amount: Uint128,
        metadata: Binary,
    },
    /// Test-only: register the local (wrapped) form of a token origin.
    SetWrapped {
        origin_network: u32,
        origin_token: Binary,
        local_token: String,
    },
    /// Test-only: steer lock failures.
    SetLockFailure { mode: Option<FailureKind> },
    /// Test-only: steer claim failures.
    SetClaimFailure { mode: Option<FailureKind> },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Wire-compatible with [`crate::custody::CustodyQueryMsg::WrappedAddress`].
    #[returns(WrappedAddressResponse)]
    WrappedAddress {
        origin_network: u32,
        origin_token: Binary,
    },
    #[returns(LockRecord)]
    Lock { index: u64 },
    #[returns(u64)]
    LockCount {},
}

// ============================================================================
// Entry Points (library-only; tests wrap them with ContractWrapper)
// ============================================================================

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> StdResult<Response> {
    LOCAL_NETWORK.save(deps.storage, &msg.local_network)?;
    LOCK_FAILURE.save(deps.storage, &None)?;
    CLAIM_FAILURE.save(deps.storage, &None)?;
    LOCK_COUNT.save(deps.storage, &0u64)?;
    Ok(Response::new().add_attribute("method", "instantiate"))
}

pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> StdResult<Response> {
    match msg {
        ExecuteMsg::Lock {
            dest_network,
            recipient,
            amount,
            token,
            force_sync: _,
            permit_data,
        } => {
            if let Some(mode) = LOCK_FAILURE.load(deps.storage)? {
                return fail(&info, mode, &permit_data);
            }
            if amount.is_zero() {
                return Err(StdError::generic_err(format!(
                    "{REJECTED_MARKER}zero amount"
                )));
            }

            let index = LOCK_COUNT.load(deps.storage)? + 1;
            LOCK_COUNT.save(deps.storage, &index)?;
            LOCKS.save(
                deps.storage,
                index,
                &LockRecord {
                    dest_network,
                    recipient,
                    amount,
                    token: token.clone(),
                    locker: info.sender.to_string(),
                },
            )?;

            // Pull the escrowed funds from the caller.
            let pull: CosmosMsg = WasmMsg::Execute {
                contract_addr: token,
                msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
                    owner: info.sender.to_string(),
                    recipient: env.contract.address.to_string(),
                    amount,
                })?,
                funds: vec![],
            }
            .into();

            Ok(Response::new()
                .add_message(pull)
                .add_attribute("method", "lock")
                .add_attribute("index", index.to_string())
                .add_attribute("amount", amount.to_string()))
        }
        ExecuteMsg::Claim {
            origin_network,
            origin_token,
            destination_address,
            amount,
            metadata,
            ..
        } => {
            if let Some(mode) = CLAIM_FAILURE.load(deps.storage)? {
                return fail(&info, mode, &metadata);
            }
            if amount.is_zero() {
                return Err(StdError::generic_err(format!(
                    "{REJECTED_MARKER}zero amount"
                )));
            }

            let local_network = LOCAL_NETWORK.load(deps.storage)?;
            let local_token = WRAPPED
                .may_load(deps.storage, (origin_network, origin_token.as_slice()))?
                .ok_or_else(|| {
                    StdError::generic_err(format!(
                        "{REJECTED_MARKER}no local form of origin token"
                    ))
                })?;

            // Home-origin collateral is released from the bridge's own
            // balance; foreign tokens get their wrapped form minted.
            let release: CosmosMsg = if origin_network == local_network {
                WasmMsg::Execute {
                    contract_addr: local_token.clone(),
                    msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                        recipient: destination_address.clone(),
                        amount,
                    })?,
                    funds: vec![],
                }
                .into()
            } else {
                WasmMsg::Execute {
                    contract_addr: local_token.clone(),
                    msg: to_json_binary(&Cw20ExecuteMsg::Mint {
                        recipient: destination_address.clone(),
                        amount,
                    })?,
                    funds: vec![],
                }
                .into()
            };

            Ok(Response::new()
                .add_message(release)
                .add_attribute("method", "claim")
                .add_attribute("token", local_token)
                .add_attribute("recipient", destination_address)
                .add_attribute("amount", amount.to_string()))
        }
        ExecuteMsg::SetWrapped {
            origin_network,
            origin_token,
            local_token,
        } => {
            WRAPPED.save(
                deps.storage,
                (origin_network, origin_token.as_slice()),
                &local_token,
            )?;
            Ok(Response::new().add_attribute("method", "set_wrapped"))
        }
        ExecuteMsg::SetLockFailure { mode } => {
            LOCK_FAILURE.save(deps.storage, &mode)?;
            Ok(Response::new().add_attribute("method", "set_lock_failure"))
        }
        ExecuteMsg::SetClaimFailure { mode } => {
            CLAIM_FAILURE.save(deps.storage, &mode)?;
            Ok(Response::new().add_attribute("method", "set_claim_failure"))
        }
    }
}

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::WrappedAddress {
            origin_network,
            origin_token,
        } => {
            let address = WRAPPED
                .may_load(deps.storage, (origin_network, origin_token.as_slice()))?
                .map(cosmwasm_std::Addr::unchecked);
            to_json_binary(&WrappedAddressResponse { address })
        }
        QueryMsg::Lock { index } => to_json_binary(&LOCKS.load(deps.storage, index)?),
        QueryMsg::LockCount {} => to_json_binary(&LOCK_COUNT.load(deps.storage)?),
    }
}

/// Produce the steered failure, optionally re-entering the caller first.
fn fail(info: &MessageInfo, mode: FailureKind, callback: &Binary) -> StdResult<Response> {
    match mode {
        FailureKind::Rejected { reason } => Err(StdError::generic_err(format!(
            "{REJECTED_MARKER}{reason}"
        ))),
        FailureKind::Panicked { code } => Err(StdError::generic_err(format!(
            "{PANICKED_MARKER}{code}"
        ))),
        FailureKind::Opaque => Err(StdError::generic_err("mock custody failure")),
        FailureKind::Reenter => {
            // Call back into the caller with the test-supplied payload; the
            // caller's re-entrancy guard is expected to reject it, which
            // fails this call transitively.
            let callback: CosmosMsg = WasmMsg::Execute {
                contract_addr: info.sender.to_string(),
                msg: callback.clone(),
                funds: vec![],
            }
            .into();
            Ok(Response::new()
                .add_message(callback)
                .add_attribute("method", "reenter"))
        }
    }
}
