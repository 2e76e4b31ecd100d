//! Custody bridge interface.
//!
//! The custody bridge holds the real collateral: `Lock` escrows tokens for
//! an outbound transfer, `Claim` releases (or mints the wrapped form of)
//! collateral on the destination network, and `WrappedAddress` reports
//! whether a wrapped form of a foreign token exists locally.
//!
//! Lock failures come in three distinguishable shapes — a business-rule
//! rejection with a reason, a panic-style low-level failure with a code,
//! and an opaque failure with nothing decodable. [`classify_failure`] maps
//! an error string back onto that taxonomy so callers can re-raise each as
//! a distinct error instead of a single generic one.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

/// Marker carried by business-rule rejections from the custody layer.
pub const REJECTED_MARKER: &str = "rejected: ";

/// Marker carried by panic-style failures from the custody layer.
pub const PANICKED_MARKER: &str = "panicked: ";

/// Execute interface consumed on the custody bridge contract.
#[cw_serde]
pub enum CustodyExecuteMsg {
    /// Escrow collateral for an outbound transfer.
    ///
    /// The caller must have granted the bridge a spending allowance for
    /// `token` beforehand; the bridge pulls the funds itself.
    Lock {
        dest_network: u32,
        /// Recipient on the destination network (20 bytes).
        recipient: Binary,
        amount: Uint128,
        /// Local token contract being escrowed.
        token: String,
        /// Force a synchronous exit-root update.
        force_sync: bool,
        /// Optional permit payload, passed through to the token.
        permit_data: Binary,
    },
    /// Release collateral (or mint the wrapped form) to a claimant.
    ///
    /// Production bridges verify the Merkle proofs; the mock custody bridge
    /// used in tests accepts trivial proofs.
    Claim {
        proof_local_exit_root: Vec<Binary>,
        proof_rollup_exit_root: Vec<Binary>,
        global_index: Uint128,
        mainnet_exit_root: Binary,
        rollup_exit_root: Binary,
        origin_network: u32,
        /// Origin token address (20 bytes, wire form).
        origin_token: Binary,
        destination_network: u32,
        /// Local recipient address.
        destination_address: String,
        amount: Uint128,
        metadata: Binary,
    },
}

/// Query interface consumed on the custody bridge contract.
#[cw_serde]
#[derive(QueryResponses)]
pub enum CustodyQueryMsg {
    /// Local wrapped form of a foreign token, if one exists.
    #[returns(WrappedAddressResponse)]
    WrappedAddress {
        origin_network: u32,
        /// Origin token address (20 bytes, wire form).
        origin_token: Binary,
    },
}

#[cw_serde]
pub struct WrappedAddressResponse {
    pub address: Option<Addr>,
}

// ============================================================================
// Failure Classification
// ============================================================================

/// The three distinguishable shapes of a custody-layer failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustodyFailure {
    /// Business-rule rejection with a human-readable reason.
    Rejected(String),
    /// Panic-style low-level failure with a code.
    Panicked(String),
    /// Failure with no decodable reason.
    Opaque,
}

/// Classify a raw error string from a failed custody call.
///
/// Submessage errors arrive wrapped in transport framing, so the markers
/// are searched for anywhere in the string rather than anchored at the
/// front. An error carrying neither marker is opaque.
pub fn classify_failure(error: &str) -> CustodyFailure {
    if let Some(pos) = error.find(REJECTED_MARKER) {
        let reason = error[pos + REJECTED_MARKER.len()..].trim().to_string();
        return CustodyFailure::Rejected(reason);
    }
    if let Some(pos) = error.find(PANICKED_MARKER) {
        let code = error[pos + PANICKED_MARKER.len()..].trim().to_string();
        return CustodyFailure::Panicked(code);
    }
    CustodyFailure::Opaque
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_business_rejection() {
        let failure = classify_failure(
            "error executing WasmMsg: rejected: destination chain disabled",
        );
        assert_eq!(
            failure,
            CustodyFailure::Rejected("destination chain disabled".to_string())
        );
    }

    #[test]
    fn classifies_panic_code() {
        let failure = classify_failure("dispatch failed: panicked: 0x11");
        assert_eq!(failure, CustodyFailure::Panicked("0x11".to_string()));
    }

    #[test]
    fn everything_else_is_opaque() {
        assert_eq!(
            classify_failure("storage corrupted beyond recognition"),
            CustodyFailure::Opaque
        );
        assert_eq!(classify_failure(""), CustodyFailure::Opaque);
    }

    #[test]
    fn rejection_takes_precedence_over_panic() {
        // A reason that merely mentions panics is still a rejection.
        let failure = classify_failure("rejected: panicked: not really");
        assert!(matches!(failure, CustodyFailure::Rejected(_)));
    }
}
