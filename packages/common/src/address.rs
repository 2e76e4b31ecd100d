//! Cross-chain address encoding.
//!
//! Every address travels the wire as 20 raw bytes, matching EVM-style
//! addresses. Local bech32 addresses are projected into that space with a
//! keccak256 tail; the projection is one-way, so inbound resolution always
//! goes through the gateway's origin index rather than hash inversion.

use cosmwasm_std::{Addr, StdError, StdResult};
use tiny_keccak::{Hasher, Keccak};

/// Raw wire address width in bytes.
pub const WIRE_ADDR_LEN: usize = 20;

/// Compute keccak256 hash of arbitrary data.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Project a local contract address into its 20-byte wire form.
///
/// Layout matches EVM address derivation: the low 20 bytes of the keccak256
/// digest of the address string.
pub fn wire_address(addr: &Addr) -> [u8; 20] {
    let digest = keccak256(addr.as_bytes());
    let mut out = [0u8; 20];
    out.copy_from_slice(&digest[12..32]);
    out
}

/// Parse a 0x-prefixed hex string into a 20-byte wire address.
pub fn parse_hex_address(addr: &str) -> StdResult<[u8; 20]> {
    let stripped = addr.strip_prefix("0x").unwrap_or(addr);
    if stripped.len() != WIRE_ADDR_LEN * 2 {
        return Err(StdError::generic_err(format!(
            "invalid address length: expected {} hex chars, got {}",
            WIRE_ADDR_LEN * 2,
            stripped.len()
        )));
    }
    let bytes = hex::decode(stripped)
        .map_err(|e| StdError::generic_err(format!("invalid hex address: {e}")))?;
    let mut out = [0u8; 20];
    out.copy_from_slice(&bytes);
    Ok(out)
}

/// Render a wire address as a 0x-prefixed hex string.
pub fn to_hex_address(addr: &[u8; 20]) -> String {
    format!("0x{}", hex::encode(addr))
}

/// Whether a wire address is all zeroes (the null address).
pub fn is_zero_address(addr: &[u8; 20]) -> bool {
    addr.iter().all(|b| *b == 0)
}

/// Decode a wire address from an arbitrary byte slice, validating width.
pub fn parse_wire_address(bytes: &[u8]) -> StdResult<[u8; 20]> {
    bytes.try_into().map_err(|_| {
        StdError::generic_err(format!(
            "invalid wire address: expected {} bytes, got {}",
            WIRE_ADDR_LEN,
            bytes.len()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_address_is_deterministic_and_20_bytes() {
        let addr = Addr::unchecked("wasm1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqq");
        let a = wire_address(&addr);
        let b = wire_address(&addr);
        assert_eq!(a, b);
        assert_ne!(a, [0u8; 20]);
        // Different inputs must diverge.
        let other = wire_address(&Addr::unchecked("wasm1other"));
        assert_ne!(a, other);
    }

    #[test]
    fn hex_round_trip() {
        let raw = [0xABu8; 20];
        let text = to_hex_address(&raw);
        assert_eq!(text, format!("0x{}", "ab".repeat(20)));
        assert_eq!(parse_hex_address(&text).unwrap(), raw);
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(parse_hex_address("0x1234").is_err());
        assert!(parse_hex_address(&"zz".repeat(20)).is_err());
    }

    #[test]
    fn zero_address_detection() {
        assert!(is_zero_address(&[0u8; 20]));
        let mut nonzero = [0u8; 20];
        nonzero[19] = 1;
        assert!(!is_zero_address(&nonzero));
    }
}
