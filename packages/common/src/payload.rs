//! Cross-chain message payload codec.
//!
//! Wire layout (all integers big-endian):
//!
//! ```text
//! Origin header (24 bytes)
//!   | origin_network (4) | origin_address (20) |
//!
//! Gateway message (76 bytes minimum)
//!   | origin header (24) | beneficiary (20) | amount (32) | compose (rest) |
//!
//! Compose payload
//!   | origin_network (4) | origin_address (20) | amount (32) | sender (20) | inner (rest) |
//! ```
//!
//! Amounts are carried as 32-byte unsigned integers for parity with EVM
//! uint256 encoding; decoding rejects values outside the `Uint128` range.

use cosmwasm_std::{StdError, StdResult, Uint128};

use crate::address::WIRE_ADDR_LEN;

/// Width of the network id on the wire.
pub const NETWORK_ID_LEN: usize = 4;

/// Width of the origin header: network id + origin address.
pub const ORIGIN_HEADER_LEN: usize = NETWORK_ID_LEN + WIRE_ADDR_LEN;

/// Width of a wire amount (uint256).
pub const AMOUNT_LEN: usize = 32;

/// Minimum length of a gateway message: header + beneficiary + amount.
pub const MESSAGE_MIN_LEN: usize = ORIGIN_HEADER_LEN + WIRE_ADDR_LEN + AMOUNT_LEN;

/// Minimum length of a compose payload: header + amount + sender.
pub const COMPOSE_MIN_LEN: usize = ORIGIN_HEADER_LEN + AMOUNT_LEN + WIRE_ADDR_LEN;

// ============================================================================
// Origin Header
// ============================================================================

/// Fixed-width header identifying where a token was first registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OriginHeader {
    /// Network the token originates from.
    pub network: u32,
    /// Token address on the origin network (wire form).
    pub address: [u8; 20],
}

impl OriginHeader {
    pub fn new(network: u32, address: [u8; 20]) -> Self {
        Self { network, address }
    }

    /// Append the 24-byte header to a buffer.
    pub fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.network.to_be_bytes());
        out.extend_from_slice(&self.address);
    }

    /// Strip a leading origin header from a payload, returning the remainder.
    pub fn extract(payload: &[u8]) -> StdResult<(Self, &[u8])> {
        if payload.len() < ORIGIN_HEADER_LEN {
            return Err(StdError::generic_err(format!(
                "payload too short for origin header: {} < {}",
                payload.len(),
                ORIGIN_HEADER_LEN
            )));
        }
        let network = u32::from_be_bytes(payload[0..NETWORK_ID_LEN].try_into().unwrap());
        let mut address = [0u8; 20];
        address.copy_from_slice(&payload[NETWORK_ID_LEN..ORIGIN_HEADER_LEN]);
        Ok((Self { network, address }, &payload[ORIGIN_HEADER_LEN..]))
    }
}

// ============================================================================
// Amounts
// ============================================================================

/// Encode an amount as a 32-byte big-endian integer (uint256 parity).
pub fn write_amount(amount: Uint128, out: &mut Vec<u8>) {
    let mut word = [0u8; AMOUNT_LEN];
    word[16..32].copy_from_slice(&amount.u128().to_be_bytes());
    out.extend_from_slice(&word);
}

/// Decode a 32-byte big-endian amount, rejecting values above `Uint128::MAX`.
pub fn read_amount(bytes: &[u8]) -> StdResult<Uint128> {
    if bytes.len() != AMOUNT_LEN {
        return Err(StdError::generic_err(format!(
            "invalid amount width: expected {AMOUNT_LEN} bytes, got {}",
            bytes.len()
        )));
    }
    if bytes[0..16].iter().any(|b| *b != 0) {
        return Err(StdError::generic_err(
            "amount exceeds the supported 128-bit range",
        ));
    }
    let raw = u128::from_be_bytes(bytes[16..32].try_into().unwrap());
    Ok(Uint128::new(raw))
}

// ============================================================================
// Gateway Message
// ============================================================================

/// The decoded form of an inbound cross-chain message to the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayMessage {
    /// Where the token was first registered.
    pub origin: OriginHeader,
    /// Recipient of the minted/unlocked representation (wire form).
    pub beneficiary: [u8; 20],
    /// Amount to account for.
    pub amount: Uint128,
    /// Optional compose section carried verbatim after the fixed fields.
    pub compose: Option<Vec<u8>>,
}

impl GatewayMessage {
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(
            MESSAGE_MIN_LEN + self.compose.as_ref().map_or(0, |c| c.len()),
        );
        self.origin.write(&mut out);
        out.extend_from_slice(&self.beneficiary);
        write_amount(self.amount, &mut out);
        if let Some(compose) = &self.compose {
            out.extend_from_slice(compose);
        }
        out
    }

    pub fn decode(payload: &[u8]) -> StdResult<Self> {
        if payload.len() < MESSAGE_MIN_LEN {
            return Err(StdError::generic_err(format!(
                "gateway message too short: {} < {}",
                payload.len(),
                MESSAGE_MIN_LEN
            )));
        }
        let (origin, rest) = OriginHeader::extract(payload)?;
        let mut beneficiary = [0u8; 20];
        beneficiary.copy_from_slice(&rest[0..WIRE_ADDR_LEN]);
        let amount = read_amount(&rest[WIRE_ADDR_LEN..WIRE_ADDR_LEN + AMOUNT_LEN])?;
        let tail = &rest[WIRE_ADDR_LEN + AMOUNT_LEN..];
        let compose = if tail.is_empty() {
            None
        } else {
            Some(tail.to_vec())
        };
        Ok(Self {
            origin,
            beneficiary,
            amount,
            compose,
        })
    }
}

// ============================================================================
// Compose Payload
// ============================================================================

/// A composed send: sender identity plus an application-defined inner payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposePayload {
    /// Origin network of the token being composed over.
    pub origin_network: u32,
    /// Origin token address (wire form).
    pub origin_address: [u8; 20],
    /// Amount carried by the composed send.
    pub amount: Uint128,
    /// Wire identity of the original sender.
    pub sender: [u8; 20],
    /// Application-defined inner payload, delivered untouched.
    pub inner: Vec<u8>,
}

impl ComposePayload {
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(COMPOSE_MIN_LEN + self.inner.len());
        OriginHeader::new(self.origin_network, self.origin_address).write(&mut out);
        write_amount(self.amount, &mut out);
        out.extend_from_slice(&self.sender);
        out.extend_from_slice(&self.inner);
        out
    }

    /// Decode a structured compose payload.
    pub fn decode(payload: &[u8]) -> StdResult<Self> {
        if payload.len() < COMPOSE_MIN_LEN {
            return Err(StdError::generic_err(format!(
                "compose payload too short: {} < {}",
                payload.len(),
                COMPOSE_MIN_LEN
            )));
        }
        let (origin, rest) = OriginHeader::extract(payload)?;
        let amount = read_amount(&rest[0..AMOUNT_LEN])?;
        let mut sender = [0u8; 20];
        sender.copy_from_slice(&rest[AMOUNT_LEN..AMOUNT_LEN + WIRE_ADDR_LEN]);
        let inner = rest[AMOUNT_LEN + WIRE_ADDR_LEN..].to_vec();
        Ok(Self {
            origin_network: origin.network,
            origin_address: origin.address,
            amount,
            sender,
            inner,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(byte: u8) -> [u8; 20] {
        [byte; 20]
    }

    #[test]
    fn origin_header_extracts_and_leaves_remainder() {
        let mut buf = Vec::new();
        OriginHeader::new(7, addr(0x11)).write(&mut buf);
        buf.extend_from_slice(b"tail");

        let (header, rest) = OriginHeader::extract(&buf).unwrap();
        assert_eq!(header.network, 7);
        assert_eq!(header.address, addr(0x11));
        assert_eq!(rest, b"tail");
    }

    #[test]
    fn origin_header_rejects_short_payload() {
        assert!(OriginHeader::extract(&[0u8; 23]).is_err());
    }

    #[test]
    fn gateway_message_round_trip_without_compose() {
        let msg = GatewayMessage {
            origin: OriginHeader::new(1, addr(0xAA)),
            beneficiary: addr(0xBB),
            amount: Uint128::new(1_000_000),
            compose: None,
        };
        let decoded = GatewayMessage::decode(&msg.encode()).unwrap();
        assert_eq!(decoded, msg);
    }

    #[test]
    fn gateway_message_round_trip_with_compose() {
        let compose = ComposePayload {
            origin_network: 1,
            origin_address: addr(0xAA),
            amount: Uint128::new(42),
            sender: addr(0xCC),
            inner: b"hello".to_vec(),
        };
        let msg = GatewayMessage {
            origin: OriginHeader::new(1, addr(0xAA)),
            beneficiary: addr(0xBB),
            amount: Uint128::new(42),
            compose: Some(compose.encode()),
        };
        let decoded = GatewayMessage::decode(&msg.encode()).unwrap();
        let inner = ComposePayload::decode(decoded.compose.as_ref().unwrap()).unwrap();
        assert_eq!(inner, compose);
        assert_eq!(inner.inner, b"hello");
    }

    #[test]
    fn amount_rejects_values_above_u128() {
        let mut word = [0u8; 32];
        word[0] = 1;
        assert!(read_amount(&word).is_err());
    }

    #[test]
    fn message_rejects_truncated_payload() {
        let msg = GatewayMessage {
            origin: OriginHeader::new(1, addr(0xAA)),
            beneficiary: addr(0xBB),
            amount: Uint128::new(5),
            compose: None,
        };
        let bytes = msg.encode();
        assert!(GatewayMessage::decode(&bytes[..bytes.len() - 1]).is_err());
    }
}
