//! Common - Shared Types and Utilities for Omnigate Contracts
//!
//! This package provides the cross-chain wire codec, the interface types of
//! the external collaborators (messaging endpoint and custody bridge), and
//! the subset of contract interfaces that other members of the workspace
//! consume (gateway supply operations, token instantiation).
//!
//! Mock endpoint and custody contracts for integration testing live under
//! [`testing`].

pub mod address;
pub mod custody;
pub mod endpoint;
pub mod gateway;
pub mod payload;
pub mod testing;
pub mod token;

pub use crate::address::{keccak256, parse_hex_address, to_hex_address, wire_address};
pub use crate::custody::{classify_failure, CustodyFailure};
pub use crate::endpoint::{DeliveryReceipt, MessageOrigin};
pub use crate::payload::{ComposePayload, GatewayMessage, OriginHeader};
