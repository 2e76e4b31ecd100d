//! Omnigate Gateway Ledger - Cross-Chain Supply Accounting
//!
//! The gateway is the per-network accounting authority for bridged tokens:
//! it records each token's origin, enforces global and per-chain supply
//! ceilings, authorizes which representation contracts may mutate supply,
//! and processes inbound cross-chain messages from the messaging endpoint.
//!
//! # Inbound Flow
//! 1. The messaging endpoint delivers a packet by executing `OnMessage`
//! 2. The origin header resolves to a local representation via the origin
//!    index; an unseen wrapped token triggers lazy adapter deployment
//! 3. Supply counters are credited against their ceilings (home-origin
//!    tokens leave the counters untouched)
//!
//! # Conservation
//! `total_supply[token]` equals the sum of `current_supply[token][chain]`
//! observed by this ledger; a ceiling breach rejects the whole message, so
//! representations can never be minted past the locked collateral.

pub mod contract;
pub mod error;
mod execute;
pub mod factory;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
