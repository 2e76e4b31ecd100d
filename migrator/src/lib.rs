//! Omnigate Migrator - Deterministic Token Migration
//!
//! The migrator moves holdings between bridged-token implementations in
//! both directions:
//!
//! - **Upgrade**: a plain token's holdings move into its deterministic
//!   adapter, deployed lazily through the gateway's factory.
//! - **Downgrade**: holdings of an authorized representation are burned
//!   (reflecting into the gateway ledger) and re-minted on a ledger-free
//!   target deployed here with `Instantiate2` - either a plain cw20 with
//!   the migrator as minter or a messaging-only token.
//!
//! Target addresses derive from the source token, the local network, and
//! the target kind, so repeating a migration reuses the same contract and
//! never redeploys.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
