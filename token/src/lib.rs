//! Omnigate Token Representation - Bridged Token Variants
//!
//! A single contract covering the three shapes a bridged token takes:
//!
//! - **Native**: the canonical deployment on the token's origin network.
//!   Keeps its own balance book and reflects every mint and burn into the
//!   gateway ledger in the same transaction.
//! - **Adapter**: a thin representation around a pre-existing wrapped cw20
//!   on a destination network. Never mints; collateral moves through the
//!   custody bridge, burns are reported to the ledger.
//! - **Messaging**: a downgraded, messaging-only token with its own balance
//!   book and no custody or ledger involvement.
//!
//! # Outbound Flow
//! 1. `SendWithCompose` debits the sender per mode and locks collateral in
//!    the custody bridge (native/adapter)
//! 2. The message is dispatched through the messaging endpoint; an empty
//!    delivery receipt aborts the whole send
//! 3. Custody failures are re-raised in three distinguishable shapes
//!    (rejected / panicked / opaque)

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
