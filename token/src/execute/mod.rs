//! Execute message handlers, split by concern:
//! - `book` - balance bookkeeping (transfer, allowance, mint, burn)
//! - `send` - cross-chain send, custody claim, and their replies
//! - `config` - owner toggles (chains, callers)

pub mod book;
pub mod config;
pub mod send;

pub use book::{
    execute_burn, execute_increase_allowance, execute_mint, execute_transfer,
    execute_transfer_from,
};
pub use config::{execute_set_authorized_chain, execute_set_caller_status};
pub use send::{execute_claim, execute_send_with_compose};
