//! Execute message handlers, split by concern:
//! - `admin` - owner configuration (authorization sets, ceilings, managers)
//! - `supply` - origin registration and the mint/burn supply ledger
//! - `inbound` - endpoint message delivery and lazy adapter provisioning

pub mod admin;
pub mod inbound;
pub mod supply;

pub use admin::{
    execute_add_supply_manager, execute_remove_supply_manager, execute_set_adapter_code_id,
    execute_set_authorized_representation, execute_set_chain_supply_limit, execute_set_migrator,
    execute_set_token_max_supply,
};
pub use inbound::{execute_deploy_adapter, execute_on_message};
pub use supply::{execute_burn_supply, execute_mint_supply, execute_register_token_origin};
