//! Migration integration tests: deterministic downgrades of a bridged
//! representation and upgrades of a plain cw20 into its adapter.

use cosmwasm_std::{Addr, Binary, Uint128};
use cw_multi_test::{
    no_init, App, AppBuilder, BankKeeper, ContractWrapper, Executor, MockAddressGenerator,
    MockApiBech32, WasmKeeper,
};

use common::testing::{mock_custody, mock_endpoint};
use common::token::{TokenInstantiateMsg, TokenMode};

use gateway::msg::{
    ExecuteMsg as GatewayMsg, InstantiateMsg as GatewayInstantiateMsg,
    QueryMsg as GatewayQueryMsg, SupplyInfoResponse,
};
use migrator::msg::{
    DowngradeTarget, ExecuteMsg, InstantiateMsg, MigrationTargetResponse,
    PredictDowngradeResponse, QueryMsg,
};
use token::msg::{ExecuteMsg as TokenMsg, QueryMsg as TokenQueryMsg, TokenInfoResponse};

const LOCAL_NETWORK: u32 = 1;
const REMOTE_NETWORK: u32 = 2;

const ORIGIN_TOKEN: [u8; 20] = [0xAA; 20];
const LEGACY_ORIGIN: [u8; 20] = [0xCC; 20];

type Bech32App = App<BankKeeper, MockApiBech32>;

// ============================================================================
// Test Setup
// ============================================================================

fn contract_gateway() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        gateway::contract::execute,
        gateway::contract::instantiate,
        gateway::contract::query,
    )
    .with_reply(gateway::contract::reply);
    Box::new(contract)
}

fn contract_token() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        token::contract::execute,
        token::contract::instantiate,
        token::contract::query,
    )
    .with_reply(token::contract::reply);
    Box::new(contract)
}

fn contract_cw20() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

fn contract_migrator() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        migrator::contract::execute,
        migrator::contract::instantiate,
        migrator::contract::query,
    )
    .with_reply(migrator::contract::reply);
    Box::new(contract)
}

fn contract_mock_endpoint() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        mock_endpoint::execute,
        mock_endpoint::instantiate,
        mock_endpoint::query,
    );
    Box::new(contract)
}

fn contract_mock_custody() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        mock_custody::execute,
        mock_custody::instantiate,
        mock_custody::query,
    );
    Box::new(contract)
}

struct TestEnv {
    app: Bech32App,
    gateway: Addr,
    migrator: Addr,
    /// Native token, registered and authorized on the gateway, 1000 units
    /// minted to `user`, migrator granted burn rights.
    source: Addr,
    owner: Addr,
    user: Addr,
    cw20_code: u64,
}

fn setup() -> TestEnv {
    let mut app = AppBuilder::default()
        .with_api(MockApiBech32::new("wasm"))
        .with_wasm(WasmKeeper::default().with_address_generator(MockAddressGenerator))
        .build(no_init);

    let owner = app.api().addr_make("owner");
    let user = app.api().addr_make("user");

    let endpoint_code = app.store_code(contract_mock_endpoint());
    let custody_code = app.store_code(contract_mock_custody());
    let gateway_code = app.store_code(contract_gateway());
    let token_code = app.store_code(contract_token());
    let cw20_code = app.store_code(contract_cw20());
    let migrator_code = app.store_code(contract_migrator());

    let endpoint = app
        .instantiate_contract(
            endpoint_code,
            owner.clone(),
            &mock_endpoint::InstantiateMsg {
                peers: vec![LOCAL_NETWORK, REMOTE_NETWORK],
                empty_delivery_id: false,
            },
            &[],
            "mock-endpoint",
            None,
        )
        .unwrap();
    let custody = app
        .instantiate_contract(
            custody_code,
            owner.clone(),
            &mock_custody::InstantiateMsg {
                local_network: LOCAL_NETWORK,
            },
            &[],
            "mock-custody",
            None,
        )
        .unwrap();
    let gateway = app
        .instantiate_contract(
            gateway_code,
            owner.clone(),
            &GatewayInstantiateMsg {
                owner: owner.to_string(),
                custody_bridge: custody.to_string(),
                endpoint: endpoint.to_string(),
                local_network: LOCAL_NETWORK,
                adapter_code_id: token_code,
                migrator: None,
            },
            &[],
            "omnigate-gateway",
            None,
        )
        .unwrap();
    let migrator = app
        .instantiate_contract(
            migrator_code,
            owner.clone(),
            &InstantiateMsg {
                owner: owner.to_string(),
                gateway: gateway.to_string(),
                endpoint: endpoint.to_string(),
                token_code_id: token_code,
                plain_code_id: cw20_code,
                local_network: LOCAL_NETWORK,
            },
            &[],
            "omnigate-migrator",
            None,
        )
        .unwrap();
    app.execute_contract(
        owner.clone(),
        gateway.clone(),
        &GatewayMsg::SetMigrator {
            migrator: migrator.to_string(),
        },
        &[],
    )
    .unwrap();

    // The migrating source: a native token on the gateway ledger.
    let source = app
        .instantiate_contract(
            token_code,
            owner.clone(),
            &TokenInstantiateMsg {
                owner: owner.to_string(),
                gateway: gateway.to_string(),
                endpoint: endpoint.to_string(),
                custody_bridge: Some(custody.to_string()),
                local_network: LOCAL_NETWORK,
                origin_network: LOCAL_NETWORK,
                origin_address: Binary::from(ORIGIN_TOKEN.to_vec()),
                mode: TokenMode::Native {
                    name: "Omni Native".to_string(),
                    symbol: "OMNI".to_string(),
                    decimals: 6,
                },
                authorized_chains: vec![REMOTE_NETWORK],
            },
            &[],
            "source-token",
            None,
        )
        .unwrap();
    app.execute_contract(
        owner.clone(),
        gateway.clone(),
        &GatewayMsg::SetAuthorizedRepresentation {
            representation: source.to_string(),
            authorized: true,
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        owner.clone(),
        gateway.clone(),
        &GatewayMsg::RegisterTokenOrigin {
            token: source.to_string(),
            origin_network: LOCAL_NETWORK,
            origin_address: Binary::from(ORIGIN_TOKEN.to_vec()),
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        owner.clone(),
        source.clone(),
        &TokenMsg::Mint {
            recipient: user.to_string(),
            amount: Uint128::new(1000),
        },
        &[],
    )
    .unwrap();
    // Downgrades burn on the source with the migrator as caller.
    app.execute_contract(
        owner.clone(),
        source.clone(),
        &TokenMsg::SetCallerStatus {
            caller: migrator.to_string(),
            authorized: true,
        },
        &[],
    )
    .unwrap();

    TestEnv {
        app,
        gateway,
        migrator,
        source,
        owner,
        user,
        cw20_code,
    }
}

fn grant_allowance(env: &mut TestEnv, amount: u128) {
    env.app
        .execute_contract(
            env.user.clone(),
            env.source.clone(),
            &TokenMsg::IncreaseAllowance {
                spender: env.migrator.to_string(),
                amount: Uint128::new(amount),
                expires: None,
            },
            &[],
        )
        .unwrap();
}

fn downgrade(
    env: &mut TestEnv,
    target: DowngradeTarget,
    amount: Option<u128>,
) -> cw_multi_test::error::AnyResult<cw_multi_test::AppResponse> {
    env.app.execute_contract(
        env.user.clone(),
        env.migrator.clone(),
        &ExecuteMsg::DowngradeToken {
            source_token: env.source.to_string(),
            target,
            amount: amount.map(Uint128::new),
        },
        &[],
    )
}

fn recorded_plain(env: &TestEnv) -> Option<Addr> {
    let resp: MigrationTargetResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.migrator,
            &QueryMsg::DowngradedPlain {
                source_token: env.source.to_string(),
            },
        )
        .unwrap();
    resp.address
}

fn source_balance(env: &TestEnv, addr: &Addr) -> Uint128 {
    let resp: cw20::BalanceResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.source,
            &TokenQueryMsg::Balance {
                address: addr.to_string(),
            },
        )
        .unwrap();
    resp.balance
}

fn cw20_balance(env: &TestEnv, token: &Addr, addr: &Addr) -> Uint128 {
    let resp: cw20::BalanceResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            token,
            &cw20::Cw20QueryMsg::Balance {
                address: addr.to_string(),
            },
        )
        .unwrap();
    resp.balance
}

fn ledger_supply(env: &TestEnv, token: &Addr) -> Uint128 {
    let resp: SupplyInfoResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.gateway,
            &GatewayQueryMsg::SupplyInfo {
                token: token.to_string(),
            },
        )
        .unwrap();
    resp.total_supply
}

// ============================================================================
// Downgrades
// ============================================================================

#[test]
fn plain_downgrade_is_deterministic_and_reusable() {
    let mut env = setup();
    grant_allowance(&mut env, 600);

    let predicted: PredictDowngradeResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.migrator,
            &QueryMsg::PredictDowngradeAddress {
                source_token: env.source.to_string(),
                target: DowngradeTarget::Plain,
            },
        )
        .unwrap();

    downgrade(&mut env, DowngradeTarget::Plain, Some(400)).unwrap();

    // The target landed at the predicted address and holds the re-minted
    // amount; the source burn reached the gateway ledger.
    let target = recorded_plain(&env).unwrap();
    assert_eq!(target, predicted.address);
    assert_eq!(cw20_balance(&env, &target, &env.user), Uint128::new(400));
    assert_eq!(source_balance(&env, &env.user.clone()), Uint128::new(600));
    assert_eq!(ledger_supply(&env, &env.source.clone()), Uint128::new(600));

    // A second downgrade mints onto the same contract without redeploying.
    let res = downgrade(&mut env, DowngradeTarget::Plain, Some(200)).unwrap();
    assert!(res.events.iter().any(|e| {
        e.attributes
            .iter()
            .any(|a| a.key == "deployed" && a.value == "false")
    }));
    assert_eq!(recorded_plain(&env).unwrap(), target);
    assert_eq!(cw20_balance(&env, &target, &env.user), Uint128::new(600));
    assert_eq!(ledger_supply(&env, &env.source.clone()), Uint128::new(400));
}

#[test]
fn messaging_downgrade_deploys_a_ledger_free_token() {
    let mut env = setup();
    grant_allowance(&mut env, 300);

    downgrade(&mut env, DowngradeTarget::Messaging, Some(300)).unwrap();

    let resp: MigrationTargetResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.migrator,
            &QueryMsg::DowngradedMessaging {
                source_token: env.source.to_string(),
            },
        )
        .unwrap();
    let target = resp.address.unwrap();

    // The target is a messaging-mode token owned by the migrator, carrying
    // the source's metadata and origin, holding the re-minted amount.
    let info: TokenInfoResponse = env
        .app
        .wrap()
        .query_wasm_smart(&target, &TokenQueryMsg::TokenInfo {})
        .unwrap();
    assert_eq!(
        info.mode,
        TokenMode::Messaging {
            name: "Omni Native".to_string(),
            symbol: "OMNI".to_string(),
            decimals: 6,
        }
    );
    assert_eq!(info.owner, env.migrator);
    assert_eq!(info.custody_bridge, None);
    assert_eq!(info.origin_network, LOCAL_NETWORK);
    assert_eq!(info.total_supply, Uint128::new(300));
    assert_eq!(cw20_balance(&env, &target, &env.user), Uint128::new(300));
}

#[test]
fn downgrade_requires_a_representation() {
    let mut env = setup();
    let plain = env
        .app
        .instantiate_contract(
            env.cw20_code,
            env.owner.clone(),
            &cw20_base::msg::InstantiateMsg {
                name: "Plain".to_string(),
                symbol: "PLAIN".to_string(),
                decimals: 6,
                initial_balances: vec![],
                mint: None,
                marketing: None,
            },
            &[],
            "plain",
            None,
        )
        .unwrap();

    let res = env.app.execute_contract(
        env.user.clone(),
        env.migrator.clone(),
        &ExecuteMsg::DowngradeToken {
            source_token: plain.to_string(),
            target: DowngradeTarget::Plain,
            amount: None,
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("is not an authorized representation"), "{err_str}");
}

#[test]
fn downgrade_checks_balance_and_allowance() {
    let mut env = setup();

    // Default amount with an empty balance: nothing to migrate.
    let broke = env.app.api().addr_make("broke");
    let res = env.app.execute_contract(
        broke,
        env.migrator.clone(),
        &ExecuteMsg::DowngradeToken {
            source_token: env.source.to_string(),
            target: DowngradeTarget::Plain,
            amount: None,
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Nothing to migrate"), "{err_str}");

    // A balance without an allowance toward the migrator.
    let res = downgrade(&mut env, DowngradeTarget::Plain, Some(400));
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Insufficient allowance"), "{err_str}");

    // More than the caller holds.
    grant_allowance(&mut env, 5000);
    let res = downgrade(&mut env, DowngradeTarget::Plain, Some(2000));
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Insufficient balance"), "{err_str}");
}

// ============================================================================
// Upgrades
// ============================================================================

#[test]
fn upgrade_moves_holdings_into_the_adapter() {
    let mut env = setup();

    // A legacy cw20 with a registered origin but no representation yet.
    let legacy = env
        .app
        .instantiate_contract(
            env.cw20_code,
            env.owner.clone(),
            &cw20_base::msg::InstantiateMsg {
                name: "Legacy".to_string(),
                symbol: "LGCY".to_string(),
                decimals: 6,
                initial_balances: vec![cw20::Cw20Coin {
                    address: env.user.to_string(),
                    amount: Uint128::new(500),
                }],
                mint: None,
                marketing: None,
            },
            &[],
            "legacy",
            None,
        )
        .unwrap();
    env.app
        .execute_contract(
            env.owner.clone(),
            env.gateway.clone(),
            &GatewayMsg::RegisterTokenOrigin {
                token: legacy.to_string(),
                origin_network: REMOTE_NETWORK,
                origin_address: Binary::from(LEGACY_ORIGIN.to_vec()),
            },
            &[],
        )
        .unwrap();
    env.app
        .execute_contract(
            env.user.clone(),
            legacy.clone(),
            &cw20::Cw20ExecuteMsg::IncreaseAllowance {
                spender: env.migrator.to_string(),
                amount: Uint128::new(500),
                expires: None,
            },
            &[],
        )
        .unwrap();

    env.app
        .execute_contract(
            env.user.clone(),
            env.migrator.clone(),
            &ExecuteMsg::UpgradeToAdapter {
                source_token: legacy.to_string(),
                initial_chains: vec![REMOTE_NETWORK],
                amount: None,
            },
            &[],
        )
        .unwrap();

    // The adapter exists at the gateway's deterministic address, is
    // authorized, and holds the full migrated balance.
    let resp: MigrationTargetResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.migrator,
            &QueryMsg::UpgradedAdapter {
                source_token: legacy.to_string(),
            },
        )
        .unwrap();
    let adapter = resp.address.unwrap();
    let predicted: common::gateway::PredictAdapterAddressResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.gateway,
            &GatewayQueryMsg::PredictAdapterAddress {
                origin_network: REMOTE_NETWORK,
                origin_address: Binary::from(LEGACY_ORIGIN.to_vec()),
            },
        )
        .unwrap();
    assert_eq!(adapter, predicted.address);

    let auth: common::gateway::AuthorizedRepresentationResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.gateway,
            &GatewayQueryMsg::IsAuthorizedRepresentation {
                address: adapter.to_string(),
            },
        )
        .unwrap();
    assert!(auth.authorized);

    assert_eq!(cw20_balance(&env, &legacy, &adapter), Uint128::new(500));
    assert_eq!(cw20_balance(&env, &legacy, &env.user), Uint128::zero());
}

#[test]
fn upgrade_rejects_an_existing_representation() {
    let mut env = setup();
    let res = env.app.execute_contract(
        env.user.clone(),
        env.migrator.clone(),
        &ExecuteMsg::UpgradeToAdapter {
            source_token: env.source.to_string(),
            initial_chains: vec![],
            amount: None,
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("already an authorized representation"), "{err_str}");
}

#[test]
fn upgrade_requires_a_registered_origin() {
    let mut env = setup();
    let orphan = env
        .app
        .instantiate_contract(
            env.cw20_code,
            env.owner.clone(),
            &cw20_base::msg::InstantiateMsg {
                name: "Orphan".to_string(),
                symbol: "ORPH".to_string(),
                decimals: 6,
                initial_balances: vec![],
                mint: None,
                marketing: None,
            },
            &[],
            "orphan",
            None,
        )
        .unwrap();

    let res = env.app.execute_contract(
        env.user.clone(),
        env.migrator.clone(),
        &ExecuteMsg::UpgradeToAdapter {
            source_token: orphan.to_string(),
            initial_chains: vec![],
            amount: None,
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("no registered origin"), "{err_str}");
}
