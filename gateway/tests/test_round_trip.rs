//! Full cross-chain round trip over two complete stacks in one app:
//! a native token leaves its home chain, materializes as a lazily
//! provisioned adapter over a wrapped cw20 on the remote chain, and comes
//! home again with every counter conserved.

use cosmwasm_std::{Addr, Binary, Uint128};
use cw_multi_test::{
    no_init, App, AppBuilder, BankKeeper, ContractWrapper, Executor, MockAddressGenerator,
    MockApiBech32, WasmKeeper,
};

use common::endpoint::MessageOrigin;
use common::testing::{mock_custody, mock_endpoint};
use common::token::{TokenInstantiateMsg, TokenMode};

use gateway::msg::{
    ChainSupplyResponse, ExecuteMsg as GatewayMsg, InstantiateMsg as GatewayInstantiateMsg,
    QueryMsg as GatewayQueryMsg, SupplyInfoResponse,
};
use token::msg::{ExecuteMsg as TokenMsg, QueryMsg as TokenQueryMsg};

const NET_A: u32 = 1;
const NET_B: u32 = 2;

const ORIGIN_TOKEN: [u8; 20] = [0xAA; 20];
const BENEFICIARY: [u8; 20] = [0xBB; 20];

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

/// One complete chain: endpoint, custody bridge, gateway.
struct Stack {
    network: u32,
    endpoint: Addr,
    custody: Addr,
    gateway: Addr,
}

fn deploy_stack(
    app: &mut Bech32App,
    owner: &Addr,
    network: u32,
    token_code: u64,
    label: &str,
) -> Stack {
    let endpoint_code = app.store_code(contract_mock_endpoint());
    let custody_code = app.store_code(contract_mock_custody());
    let gateway_code = app.store_code(contract_gateway());

    let endpoint = app
        .instantiate_contract(
            endpoint_code,
            owner.clone(),
            &mock_endpoint::InstantiateMsg {
                peers: vec![NET_A, NET_B],
                empty_delivery_id: false,
            },
            &[],
            format!("endpoint-{label}"),
            None,
        )
        .unwrap();
    let custody = app
        .instantiate_contract(
            custody_code,
            owner.clone(),
            &mock_custody::InstantiateMsg {
                local_network: network,
            },
            &[],
            format!("custody-{label}"),
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
                local_network: network,
                adapter_code_id: token_code,
                migrator: None,
            },
            &[],
            format!("gateway-{label}"),
            None,
        )
        .unwrap();

    Stack {
        network,
        endpoint,
        custody,
        gateway,
    }
}

/// Pull the latest packet out of one stack's endpoint and push it into the
/// other stack's gateway, the way the transport would.
fn relay(app: &mut Bech32App, relayer: &Addr, from: &Stack, to: &Stack) {
    let sequence: u64 = app
        .wrap()
        .query_wasm_smart(&from.endpoint, &mock_endpoint::QueryMsg::SentCount {})
        .unwrap();
    let packet: mock_endpoint::SentPacket = app
        .wrap()
        .query_wasm_smart(&from.endpoint, &mock_endpoint::QueryMsg::Sent { sequence })
        .unwrap();
    assert_eq!(packet.dest_network, to.network);

    app.execute_contract(
        relayer.clone(),
        to.endpoint.clone(),
        &mock_endpoint::ExecuteMsg::Deliver {
            gateway: to.gateway.to_string(),
            origin: MessageOrigin {
                network: from.network,
                sender: Binary::from([0x55u8; 20].to_vec()),
                sequence,
            },
            delivery_id: Binary::from([0x99u8; 32].to_vec()),
            message: packet.message,
        },
        &[],
    )
    .unwrap();
}

fn token_balance(app: &Bech32App, token: &Addr, addr: &Addr) -> Uint128 {
    let resp: cw20::BalanceResponse = app
        .wrap()
        .query_wasm_smart(
            token,
            &TokenQueryMsg::Balance {
                address: addr.to_string(),
            },
        )
        .unwrap();
    resp.balance
}

fn ledger_supply(app: &Bech32App, stack: &Stack, token: &Addr) -> Uint128 {
    let resp: SupplyInfoResponse = app
        .wrap()
        .query_wasm_smart(
            &stack.gateway,
            &GatewayQueryMsg::SupplyInfo {
                token: token.to_string(),
            },
        )
        .unwrap();
    resp.total_supply
}

fn claim_msg(origin_network: u32, recipient: &Addr, amount: u128) -> TokenMsg {
    TokenMsg::Claim {
        proof_local_exit_root: vec![],
        proof_rollup_exit_root: vec![],
        global_index: Uint128::zero(),
        mainnet_exit_root: Binary::from([0u8; 32].to_vec()),
        rollup_exit_root: Binary::from([0u8; 32].to_vec()),
        origin_network,
        origin_token: Binary::from(ORIGIN_TOKEN.to_vec()),
        destination_address: recipient.to_string(),
        amount: Uint128::new(amount),
        metadata: Binary::default(),
    }
}

// ============================================================================
// Round Trip
// ============================================================================

#[test]
fn native_token_round_trip_conserves_supply() {
    let mut app = AppBuilder::default()
        .with_api(MockApiBech32::new("wasm"))
        .with_wasm(WasmKeeper::default().with_address_generator(MockAddressGenerator))
        .build(no_init);

    let owner = app.api().addr_make("owner");
    let user_a = app.api().addr_make("user_a");
    let user_b = app.api().addr_make("user_b");

    let token_code = app.store_code(contract_token());
    let cw20_code = app.store_code(contract_cw20());
    let stack_a = deploy_stack(&mut app, &owner, NET_A, token_code, "a");
    let stack_b = deploy_stack(&mut app, &owner, NET_B, token_code, "b");

    // Chain A: the native token, registered and funded.
    let native = app
        .instantiate_contract(
            token_code,
            owner.clone(),
            &TokenInstantiateMsg {
                owner: owner.to_string(),
                gateway: stack_a.gateway.to_string(),
                endpoint: stack_a.endpoint.to_string(),
                custody_bridge: Some(stack_a.custody.to_string()),
                local_network: NET_A,
                origin_network: NET_A,
                origin_address: Binary::from(ORIGIN_TOKEN.to_vec()),
                mode: TokenMode::Native {
                    name: "Omni Native".to_string(),
                    symbol: "OMNI".to_string(),
                    decimals: 6,
                },
                authorized_chains: vec![NET_B],
            },
            &[],
            "native",
            None,
        )
        .unwrap();
    app.execute_contract(
        owner.clone(),
        stack_a.gateway.clone(),
        &GatewayMsg::SetAuthorizedRepresentation {
            representation: native.to_string(),
            authorized: true,
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        owner.clone(),
        stack_a.gateway.clone(),
        &GatewayMsg::RegisterTokenOrigin {
            token: native.to_string(),
            origin_network: NET_A,
            origin_address: Binary::from(ORIGIN_TOKEN.to_vec()),
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        owner.clone(),
        stack_a.custody.clone(),
        &mock_custody::ExecuteMsg::SetWrapped {
            origin_network: NET_A,
            origin_token: Binary::from(ORIGIN_TOKEN.to_vec()),
            local_token: native.to_string(),
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        owner.clone(),
        native.clone(),
        &TokenMsg::Mint {
            recipient: user_a.to_string(),
            amount: Uint128::new(1000),
        },
        &[],
    )
    .unwrap();

    // Chain B: a wrapped cw20 the custody bridge can mint, standing in for
    // the bridged form of the native token.
    let wrapped = app
        .instantiate_contract(
            cw20_code,
            owner.clone(),
            &cw20_base::msg::InstantiateMsg {
                name: "Wrapped Omni".to_string(),
                symbol: "WOMNI".to_string(),
                decimals: 6,
                initial_balances: vec![],
                mint: Some(cw20::MinterResponse {
                    minter: stack_b.custody.to_string(),
                    cap: None,
                }),
                marketing: None,
            },
            &[],
            "wrapped",
            None,
        )
        .unwrap();
    app.execute_contract(
        owner.clone(),
        stack_b.custody.clone(),
        &mock_custody::ExecuteMsg::SetWrapped {
            origin_network: NET_A,
            origin_token: Binary::from(ORIGIN_TOKEN.to_vec()),
            local_token: wrapped.to_string(),
        },
        &[],
    )
    .unwrap();

    // Leg 1: A -> B. Collateral locks on A, the message leaves through A's
    // endpoint.
    app.execute_contract(
        user_a.clone(),
        native.clone(),
        &TokenMsg::SendWithCompose {
            dest_network: NET_B,
            recipient: Binary::from(BENEFICIARY.to_vec()),
            amount: Uint128::new(400),
            min_amount: Uint128::zero(),
            refund_address: user_a.to_string(),
            compose: None,
        },
        &[],
    )
    .unwrap();
    assert_eq!(token_balance(&app, &native, &user_a), Uint128::new(600));
    assert_eq!(
        token_balance(&app, &native, &stack_a.custody),
        Uint128::new(400)
    );
    assert_eq!(ledger_supply(&app, &stack_a, &native), Uint128::new(1000));

    // Delivery on B lazily provisions the adapter and credits 400 against
    // the wrapped token.
    relay(&mut app, &owner, &stack_a, &stack_b);
    let binding: gateway::msg::AdapterByOriginResponse = app
        .wrap()
        .query_wasm_smart(
            &stack_b.gateway,
            &GatewayQueryMsg::AdapterByOrigin {
                origin_network: NET_A,
                origin_address: Binary::from(ORIGIN_TOKEN.to_vec()),
            },
        )
        .unwrap();
    let adapter = binding.representation.unwrap();
    assert_eq!(binding.token, Some(wrapped.clone()));
    assert_eq!(ledger_supply(&app, &stack_b, &wrapped), Uint128::new(400));

    // The beneficiary claims the wrapped form on B.
    app.execute_contract(
        user_b.clone(),
        adapter.clone(),
        &claim_msg(NET_A, &user_b, 400),
        &[],
    )
    .unwrap();
    let wrapped_balance: cw20::BalanceResponse = app
        .wrap()
        .query_wasm_smart(
            &wrapped,
            &cw20::Cw20QueryMsg::Balance {
                address: user_b.to_string(),
            },
        )
        .unwrap();
    assert_eq!(wrapped_balance.balance, Uint128::new(400));

    // Leg 2: B -> A. The adapter pulls the wrapped cw20, locks it, and
    // reflects the burn on B's ledger.
    app.execute_contract(
        user_b.clone(),
        wrapped.clone(),
        &cw20::Cw20ExecuteMsg::IncreaseAllowance {
            spender: adapter.to_string(),
            amount: Uint128::new(400),
            expires: None,
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        user_b.clone(),
        adapter.clone(),
        &TokenMsg::SendWithCompose {
            dest_network: NET_A,
            recipient: Binary::from(BENEFICIARY.to_vec()),
            amount: Uint128::new(400),
            min_amount: Uint128::zero(),
            refund_address: user_b.to_string(),
            compose: None,
        },
        &[],
    )
    .unwrap();
    assert_eq!(ledger_supply(&app, &stack_b, &wrapped), Uint128::zero());
    let exits: ChainSupplyResponse = app
        .wrap()
        .query_wasm_smart(
            &stack_b.gateway,
            &GatewayQueryMsg::ChainSupply {
                token: wrapped.to_string(),
                chain: NET_B,
            },
        )
        .unwrap();
    assert_eq!(exits.exits, Uint128::new(400));

    // Coming home: the return leg carries the home origin, so A's counters
    // stay where the mint left them.
    relay(&mut app, &owner, &stack_b, &stack_a);
    assert_eq!(ledger_supply(&app, &stack_a, &native), Uint128::new(1000));

    // The user claims the locked collateral back on A. Everything is where
    // it started.
    app.execute_contract(
        user_a.clone(),
        native.clone(),
        &claim_msg(NET_A, &user_a, 400),
        &[],
    )
    .unwrap();
    assert_eq!(token_balance(&app, &native, &user_a), Uint128::new(1000));
    assert_eq!(
        token_balance(&app, &native, &stack_a.custody),
        Uint128::zero()
    );
    assert_eq!(ledger_supply(&app, &stack_a, &native), Uint128::new(1000));
}
