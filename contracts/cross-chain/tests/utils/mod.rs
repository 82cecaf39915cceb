#![allow(dead_code)]

use cross_chain::executable::CrossChainExecutableInterface;
use cross_chain::testutils::{
    self, setup_cross_chain, sign_message, TestPorter, TestPorterSet, REMOTE_SENDER, SOURCE_CHAIN,
};
use cross_chain::types::{Message, MessageContext};
use cross_chain::CrossChainClient;
use omnichain_payload::{DecodedItem, Value};
use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short, Address, Env, String, Symbol, Vec,
};

pub const RECEIVE_ACTION: &str = "receive_token";
pub const FAILING_ACTION: &str = "failing";
pub const FAILING_SENDER: &str = "near_failing_sender";

#[contracttype]
enum DataKey {
    CrossChain,
}

#[contract]
pub struct TestTarget;

#[contractimpl]
impl TestTarget {
    pub fn __constructor(env: Env, cross_chain: Address) {
        env.storage()
            .instance()
            .set(&DataKey::CrossChain, &cross_chain);
    }

    pub fn receive_token(env: Env, context: MessageContext, items: Vec<DecodedItem>, value: i128) {
        Self::validate(&env);

        env.events().publish(
            (symbol_short!("received"), context.source_chain, context.id),
            (items, value),
        );
    }

    pub fn failing(_env: Env, _context: MessageContext, _items: Vec<DecodedItem>, _value: i128) {
        panic!("target action failed");
    }
}

#[contractimpl]
impl CrossChainExecutableInterface for TestTarget {
    fn cross_chain(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::CrossChain)
            .expect("cross-chain contract must be set")
    }
}

pub struct TestContext<'a> {
    pub env: Env,
    pub client: CrossChainClient<'a>,
    pub porters: TestPorterSet,
    pub target: Address,
}

/// Cross-chain contract with porters {A, B, C} and threshold 2, and a target contract that
/// `near_sender` on NEAR may invoke through `receive_token`.
pub fn setup<'a>() -> TestContext<'a> {
    let env = Env::default();
    env.mock_all_auths();

    let (client, porters) = setup_cross_chain(&env, 3, 2);
    let target = env.register(TestTarget, (&client.address,));

    client.register_permitted_sender(
        &String::from_str(&env, SOURCE_CHAIN),
        &String::from_str(&env, REMOTE_SENDER),
        &Symbol::new(&env, RECEIVE_ACTION),
    );
    client.register_permitted_sender(
        &String::from_str(&env, SOURCE_CHAIN),
        &String::from_str(&env, FAILING_SENDER),
        &Symbol::new(&env, FAILING_ACTION),
    );

    TestContext {
        env,
        client,
        porters,
        target,
    }
}

pub fn transfer_message(ctx: &TestContext, id: u64) -> Message {
    testutils::generate_test_message(
        &ctx.env,
        id,
        &ctx.target,
        RECEIVE_ACTION,
        Value::String(String::from_str(&ctx.env, "recipient")),
        256,
    )
}

pub fn signed_by(ctx: &TestContext, message: &Message, signers: &[&TestPorter]) -> Message {
    let mut message = message.clone();
    message.signatures = sign_message(
        &ctx.env,
        signers,
        &ctx.client.domain_separator(),
        &message,
    );
    message
}

pub fn source_chain(env: &Env) -> String {
    String::from_str(env, SOURCE_CHAIN)
}
