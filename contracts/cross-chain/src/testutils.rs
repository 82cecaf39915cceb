#![cfg(any(test, feature = "testutils"))]
extern crate std;

use ed25519_dalek::{Signer, SigningKey};
use omnichain_payload::{MessagePayload, Value};
use omnichain_std::traits::IntoVec;
use rand::Rng;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, BytesN, Env, String, Symbol, Vec};

use crate::contract::{CrossChain, CrossChainClient};
use crate::types::{Message, PorterSignature};

pub const SOURCE_CHAIN: &str = "NEAR";
pub const REMOTE_SENDER: &str = "near_sender";
pub const REMOTE_SIGNER: &str = "near_signer";

pub struct TestPorter {
    pub signing_key: SigningKey,
    pub public_key: BytesN<32>,
}

pub struct TestPorterSet {
    /// Sorted by public key
    pub porters: std::vec::Vec<TestPorter>,
    pub threshold: u32,
}

impl TestPorterSet {
    pub fn public_keys(&self, env: &Env) -> Vec<BytesN<32>> {
        self.porters
            .iter()
            .map(|porter| porter.public_key.clone())
            .collect::<std::vec::Vec<_>>()
            .into_vec(env)
    }
}

pub fn generate_porter(env: &Env) -> TestPorter {
    let signing_key = SigningKey::from_bytes(&rand::thread_rng().gen::<[u8; 32]>());
    let public_key = BytesN::from_array(env, &signing_key.verifying_key().to_bytes());

    TestPorter {
        signing_key,
        public_key,
    }
}

pub fn generate_porter_set(env: &Env, num_porters: u32, threshold: u32) -> TestPorterSet {
    let mut porters: std::vec::Vec<_> = (0..num_porters).map(|_| generate_porter(env)).collect();
    porters.sort_by(|a, b| a.public_key.cmp(&b.public_key));

    TestPorterSet { porters, threshold }
}

pub fn sign(env: &Env, porter: &TestPorter, data_hash: &BytesN<32>) -> PorterSignature {
    let signature = porter.signing_key.sign(&data_hash.to_array());

    PorterSignature {
        porter: porter.public_key.clone(),
        signature: BytesN::from_array(env, &signature.to_bytes()),
    }
}

/// Signatures of `signers` over the message hash.
pub fn sign_message(
    env: &Env,
    signers: &[&TestPorter],
    domain_separator: &BytesN<32>,
    message: &Message,
) -> Vec<PorterSignature> {
    let message_hash = message.hash(env, domain_separator);

    signers
        .iter()
        .map(|porter| sign(env, porter, &message_hash))
        .collect::<std::vec::Vec<_>>()
        .into_vec(env)
}

/// Deploys the cross-chain contract with a random domain separator and porter set.
/// Auths must be mocked by the caller.
pub fn setup_cross_chain<'a>(
    env: &Env,
    num_porters: u32,
    threshold: u32,
) -> (CrossChainClient<'a>, TestPorterSet) {
    let owner = Address::generate(env);
    let domain_separator = BytesN::from_array(env, &rand::thread_rng().gen::<[u8; 32]>());

    let contract_id = env.register(CrossChain, (&owner, &domain_separator));
    let client = CrossChainClient::new(env, &contract_id);

    let porter_set = generate_porter_set(env, num_porters, threshold);
    client.set_porters(&porter_set.public_keys(env), &threshold);

    (client, porter_set)
}

/// An unsigned transfer message from the test source chain carrying `to` and `num` items.
pub fn generate_test_message(
    env: &Env,
    id: u64,
    target_contract: &Address,
    target_action: &str,
    recipient: Value,
    amount: u128,
) -> Message {
    let mut payload = MessagePayload::new(env);
    payload
        .push_item(env, "to", &recipient)
        .expect("recipient must encode");
    payload
        .push_item(env, "num", &Value::U128(amount))
        .expect("amount must encode");

    Message {
        id,
        source_chain: String::from_str(env, SOURCE_CHAIN),
        sender: String::from_str(env, REMOTE_SENDER),
        signer: String::from_str(env, REMOTE_SIGNER),
        signatures: Vec::new(env),
        target_contract: target_contract.clone(),
        target_action: Symbol::new(env, target_action),
        payload,
        value: 0,
        flags: 0,
    }
}
