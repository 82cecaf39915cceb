use omnichain_payload::Value;
use omnichain_std::assert_some;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, BytesN, Env, String};

use crate::testutils::{generate_test_message, setup_cross_chain, sign_message};
use crate::{CrossChain, CrossChainClient};

#[test]
fn constructor_sets_owner_and_domain_separator() {
    let env = Env::default();
    let owner = Address::generate(&env);
    let domain_separator = BytesN::from_array(&env, &[9; 32]);

    let contract_id = env.register(CrossChain, (&owner, &domain_separator));
    let client = CrossChainClient::new(&env, &contract_id);

    assert_eq!(client.owner(), owner);
    assert_eq!(client.domain_separator(), domain_separator);
    assert_eq!(client.porters(), None);
}

#[test]
fn message_hash_ignores_signatures() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, porters) = setup_cross_chain(&env, 3, 2);
    let target = Address::generate(&env);
    let domain_separator = client.domain_separator();

    let mut message = generate_test_message(
        &env,
        1,
        &target,
        "receive_token",
        Value::String(String::from_str(&env, "recipient")),
        1,
    );
    let unsigned_hash = message.hash(&env, &domain_separator);

    message.signatures = sign_message(&env, &[&porters.porters[0]], &domain_separator, &message);

    assert_eq!(message.hash(&env, &domain_separator), unsigned_hash);
    assert_some!(message.signatures.get(0));
}

#[test]
fn message_hash_binds_domain_and_content() {
    let env = Env::default();
    let target = Address::generate(&env);
    let domain_separator = BytesN::from_array(&env, &[1; 32]);

    let message = generate_test_message(
        &env,
        1,
        &target,
        "receive_token",
        Value::String(String::from_str(&env, "recipient")),
        1,
    );
    let hash = message.hash(&env, &domain_separator);

    assert_ne!(
        message.hash(&env, &BytesN::from_array(&env, &[2; 32])),
        hash
    );

    let mut other = message.clone();
    other.id = 2;
    assert_ne!(other.hash(&env, &domain_separator), hash);

    let mut other = message;
    other.value = 1;
    assert_ne!(other.hash(&env, &domain_separator), hash);
}
