use omnichain_std::interfaces;
use omnichain_std::{assert_invoke_auth_err, assert_invoke_auth_ok, Ownable};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{contract, contractimpl, Address, Env};

#[contract]
#[derive(Ownable)]
pub struct Contract;

#[contractimpl]
impl Contract {
    pub fn __constructor(env: &Env, owner: Address) {
        interfaces::set_owner(env, &owner);
    }

    pub fn owner_only(env: &Env) -> Address {
        let owner = Self::owner(env);
        owner.require_auth();
        owner
    }
}

#[test]
fn derived_owner_returns_constructor_owner() {
    let env = Env::default();
    let owner = Address::generate(&env);
    let contract_id = env.register(Contract, (owner.clone(),));
    let client = ContractClient::new(&env, &contract_id);

    assert_eq!(client.owner(), owner);
}

#[test]
fn derived_transfer_ownership_requires_owner() {
    let env = Env::default();
    let owner = Address::generate(&env);
    let contract_id = env.register(Contract, (owner.clone(),));
    let client = ContractClient::new(&env, &contract_id);
    let new_owner = Address::generate(&env);

    assert_invoke_auth_err!(new_owner, client.try_transfer_ownership(&new_owner));
    assert_invoke_auth_ok!(owner, client.try_transfer_ownership(&new_owner));

    assert_eq!(client.owner(), new_owner);
}

#[test]
fn derived_owner_is_callable_from_contract_functions() {
    let env = Env::default();
    let owner = Address::generate(&env);
    let contract_id = env.register(Contract, (owner.clone(),));
    let client = ContractClient::new(&env, &contract_id);
    let stranger = Address::generate(&env);

    assert_invoke_auth_err!(stranger, client.try_owner_only());
    assert_invoke_auth_ok!(owner, client.try_owner_only());
}
