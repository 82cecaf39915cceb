use crate::events::Event;
use crate::interfaces::storage;
use core::fmt::Debug;
use soroban_sdk::{contractclient, Address, Env, IntoVal, Symbol, Topics, Val};

#[contractclient(name = "OwnableClient")]
pub trait OwnableInterface {
    /// Returns the address of the contract's owner.
    fn owner(env: &Env) -> Address;

    /// Transfers ownership of the contract to a new address.
    fn transfer_ownership(env: &Env, new_owner: Address);
}

/// Default implementation of [OwnableInterface::owner].
pub fn owner(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&storage::OwnerDataKey::Interfaces_Owner)
        .expect("owner must be set during contract construction")
}

/// Default implementation of [OwnableInterface::transfer_ownership]. The current owner must authorize the transfer.
pub fn transfer_ownership<T: OwnableInterface>(env: &Env, new_owner: Address) {
    let current_owner = T::owner(env);
    current_owner.require_auth();

    set_owner(env, &new_owner);

    OwnershipTransferredEvent {
        previous_owner: current_owner,
        new_owner,
    }
    .emit(env);
}

/// Sets the owner without any checks. Meant for contract constructors, never for a contract interface.
pub fn set_owner(env: &Env, owner: &Address) {
    env.storage()
        .instance()
        .set(&storage::OwnerDataKey::Interfaces_Owner, owner);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnershipTransferredEvent {
    pub previous_owner: Address,
    pub new_owner: Address,
}

impl Event for OwnershipTransferredEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "ownership_transferred"),
            self.previous_owner.clone(),
            self.new_owner.clone(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {}
}

#[cfg(test)]
mod test {
    use crate::interfaces::testdata::Contract;
    use crate::interfaces::OwnableClient;
    use crate::{assert_invoke_auth_err, assert_invoke_auth_ok, assert_last_emitted_event};
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::{Address, Env, Symbol};

    fn prepare_client(env: &Env, owner: Option<Address>) -> OwnableClient {
        let contract_id = env.register(Contract, (owner,));
        OwnableClient::new(env, &contract_id)
    }

    #[test]
    fn owner_fails_if_owner_not_set() {
        let env = Env::default();
        let client = prepare_client(&env, None);

        assert!(client.try_owner().is_err());
    }

    #[test]
    fn owner_returns_correct_owner_when_set() {
        let env = Env::default();
        let owner = Address::generate(&env);
        let client = prepare_client(&env, Some(owner.clone()));

        assert_eq!(client.owner(), owner);
    }

    #[test]
    fn transfer_ownership_fails_if_caller_is_not_owner() {
        let env = Env::default();
        let owner = Address::generate(&env);
        let client = prepare_client(&env, Some(owner.clone()));

        let new_owner = Address::generate(&env);
        assert_invoke_auth_err!(new_owner, client.try_transfer_ownership(&new_owner));

        assert_eq!(client.owner(), owner);
    }

    #[test]
    fn transfer_ownership_succeeds_if_caller_is_owner() {
        let env = Env::default();
        let owner = Address::generate(&env);
        let client = prepare_client(&env, Some(owner.clone()));

        let new_owner = Address::generate(&env);
        assert_invoke_auth_ok!(owner, client.try_transfer_ownership(&new_owner));

        assert_last_emitted_event(
            &env,
            &client.address,
            (
                Symbol::new(&env, "ownership_transferred"),
                owner,
                new_owner.clone(),
            ),
            (),
        );
        assert_eq!(client.owner(), new_owner);
    }
}
