use omnichain_payload::InterfaceKind;
use omnichain_std::events::Event;
use omnichain_std::ttl::extend_persistent_ttl;
use soroban_sdk::{Env, String};

use crate::error::ContractError;
use crate::event::{ChainInterfaceSetEvent, DestinationRegisteredEvent};
use crate::storage_types::{DataKey, DestinationKey};
use crate::types::DestinationEntry;

/// Writes `entry`, replacing any entry with the same action and chain.
pub fn register(env: &Env, entry: DestinationEntry) {
    let key = destination_key(&entry.action_name, &entry.chain_name);

    env.storage().persistent().set(&key, &entry);
    extend_persistent_ttl(env, &key);

    DestinationRegisteredEvent {
        action_name: entry.action_name,
        chain_name: entry.chain_name,
        contract_address: entry.contract_address,
        action_identifier: entry.action_identifier,
    }
    .emit(env);
}

pub fn lookup(
    env: &Env,
    action_name: &String,
    chain_name: &String,
) -> Result<DestinationEntry, ContractError> {
    let key = destination_key(action_name, chain_name);

    let entry = env
        .storage()
        .persistent()
        .get::<_, DestinationEntry>(&key)
        .ok_or(ContractError::DestinationNotRegistered)?;
    extend_persistent_ttl(env, &key);

    Ok(entry)
}

pub fn set_chain_interface(
    env: &Env,
    chain_name: String,
    chain_type: u32,
) -> Result<(), ContractError> {
    let kind = InterfaceKind::try_from(chain_type)?;
    let key = DataKey::ChainInterface(chain_name.clone());

    env.storage().persistent().set(&key, &kind);
    extend_persistent_ttl(env, &key);

    ChainInterfaceSetEvent { chain_name, kind }.emit(env);

    Ok(())
}

pub fn chain_interface(env: &Env, chain_name: &String) -> Option<InterfaceKind> {
    let key = DataKey::ChainInterface(chain_name.clone());

    let kind = env.storage().persistent().get(&key);
    if kind.is_some() {
        extend_persistent_ttl(env, &key);
    }

    kind
}

fn destination_key(action_name: &String, chain_name: &String) -> DataKey {
    DataKey::Destination(DestinationKey {
        action_name: action_name.clone(),
        chain_name: chain_name.clone(),
    })
}
