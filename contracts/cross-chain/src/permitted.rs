use omnichain_std::events::Event;
use omnichain_std::ttl::extend_persistent_ttl;
use soroban_sdk::{Env, String, Symbol};

use crate::error::ContractError;
use crate::event::PermittedSenderRegisteredEvent;
use crate::storage_types::{DataKey, SenderKey};
use crate::types::PermittedSender;

/// Writes `entry`, replacing the action previously allowed for the same chain and sender.
pub fn register(env: &Env, entry: PermittedSender) {
    let key = sender_key(&entry.chain_name, &entry.sender);

    env.storage().persistent().set(&key, &entry.action_name);
    extend_persistent_ttl(env, &key);

    PermittedSenderRegisteredEvent {
        chain_name: entry.chain_name,
        sender: entry.sender,
        action_name: entry.action_name,
    }
    .emit(env);
}

/// Returns the local action `sender` on `chain_name` may invoke.
pub fn authorize(
    env: &Env,
    chain_name: &String,
    sender: &String,
) -> Result<Symbol, ContractError> {
    let key = sender_key(chain_name, sender);

    let action_name = env
        .storage()
        .persistent()
        .get::<_, Symbol>(&key)
        .ok_or(ContractError::SenderNotPermitted)?;
    extend_persistent_ttl(env, &key);

    Ok(action_name)
}

fn sender_key(chain_name: &String, sender: &String) -> DataKey {
    DataKey::PermittedSender(SenderKey {
        chain_name: chain_name.clone(),
        sender: sender.clone(),
    })
}
