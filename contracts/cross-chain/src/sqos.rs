use omnichain_std::ensure;
use omnichain_std::events::Event;
use omnichain_std::ttl::extend_persistent_ttl;
use soroban_sdk::{Address, Env, Vec};

use crate::error::ContractError;
use crate::event::SQoSChangedEvent;
use crate::storage_types::DataKey;
use crate::types::SQoS;

/// Replaces the SQoS settings `sender` attaches to its outbound messages.
/// Each kind may appear at most once.
pub fn set_sqos(env: &Env, sender: &Address, sqos: Vec<SQoS>) -> Result<(), ContractError> {
    for (index, item) in sqos.iter().enumerate() {
        ensure!(
            !sqos
                .iter()
                .skip(index + 1)
                .any(|other| other.kind == item.kind),
            ContractError::DuplicateSQoS
        );
    }

    let key = DataKey::SQoS(sender.clone());
    env.storage().persistent().set(&key, &sqos);
    extend_persistent_ttl(env, &key);

    SQoSChangedEvent {
        sender: sender.clone(),
        sqos,
    }
    .emit(env);

    Ok(())
}

pub fn sqos(env: &Env, sender: &Address) -> Vec<SQoS> {
    env.storage()
        .persistent()
        .get(&DataKey::SQoS(sender.clone()))
        .unwrap_or_else(|| Vec::new(env))
}
