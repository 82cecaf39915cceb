use omnichain_std::ensure;
use omnichain_std::events::Event;
use omnichain_std::ttl::extend_instance_ttl;
use soroban_sdk::{Bytes, BytesN, Env, Vec};

use crate::error::ContractError;
use crate::event::PortersChangedEvent;
use crate::storage_types::DataKey;
use crate::types::{PorterSet, PorterSignature};

/// Replaces the porter set. Keys must be in strictly ascending order, which also rules out duplicates.
pub fn set_porters(
    env: &Env,
    porters: Vec<BytesN<32>>,
    threshold: u32,
) -> Result<(), ContractError> {
    ensure!(
        threshold >= 1 && threshold <= porters.len(),
        ContractError::InvalidThreshold
    );

    let mut previous_porter: Option<BytesN<32>> = None;
    for porter in porters.iter() {
        if let Some(previous_porter) = previous_porter {
            ensure!(previous_porter < porter, ContractError::InvalidPorters);
        }
        previous_porter = Some(porter);
    }

    let porter_set = PorterSet { porters, threshold };
    env.storage().instance().set(&DataKey::Porters, &porter_set);
    extend_instance_ttl(env);

    PortersChangedEvent {
        porters: porter_set.porters,
        threshold,
    }
    .emit(env);

    Ok(())
}

pub fn porters(env: &Env) -> Option<PorterSet> {
    env.storage().instance().get(&DataKey::Porters)
}

/// Returns the signatures of current porters over `data_hash`, one per porter.
/// Signatures of non-members are dropped. An invalid signature of a current porter aborts the
/// invocation, so nothing unverified is ever stored.
pub fn verified_signatures(
    env: &Env,
    data_hash: &BytesN<32>,
    signatures: &Vec<PorterSignature>,
) -> Vec<PorterSignature> {
    let mut verified: Vec<PorterSignature> = Vec::new(env);
    let Some(PorterSet { porters, .. }) = porters(env) else {
        return verified;
    };

    let message: Bytes = data_hash.clone().into();

    for signature in signatures.iter() {
        let already_verified = verified
            .iter()
            .any(|existing| existing.porter == signature.porter);
        if !porters.contains(&signature.porter) || already_verified {
            continue;
        }

        env.crypto()
            .ed25519_verify(&signature.porter, &message, &signature.signature);
        verified.push_back(signature);
    }

    verified
}

/// Returns true once `threshold` distinct current porters have signed `data_hash`.
/// Signatures of non-members and repeated signatures of the same porter are skipped.
/// An invalid signature of a current porter aborts the invocation.
pub fn verify(env: &Env, data_hash: &BytesN<32>, signatures: &Vec<PorterSignature>) -> bool {
    let Some(PorterSet { porters, threshold }) = porters(env) else {
        return false;
    };

    let message: Bytes = data_hash.clone().into();
    let mut counted: Vec<BytesN<32>> = Vec::new(env);

    for PorterSignature { porter, signature } in signatures.iter() {
        if !porters.contains(&porter) || counted.contains(&porter) {
            continue;
        }

        env.crypto().ed25519_verify(&porter, &message, &signature);
        counted.push_back(porter);

        if counted.len() >= threshold {
            return true;
        }
    }

    false
}
