use omnichain_payload::{classify, DecodedItem, MessagePayload, Value};
use omnichain_std::ensure;
use omnichain_std::events::Event;
use omnichain_std::ttl::extend_persistent_ttl;
use soroban_sdk::{vec, Address, BytesN, Env, IntoVal, String, Val, Vec};

use crate::error::ContractError;
use crate::event::{
    MessageAttestedEvent, MessageExecutedEvent, MessageReceivedEvent, MessageRejectedEvent,
    MessageSentEvent,
};
use crate::storage_types::{DataKey, MessageKey, MessageRecord};
use crate::types::{DestinationEntry, Message, MessageStatus, PorterSignature};
use crate::{destination, permitted, porters, sqos};

const RECIPIENT_ITEM: &str = "to";
const AMOUNT_ITEM: &str = "num";

pub fn domain_separator(env: &Env) -> BytesN<32> {
    env.storage()
        .instance()
        .get(&DataKey::DomainSeparator)
        .expect("domain separator must be set during contract construction")
}

pub fn set_domain_separator(env: &Env, domain_separator: &BytesN<32>) {
    env.storage()
        .instance()
        .set(&DataKey::DomainSeparator, domain_separator);
}

/// Stores a message from a permitted sender as pending. At least one current porter must have
/// signed it; only verified porter signatures are kept.
pub fn receive(env: &Env, message: Message) -> Result<(), ContractError> {
    let action_name = permitted::authorize(env, &message.source_chain, &message.sender)?;
    ensure!(
        action_name == message.target_action,
        ContractError::SenderNotPermitted
    );

    let key = message_key(&message.source_chain, message.id);
    ensure!(
        !env.storage().persistent().has(&key),
        ContractError::DuplicateMessage
    );

    message.payload.decode(env)?;

    let message_hash = message.hash(env, &domain_separator(env));
    let signatures = porters::verified_signatures(env, &message_hash, &message.signatures);
    ensure!(
        !signatures.is_empty(),
        ContractError::MissingPorterSignature
    );
    let message = Message {
        signatures,
        ..message
    };

    MessageReceivedEvent {
        source_chain: message.source_chain.clone(),
        id: message.id,
        sender: message.sender.clone(),
        target_contract: message.target_contract.clone(),
        target_action: message.target_action.clone(),
    }
    .emit(env);

    store_record(
        env,
        &key,
        &MessageRecord {
            message,
            status: MessageStatus::Pending,
        },
    );

    Ok(())
}

/// Adds verified porter signatures to a pending message. Porters that already signed are skipped.
pub fn attest(
    env: &Env,
    source_chain: String,
    id: u64,
    signatures: Vec<PorterSignature>,
) -> Result<(), ContractError> {
    let key = message_key(&source_chain, id);
    let mut record = pending_record(env, &key)?;

    let message_hash = record.message.hash(env, &domain_separator(env));
    for signature in porters::verified_signatures(env, &message_hash, &signatures).iter() {
        let already_signed = record
            .message
            .signatures
            .iter()
            .any(|existing| existing.porter == signature.porter);

        if !already_signed {
            record.message.signatures.push_back(signature);
        }
    }

    MessageAttestedEvent {
        source_chain,
        id,
        signature_count: record.message.signatures.len(),
    }
    .emit(env);

    store_record(env, &key, &record);

    Ok(())
}

/// Executes a pending message once the porter quorum is met.
///
/// A failed dispatch leaves the message `Rejected` and returns [`ContractError::DispatchFailed`].
/// The caller must not revert in that case, otherwise the rejection is lost.
pub fn execute(env: &Env, source_chain: String, id: u64) -> Result<(), ContractError> {
    let key = message_key(&source_chain, id);
    let mut record = pending_record(env, &key)?;

    let message_hash = record.message.hash(env, &domain_separator(env));
    ensure!(
        porters::verify(env, &message_hash, &record.message.signatures),
        ContractError::QuorumNotMet
    );

    let items = record.message.payload.decode(env)?;

    record.status = MessageStatus::Executed;
    store_record(env, &key, &record);

    if dispatch(env, &record.message, items) {
        MessageExecutedEvent { source_chain, id }.emit(env);
        return Ok(());
    }

    record.status = MessageStatus::Rejected;
    store_record(env, &key, &record);

    MessageRejectedEvent { source_chain, id }.emit(env);

    Err(ContractError::DispatchFailed)
}

pub fn message_record(env: &Env, source_chain: String, id: u64) -> Option<MessageRecord> {
    env.storage()
        .persistent()
        .get(&message_key(&source_chain, id))
}

/// Builds a token transfer message for `recipient` on `destination_chain`.
pub fn send(
    env: &Env,
    caller: Address,
    action_name: String,
    destination_chain: String,
    recipient: String,
    amount: i128,
) -> Result<u64, ContractError> {
    caller.require_auth();

    ensure!(amount > 0, ContractError::InvalidAmount);
    let amount = u128::try_from(amount).map_err(|_| ContractError::InvalidAmount)?;

    let destination = destination::lookup(env, &action_name, &destination_chain)?;
    let kind = destination::chain_interface(env, &destination_chain)
        .ok_or(ContractError::UnsupportedChainFamily)?;
    let recipient = classify(env, kind as u32, &recipient)?;

    let mut payload = MessagePayload::new(env);
    payload.push_item(
        env,
        RECIPIENT_ITEM,
        &Value::Address(recipient.to_address_data(env)),
    )?;
    payload.push_item(env, AMOUNT_ITEM, &Value::U128(amount))?;

    emit_outbound(env, caller, destination, payload)
}

/// Builds a message carrying an arbitrary payload. The payload must decode.
pub fn call_contract(
    env: &Env,
    caller: Address,
    action_name: String,
    destination_chain: String,
    payload: MessagePayload,
) -> Result<u64, ContractError> {
    caller.require_auth();

    let destination = destination::lookup(env, &action_name, &destination_chain)?;
    emit_outbound(env, caller, destination, payload)
}

/// Emits `message_sent` with the payload, its calldata and the SQoS settings of `sender`.
fn emit_outbound(
    env: &Env,
    sender: Address,
    destination: DestinationEntry,
    payload: MessagePayload,
) -> Result<u64, ContractError> {
    let calldata = payload.calldata(env)?;
    let sqos = sqos::sqos(env, &sender);

    let key = DataKey::OutboundNonce(destination.chain_name.clone());
    let id = env
        .storage()
        .persistent()
        .get::<_, u64>(&key)
        .unwrap_or(0)
        + 1;

    env.storage().persistent().set(&key, &id);
    extend_persistent_ttl(env, &key);

    MessageSentEvent {
        destination_chain: destination.chain_name,
        id,
        sender,
        contract_address: destination.contract_address,
        action_identifier: destination.action_identifier,
        payload,
        calldata,
        sqos,
    }
    .emit(env);

    Ok(id)
}

/// Calls `target_action(context, items, value)` on the target contract. Returns false if the
/// target fails in any way; its writes are rolled back by the host.
fn dispatch(env: &Env, message: &Message, items: Vec<DecodedItem>) -> bool {
    let args: Vec<Val> = vec![
        env,
        message.context().into_val(env),
        items.into_val(env),
        message.value.into_val(env),
    ];

    matches!(
        env.try_invoke_contract::<Val, soroban_sdk::Error>(
            &message.target_contract,
            &message.target_action,
            args,
        ),
        Ok(Ok(_))
    )
}

fn pending_record(env: &Env, key: &DataKey) -> Result<MessageRecord, ContractError> {
    let record = env
        .storage()
        .persistent()
        .get::<_, MessageRecord>(key)
        .ok_or(ContractError::UnknownMessage)?;

    ensure!(
        record.status == MessageStatus::Pending,
        ContractError::AlreadyExecuted
    );

    Ok(record)
}

fn store_record(env: &Env, key: &DataKey, record: &MessageRecord) {
    env.storage().persistent().set(key, record);
    extend_persistent_ttl(env, key);
}

fn message_key(source_chain: &String, id: u64) -> DataKey {
    DataKey::Message(MessageKey {
        source_chain: source_chain.clone(),
        id,
    })
}
