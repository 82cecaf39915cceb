use soroban_sdk::{contracttype, Address, String};

use crate::types::{Message, MessageStatus};

#[contracttype]
#[derive(Clone, Debug)]
pub struct DestinationKey {
    pub action_name: String,
    pub chain_name: String,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct SenderKey {
    pub chain_name: String,
    pub sender: String,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct MessageKey {
    pub source_chain: String,
    pub id: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MessageRecord {
    pub message: Message,
    pub status: MessageStatus,
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    DomainSeparator,
    Porters,
    Destination(DestinationKey),
    PermittedSender(SenderKey),
    ChainInterface(String),
    Message(MessageKey),
    OutboundNonce(String),
    SQoS(Address),
}
