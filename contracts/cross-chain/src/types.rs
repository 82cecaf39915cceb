use omnichain_payload::MessagePayload;
use soroban_sdk::{contracttype, xdr::ToXdr, Address, Bytes, BytesN, Env, String, Symbol, Vec};

/// An ed25519 signature of a porter over a message hash.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PorterSignature {
    pub porter: BytesN<32>,
    pub signature: BytesN<64>,
}

/// Porter public keys in strictly ascending order, and the number of distinct signatures
/// required to accept a message.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PorterSet {
    pub porters: Vec<BytesN<32>>,
    pub threshold: u32,
}

/// Kind of a security quality-of-service requirement.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum SQoSKind {
    Reveal = 0,
    Challenge = 1,
    Threshold = 2,
    Priority = 3,
    ExceptionRollback = 4,
    SelectionDelay = 5,
    Isolation = 6,
    CrossVerify = 7,
}

/// A security quality-of-service requirement a sender attaches to its outbound messages.
/// `value` carries the kind's parameter, if it has one.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SQoS {
    pub kind: SQoSKind,
    pub value: Option<Bytes>,
}

/// Where an outbound action is delivered on a destination chain.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DestinationEntry {
    pub action_name: String,
    pub chain_name: String,
    pub contract_address: String,
    pub action_identifier: String,
}

/// A remote sender allowed to invoke `action_name` on this chain.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PermittedSender {
    pub chain_name: String,
    pub sender: String,
    pub action_name: Symbol,
}

/// An inbound cross-chain message, keyed by `(source_chain, id)`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Message {
    pub id: u64,
    pub source_chain: String,
    pub sender: String,
    pub signer: String,
    pub signatures: Vec<PorterSignature>,
    pub target_contract: Address,
    pub target_action: Symbol,
    pub payload: MessagePayload,
    pub value: i128,
    pub flags: u32,
}

impl Message {
    /// The hash porters sign: keccak256 of the domain separator followed by the XDR encoding of
    /// the message without its signatures.
    pub fn hash(&self, env: &Env, domain_separator: &BytesN<32>) -> BytesN<32> {
        let mut unsigned = self.clone();
        unsigned.signatures = Vec::new(env);

        let mut data: Bytes = domain_separator.clone().into();
        data.append(&unsigned.to_xdr(env));

        env.crypto().keccak256(&data).into()
    }

    pub fn context(&self) -> MessageContext {
        MessageContext {
            source_chain: self.source_chain.clone(),
            id: self.id,
            sender: self.sender.clone(),
            signer: self.signer.clone(),
        }
    }
}

/// Passed to the target action when a message is dispatched.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MessageContext {
    pub source_chain: String,
    pub id: u64,
    pub sender: String,
    pub signer: String,
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MessageStatus {
    Pending,
    Executed,
    Rejected,
}
