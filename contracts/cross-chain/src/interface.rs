use omnichain_payload::{InterfaceKind, MessagePayload};
use omnichain_std::interfaces::OwnableInterface;
use soroban_sdk::{contractclient, Address, BytesN, Env, String, Symbol, Vec};

use crate::error::ContractError;
use crate::types::{
    DestinationEntry, Message, MessageStatus, PermittedSender, PorterSet, PorterSignature, SQoS,
};

#[contractclient(name = "CrossChainClient")]
pub trait CrossChainInterface: OwnableInterface {
    /// Returns the domain separator mixed into every message hash.
    fn domain_separator(env: &Env) -> BytesN<32>;

    /// Registers the contract and method that handle `action_name` on `chain_name`.
    /// Replaces an existing entry for the same action and chain.
    ///
    /// Only callable by the contract owner.
    fn register_destination(
        env: &Env,
        action_name: String,
        chain_name: String,
        contract_address: String,
        action_identifier: String,
    ) -> Result<(), ContractError>;

    /// Registers a table of destinations in one call.
    ///
    /// Only callable by the contract owner.
    fn register_destinations(
        env: &Env,
        entries: Vec<DestinationEntry>,
    ) -> Result<(), ContractError>;

    /// Returns the destination registered for `action_name` on `chain_name`.
    ///
    /// # Errors
    /// - `ContractError::DestinationNotRegistered`: If no entry exists.
    fn lookup(
        env: &Env,
        action_name: String,
        chain_name: String,
    ) -> Result<DestinationEntry, ContractError>;

    /// Sets the address family of `chain_name`.
    ///
    /// Only callable by the contract owner.
    ///
    /// # Errors
    /// - `ContractError::UnsupportedChainFamily`: If `chain_type` is not a known interface kind.
    fn set_chain_interface(
        env: &Env,
        chain_name: String,
        chain_type: u32,
    ) -> Result<(), ContractError>;

    fn chain_interface(env: &Env, chain_name: String) -> Option<InterfaceKind>;

    /// Allows `sender` on `chain_name` to invoke the local `action_name`.
    ///
    /// Only callable by the contract owner.
    fn register_permitted_sender(
        env: &Env,
        chain_name: String,
        sender: String,
        action_name: Symbol,
    ) -> Result<(), ContractError>;

    /// Registers a table of permitted senders in one call.
    ///
    /// Only callable by the contract owner.
    fn register_permitted_senders(
        env: &Env,
        entries: Vec<PermittedSender>,
    ) -> Result<(), ContractError>;

    /// Returns the local action `sender` on `chain_name` is permitted to invoke.
    ///
    /// # Errors
    /// - `ContractError::SenderNotPermitted`: If the sender is not registered.
    fn authorize(env: &Env, chain_name: String, sender: String)
        -> Result<Symbol, ContractError>;

    /// Replaces the porter set and threshold.
    ///
    /// Only callable by the contract owner.
    ///
    /// # Errors
    /// - `ContractError::InvalidThreshold`: If `threshold` is zero or exceeds the number of porters.
    /// - `ContractError::InvalidPorters`: If the keys are not in strictly ascending order.
    fn set_porters(
        env: &Env,
        porters: Vec<BytesN<32>>,
        threshold: u32,
    ) -> Result<(), ContractError>;

    fn porters(env: &Env) -> Option<PorterSet>;

    /// Returns true if the signatures of distinct current porters over `data_hash` meet the threshold.
    fn verify(env: &Env, data_hash: BytesN<32>, signatures: Vec<PorterSignature>) -> bool;

    /// Stores an inbound message as pending, keeping only verified porter signatures.
    ///
    /// # Errors
    /// - `ContractError::MissingPorterSignature`: If no current porter signed the message.
    /// - `ContractError::SenderNotPermitted`: If the sender may not invoke the target action.
    /// - `ContractError::DuplicateMessage`: If a message with the same source chain and id exists.
    /// - `ContractError::MalformedBuffer`: If the payload does not decode.
    fn receive(env: &Env, message: Message) -> Result<(), ContractError>;

    /// Adds porter signatures to a pending message. Every signature of a current porter is
    /// verified before it is stored.
    fn attest(
        env: &Env,
        source_chain: String,
        id: u64,
        signatures: Vec<PorterSignature>,
    ) -> Result<(), ContractError>;

    /// Dispatches a pending message to its target once the porter quorum is met.
    ///
    /// Returns `MessageStatus::Executed`, or `MessageStatus::Rejected` if the target failed.
    /// A rejected message can never be executed again.
    ///
    /// # Errors
    /// - `ContractError::UnknownMessage`: If the message was never received.
    /// - `ContractError::AlreadyExecuted`: If the message is no longer pending.
    /// - `ContractError::QuorumNotMet`: If not enough porters signed. The message stays pending.
    fn execute(env: &Env, source_chain: String, id: u64) -> Result<MessageStatus, ContractError>;

    fn message(env: &Env, source_chain: String, id: u64) -> Option<Message>;

    fn message_status(env: &Env, source_chain: String, id: u64) -> Option<MessageStatus>;

    /// Replaces the SQoS settings attached to every outbound message of `sender`.
    ///
    /// Only callable by `sender`.
    ///
    /// # Errors
    /// - `ContractError::DuplicateSQoS`: If a kind appears more than once.
    fn set_sqos(env: &Env, sender: Address, sqos: Vec<SQoS>) -> Result<(), ContractError>;

    fn sqos(env: &Env, sender: Address) -> Vec<SQoS>;

    /// Emits a token transfer of `amount` to `recipient` on `destination_chain`.
    /// Returns the outbound message id.
    ///
    /// # Errors
    /// - `ContractError::DestinationNotRegistered`: If `action_name` has no destination on the chain.
    /// - `ContractError::UnsupportedChainFamily`: If the chain has no interface kind.
    /// - `ContractError::InvalidAddress`: If `recipient` is not valid for the chain family.
    fn send(
        env: &Env,
        caller: Address,
        action_name: String,
        destination_chain: String,
        recipient: String,
        amount: i128,
    ) -> Result<u64, ContractError>;

    /// Emits a message with an arbitrary payload. Returns the outbound message id.
    fn call_contract(
        env: &Env,
        caller: Address,
        action_name: String,
        destination_chain: String,
        payload: MessagePayload,
    ) -> Result<u64, ContractError>;
}
