use omnichain_payload::{InterfaceKind, MessagePayload};
use omnichain_std::interfaces;
use omnichain_std::ttl::extend_instance_ttl;
use omnichain_std::Ownable;
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String, Symbol, Vec};

use crate::error::ContractError;
use crate::interface::CrossChainInterface;
use crate::types::{
    DestinationEntry, Message, MessageStatus, PermittedSender, PorterSet, PorterSignature, SQoS,
};
use crate::{destination, permitted, porters, relay, sqos};

#[contract]
#[derive(Ownable)]
pub struct CrossChain;

#[contractimpl]
impl CrossChain {
    pub fn __constructor(env: Env, owner: Address, domain_separator: BytesN<32>) {
        interfaces::set_owner(&env, &owner);
        relay::set_domain_separator(&env, &domain_separator);
    }
}

#[contractimpl]
impl CrossChainInterface for CrossChain {
    fn domain_separator(env: &Env) -> BytesN<32> {
        relay::domain_separator(env)
    }

    fn register_destination(
        env: &Env,
        action_name: String,
        chain_name: String,
        contract_address: String,
        action_identifier: String,
    ) -> Result<(), ContractError> {
        Self::owner(env).require_auth();

        destination::register(
            env,
            DestinationEntry {
                action_name,
                chain_name,
                contract_address,
                action_identifier,
            },
        );
        extend_instance_ttl(env);

        Ok(())
    }

    fn register_destinations(
        env: &Env,
        entries: Vec<DestinationEntry>,
    ) -> Result<(), ContractError> {
        Self::owner(env).require_auth();

        for entry in entries.iter() {
            destination::register(env, entry);
        }
        extend_instance_ttl(env);

        Ok(())
    }

    fn lookup(
        env: &Env,
        action_name: String,
        chain_name: String,
    ) -> Result<DestinationEntry, ContractError> {
        destination::lookup(env, &action_name, &chain_name)
    }

    fn set_chain_interface(
        env: &Env,
        chain_name: String,
        chain_type: u32,
    ) -> Result<(), ContractError> {
        Self::owner(env).require_auth();

        destination::set_chain_interface(env, chain_name, chain_type)?;
        extend_instance_ttl(env);

        Ok(())
    }

    fn chain_interface(env: &Env, chain_name: String) -> Option<InterfaceKind> {
        destination::chain_interface(env, &chain_name)
    }

    fn register_permitted_sender(
        env: &Env,
        chain_name: String,
        sender: String,
        action_name: Symbol,
    ) -> Result<(), ContractError> {
        Self::owner(env).require_auth();

        permitted::register(
            env,
            PermittedSender {
                chain_name,
                sender,
                action_name,
            },
        );
        extend_instance_ttl(env);

        Ok(())
    }

    fn register_permitted_senders(
        env: &Env,
        entries: Vec<PermittedSender>,
    ) -> Result<(), ContractError> {
        Self::owner(env).require_auth();

        for entry in entries.iter() {
            permitted::register(env, entry);
        }
        extend_instance_ttl(env);

        Ok(())
    }

    fn authorize(env: &Env, chain_name: String, sender: String) -> Result<Symbol, ContractError> {
        permitted::authorize(env, &chain_name, &sender)
    }

    fn set_porters(
        env: &Env,
        porters: Vec<BytesN<32>>,
        threshold: u32,
    ) -> Result<(), ContractError> {
        Self::owner(env).require_auth();

        porters::set_porters(env, porters, threshold)
    }

    fn porters(env: &Env) -> Option<PorterSet> {
        porters::porters(env)
    }

    fn verify(env: &Env, data_hash: BytesN<32>, signatures: Vec<PorterSignature>) -> bool {
        porters::verify(env, &data_hash, &signatures)
    }

    fn receive(env: &Env, message: Message) -> Result<(), ContractError> {
        relay::receive(env, message)?;
        extend_instance_ttl(env);

        Ok(())
    }

    fn attest(
        env: &Env,
        source_chain: String,
        id: u64,
        signatures: Vec<PorterSignature>,
    ) -> Result<(), ContractError> {
        relay::attest(env, source_chain, id, signatures)
    }

    fn execute(env: &Env, source_chain: String, id: u64) -> Result<MessageStatus, ContractError> {
        let status = match relay::execute(env, source_chain, id) {
            Ok(()) => MessageStatus::Executed,
            // the rejected status must persist, so this is not an error at the contract boundary
            Err(ContractError::DispatchFailed) => MessageStatus::Rejected,
            Err(error) => return Err(error),
        };
        extend_instance_ttl(env);

        Ok(status)
    }

    fn message(env: &Env, source_chain: String, id: u64) -> Option<Message> {
        relay::message_record(env, source_chain, id).map(|record| record.message)
    }

    fn message_status(env: &Env, source_chain: String, id: u64) -> Option<MessageStatus> {
        relay::message_record(env, source_chain, id).map(|record| record.status)
    }

    fn set_sqos(env: &Env, sender: Address, sqos: Vec<SQoS>) -> Result<(), ContractError> {
        sender.require_auth();

        sqos::set_sqos(env, &sender, sqos)?;
        extend_instance_ttl(env);

        Ok(())
    }

    fn sqos(env: &Env, sender: Address) -> Vec<SQoS> {
        sqos::sqos(env, &sender)
    }

    fn send(
        env: &Env,
        caller: Address,
        action_name: String,
        destination_chain: String,
        recipient: String,
        amount: i128,
    ) -> Result<u64, ContractError> {
        let id = relay::send(
            env,
            caller,
            action_name,
            destination_chain,
            recipient,
            amount,
        )?;
        extend_instance_ttl(env);

        Ok(id)
    }

    fn call_contract(
        env: &Env,
        caller: Address,
        action_name: String,
        destination_chain: String,
        payload: MessagePayload,
    ) -> Result<u64, ContractError> {
        let id = relay::call_contract(env, caller, action_name, destination_chain, payload)?;
        extend_instance_ttl(env);

        Ok(id)
    }
}
