//! Interface for contracts that receive dispatched cross-chain messages.
//!
//! The cross-chain contract calls the message's target action as
//! `fn action(env: Env, context: MessageContext, items: Vec<DecodedItem>, value: i128)`.
//! A target must call [`CrossChainExecutableInterface::validate`] before acting on the items.

use soroban_sdk::{Address, Env};

pub trait CrossChainExecutableInterface {
    /// Returns the address of the trusted cross-chain contract.
    fn cross_chain(env: &Env) -> Address;

    /// Ensures the current invocation was made by the trusted cross-chain contract.
    fn validate(env: &Env) {
        Self::cross_chain(env).require_auth();
    }
}
