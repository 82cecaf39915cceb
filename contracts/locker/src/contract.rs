use cross_chain::executable::CrossChainExecutableInterface;
use cross_chain::types::{MessageContext, SQoS, SQoSKind};
use cross_chain::CrossChainClient;
use omnichain_payload::{item_value, AddressClassification, DecodedItem, Value};
use omnichain_std::events::Event;
use omnichain_std::interfaces;
use omnichain_std::ttl::extend_instance_ttl;
use omnichain_std::{ensure, Ownable};
use soroban_sdk::{contract, contractimpl, vec, Address, Env, String, Vec};

use crate::error::LockerError;
use crate::event::{TokenReceivedEvent, TokenSentEvent};
use crate::storage_types::DataKey;
use crate::token_handler;

const TRANSFER_ACTION: &str = "transfer_token";
const RECIPIENT_ITEM: &str = "to";
const AMOUNT_ITEM: &str = "num";

#[contract]
#[derive(Ownable)]
pub struct Locker;

#[contractimpl]
impl CrossChainExecutableInterface for Locker {
    fn cross_chain(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::CrossChain)
            .expect("cross-chain contract must be set during contract construction")
    }
}

#[contractimpl]
impl Locker {
    /// Every transfer requests the `Reveal` SQoS until the owner changes the settings.
    pub fn __constructor(env: Env, owner: Address, cross_chain: Address, token: Address) {
        interfaces::set_owner(&env, &owner);
        env.storage()
            .instance()
            .set(&DataKey::CrossChain, &cross_chain);
        env.storage().instance().set(&DataKey::Token, &token);

        Self::store_sqos(
            &env,
            vec![
                &env,
                SQoS {
                    kind: SQoSKind::Reveal,
                    value: None,
                },
            ],
        );
    }

    /// Gives up ownership for good. Owner-only functions become unreachable.
    pub fn renounce_ownership(env: Env) {
        interfaces::transfer_ownership::<Self>(&env, env.current_contract_address());
    }

    pub fn set_cross_chain(env: Env, cross_chain: Address) {
        Self::owner(&env).require_auth();

        env.storage()
            .instance()
            .set(&DataKey::CrossChain, &cross_chain);
        extend_instance_ttl(&env);
    }

    pub fn set_token(env: Env, token: Address) {
        Self::owner(&env).require_auth();

        env.storage().instance().set(&DataKey::Token, &token);
        extend_instance_ttl(&env);
    }

    /// SQoS settings attached to every outbound transfer.
    pub fn sqos(env: Env) -> Vec<SQoS> {
        CrossChainClient::new(&env, &Self::cross_chain(&env)).sqos(&env.current_contract_address())
    }

    /// Adds one SQoS item. A kind that is already set is rejected.
    pub fn insert_sqos(env: Env, item: SQoS) -> Result<(), LockerError> {
        Self::owner(&env).require_auth();

        let mut sqos = Self::sqos(env.clone());
        ensure!(
            !sqos.iter().any(|existing| existing.kind == item.kind),
            LockerError::DuplicateSQoS
        );
        sqos.push_back(item);

        Self::store_sqos(&env, sqos);
        Ok(())
    }

    /// Removes the SQoS item of `kind`, if set.
    pub fn remove_sqos(env: Env, kind: SQoSKind) {
        Self::owner(&env).require_auth();

        let mut sqos = Self::sqos(env.clone());
        if let Some(index) = sqos.iter().position(|existing| existing.kind == kind) {
            sqos.remove(index as u32);
        }

        Self::store_sqos(&env, sqos);
    }

    pub fn clear_sqos(env: Env) {
        Self::owner(&env).require_auth();

        Self::store_sqos(&env, Vec::new(&env));
    }

    /// Replaces all SQoS items. Each kind may appear once.
    pub fn set_sqos(env: Env, sqos: Vec<SQoS>) -> Result<(), LockerError> {
        Self::owner(&env).require_auth();

        for (index, item) in sqos.iter().enumerate() {
            ensure!(
                !sqos
                    .iter()
                    .skip(index + 1)
                    .any(|other| other.kind == item.kind),
                LockerError::DuplicateSQoS
            );
        }

        Self::store_sqos(&env, sqos);
        Ok(())
    }

    pub fn token(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Token)
            .expect("token must be set during contract construction")
    }

    /// Burns `amount` of the token from `caller` and sends it to `recipient` on
    /// `destination_chain`. Returns the outbound message id.
    pub fn transfer_token(
        env: Env,
        caller: Address,
        destination_chain: String,
        recipient: String,
        amount: i128,
    ) -> Result<u64, LockerError> {
        caller.require_auth();
        ensure!(amount > 0, LockerError::InvalidAmount);

        token_handler::take_token(&env, &Self::token(&env), &caller, amount);

        let id = CrossChainClient::new(&env, &Self::cross_chain(&env)).send(
            &env.current_contract_address(),
            &String::from_str(&env, TRANSFER_ACTION),
            &destination_chain,
            &recipient,
            &amount,
        );
        extend_instance_ttl(&env);

        TokenSentEvent {
            destination_chain,
            id,
            sender: caller,
            recipient,
            amount,
        }
        .emit(&env);

        Ok(id)
    }

    /// Mints the bridged amount to the recipient carried in `items`.
    /// Only the cross-chain contract may call this.
    pub fn receive_token(
        env: Env,
        context: MessageContext,
        items: Vec<DecodedItem>,
        _value: i128,
    ) -> Result<(), LockerError> {
        Self::validate(&env);

        let recipient = recipient(&item_value(&items, RECIPIENT_ITEM)?)?;
        let amount = match item_value(&items, AMOUNT_ITEM)? {
            Value::U128(amount) => {
                i128::try_from(amount).map_err(|_| LockerError::InvalidAmount)?
            }
            _ => return Err(LockerError::InvalidAmount),
        };
        ensure!(amount > 0, LockerError::InvalidAmount);

        token_handler::give_token(&env, &Self::token(&env), &recipient, amount);
        extend_instance_ttl(&env);

        TokenReceivedEvent {
            source_chain: context.source_chain,
            id: context.id,
            recipient,
            amount,
        }
        .emit(&env);

        Ok(())
    }
}

impl Locker {
    fn store_sqos(env: &Env, sqos: Vec<SQoS>) {
        CrossChainClient::new(env, &Self::cross_chain(env))
            .set_sqos(&env.current_contract_address(), &sqos);
    }
}

/// Stellar recipients travel as a strkey, either in a plain string item or in the native
/// address field of an address item.
fn recipient(value: &Value) -> Result<Address, LockerError> {
    let strkey = match value {
        Value::String(strkey) => strkey.clone(),
        Value::Address(data) => match AddressClassification::from_address_data(data)? {
            AddressClassification::Substrate(strkey) | AddressClassification::Near(strkey) => {
                strkey
            }
            AddressClassification::Evm(_) => return Err(LockerError::InvalidRecipient),
        },
        _ => return Err(LockerError::InvalidRecipient),
    };

    Ok(Address::from_string(&strkey))
}
