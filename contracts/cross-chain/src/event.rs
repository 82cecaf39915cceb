use core::fmt::Debug;
use omnichain_payload::{InterfaceKind, MessagePayload};
use omnichain_std::events::Event;
use soroban_sdk::{Address, Bytes, BytesN, Env, IntoVal, String, Symbol, Topics, Val, Vec};

use crate::types::SQoS;

#[derive(Debug, PartialEq, Eq)]
pub struct DestinationRegisteredEvent {
    pub action_name: String,
    pub chain_name: String,
    pub contract_address: String,
    pub action_identifier: String,
}

#[derive(Debug, PartialEq, Eq)]
pub struct PermittedSenderRegisteredEvent {
    pub chain_name: String,
    pub sender: String,
    pub action_name: Symbol,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ChainInterfaceSetEvent {
    pub chain_name: String,
    pub kind: InterfaceKind,
}

#[derive(Debug, PartialEq, Eq)]
pub struct PortersChangedEvent {
    pub porters: Vec<BytesN<32>>,
    pub threshold: u32,
}

#[derive(Debug, PartialEq, Eq)]
pub struct MessageReceivedEvent {
    pub source_chain: String,
    pub id: u64,
    pub sender: String,
    pub target_contract: Address,
    pub target_action: Symbol,
}

#[derive(Debug, PartialEq, Eq)]
pub struct MessageAttestedEvent {
    pub source_chain: String,
    pub id: u64,
    pub signature_count: u32,
}

#[derive(Debug, PartialEq, Eq)]
pub struct MessageExecutedEvent {
    pub source_chain: String,
    pub id: u64,
}

#[derive(Debug, PartialEq, Eq)]
pub struct MessageRejectedEvent {
    pub source_chain: String,
    pub id: u64,
}

#[derive(Debug, PartialEq, Eq)]
pub struct MessageSentEvent {
    pub destination_chain: String,
    pub id: u64,
    pub sender: Address,
    pub contract_address: String,
    pub action_identifier: String,
    pub payload: MessagePayload,
    pub calldata: Bytes,
    pub sqos: Vec<SQoS>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct SQoSChangedEvent {
    pub sender: Address,
    pub sqos: Vec<SQoS>,
}

impl Event for DestinationRegisteredEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "destination_registered"),
            self.action_name.clone(),
            self.chain_name.clone(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.contract_address.clone(), self.action_identifier.clone())
    }
}

impl Event for PermittedSenderRegisteredEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "permitted_sender_registered"),
            self.chain_name.clone(),
            self.sender.clone(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.action_name.clone(),)
    }
}

impl Event for ChainInterfaceSetEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "chain_interface_set"),
            self.chain_name.clone(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.kind as u32,)
    }
}

impl Event for PortersChangedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (Symbol::new(env, "porters_changed"),)
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.porters.clone(), self.threshold)
    }
}

impl Event for MessageReceivedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "message_received"),
            self.source_chain.clone(),
            self.id,
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (
            self.sender.clone(),
            self.target_contract.clone(),
            self.target_action.clone(),
        )
    }
}

impl Event for MessageAttestedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "message_attested"),
            self.source_chain.clone(),
            self.id,
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.signature_count,)
    }
}

impl Event for MessageExecutedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "message_executed"),
            self.source_chain.clone(),
            self.id,
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {}
}

impl Event for MessageRejectedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "message_rejected"),
            self.source_chain.clone(),
            self.id,
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {}
}

impl Event for MessageSentEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "message_sent"),
            self.destination_chain.clone(),
            self.id,
            self.sender.clone(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (
            self.contract_address.clone(),
            self.action_identifier.clone(),
            self.payload.clone(),
            self.calldata.clone(),
            self.sqos.clone(),
        )
    }
}

impl Event for SQoSChangedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (Symbol::new(env, "sqos_changed"), self.sender.clone())
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.sqos.clone(),)
    }
}
