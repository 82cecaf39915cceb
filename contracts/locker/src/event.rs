use core::fmt::Debug;
use omnichain_std::events::Event;
use soroban_sdk::{Address, Env, IntoVal, String, Symbol, Topics, Val};

#[derive(Debug, PartialEq, Eq)]
pub struct TokenSentEvent {
    pub destination_chain: String,
    pub id: u64,
    pub sender: Address,
    pub recipient: String,
    pub amount: i128,
}

#[derive(Debug, PartialEq, Eq)]
pub struct TokenReceivedEvent {
    pub source_chain: String,
    pub id: u64,
    pub recipient: Address,
    pub amount: i128,
}

impl Event for TokenSentEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "token_sent"),
            self.destination_chain.clone(),
            self.id,
            self.sender.clone(),
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.recipient.clone(), self.amount)
    }
}

impl Event for TokenReceivedEvent {
    fn topics(&self, env: &Env) -> impl Topics + Debug {
        (
            Symbol::new(env, "token_received"),
            self.source_chain.clone(),
            self.id,
        )
    }

    fn data(&self, _env: &Env) -> impl IntoVal<Env, Val> + Debug {
        (self.recipient.clone(), self.amount)
    }
}
