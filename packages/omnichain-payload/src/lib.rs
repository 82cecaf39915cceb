#![no_std]

#[cfg(test)]
extern crate std;

pub mod abi;
pub mod address;
pub mod error;
pub mod types;

pub use address::{classify, AddressClassification, InterfaceKind};
pub use error::PayloadError;
pub use types::{
    item_value, AddressData, DecodedItem, Item, MessagePayload, MsgType, Value,
    MSG_TYPE_SCHEMA_VERSION,
};
