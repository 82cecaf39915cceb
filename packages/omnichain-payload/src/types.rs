extern crate alloc;

use omnichain_std::ensure;
use soroban_sdk::{contracttype, Bytes, Env, String, Vec};

use crate::abi;
use crate::error::PayloadError;

pub use crate::address::AddressData;

/// Version of the `msg_type` code table below. Any change to the table must bump it.
pub const MSG_TYPE_SCHEMA_VERSION: u32 = 1;

/// Type tag carried by every [`Item`] on the wire.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum MsgType {
    String = 0,
    U8 = 1,
    U16 = 2,
    U32 = 3,
    U64 = 4,
    U128 = 5,
    I8 = 6,
    I16 = 7,
    I32 = 8,
    I64 = 9,
    I128 = 10,
    StringArray = 11,
    U8Array = 12,
    U16Array = 13,
    U32Array = 14,
    U64Array = 15,
    U128Array = 16,
    I8Array = 17,
    I16Array = 18,
    I32Array = 19,
    I64Array = 20,
    I128Array = 21,
    Address = 22,
    Bytes = 23,
}

impl MsgType {
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Dynamic types are stored behind an offset word in the head of a buffer.
    pub const fn is_dynamic(self) -> bool {
        !matches!(
            self,
            Self::U8
                | Self::U16
                | Self::U32
                | Self::U64
                | Self::U128
                | Self::I8
                | Self::I16
                | Self::I32
                | Self::I64
                | Self::I128
        )
    }
}

impl TryFrom<u32> for MsgType {
    type Error = PayloadError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        let msg_type = match code {
            0 => Self::String,
            1 => Self::U8,
            2 => Self::U16,
            3 => Self::U32,
            4 => Self::U64,
            5 => Self::U128,
            6 => Self::I8,
            7 => Self::I16,
            8 => Self::I32,
            9 => Self::I64,
            10 => Self::I128,
            11 => Self::StringArray,
            12 => Self::U8Array,
            13 => Self::U16Array,
            14 => Self::U32Array,
            15 => Self::U64Array,
            16 => Self::U128Array,
            17 => Self::I8Array,
            18 => Self::I16Array,
            19 => Self::I32Array,
            20 => Self::I64Array,
            21 => Self::I128Array,
            22 => Self::Address,
            23 => Self::Bytes,
            _ => return Err(PayloadError::UnsupportedMsgType),
        };

        Ok(msg_type)
    }
}

/// A typed argument value. Narrow integer types are widened to the smallest host type that holds
/// them and range-checked when encoded.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    String(String),
    U8(u32),
    U16(u32),
    U32(u32),
    U64(u64),
    U128(u128),
    I8(i32),
    I16(i32),
    I32(i32),
    I64(i64),
    I128(i128),
    StringArray(Vec<String>),
    U8Array(Bytes),
    U16Array(Vec<u32>),
    U32Array(Vec<u32>),
    U64Array(Vec<u64>),
    U128Array(Vec<u128>),
    I8Array(Vec<i32>),
    I16Array(Vec<i32>),
    I32Array(Vec<i32>),
    I64Array(Vec<i64>),
    I128Array(Vec<i128>),
    Address(AddressData),
    Bytes(Bytes),
}

impl Value {
    pub const fn msg_type(&self) -> MsgType {
        match self {
            Self::String(_) => MsgType::String,
            Self::U8(_) => MsgType::U8,
            Self::U16(_) => MsgType::U16,
            Self::U32(_) => MsgType::U32,
            Self::U64(_) => MsgType::U64,
            Self::U128(_) => MsgType::U128,
            Self::I8(_) => MsgType::I8,
            Self::I16(_) => MsgType::I16,
            Self::I32(_) => MsgType::I32,
            Self::I64(_) => MsgType::I64,
            Self::I128(_) => MsgType::I128,
            Self::StringArray(_) => MsgType::StringArray,
            Self::U8Array(_) => MsgType::U8Array,
            Self::U16Array(_) => MsgType::U16Array,
            Self::U32Array(_) => MsgType::U32Array,
            Self::U64Array(_) => MsgType::U64Array,
            Self::U128Array(_) => MsgType::U128Array,
            Self::I8Array(_) => MsgType::I8Array,
            Self::I16Array(_) => MsgType::I16Array,
            Self::I32Array(_) => MsgType::I32Array,
            Self::I64Array(_) => MsgType::I64Array,
            Self::I128Array(_) => MsgType::I128Array,
            Self::Address(_) => MsgType::Address,
            Self::Bytes(_) => MsgType::Bytes,
        }
    }
}

/// One encoded argument. `value` is the word-aligned encoding of a single value.
/// `name` comes from the action's argument schema and is not part of the encoded bytes.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Item {
    pub name: String,
    pub msg_type: u32,
    pub value: Bytes,
}

impl Item {
    pub fn new(env: &Env, name: String, value: &Value) -> Result<Self, PayloadError> {
        Ok(Self {
            name,
            msg_type: value.msg_type().code(),
            value: abi::encode_value(env, value)?,
        })
    }

    /// Decodes the item value. Only canonical encodings are accepted.
    pub fn decode(&self, env: &Env) -> Result<Value, PayloadError> {
        let msg_type = MsgType::try_from(self.msg_type)?;
        let value = abi::decode_value(env, msg_type, &self.value)?;

        ensure!(
            abi::encode_value(env, &value)? == self.value,
            PayloadError::MalformedBuffer
        );

        Ok(value)
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecodedItem {
    pub name: String,
    pub value: Value,
}

/// Ordered argument list of a cross-chain call.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MessagePayload {
    pub items: Vec<Item>,
}

impl MessagePayload {
    pub fn new(env: &Env) -> Self {
        Self {
            items: Vec::new(env),
        }
    }

    pub fn push_item(&mut self, env: &Env, name: &str, value: &Value) -> Result<(), PayloadError> {
        self.items
            .push_back(Item::new(env, String::from_str(env, name), value)?);
        Ok(())
    }

    /// Returns the first item called `name`.
    pub fn get_item(&self, name: &String) -> Result<Item, PayloadError> {
        self.items
            .iter()
            .find(|item| item.name == *name)
            .ok_or(PayloadError::ItemNotFound)
    }

    pub fn decode(&self, env: &Env) -> Result<Vec<DecodedItem>, PayloadError> {
        let mut decoded = Vec::new(env);
        for item in self.items.iter() {
            decoded.push_back(DecodedItem {
                value: item.decode(env)?,
                name: item.name,
            });
        }

        Ok(decoded)
    }

    /// Encodes the item values as one parameter list, the calldata form EVM targets consume.
    pub fn calldata(&self, env: &Env) -> Result<Bytes, PayloadError> {
        let mut values = Vec::new(env);
        for item in self.items.iter() {
            values.push_back(item.decode(env)?);
        }

        abi::encode_params(env, &values)
    }

    /// Rebuilds a payload from calldata. Item names and types come from the action's schema.
    pub fn from_calldata(
        env: &Env,
        schema: &[(&str, MsgType)],
        calldata: &Bytes,
    ) -> Result<Self, PayloadError> {
        let msg_types: alloc::vec::Vec<MsgType> =
            schema.iter().map(|(_, msg_type)| *msg_type).collect();
        let values = abi::decode_params(env, &msg_types, calldata)?;

        let mut payload = Self::new(env);
        for ((name, _), value) in schema.iter().zip(values.iter()) {
            payload.push_item(env, name, &value)?;
        }

        Ok(payload)
    }

    pub fn from_decoded(env: &Env, items: &Vec<DecodedItem>) -> Result<Self, PayloadError> {
        let mut payload = Self::new(env);
        for DecodedItem { name, value } in items.iter() {
            payload.items.push_back(Item::new(env, name, &value)?);
        }

        Ok(payload)
    }
}

/// Returns the value of the first decoded item called `name`.
pub fn item_value(items: &Vec<DecodedItem>, name: &str) -> Result<Value, PayloadError> {
    let name = String::from_str(items.env(), name);

    items
        .iter()
        .find(|item| item.name == name)
        .map(|item| item.value)
        .ok_or(PayloadError::ItemNotFound)
}
