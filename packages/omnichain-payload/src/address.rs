use omnichain_std::ensure;
use omnichain_std::traits::ThenOk;
use soroban_sdk::{contracttype, BytesN, Env, String};

use crate::error::PayloadError;

const EVM_ADDRESS_LEN: usize = 20;
const EVM_HEX_LEN: usize = 2 * EVM_ADDRESS_LEN;
const MAX_NATIVE_ADDRESS_LEN: u32 = 64;

/// Address family of a chain. The discriminant is the `chain_type` code carried on the wire.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum InterfaceKind {
    Evm = 1,
    /// Substrate / ink! chains
    Ink = 2,
    Near = 3,
}

impl TryFrom<u32> for InterfaceKind {
    type Error = PayloadError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Evm),
            2 => Ok(Self::Ink),
            3 => Ok(Self::Near),
            _ => Err(PayloadError::UnsupportedChainFamily),
        }
    }
}

/// Wire form of an [`AddressClassification`]. Fields of the unselected families hold the
/// sentinels: a zero `evm_address` and an empty `other_address`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AddressData {
    pub chain_type: u32,
    pub evm_address: BytesN<20>,
    pub other_address: String,
}

/// A recipient address resolved for exactly one chain family.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AddressClassification {
    Evm(BytesN<20>),
    Substrate(String),
    Near(String),
}

impl AddressClassification {
    pub const fn kind(&self) -> InterfaceKind {
        match self {
            Self::Evm(_) => InterfaceKind::Evm,
            Self::Substrate(_) => InterfaceKind::Ink,
            Self::Near(_) => InterfaceKind::Near,
        }
    }

    pub fn to_address_data(&self, env: &Env) -> AddressData {
        let (evm_address, other_address) = match self {
            Self::Evm(address) => (address.clone(), String::from_str(env, "")),
            Self::Substrate(address) | Self::Near(address) => {
                (BytesN::from_array(env, &[0; EVM_ADDRESS_LEN]), address.clone())
            }
        };

        AddressData {
            chain_type: self.kind() as u32,
            evm_address,
            other_address,
        }
    }

    /// Rejects address data whose unselected fields are not sentinels.
    pub fn from_address_data(data: &AddressData) -> Result<Self, PayloadError> {
        let kind = InterfaceKind::try_from(data.chain_type)?;
        let evm_is_zero = data.evm_address.to_array() == [0; EVM_ADDRESS_LEN];

        match kind {
            InterfaceKind::Evm => {
                ensure!(data.other_address.is_empty(), PayloadError::InvalidAddress);
                Ok(Self::Evm(data.evm_address.clone()))
            }
            InterfaceKind::Ink | InterfaceKind::Near => {
                ensure!(evm_is_zero, PayloadError::InvalidAddress);
                let address = native_address(&data.other_address)?;

                Ok(match kind {
                    InterfaceKind::Ink => Self::Substrate(address),
                    _ => Self::Near(address),
                })
            }
        }
    }
}

/// Resolves `raw` for a chain of the given interface kind.
pub fn classify(
    env: &Env,
    interface_kind: u32,
    raw: &String,
) -> Result<AddressClassification, PayloadError> {
    match InterfaceKind::try_from(interface_kind)? {
        InterfaceKind::Evm => parse_evm_address(env, raw).map(AddressClassification::Evm),
        InterfaceKind::Ink => native_address(raw).map(AddressClassification::Substrate),
        InterfaceKind::Near => native_address(raw).map(AddressClassification::Near),
    }
}

/// Accepts 40 hex digits with an optional `0x` prefix.
fn parse_evm_address(env: &Env, raw: &String) -> Result<BytesN<20>, PayloadError> {
    let len = raw.len() as usize;
    ensure!(
        len == EVM_HEX_LEN || len == EVM_HEX_LEN + 2,
        PayloadError::InvalidAddress
    );

    let mut text = [0u8; EVM_HEX_LEN + 2];
    raw.copy_into_slice(&mut text[..len]);
    let digits = text[..len]
        .strip_prefix(b"0x")
        .unwrap_or(&text[..len]);

    let mut address = [0u8; EVM_ADDRESS_LEN];
    hex::decode_to_slice(digits, &mut address).map_err(|_| PayloadError::InvalidAddress)?;

    Ok(BytesN::from_array(env, &address))
}

fn native_address(raw: &String) -> Result<String, PayloadError> {
    (!raw.is_empty() && raw.len() <= MAX_NATIVE_ADDRESS_LEN)
        .then_ok(raw.clone(), PayloadError::InvalidAddress)
}
