use omnichain_payload::PayloadError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum LockerError {
    InvalidAmount = 1,
    InvalidRecipient = 2,
    MissingItem = 3,
    DuplicateSQoS = 4,
}

impl From<PayloadError> for LockerError {
    fn from(error: PayloadError) -> Self {
        match error {
            PayloadError::ItemNotFound => Self::MissingItem,
            PayloadError::ValueOutOfRange => Self::InvalidAmount,
            _ => Self::InvalidRecipient,
        }
    }
}
