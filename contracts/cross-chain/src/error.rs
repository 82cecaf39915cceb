use omnichain_payload::PayloadError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    // Addressing
    UnsupportedChainFamily = 1,
    InvalidAddress = 2,
    // Registries
    DestinationNotRegistered = 3,
    SenderNotPermitted = 4,
    // Porters
    InvalidThreshold = 5,
    InvalidPorters = 6,
    QuorumNotMet = 7,
    MissingPorterSignature = 17,
    // Messages
    DuplicateMessage = 8,
    UnknownMessage = 9,
    AlreadyExecuted = 10,
    DispatchFailed = 11,
    InvalidAmount = 12,
    DuplicateSQoS = 18,
    // Payload
    MalformedBuffer = 13,
    UnsupportedMsgType = 14,
    ValueOutOfRange = 15,
    ItemNotFound = 16,
}

impl From<PayloadError> for ContractError {
    fn from(error: PayloadError) -> Self {
        match error {
            PayloadError::MalformedBuffer => Self::MalformedBuffer,
            PayloadError::UnsupportedMsgType => Self::UnsupportedMsgType,
            PayloadError::ValueOutOfRange => Self::ValueOutOfRange,
            PayloadError::ItemNotFound => Self::ItemNotFound,
            PayloadError::UnsupportedChainFamily => Self::UnsupportedChainFamily,
            PayloadError::InvalidAddress => Self::InvalidAddress,
        }
    }
}
