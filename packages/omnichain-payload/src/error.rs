use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PayloadError {
    /// Offset or length out of bounds, or a length that is not a word multiple
    MalformedBuffer = 1,
    UnsupportedMsgType = 2,
    /// A value does not fit the width declared by its type
    ValueOutOfRange = 3,
    ItemNotFound = 4,
    UnsupportedChainFamily = 5,
    InvalidAddress = 6,
}
