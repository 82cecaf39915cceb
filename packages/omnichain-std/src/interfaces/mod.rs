mod ownable;
#[cfg(test)]
mod testdata;

pub use ownable::*;

/// Storage keys of the shared interfaces. The variant names break naming conventions on purpose,
/// so a contract key with a regular name can never collide with them.
mod storage {
    #![allow(non_camel_case_types)]

    use soroban_sdk::contracttype;

    #[contracttype]
    pub enum OwnerDataKey {
        Interfaces_Owner,
    }
}
