#![no_std]

// Allows using std (and its macros) in test modules
#[cfg(test)]
#[macro_use]
extern crate std;

pub mod error;
pub mod executable;
pub mod types;

mod interface;

#[cfg(all(target_family = "wasm", feature = "testutils"))]
compile_error!("'testutils' feature is not supported on 'wasm' target");

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

#[cfg(test)]
mod test;

cfg_if::cfg_if! {
    if #[cfg(all(feature = "library", not(feature = "testutils")))] {
        pub use interface::{CrossChainClient, CrossChainInterface};
    } else {
        mod destination;
        mod event;
        mod permitted;
        mod porters;
        mod relay;
        mod sqos;
        mod storage_types;

        pub mod contract;
        pub use contract::{CrossChain, CrossChainClient};
        pub use interface::CrossChainInterface;
    }
}
