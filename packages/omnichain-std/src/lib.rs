#![no_std]
#[cfg(any(test, feature = "testutils"))]
extern crate std;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

#[cfg(any(test, feature = "testutils"))]
pub use testutils::*;

pub mod error;

pub mod events;

pub mod interfaces;

pub mod traits;

pub mod ttl;

#[cfg(feature = "derive")]
pub use omnichain_std_derive::*;
