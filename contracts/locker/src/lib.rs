#![no_std]

mod contract;
pub mod error;
mod event;
mod storage_types;
mod token_handler;

#[cfg(test)]
extern crate std;

pub use contract::{Locker, LockerClient};
