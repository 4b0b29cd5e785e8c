#![deny(unsafe_op_in_unsafe_fn)]
#![doc = include_str!("./lib.md")]
#![cfg_attr(not(test), no_std)] // Link `std` only when building a test (`cfg(test)`)

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

mod ctx;
pub mod heap;
pub mod sift;
#[cfg(test)]
mod test_utils;

pub use self::ctx::*;
