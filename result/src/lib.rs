#![no_std]
#![warn(clippy::nursery, clippy::pedantic, clippy::all)]

extern crate alloc;

pub mod errors;
pub mod unwrap;

pub use errors::Result;
pub use unwrap::UnwrapFailure;
