//! VARPACK Core - Size classes and shared vocabulary
//!
//! This crate defines the pieces every VARPACK codec path relies on:
//! - Size classes (the eight nested 7-bit-per-byte ranges)
//! - The `PackInt` abstraction over native integers
//! - Encode/decode result and error types

pub mod class;
pub mod error;
pub mod int;

pub use class::*;
pub use error::*;
pub use int::*;
