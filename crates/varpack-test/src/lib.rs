//! VARPACK Test Harness - Codec validation
//!
//! This crate provides:
//! - Representative value sweeps (bit runs, class boundaries, seeded randoms)
//! - Cross-path agreement checks (stream, slice, `bytes`)
//! - Property tests and benchmarks over the wire crate

pub mod agreement;
pub mod sweep;

#[cfg(test)]
mod props;

pub use agreement::*;
pub use sweep::*;
