//! Native integer types accepted by the codec
//!
//! `PackInt` is implemented for the eight native integers of 1, 2, 4 and 8
//! bytes. It exposes just enough to pick a size class and move bits
//! between the value and the wire.

use crate::Signedness;

mod private {
    pub trait Sealed {}
}

/// Integer type that can be packed
pub trait PackInt: private::Sealed + Copy + Eq + std::fmt::Debug {
    /// Native width in bytes
    const WIDTH: usize;

    const SIGNEDNESS: Signedness;

    /// Lossless widening used for range checks
    fn to_i128(self) -> i128;

    /// Two's-complement bit pattern, sign-extended to 64 bits for signed types
    fn to_bits(self) -> u64;

    /// Truncating inverse of `to_bits`
    fn from_bits(bits: u64) -> Self;
}

macro_rules! impl_pack_int {
    ($signedness:expr, $wide:ty => $($t:ty),+) => {
        $(
            impl private::Sealed for $t {}

            impl PackInt for $t {
                const WIDTH: usize = std::mem::size_of::<$t>();
                const SIGNEDNESS: Signedness = $signedness;

                #[inline]
                fn to_i128(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn to_bits(self) -> u64 {
                    self as $wide as u64
                }

                #[inline]
                fn from_bits(bits: u64) -> Self {
                    bits as $t
                }
            }
        )+
    };
}

impl_pack_int!(Signedness::Signed, i64 => i8, i16, i32, i64);
impl_pack_int!(Signedness::Unsigned, u64 => u8, u16, u32, u64);
