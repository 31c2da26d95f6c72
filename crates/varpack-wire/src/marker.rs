//! Leading-byte markers for the VARPACK wire format
//!
//! The leading byte starts with a unary length code: `S` one-bits, then a
//! zero-bit when `S <= 6`. `S` is the size index, the number of bytes
//! following the leading byte.

/// Largest size index
pub const MAX_SIZE_INDEX: u8 = 8;

/// Largest size index whose leading byte still carries value bits
pub const COMPACT_MAX_SIZE: u8 = 6;

/// Longest encoded sequence in bytes
pub const MAX_ENCODED_LEN: usize = MAX_SIZE_INDEX as usize + 1;

/// Leading-byte marker bits per size index
pub const LEAD_MARKERS: [u8; MAX_ENCODED_LEN] = [
    0b0000_0000,
    0b1000_0000,
    0b1100_0000,
    0b1110_0000,
    0b1111_0000,
    0b1111_1000,
    0b1111_1100,
    0b1111_1110,
    0b1111_1111,
];

/// Value bits left in the leading byte per size index
pub const LEAD_MASKS: [u8; MAX_ENCODED_LEN] = [
    0b0111_1111,
    0b0011_1111,
    0b0001_1111,
    0b0000_1111,
    0b0000_0111,
    0b0000_0011,
    0b0000_0001,
    0b0000_0000,
    0b0000_0000,
];

const fn build_payload_sizes() -> [u8; 256] {
    let mut sizes = [0u8; 256];
    let mut b = 0;
    while b < 256 {
        sizes[b] = (b as u8).leading_ones() as u8;
        b += 1;
    }
    sizes
}

/// Size index keyed by leading byte
pub static PAYLOAD_SIZES: [u8; 256] = build_payload_sizes();

/// How the value is laid out for a size index
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Regime {
    /// Low value bits share the leading byte with the marker
    Compact,
    /// Leading byte is a pure sentinel; trailing bytes are the raw value
    Verbatim,
}

impl Regime {
    #[inline]
    pub fn of(size: u8) -> Self {
        if size <= COMPACT_MAX_SIZE {
            Regime::Compact
        } else {
            Regime::Verbatim
        }
    }
}

/// Size index announced by a leading byte (0..=8)
#[inline]
pub fn payload_size_for(leading_byte: u8) -> u8 {
    PAYLOAD_SIZES[leading_byte as usize]
}

/// Total sequence length for a size index
#[inline]
pub fn encoded_len_for(size: u8) -> usize {
    size as usize + 1
}

/// Value bits carried by a sequence of the given size index
#[inline]
pub fn payload_bits_for(size: u8) -> u32 {
    match Regime::of(size) {
        Regime::Compact => 7 * (size as u32 + 1),
        Regime::Verbatim => 8 * size as u32,
    }
}
