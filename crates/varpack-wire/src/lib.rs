//! VARPACK Wire Format - Self-describing variable-length integers
//!
//! Every encoded integer is 1 to 9 bytes. The leading byte alone tells
//! the decoder how long the sequence is:
//! - `0xxxxxxx`: 1 byte, 7 value bits in the leading byte
//! - `10xxxxxx`: 2 bytes, 6 bits in the leading byte + 1 trailing byte
//! - `110xxxxx`: 3 bytes
//! - ...
//! - `1111110x`: 7 bytes
//! - `11111110`: 8 bytes, 7 trailing bytes copied verbatim
//! - `11111111`: 9 bytes, 8 trailing bytes copied verbatim
//!
//! Trailing bytes are little-endian. Values are sized to the smallest
//! class that holds them, so small magnitudes (positive or negative) stay
//! small on the wire.

pub mod buf;
pub mod decoder;
pub mod encoder;
pub mod marker;

pub use buf::*;
pub use decoder::*;
pub use encoder::*;
pub use marker::*;

pub use varpack_core::{
    Decoded, DecodeError, DecodeResult, EncodeError, EncodeResult, PackInt, Signedness,
};
