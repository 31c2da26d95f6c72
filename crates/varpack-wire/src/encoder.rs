//! Encoder for the VARPACK wire format
//!
//! Encoding picks the smallest size class that holds the value, then lays
//! the value out as described in the crate docs. All write paths share
//! `Packed`, so a stream, a slice and a `BufMut` always receive the same
//! bytes.

use std::io::Write;

use varpack_core::{EncodeError, EncodeResult, PackInt};

use crate::{encoded_len_for, Regime, LEAD_MARKERS, LEAD_MASKS, MAX_ENCODED_LEN};

/// Smallest size index able to carry `value`
///
/// Starts at the class matching the native width and walks down while the
/// value still fits the next-smaller class.
pub fn size_for<T: PackInt>(value: T) -> u8 {
    let classes = T::SIGNEDNESS.classes();
    let value = value.to_i128();
    let mut index = T::WIDTH - 1;

    loop {
        let class = &classes[index];
        if !class.contains(value) {
            return index as u8 + 1;
        }
        if index == 0 {
            return 0;
        }
        if !class.previous_contains(value) {
            return index as u8;
        }
        index -= 1;
    }
}

/// Bytes `value` occupies on the wire
#[inline]
pub fn encoded_len<T: PackInt>(value: T) -> usize {
    encoded_len_for(size_for(value))
}

/// An encoded integer, held on the stack
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Packed {
    bytes: [u8; MAX_ENCODED_LEN],
    size: u8,
}

impl Packed {
    /// Encode `value`
    pub fn new<T: PackInt>(value: T) -> Result<Self, EncodeError> {
        let size = size_for(value);
        if size as usize > T::WIDTH {
            return Err(EncodeError::NotEnoughData {
                size,
                width: T::WIDTH,
            });
        }

        let bits = value.to_bits();
        let trailing_len = size as usize;
        let mut bytes = [0u8; MAX_ENCODED_LEN];

        match Regime::of(size) {
            Regime::Compact => {
                let shift = 7 - size as u32;
                bytes[0] = LEAD_MARKERS[size as usize] | (bits as u8 & LEAD_MASKS[size as usize]);
                bytes[1..=trailing_len].copy_from_slice(&(bits >> shift).to_le_bytes()[..trailing_len]);
            }
            Regime::Verbatim => {
                bytes[0] = LEAD_MARKERS[size as usize];
                bytes[1..=trailing_len].copy_from_slice(&bits.to_le_bytes()[..trailing_len]);
            }
        }

        Ok(Packed { bytes, size })
    }

    /// Size index (bytes after the leading byte)
    #[inline]
    pub fn size_index(&self) -> u8 {
        self.size
    }

    /// Total encoded length
    #[inline]
    pub fn len(&self) -> usize {
        encoded_len_for(self.size)
    }

    /// Never true; an encoding always has a leading byte
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }
}

impl AsRef<[u8]> for Packed {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl std::fmt::Debug for Packed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Packed(S={}, {:02x?})", self.size, self.as_bytes())
    }
}

/// Encode `value` into a stream
///
/// On `WriteError` part of the sequence may already be in the sink.
pub fn encode<T: PackInt, W: Write + ?Sized>(value: T, sink: &mut W) -> EncodeResult {
    let packed = Packed::new(value)?;

    sink.write_all(packed.as_bytes()).map_err(|e| {
        tracing::debug!("varpack write failed after encoding {:?}: {}", packed, e);
        EncodeError::WriteError(e)
    })?;

    Ok(packed.len())
}

/// Encode `value` at the start of `buffer`
///
/// Nothing is written unless the whole sequence fits.
pub fn encode_to_buffer<T: PackInt>(value: T, buffer: &mut [u8]) -> EncodeResult {
    let packed = Packed::new(value)?;
    let len = packed.len();

    if buffer.len() < len {
        return Err(EncodeError::BufferTooSmall {
            expected: len,
            actual: buffer.len(),
        });
    }

    buffer[..len].copy_from_slice(packed.as_bytes());
    Ok(len)
}
