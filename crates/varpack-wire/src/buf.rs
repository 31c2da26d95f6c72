//! `bytes::Buf` / `bytes::BufMut` extensions
//!
//! ```
//! use bytes::BytesMut;
//! use varpack_wire::{PackBuf, PackBufMut};
//!
//! let mut out = BytesMut::new();
//! for v in [1i32, -300, 70_000] {
//!     out.put_packed(v).unwrap();
//! }
//!
//! let mut input = out.freeze();
//! assert_eq!(input.get_packed::<i32>().unwrap().value, 1);
//! assert_eq!(input.get_packed::<i32>().unwrap().value, -300);
//! assert_eq!(input.get_packed::<i32>().unwrap().value, 70_000);
//! ```

use bytes::{Buf, BufMut};

use varpack_core::{DecodeError, DecodeResult, Decoded, EncodeError, EncodeResult, PackInt};

use crate::decoder::{assemble, check_width};
use crate::{encoded_len_for, payload_size_for, Packed};

/// Packed-integer writes for any `BufMut`
pub trait PackBufMut: BufMut {
    /// Put `value` in its packed form, returning the bytes written
    ///
    /// Nothing is written if the remaining capacity is too small.
    fn put_packed<T: PackInt>(&mut self, value: T) -> EncodeResult {
        let packed = Packed::new(value)?;
        if self.remaining_mut() < packed.len() {
            return Err(EncodeError::BufferTooSmall {
                expected: packed.len(),
                actual: self.remaining_mut(),
            });
        }
        self.put_slice(packed.as_bytes());
        Ok(packed.len())
    }
}

impl<B: BufMut + ?Sized> PackBufMut for B {}

/// Packed-integer reads for any `Buf`
pub trait PackBuf: Buf {
    /// Read one packed value
    ///
    /// The buffer is only advanced on success.
    fn get_packed<T: PackInt>(&mut self) -> DecodeResult<T> {
        if !self.has_remaining() {
            return Err(DecodeError::NoFirstByte);
        }
        let lead = self.chunk()[0];
        let size = payload_size_for(lead);
        check_width::<T>(size)?;

        let len = encoded_len_for(size);
        if self.remaining() < len {
            return Err(DecodeError::NotEnoughData {
                expected: len,
                actual: self.remaining(),
            });
        }

        self.advance(1);
        let mut trailing = [0u8; 8];
        let trailing = &mut trailing[..size as usize];
        self.copy_to_slice(trailing);

        Ok(Decoded::new(assemble(lead, trailing), len))
    }
}

impl<B: Buf + ?Sized> PackBuf for B {}
