//! Decoder for the VARPACK wire format
//!
//! The leading byte is looked up in `PAYLOAD_SIZES` to learn how many
//! trailing bytes follow. The target width is checked before anything is
//! consumed, so a stream positioned on a value too wide for `T` can be
//! retried with a wider type.

use std::io::{BufRead, ErrorKind};

use varpack_core::{DecodeError, DecodeResult, Decoded, PackInt};

use crate::{encoded_len_for, payload_bits_for, payload_size_for, Regime, LEAD_MASKS};

/// Reject size indexes that need more bytes than `T` holds
#[inline]
pub(crate) fn check_width<T: PackInt>(size: u8) -> Result<(), DecodeError> {
    if size as usize > T::WIDTH {
        tracing::trace!(size, width = T::WIDTH, "varpack value too wide for target");
        return Err(DecodeError::ResultTypeTooSmall {
            size,
            width: T::WIDTH,
        });
    }
    Ok(())
}

/// Rebuild a value from its leading byte and trailing bytes
///
/// `trailing.len()` must equal the size index announced by `lead`.
pub(crate) fn assemble<T: PackInt>(lead: u8, trailing: &[u8]) -> T {
    let size = trailing.len() as u8;

    let mut raw = [0u8; 8];
    raw[..trailing.len()].copy_from_slice(trailing);
    let high = u64::from_le_bytes(raw);

    let bits = match Regime::of(size) {
        Regime::Compact => (high << (7 - size as u32)) | (lead & LEAD_MASKS[size as usize]) as u64,
        Regime::Verbatim => high,
    };

    T::from_bits(extend(bits, payload_bits_for(size), T::SIGNEDNESS.is_signed()))
}

/// Sign-extend `bits` from bit `width - 1` when `signed`
#[inline]
fn extend(bits: u64, width: u32, signed: bool) -> u64 {
    if !signed || width >= 64 {
        return bits;
    }
    let unused = 64 - width;
    (((bits << unused) as i64) >> unused) as u64
}

/// Decode one value from a buffered stream
pub fn decode<T: PackInt, R: BufRead + ?Sized>(source: &mut R) -> DecodeResult<T> {
    let lead = peek_lead(source)?.ok_or(DecodeError::NoFirstByte)?;
    let size = payload_size_for(lead);
    check_width::<T>(size)?;
    source.consume(1);

    let mut trailing = [0u8; 8];
    let trailing = &mut trailing[..size as usize];
    read_trailing(source, trailing)?;

    Ok(Decoded::new(assemble(lead, trailing), encoded_len_for(size)))
}

/// Decode one value from the start of `buffer`
pub fn decode_from_buffer<T: PackInt>(buffer: &[u8]) -> DecodeResult<T> {
    let lead = *buffer.first().ok_or(DecodeError::NoFirstByte)?;
    let size = payload_size_for(lead);
    check_width::<T>(size)?;

    let len = encoded_len_for(size);
    if buffer.len() < len {
        return Err(DecodeError::NotEnoughData {
            expected: len,
            actual: buffer.len(),
        });
    }

    Ok(Decoded::new(assemble(lead, &buffer[1..len]), len))
}

fn peek_lead<R: BufRead + ?Sized>(source: &mut R) -> Result<Option<u8>, DecodeError> {
    loop {
        match source.fill_buf() {
            Ok(buf) => return Ok(buf.first().copied()),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                tracing::debug!("varpack read failed on leading byte: {}", e);
                return Err(DecodeError::ReadError(e));
            }
        }
    }
}

fn read_trailing<R: BufRead + ?Sized>(source: &mut R, buf: &mut [u8]) -> Result<(), DecodeError> {
    let mut filled = 0;
    while filled < buf.len() {
        match source.read(&mut buf[filled..]) {
            Ok(0) => {
                return Err(DecodeError::NotEnoughData {
                    expected: buf.len() + 1,
                    actual: filled + 1,
                })
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => {
                tracing::debug!("varpack read failed after {} trailing bytes: {}", filled, e);
                return Err(DecodeError::ReadError(e));
            }
        }
    }
    Ok(())
}
