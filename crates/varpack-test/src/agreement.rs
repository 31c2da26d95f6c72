//! Cross-path agreement checks
//!
//! A value is only considered correctly coded when the stream, slice and
//! `BufMut` encoders emit identical bytes, and the stream, slice and `Buf`
//! decoders all recover the value from them.

use std::fmt;

use bytes::{Bytes, BytesMut};
use thiserror::Error;

use varpack_core::{DecodeError, EncodeError, PackInt};
use varpack_wire::{
    decode, decode_from_buffer, encode, encode_to_buffer, size_for, PackBuf, PackBufMut,
    MAX_ENCODED_LEN,
};

use crate::sweep::{bit_sweep, class_boundaries};

/// Which codec path produced a result
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodecPath {
    Stream,
    Buffer,
    Bytes,
}

impl fmt::Display for CodecPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecPath::Stream => write!(f, "stream"),
            CodecPath::Buffer => write!(f, "buffer"),
            CodecPath::Bytes => write!(f, "bytes"),
        }
    }
}

/// Disagreement between codec paths
#[derive(Error, Debug)]
pub enum AgreementError {
    #[error("Encode failed: {0}")]
    Encode(#[from] EncodeError),

    #[error("{path} decode failed: {source}")]
    Decode {
        path: CodecPath,
        #[source]
        source: DecodeError,
    },

    #[error("{path} wrote {actual:02x?}, stream wrote {expected:02x?}")]
    BytesDiffer {
        path: CodecPath,
        expected: Vec<u8>,
        actual: Vec<u8>,
    },

    #[error("{path} decoded {actual} instead of {expected}")]
    ValueMismatch {
        path: CodecPath,
        expected: String,
        actual: String,
    },

    #[error("{path} consumed {consumed} bytes, {written} were written")]
    SizeMismatch {
        path: CodecPath,
        written: usize,
        consumed: usize,
    },

    #[error("Size index {size} is not minimal for {value}")]
    NotMinimal { size: u8, value: String },
}

fn decode_error(path: CodecPath) -> impl FnOnce(DecodeError) -> AgreementError {
    move |source| AgreementError::Decode { path, source }
}

fn verify<T: PackInt>(
    path: CodecPath,
    value: T,
    written: usize,
    decoded: T,
    consumed: usize,
) -> Result<(), AgreementError> {
    if decoded != value {
        return Err(AgreementError::ValueMismatch {
            path,
            expected: format!("{:?}", value),
            actual: format!("{:?}", decoded),
        });
    }
    if consumed != written {
        return Err(AgreementError::SizeMismatch {
            path,
            written,
            consumed,
        });
    }
    Ok(())
}

/// Encode `value` on every path, cross-decode, and return the encoded length
pub fn check_roundtrip<T: PackInt>(value: T) -> Result<usize, AgreementError> {
    let size = size_for(value);
    if size > 0 && T::SIGNEDNESS.classes()[size as usize - 1].contains(value.to_i128()) {
        return Err(AgreementError::NotMinimal {
            size,
            value: format!("{:?}", value),
        });
    }

    let mut stream = Vec::new();
    let written = encode(value, &mut stream)?;

    let mut buffer = [0u8; MAX_ENCODED_LEN];
    let buffered = encode_to_buffer(value, &mut buffer)?;
    if buffer[..buffered] != stream[..] {
        return Err(AgreementError::BytesDiffer {
            path: CodecPath::Buffer,
            expected: stream,
            actual: buffer[..buffered].to_vec(),
        });
    }

    let mut packed = BytesMut::new();
    packed.put_packed(value)?;
    if packed[..] != stream[..] {
        return Err(AgreementError::BytesDiffer {
            path: CodecPath::Bytes,
            expected: stream,
            actual: packed.to_vec(),
        });
    }

    // Each decoder reads bytes produced by a different encoder
    let mut source = &buffer[..buffered];
    let decoded = decode::<T, _>(&mut source).map_err(decode_error(CodecPath::Stream))?;
    verify(CodecPath::Stream, value, written, decoded.value, decoded.size)?;

    let decoded = decode_from_buffer::<T>(&packed).map_err(decode_error(CodecPath::Buffer))?;
    verify(CodecPath::Buffer, value, written, decoded.value, decoded.size)?;

    let mut input = Bytes::from(stream);
    let decoded = input
        .get_packed::<T>()
        .map_err(decode_error(CodecPath::Bytes))?;
    verify(CodecPath::Bytes, value, written, decoded.value, decoded.size)?;

    Ok(written)
}

/// Run `check_roundtrip` over the bit sweep and class boundaries of `T`,
/// returning how many values were checked
pub fn check_sweep<T: PackInt>() -> Result<usize, AgreementError> {
    let values: Vec<T> = bit_sweep::<T>()
        .into_iter()
        .chain(class_boundaries::<T>())
        .collect();

    for &value in &values {
        check_roundtrip(value)?;
    }
    Ok(values.len())
}
