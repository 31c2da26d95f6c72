//! Error and result types for VARPACK encoding and decoding

use std::io;

use thiserror::Error;

/// Encoding errors
#[derive(Error, Debug)]
pub enum EncodeError {
    /// Size index would need more bytes than the source type holds
    #[error("Not enough data: size index {size} exceeds {width}-byte source type")]
    NotEnoughData { size: u8, width: usize },

    #[error("Buffer too small: expected {expected}, got {actual}")]
    BufferTooSmall { expected: usize, actual: usize },

    /// The sink failed; bytes may already have been written
    #[error("Write error: {0}")]
    WriteError(#[source] io::Error),
}

/// Decoding errors
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("No first byte")]
    NoFirstByte,

    #[error("Result type too small: size index {size} exceeds {width}-byte target type")]
    ResultTypeTooSmall { size: u8, width: usize },

    /// Input ended before the sequence announced by the leading byte
    #[error("Not enough data: expected {expected}, got {actual}")]
    NotEnoughData { expected: usize, actual: usize },

    #[error("Read error: {0}")]
    ReadError(#[source] io::Error),
}

/// A successfully decoded value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded<T> {
    pub value: T,
    /// Bytes consumed, leading byte included
    pub size: usize,
}

impl<T> Decoded<T> {
    #[inline]
    pub fn new(value: T, size: usize) -> Self {
        Decoded { value, size }
    }
}

/// Result of an encode: bytes written
pub type EncodeResult = Result<usize, EncodeError>;

/// Result of a decode
pub type DecodeResult<T> = Result<Decoded<T>, DecodeError>;
