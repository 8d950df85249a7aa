use thiserror::Error;

/// Errors returned while decoding a datagram.
///
/// All variants are local to the one datagram being decoded; the receive
/// loop reports them and keeps running.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("packet too short: need {needed} bytes, got {actual}")]
    Truncated { needed: usize, actual: usize },
    #[error("malformed packet: {context} at offset {offset}")]
    Malformed { context: &'static str, offset: usize },
    #[error("invalid address: must start with '/'")]
    InvalidAddress,
    #[error("invalid type tag string: must start with ','")]
    InvalidTypeTags,
    #[error("unknown type tag '{tag}'")]
    UnknownType { tag: char },
    #[error("invalid bundle element length {length}")]
    InvalidLength { length: i32 },
}

/// Errors returned while encoding a message or bundle.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    #[error("type tag count {tags} does not match argument count {arguments}")]
    ArityMismatch { tags: usize, arguments: usize },
    #[error("argument {index} does not match type tag '{tag}'")]
    TagMismatch { index: usize, tag: char },
    #[error("unknown type tag '{tag}'")]
    UnknownType { tag: char },
    #[error("buffer too small: need {needed} bytes, got {capacity}")]
    BufferTooSmall { needed: usize, capacity: usize },
}
