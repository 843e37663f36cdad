use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PackError>;

/// The disjoint failure modes of encoding and decoding.
///
/// Errors propagate up to the `pack`/`unpack` entry point; there is no
/// partial retry. A failed decode may leave the destination partially
/// mutated, and the caller must discard it.
#[derive(Error, Debug)]
pub enum PackError {
    /// The underlying byte sink or source failed.
    #[error("byte source/sink failure: {0}")]
    Io(#[from] io::Error),

    /// The source ran out of bytes before the value was fully decoded.
    #[error("end of stream before the value was fully decoded")]
    EndOfStream,

    /// A decode destination of the wrong concrete type, e.g. downcasting a
    /// dynamic field to a record type it does not hold.
    #[error("decode destination is not a {expected}")]
    InvalidTarget { expected: &'static str },

    /// A value the codec cannot carry on this host, e.g. a platform-sized
    /// integer wider than the host word.
    #[error("unsupported kind: {0}")]
    UnsupportedKind(&'static str),

    /// A dynamic field named a type key that was never registered.
    #[error("type key {0:?} is not registered")]
    UnknownType(String),

    /// A length prefix or flag byte that cannot be honored.
    #[error("corrupt stream: {0}")]
    Corrupt(String),
}
