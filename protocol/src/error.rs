use thiserror::Error;

use crate::header::MessageType;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("truncated message: needed {needed} more bytes, {available} available")]
    Truncated { needed: usize, available: usize },

    #[error("bad magic bytes: {0:02x?}")]
    BadMagic([u8; 4]),

    #[error("unsupported protocol version: {0}")]
    UnsupportedVersion(u8),

    #[error("unknown message type: {0}")]
    UnknownMessageType(u8),

    #[error("expected {expected:?} message, got {got:?}")]
    UnexpectedMessageType {
        expected: MessageType,
        got: MessageType,
    },

    #[error("unknown block type: {0}")]
    UnknownBlockType(u8),

    #[error("block has {0} entries, more than allowed")]
    TooManyEntries(usize),

    #[error("{0} trailing bytes after message")]
    TrailingBytes(usize),

    #[error("message too large: {size} > {max}")]
    MessageTooLarge { size: usize, max: usize },
}
