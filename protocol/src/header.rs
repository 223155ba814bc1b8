//! The fixed 16-byte message header.
//!
//! | bytes  | field                                   |
//! |--------|-----------------------------------------|
//! | 0..4   | magic `b5 52 41 73`                     |
//! | 4      | `version_max`                           |
//! | 5      | `version_using`                         |
//! | 6      | `version_min`                           |
//! | 7      | message type                            |
//! | 8..16  | 64-bit extension set, bits 0..8 first   |
//!
//! The extension set is a bit-set rather than an integer: byte `8 + i`
//! carries bits `8i..8i + 8`. Bit 1 is `ipv4_only`; bits 8..16 hold the
//! block type of a `publish`. Other bits are carried but have no meaning.

use crate::codec::{read_array, read_u8};
use crate::version::{is_compatible, MIN_PROTOCOL_VERSION, PROTOCOL_VERSION, PROTOCOL_VERSION_MAX};
use crate::ProtocolError;

/// Protocol identifier at the start of every message.
pub const MAGIC: [u8; 4] = [0xb5, 0x52, 0x41, 0x73];

/// Encoded header length.
pub const HEADER_LEN: usize = 16;

/// Message kinds on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MessageType {
    Invalid = 0,
    NotAType = 1,
    Keepalive = 2,
    Publish = 3,
}

impl MessageType {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Invalid),
            1 => Some(Self::NotAType),
            2 => Some(Self::Keepalive),
            3 => Some(Self::Publish),
            _ => None,
        }
    }
}

/// Single-bit flags of the extension set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flag {
    /// Relay only to IPv4 peers.
    Ipv4Only,
}

impl Flag {
    fn mask(self) -> u64 {
        match self {
            Self::Ipv4Only => 1 << 1,
        }
    }
}

/// The 64 extension bits carried by every header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Extensions(pub u64);

impl Extensions {
    const BLOCK_TYPE_SHIFT: u32 = 8;
    const BLOCK_TYPE_MASK: u64 = 0xff << Self::BLOCK_TYPE_SHIFT;

    pub fn get(&self, flag: Flag) -> bool {
        self.0 & flag.mask() != 0
    }

    pub fn set(&mut self, flag: Flag, value: bool) {
        if value {
            self.0 |= flag.mask();
        } else {
            self.0 &= !flag.mask();
        }
    }

    pub fn block_type(&self) -> u8 {
        ((self.0 & Self::BLOCK_TYPE_MASK) >> Self::BLOCK_TYPE_SHIFT) as u8
    }

    pub fn set_block_type(&mut self, code: u8) {
        self.0 = (self.0 & !Self::BLOCK_TYPE_MASK) | (u64::from(code) << Self::BLOCK_TYPE_SHIFT);
    }

    fn to_wire(self) -> [u8; 8] {
        self.0.to_le_bytes()
    }

    fn from_wire(bytes: [u8; 8]) -> Self {
        Self(u64::from_le_bytes(bytes))
    }
}

/// A decoded message header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub version_max: u8,
    pub version_using: u8,
    pub version_min: u8,
    pub message_type: MessageType,
    pub extensions: Extensions,
}

impl Header {
    /// A header for `message_type` at this node's protocol versions.
    pub fn new(message_type: MessageType) -> Self {
        Self {
            version_max: PROTOCOL_VERSION_MAX,
            version_using: PROTOCOL_VERSION,
            version_min: MIN_PROTOCOL_VERSION,
            message_type,
            extensions: Extensions::default(),
        }
    }

    pub fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&MAGIC);
        out.push(self.version_max);
        out.push(self.version_using);
        out.push(self.version_min);
        out.push(self.message_type.as_u8());
        out.extend_from_slice(&self.extensions.to_wire());
    }

    /// Parse and validate a header, advancing `input` past it.
    pub fn read(input: &mut &[u8]) -> Result<Self, ProtocolError> {
        let magic: [u8; 4] = read_array(input)?;
        if magic != MAGIC {
            return Err(ProtocolError::BadMagic(magic));
        }
        let version_max = read_u8(input)?;
        let version_using = read_u8(input)?;
        let version_min = read_u8(input)?;
        let type_code = read_u8(input)?;
        let extensions = Extensions::from_wire(read_array(input)?);

        if !is_compatible(version_using) {
            return Err(ProtocolError::UnsupportedVersion(version_using));
        }
        let message_type =
            MessageType::from_u8(type_code).ok_or(ProtocolError::UnknownMessageType(type_code))?;

        Ok(Self {
            version_max,
            version_using,
            version_min,
            message_type,
            extensions,
        })
    }

    /// Fail unless this header announces `expected`.
    pub fn expect(&self, expected: MessageType) -> Result<(), ProtocolError> {
        if self.message_type == expected {
            Ok(())
        } else {
            Err(ProtocolError::UnexpectedMessageType {
                expected,
                got: self.message_type,
            })
        }
    }
}

/// Parse the header at the front of `input`.
pub fn read_header(input: &mut &[u8]) -> Result<Header, ProtocolError> {
    Header::read(input)
}
