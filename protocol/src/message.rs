//! Any protocol message, dispatched on the header's message type.

use crate::codec::{check_size, expect_end};
use crate::header::{Header, MessageType};
use crate::keepalive::Keepalive;
use crate::publish::Publish;
use crate::ProtocolError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Message {
    Keepalive(Keepalive),
    Publish(Publish),
}

impl Message {
    pub fn message_type(&self) -> MessageType {
        match self {
            Self::Keepalive(_) => MessageType::Keepalive,
            Self::Publish(_) => MessageType::Publish,
        }
    }

    pub fn serialize(&self) -> Result<Vec<u8>, ProtocolError> {
        match self {
            Self::Keepalive(m) => Ok(m.serialize()),
            Self::Publish(m) => m.serialize(),
        }
    }

    pub fn deserialize(bytes: &[u8]) -> Result<Self, ProtocolError> {
        check_size(bytes)?;
        let mut input = bytes;
        let header = Header::read(&mut input)?;
        let message = match header.message_type {
            MessageType::Keepalive => Self::Keepalive(Keepalive::read_payload(&mut input)?),
            MessageType::Publish => Self::Publish(Publish::read_payload(&header, &mut input)?),
            other => {
                return Err(ProtocolError::UnknownMessageType(other.as_u8()));
            }
        };
        expect_end(input)?;
        Ok(message)
    }
}

impl From<Keepalive> for Message {
    fn from(m: Keepalive) -> Self {
        Self::Keepalive(m)
    }
}

impl From<Publish> for Message {
    fn from(m: Publish) -> Self {
        Self::Publish(m)
    }
}
