//! Publish: carries one block for propagation.

use mu_ledger::{BlockType, TransactionBlock};

use crate::codec::{check_size, expect_end, read_block, write_block};
use crate::header::{Flag, Header, MessageType};
use crate::ProtocolError;

/// A block being flooded to peers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Publish {
    pub block: TransactionBlock,
    ipv4_only: bool,
}

impl Publish {
    pub fn new(block: TransactionBlock) -> Self {
        Self {
            block,
            ipv4_only: false,
        }
    }

    pub fn block_type(&self) -> BlockType {
        self.block.block_type
    }

    pub fn ipv4_only(&self) -> bool {
        self.ipv4_only
    }

    pub fn set_ipv4_only(&mut self, value: bool) {
        self.ipv4_only = value;
    }

    pub fn header(&self) -> Header {
        let mut header = Header::new(MessageType::Publish);
        header.extensions.set(Flag::Ipv4Only, self.ipv4_only);
        header.extensions.set_block_type(self.block_type().as_u8());
        header
    }

    pub fn write_header(&self, out: &mut Vec<u8>) {
        self.header().write(out);
    }

    /// Header and block payload. Fails if the block carries more entries
    /// than a peer would accept.
    pub fn serialize(&self) -> Result<Vec<u8>, ProtocolError> {
        let mut out = Vec::new();
        self.write_header(&mut out);
        write_block(&self.block, &mut out)?;
        Ok(out)
    }

    /// Decode a complete publish message, header included.
    pub fn deserialize(bytes: &[u8]) -> Result<Self, ProtocolError> {
        check_size(bytes)?;
        let mut input = bytes;
        let header = Header::read(&mut input)?;
        header.expect(MessageType::Publish)?;
        let message = Self::read_payload(&header, &mut input)?;
        expect_end(input)?;
        Ok(message)
    }

    pub(crate) fn read_payload(header: &Header, input: &mut &[u8]) -> Result<Self, ProtocolError> {
        let code = header.extensions.block_type();
        let block_type = BlockType::from_u8(code).ok_or(ProtocolError::UnknownBlockType(code))?;
        Ok(Self {
            block: read_block(input, block_type)?,
            ipv4_only: header.extensions.get(Flag::Ipv4Only),
        })
    }
}
