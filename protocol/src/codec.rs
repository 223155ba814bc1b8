//! Byte-level reading and writing shared by all message types.
//!
//! Readers take `&mut &[u8]` and advance the slice past what they consume;
//! they never allocate before checking that enough input remains.

use mu_ledger::{BlockType, LedgerEntry, TransactionBlock};
pub use mu_ledger::MAX_BLOCK_ENTRIES;
use mu_types::{Address, Uint256Union, Uint512Union};

use crate::ProtocolError;

/// Maximum message size in bytes.
pub const MAX_MESSAGE_SIZE: usize = 1024 * 1024;

/// Encoded size of one entry: address, packed field, signature.
pub const ENTRY_LEN: usize = 32 + 32 + 64;

/// Reads exactly `n` bytes from the input, advancing the slice.
pub(crate) fn read_bytes<'a>(input: &mut &'a [u8], n: usize) -> Result<&'a [u8], ProtocolError> {
    if input.len() < n {
        return Err(ProtocolError::Truncated {
            needed: n,
            available: input.len(),
        });
    }
    let (bytes, rest) = input.split_at(n);
    *input = rest;
    Ok(bytes)
}

pub(crate) fn read_array<const N: usize>(input: &mut &[u8]) -> Result<[u8; N], ProtocolError> {
    let mut out = [0u8; N];
    out.copy_from_slice(read_bytes(input, N)?);
    Ok(out)
}

pub(crate) fn read_u8(input: &mut &[u8]) -> Result<u8, ProtocolError> {
    Ok(read_bytes(input, 1)?[0])
}

pub(crate) fn read_u16_be(input: &mut &[u8]) -> Result<u16, ProtocolError> {
    Ok(u16::from_be_bytes(read_array(input)?))
}

pub(crate) fn read_u32_be(input: &mut &[u8]) -> Result<u32, ProtocolError> {
    Ok(u32::from_be_bytes(read_array(input)?))
}

/// Fails if anything is left over after a complete message.
pub(crate) fn expect_end(input: &[u8]) -> Result<(), ProtocolError> {
    if input.is_empty() {
        Ok(())
    } else {
        Err(ProtocolError::TrailingBytes(input.len()))
    }
}

pub(crate) fn check_size(bytes: &[u8]) -> Result<(), ProtocolError> {
    if bytes.len() > MAX_MESSAGE_SIZE {
        return Err(ProtocolError::MessageTooLarge {
            size: bytes.len(),
            max: MAX_MESSAGE_SIZE,
        });
    }
    Ok(())
}

/// Entry count followed by each entry. The block type travels in the header.
///
/// Fails for blocks [`read_block`] would refuse, leaving `out` untouched.
pub fn write_block(block: &TransactionBlock, out: &mut Vec<u8>) -> Result<(), ProtocolError> {
    let len = block.entries.len();
    let count = u32::try_from(len)
        .ok()
        .filter(|_| len <= MAX_BLOCK_ENTRIES)
        .ok_or(ProtocolError::TooManyEntries(len))?;
    out.reserve(4 + len * ENTRY_LEN);
    out.extend_from_slice(&count.to_be_bytes());
    for entry in &block.entries {
        out.extend_from_slice(entry.address.as_bytes());
        out.extend_from_slice(entry.packed.as_bytes());
        out.extend_from_slice(entry.signature.as_bytes());
    }
    Ok(())
}

pub fn read_block(
    input: &mut &[u8],
    block_type: BlockType,
) -> Result<TransactionBlock, ProtocolError> {
    let count = read_u32_be(input)? as usize;
    if count > MAX_BLOCK_ENTRIES {
        return Err(ProtocolError::TooManyEntries(count));
    }
    let needed = count * ENTRY_LEN;
    if input.len() < needed {
        return Err(ProtocolError::Truncated {
            needed,
            available: input.len(),
        });
    }
    let mut entries = Vec::with_capacity(count);
    for _ in 0..count {
        entries.push(LedgerEntry {
            address: Address::from(read_array::<32>(input)?),
            packed: Uint256Union::from_bytes(read_array(input)?),
            signature: Uint512Union::from_bytes(read_array(input)?),
        });
    }
    Ok(TransactionBlock::with_entries(block_type, entries))
}
