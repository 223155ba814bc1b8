//! Transaction blocks: ordered sets of entries forming one ledger transition.

use mu_crypto::{sha256_multi, CryptoContext, CryptoError};
use mu_types::{Address, PrivateKey, Uint256Union, U256};
use serde::{Deserialize, Serialize};

use crate::entry::LedgerEntry;

/// Fee charged against the inputs of every block, in base units.
pub const BLOCK_FEE: u64 = 1;

/// Most entries one block may carry, on the wire and in the ledger.
pub const MAX_BLOCK_ENTRIES: usize = 4096;

/// The kind of block, carried in the `publish` message header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum BlockType {
    Invalid = 0,
    NotABlock = 1,
    #[default]
    Send = 2,
    Receive = 3,
    Open = 4,
    Change = 5,
}

impl BlockType {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Invalid),
            1 => Some(Self::NotABlock),
            2 => Some(Self::Send),
            3 => Some(Self::Receive),
            4 => Some(Self::Open),
            5 => Some(Self::Change),
            _ => None,
        }
    }
}

/// An ordered sequence of entries.
///
/// Entry order is significant: it is both the hash input order and the
/// order in which the ledger validates entries. The block type is metadata
/// and is not part of the hash.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionBlock {
    pub block_type: BlockType,
    pub entries: Vec<LedgerEntry>,
}

impl TransactionBlock {
    pub fn new(block_type: BlockType) -> Self {
        Self {
            block_type,
            entries: Vec::new(),
        }
    }

    pub fn with_entries(block_type: BlockType, entries: Vec<LedgerEntry>) -> Self {
        Self {
            block_type,
            entries,
        }
    }

    /// SHA-256 over `address || packed` of every entry, in order.
    pub fn hash(&self) -> Uint256Union {
        let digest = sha256_multi(
            self.entries
                .iter()
                .flat_map(|e| [e.address.as_bytes().as_slice(), e.packed.as_bytes().as_slice()]),
        );
        Uint256Union::from_bytes(digest)
    }

    pub fn fee(&self) -> U256 {
        U256::from(BLOCK_FEE)
    }

    /// The entry this block holds for `address`, if any.
    pub fn entry_for(&self, address: &Address) -> Option<&LedgerEntry> {
        self.entries.iter().find(|e| e.address == *address)
    }

    pub fn addresses(&self) -> impl Iterator<Item = &Address> {
        self.entries.iter().map(|e| &e.address)
    }

    /// Sign the entry for `address` over its packed field.
    ///
    /// Returns `Ok(false)` when the block has no entry for that address.
    pub fn sign_entry(
        &mut self,
        ctx: &CryptoContext,
        address: &Address,
        private_key: &PrivateKey,
    ) -> Result<bool, CryptoError> {
        match self.entries.iter_mut().find(|e| e.address == *address) {
            Some(entry) => entry.sign(ctx, private_key).map(|()| true),
            None => Ok(false),
        }
    }
}
