//! Transaction ledger.
//!
//! Accounts are represented by chains of signed entries. A block groups the
//! entries of one atomic transition; the ledger accepts a block only when
//! every entry continues its account's chain and the coins consumed cover
//! the coins produced plus the block fee.

pub mod block;
pub mod entry;
pub mod error;
pub mod frontier;
pub mod genesis;
pub mod ledger;

pub use block::{BlockType, TransactionBlock, BLOCK_FEE, MAX_BLOCK_ENTRIES};
pub use entry::LedgerEntry;
pub use error::LedgerError;
pub use frontier::LatestIndex;
pub use genesis::{create_genesis_block, GenesisConfig};
pub use ledger::{Ledger, LedgerSummary, ProcessResult, RejectReason};
