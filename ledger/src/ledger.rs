//! The ledger and its block-acceptance algorithm.
//!
//! For every entry of a candidate block, in order:
//! - a continuing entry (`sequence > 0`) must follow the entry its account's
//!   latest block holds for it, by exactly one; its previous coins count as
//!   inputs and its new coins as outputs;
//! - an opening entry (`sequence == 0`) must name an unknown account; its
//!   coins count as outputs only.
//!
//! The block is accepted iff `outputs < inputs` and
//! `outputs + fee == inputs`. Validation runs to completion under the
//! write lock before the index is touched, so a block either advances every
//! account it names or none of them.

use mu_crypto::key_owns_address;
use mu_types::{Address, PublicKey, Uint256Union, U256};
use std::collections::HashSet;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;
use tracing::{debug, warn};

use crate::block::{TransactionBlock, MAX_BLOCK_ENTRIES};
use crate::error::LedgerError;
use crate::frontier::LatestIndex;
use crate::genesis::{create_genesis_block, GenesisConfig};

/// Why a block was not accepted.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RejectReason {
    #[error("block has no entries")]
    EmptyBlock,

    #[error("block has {count} entries, at most {max} allowed")]
    TooManyEntries { count: usize, max: usize },

    #[error("account {0} appears more than once")]
    DuplicateAddress(Address),

    #[error("account {0} has no balance to continue")]
    UnknownAccount(Address),

    #[error("latest block for {0} has no entry for it")]
    MissingPrevious(Address),

    #[error("sequence gap for {address}: expected {expected}, got {got}")]
    SequenceGap {
        address: Address,
        expected: u16,
        got: u8,
    },

    #[error("account {0} is already open")]
    AccountExists(Address),

    #[error("coin total overflows")]
    Overflow,

    #[error("outputs {outputs} do not fit under inputs {inputs}")]
    InsufficientInputs { inputs: U256, outputs: U256 },

    #[error("inputs {inputs} != outputs {outputs} + fee {fee}")]
    Unbalanced {
        inputs: U256,
        outputs: U256,
        fee: U256,
    },

    #[error("expected {expected} public keys, got {got}")]
    KeyCount { expected: usize, got: usize },

    #[error("entry {index} is not signed by its account")]
    BadSignature { index: usize },
}

/// Outcome of submitting a block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProcessResult {
    Accepted,
    Rejected(RejectReason),
}

impl ProcessResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Summary statistics for the ledger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerSummary {
    pub accounts: usize,
    pub blocks: usize,
}

/// Index of the latest accepted block per account.
///
/// All methods take `&self`; the index sits behind a single `RwLock`, and
/// [`Ledger::process`] holds the write side for its whole
/// read-validate-commit sequence, so concurrent submissions are serialized.
#[derive(Default)]
pub struct Ledger {
    latest: RwLock<LatestIndex>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// A ledger whose only account is the genesis account.
    pub fn with_genesis(config: &GenesisConfig) -> Self {
        let ledger = Self::new();
        ledger.write().advance(&Arc::new(create_genesis_block(config)));
        ledger
    }

    /// Install a genesis block, bypassing conservation.
    pub fn install_genesis(&self, config: &GenesisConfig) -> Result<Uint256Union, LedgerError> {
        let mut latest = self.write();
        if latest.contains(&config.address) {
            return Err(LedgerError::GenesisExists(config.address));
        }
        let block = Arc::new(create_genesis_block(config));
        latest.advance(&block);
        Ok(block.hash())
    }

    pub fn has_balance(&self, address: &Address) -> bool {
        self.read().contains(address)
    }

    /// The latest block that touched `address`.
    pub fn previous(&self, address: &Address) -> Result<Arc<TransactionBlock>, LedgerError> {
        self.read()
            .get(address)
            .cloned()
            .ok_or(LedgerError::AccountNotFound(*address))
    }

    /// Current balance of `address`.
    pub fn balance(&self, address: &Address) -> Option<U256> {
        let latest = self.read();
        latest.get(address)?.entry_for(address).map(|e| e.coins())
    }

    /// Current sequence number of `address`.
    pub fn sequence(&self, address: &Address) -> Option<u8> {
        let latest = self.read();
        latest.get(address)?.entry_for(address).map(|e| e.sequence())
    }

    pub fn summary(&self) -> LedgerSummary {
        let latest = self.read();
        LedgerSummary {
            accounts: latest.account_count(),
            blocks: latest.block_count(),
        }
    }

    /// Validate `block` and, if it is valid, make it the latest block of
    /// every account it names.
    ///
    /// Signatures are not checked here; use [`Ledger::process_signed`] when
    /// the caller has not verified them already.
    pub fn process(&self, block: Arc<TransactionBlock>) -> ProcessResult {
        let mut latest = self.write();
        match check(&latest, &block) {
            Ok(()) => {
                latest.advance(&block);
                debug!(
                    hash = %block.hash(),
                    entries = block.entries.len(),
                    "block accepted"
                );
                ProcessResult::Accepted
            }
            Err(reason) => {
                warn!(hash = %block.hash(), %reason, "block rejected");
                ProcessResult::Rejected(reason)
            }
        }
    }

    /// Like [`Ledger::process`], but first require that entry `i` is signed
    /// by `keys[i]` and that `keys[i]` owns the entry's address.
    pub fn process_signed(
        &self,
        block: Arc<TransactionBlock>,
        keys: &[PublicKey],
    ) -> ProcessResult {
        if keys.len() != block.entries.len() {
            let reason = RejectReason::KeyCount {
                expected: block.entries.len(),
                got: keys.len(),
            };
            warn!(hash = %block.hash(), %reason, "block rejected");
            return ProcessResult::Rejected(reason);
        }
        let unsigned = block
            .entries
            .iter()
            .zip(keys)
            .position(|(entry, key)| !key_owns_address(key, &entry.address) || !entry.validate(key));
        if let Some(index) = unsigned {
            let reason = RejectReason::BadSignature { index };
            warn!(hash = %block.hash(), %reason, "block rejected");
            return ProcessResult::Rejected(reason);
        }
        self.process(block)
    }

    /// Like [`Ledger::process`], but first require every entry to be signed
    /// by the key behind its own address.
    pub fn process_verified(&self, block: Arc<TransactionBlock>) -> ProcessResult {
        if let Some(index) = block.entries.iter().position(|e| !e.validate_address()) {
            let reason = RejectReason::BadSignature { index };
            warn!(hash = %block.hash(), %reason, "block rejected");
            return ProcessResult::Rejected(reason);
        }
        self.process(block)
    }

    fn read(&self) -> RwLockReadGuard<'_, LatestIndex> {
        self.latest.read().expect("ledger lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, LatestIndex> {
        self.latest.write().expect("ledger lock poisoned")
    }
}

fn check(latest: &LatestIndex, block: &TransactionBlock) -> Result<(), RejectReason> {
    if block.entries.is_empty() {
        return Err(RejectReason::EmptyBlock);
    }
    if block.entries.len() > MAX_BLOCK_ENTRIES {
        return Err(RejectReason::TooManyEntries {
            count: block.entries.len(),
            max: MAX_BLOCK_ENTRIES,
        });
    }

    let mut seen = HashSet::with_capacity(block.entries.len());
    let mut inputs = U256::zero();
    let mut outputs = U256::zero();

    for entry in &block.entries {
        let address = entry.address;
        if !seen.insert(address) {
            return Err(RejectReason::DuplicateAddress(address));
        }
        let existing = latest.get(&address);
        if entry.sequence() > 0 {
            let head = existing.ok_or(RejectReason::UnknownAccount(address))?;
            let previous = head
                .entry_for(&address)
                .ok_or(RejectReason::MissingPrevious(address))?;
            let expected = u16::from(previous.sequence()) + 1;
            if expected != u16::from(entry.sequence()) {
                return Err(RejectReason::SequenceGap {
                    address,
                    expected,
                    got: entry.sequence(),
                });
            }
            inputs = inputs
                .checked_add(previous.coins())
                .ok_or(RejectReason::Overflow)?;
        } else if existing.is_some() {
            return Err(RejectReason::AccountExists(address));
        }
        outputs = outputs
            .checked_add(entry.coins())
            .ok_or(RejectReason::Overflow)?;
    }

    if outputs >= inputs {
        return Err(RejectReason::InsufficientInputs { inputs, outputs });
    }
    let fee = block.fee();
    // outputs < inputs, so this cannot overflow.
    if outputs + fee != inputs {
        return Err(RejectReason::Unbalanced {
            inputs,
            outputs,
            fee,
        });
    }
    Ok(())
}
