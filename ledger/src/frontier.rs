//! Latest-block index: the head block of every known account.

use mu_types::{Address, Uint256Union};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::block::TransactionBlock;

/// Maps each account to the most recently accepted block touching it.
///
/// One block is usually the head of several accounts at once, so blocks are
/// shared through `Arc`; a block is dropped once no account points at it.
#[derive(Default)]
pub struct LatestIndex {
    heads: HashMap<Address, Arc<TransactionBlock>>,
}

impl LatestIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, address: &Address) -> Option<&Arc<TransactionBlock>> {
        self.heads.get(address)
    }

    pub fn contains(&self, address: &Address) -> bool {
        self.heads.contains_key(address)
    }

    /// Point every account named by `block` at it.
    pub fn advance(&mut self, block: &Arc<TransactionBlock>) {
        for address in block.addresses() {
            self.heads.insert(*address, Arc::clone(block));
        }
    }

    pub fn account_count(&self) -> usize {
        self.heads.len()
    }

    /// Number of distinct blocks currently referenced.
    pub fn block_count(&self) -> usize {
        self.heads
            .values()
            .map(|b| b.hash())
            .collect::<HashSet<Uint256Union>>()
            .len()
    }
}
