#![no_main]

use std::sync::Arc;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mu_ledger::{BlockType, GenesisConfig, Ledger, LedgerEntry, TransactionBlock};
use mu_types::{Address, U256};

#[derive(Debug, Arbitrary)]
struct Entry {
    account: u8,
    coins: [u64; 4],
    sequence: u8,
}

// Feed arbitrary blocks over a small account space. Processing must never
// panic and the total supply must never grow.
fuzz_target!(|blocks: Vec<Vec<Entry>>| {
    let genesis = Address::from_number(U256::from(1u64));
    let supply = U256::MAX >> 8u32;
    let ledger = Ledger::with_genesis(&GenesisConfig {
        address: genesis,
        coins: supply,
    });

    for entries in blocks.into_iter().take(64) {
        let entries = entries
            .into_iter()
            .take(16)
            .map(|e| {
                LedgerEntry::new(
                    Address::from_number(U256::from(e.account % 8 + 1)),
                    U256(e.coins),
                    e.sequence,
                )
            })
            .collect();
        ledger.process(Arc::new(TransactionBlock::with_entries(BlockType::Send, entries)));
    }

    let total = (1..=8u64)
        .filter_map(|n| ledger.balance(&Address::from_number(U256::from(n))))
        .fold(U256::zero(), |acc, coins| acc.saturating_add(coins));
    assert!(total <= supply);
});
