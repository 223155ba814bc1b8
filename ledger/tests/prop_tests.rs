use std::sync::Arc;

use proptest::prelude::*;

use mu_ledger::{BlockType, GenesisConfig, Ledger, LedgerEntry, ProcessResult, TransactionBlock};
use mu_types::{Address, U256};

const SUPPLY: u64 = 1_000_000;

fn addr(n: u64) -> Address {
    Address::from_number(U256::from(n))
}

fn genesis_ledger() -> Ledger {
    Ledger::with_genesis(&GenesisConfig {
        address: addr(1),
        coins: U256::from(SUPPLY),
    })
}

proptest! {
    /// Splitting the genesis balance is accepted exactly when the outputs
    /// plus the fee equal the genesis balance.
    #[test]
    fn split_accepted_iff_balanced(keep in 0u64..SUPPLY, give in 0u64..SUPPLY) {
        let ledger = genesis_ledger();
        let block = TransactionBlock::with_entries(
            BlockType::Open,
            vec![
                LedgerEntry::new(addr(1), U256::from(keep), 1),
                LedgerEntry::new(addr(2), U256::from(give), 0),
            ],
        );
        let result = ledger.process(Arc::new(block));
        prop_assert_eq!(result.is_accepted(), keep + give + 1 == SUPPLY);
        prop_assert_eq!(ledger.has_balance(&addr(2)), result.is_accepted());
    }

    /// Whatever sequence of blocks is submitted, the sum of all balances
    /// never exceeds the genesis supply and only shrinks by whole fees.
    #[test]
    fn supply_only_shrinks_by_fees(
        moves in prop::collection::vec((1u64..5, 1u64..5, 0u64..SUPPLY), 1..20)
    ) {
        let ledger = genesis_ledger();
        let mut accepted = 0u64;
        for (from, to, amount) in moves {
            if from == to {
                continue;
            }
            let (from, to) = (addr(from), addr(to));
            let Some(from_coins) = ledger.balance(&from) else { continue };
            let from_seq = ledger.sequence(&from).unwrap_or(0);
            let (to_coins, to_seq) = match (ledger.balance(&to), ledger.sequence(&to)) {
                (Some(c), Some(s)) => (c, s.wrapping_add(1)),
                _ => (U256::zero(), 0),
            };
            let amount = U256::from(amount);
            let Some(remaining) = from_coins.checked_sub(amount + U256::one()) else { continue };
            let block = TransactionBlock::with_entries(
                BlockType::Send,
                vec![
                    LedgerEntry::new(from, remaining, from_seq.wrapping_add(1)),
                    LedgerEntry::new(to, to_coins + amount, to_seq),
                ],
            );
            if ledger.process(Arc::new(block)) == ProcessResult::Accepted {
                accepted += 1;
            }
        }
        let total = (1..5u64)
            .filter_map(|n| ledger.balance(&addr(n)))
            .fold(U256::zero(), |acc, c| acc + c);
        prop_assert_eq!(total + U256::from(accepted), U256::from(SUPPLY));
    }
}
