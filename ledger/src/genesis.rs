//! Genesis block creation.
//!
//! A block with only opening entries can never satisfy conservation (it has
//! no inputs to pay the fee from), so every ledger starts from a genesis
//! block that is installed directly into the index.

use mu_types::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::block::{BlockType, TransactionBlock};
use crate::entry::LedgerEntry;

/// The account that holds the initial supply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisConfig {
    pub address: Address,
    #[serde(with = "decimal")]
    pub coins: U256,
}

// Supplies exceed what TOML integers can hold, so coins are decimal text.
mod decimal {
    use mu_types::U256;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        let text = String::deserialize(deserializer)?;
        U256::from_dec_str(&text).map_err(|e| serde::de::Error::custom(format!("{e:?}")))
    }
}

/// A single-entry `Open` block for the genesis account at sequence 0.
pub fn create_genesis_block(config: &GenesisConfig) -> TransactionBlock {
    TransactionBlock::with_entries(
        BlockType::Open,
        vec![LedgerEntry::new(config.address, config.coins, 0)],
    )
}
