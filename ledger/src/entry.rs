//! Ledger entries: one account's balance and sequence within a block.

use mu_crypto::{sign_message, verify_for_address, verify_signature, CryptoContext, CryptoError};
use mu_types::{Address, PrivateKey, PublicKey, Uint256Union, Uint512Union, U256};
use serde::{Deserialize, Serialize};

/// One `(address, coins, sequence)` record and its signature.
///
/// `packed` holds `(coins << 8) | sequence` in 256 bits. Because the shift
/// happens inside the 256-bit container the top 8 bits of `coins` are lost;
/// this layout is part of the block hash and the signed message, so it is
/// kept bit-for-bit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub address: Address,
    pub packed: Uint256Union,
    pub signature: Uint512Union,
}

impl LedgerEntry {
    /// Build an unsigned entry.
    pub fn new(address: Address, coins: U256, sequence: u8) -> Self {
        let packed = (coins << 8u32) | U256::from(sequence);
        Self {
            address,
            packed: Uint256Union::from_number(packed),
            signature: Uint512Union::ZERO,
        }
    }

    /// The account balance after this entry.
    pub fn coins(&self) -> U256 {
        self.packed.number() >> 8u32
    }

    /// Position of this entry in its account's chain; 0 opens the account.
    pub fn sequence(&self) -> u8 {
        self.packed.as_bytes()[31]
    }

    pub fn is_open(&self) -> bool {
        self.sequence() == 0
    }

    /// Sign the packed field with the account's private key.
    pub fn sign(&mut self, ctx: &CryptoContext, private_key: &PrivateKey) -> Result<(), CryptoError> {
        let message = self.packed;
        self.sign_message(ctx, private_key, &message)
    }

    /// Sign an arbitrary 256-bit message, such as a block hash.
    pub fn sign_message(
        &mut self,
        ctx: &CryptoContext,
        private_key: &PrivateKey,
        message: &Uint256Union,
    ) -> Result<(), CryptoError> {
        self.signature = sign_message(ctx, private_key, message)?;
        Ok(())
    }

    /// Whether the signature covers the packed field under `public_key`.
    pub fn validate(&self, public_key: &PublicKey) -> bool {
        self.validate_message(public_key, &self.packed)
    }

    pub fn validate_message(&self, public_key: &PublicKey, message: &Uint256Union) -> bool {
        verify_signature(public_key, message, &self.signature)
    }

    /// Whether the signature was made by the key behind `address`.
    pub fn validate_address(&self) -> bool {
        verify_for_address(&self.address, &self.packed, &self.signature)
    }
}
