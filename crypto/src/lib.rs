//! Cryptographic primitives for the mu ledger.
//!
//! - **ECDSA over secp256k1** for signing and signature verification
//! - **SHA-256** for block hashing
//! - [`CryptoContext`] owns the random source; it is constructed explicitly
//!   and passed to every signing operation
//! - Address derivation from compressed public keys

pub mod address;
pub mod context;
pub mod error;
pub mod hash;
pub mod keys;
pub mod sign;

pub use address::{address_keys, derive_address, key_owns_address, verify_for_address};
pub use context::CryptoContext;
pub use error::CryptoError;
pub use hash::{sha256, sha256_multi};
pub use keys::{generate_keypair, keypair_from_private, public_from_private};
pub use sign::{sign_message, verify_signature};
