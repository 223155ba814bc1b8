//! Fundamental types for the mu ledger.
//!
//! This crate defines the value types shared by every other crate in the
//! workspace: fixed-width 256/512-bit unions, account addresses, key types
//! and network identifiers.

pub mod address;
pub mod error;
pub mod keys;
pub mod network;
pub mod uint;

pub use address::Address;
pub use error::ParseError;
pub use keys::{KeyPair, PrivateKey, PublicKey, PUBLIC_KEY_LEN};
pub use network::NetworkId;
pub use uint::{Uint256Union, Uint512Union, U256, U512};
