//! Account addresses.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::keys::PublicKey;
use crate::uint::{Uint256Union, U256};

/// Identifies an account on the ledger.
///
/// Either an arbitrary 256-bit number or the x-coordinate of an account's
/// public key (see [`Uint256Union::from_public_key`]). Equality is byte-exact.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(Uint256Union);

impl Address {
    pub fn new(value: Uint256Union) -> Self {
        Self(value)
    }

    pub fn from_number(number: U256) -> Self {
        Self(Uint256Union::from_number(number))
    }

    pub fn from_public_key(public_key: &PublicKey) -> Self {
        Self(Uint256Union::from_public_key(public_key))
    }

    pub fn number(&self) -> U256 {
        self.0.number()
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        self.0.as_bytes()
    }
}

impl From<U256> for Address {
    fn from(number: U256) -> Self {
        Self::from_number(number)
    }
}

impl From<[u8; 32]> for Address {
    fn from(bytes: [u8; 32]) -> Self {
        Self(Uint256Union::from_bytes(bytes))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address(")?;
        for b in &self.as_bytes()[..4] {
            write!(f, "{:02x}", b)?;
        }
        write!(f, "\u{2026})")
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Address {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

// Addresses appear in TOML config, so they serialize as hex text.
impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
