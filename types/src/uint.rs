//! Fixed-width 256- and 512-bit values.
//!
//! Every union keeps two views of the same value: the byte view, which is
//! big-endian and is what gets hashed, signed and put on the wire, and the
//! numeric view ([`U256`] / [`U512`], little-endian 64-bit limbs) used for
//! arithmetic. Converting between the two is always lossless.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::keys::PublicKey;

use uint::construct_uint;

construct_uint! {
    /// 256-bit unsigned integer, four little-endian 64-bit limbs.
    pub struct U256(4);
}

construct_uint! {
    /// 512-bit unsigned integer, eight little-endian 64-bit limbs.
    pub struct U512(8);
}

/// A 32-byte value with big-endian external representation.
///
/// Used for addresses, block hashes and the packed `(coins, sequence)` field.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Uint256Union([u8; 32]);

/// A 64-byte value with big-endian external representation. Holds signatures.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uint512Union([u8; 64]);

impl Uint256Union {
    pub const ZERO: Self = Self([0u8; 32]);

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Write `number` into the byte view, most significant limb first.
    pub fn from_number(number: U256) -> Self {
        let mut bytes = [0u8; 32];
        for (i, limb) in number.0.iter().enumerate() {
            let end = 32 - i * 8;
            bytes[end - 8..end].copy_from_slice(&limb.to_be_bytes());
        }
        Self(bytes)
    }

    /// Encode a public key's curve point.
    ///
    /// The compressed SEC1 encoding is 33 bytes; the leading parity byte is
    /// dropped and the 32-byte x-coordinate becomes the value.
    pub fn from_public_key(public_key: &PublicKey) -> Self {
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&public_key.as_bytes()[1..]);
        Self(bytes)
    }

    /// Reconstruct the numeric view from the byte view.
    pub fn number(&self) -> U256 {
        let mut limbs = [0u64; 4];
        for (i, limb) in limbs.iter_mut().enumerate() {
            let end = 32 - i * 8;
            let mut word = [0u8; 8];
            word.copy_from_slice(&self.0[end - 8..end]);
            *limb = u64::from_be_bytes(word);
        }
        U256(limbs)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    pub fn clear(&mut self) {
        self.0.fill(0);
    }
}

impl Uint512Union {
    pub const ZERO: Self = Self([0u8; 64]);

    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    pub fn from_number(number: U512) -> Self {
        let mut bytes = [0u8; 64];
        for (i, limb) in number.0.iter().enumerate() {
            let end = 64 - i * 8;
            bytes[end - 8..end].copy_from_slice(&limb.to_be_bytes());
        }
        Self(bytes)
    }

    pub fn number(&self) -> U512 {
        let mut limbs = [0u64; 8];
        for (i, limb) in limbs.iter_mut().enumerate() {
            let end = 64 - i * 8;
            let mut word = [0u8; 8];
            word.copy_from_slice(&self.0[end - 8..end]);
            *limb = u64::from_be_bytes(word);
        }
        U512(limbs)
    }

    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 64]
    }

    pub fn clear(&mut self) {
        self.0.fill(0);
    }
}

impl Default for Uint512Union {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<U256> for Uint256Union {
    fn from(number: U256) -> Self {
        Self::from_number(number)
    }
}

impl From<U512> for Uint512Union {
    fn from(number: U512) -> Self {
        Self::from_number(number)
    }
}

impl From<[u8; 32]> for Uint256Union {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl From<[u8; 64]> for Uint512Union {
    fn from(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for Uint256Union {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uint256Union({}\u{2026})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for Uint256Union {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode_upper(self.0))
    }
}

impl fmt::Debug for Uint512Union {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uint512Union({}\u{2026})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for Uint512Union {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode_upper(self.0))
    }
}

impl FromStr for Uint256Union {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes).map_err(|e| ParseError::InvalidHex(e.to_string()))?;
        Ok(Self(bytes))
    }
}

impl FromStr for Uint512Union {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; 64];
        hex::decode_to_slice(s, &mut bytes).map_err(|e| ParseError::InvalidHex(e.to_string()))?;
        Ok(Self(bytes))
    }
}

impl Serialize for Uint512Union {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.0)
    }
}

impl<'de> Deserialize<'de> for Uint512Union {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct UnionVisitor;

        impl<'de> serde::de::Visitor<'de> for UnionVisitor {
            type Value = Uint512Union;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "64 bytes")
            }

            fn visit_bytes<E: serde::de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
                let arr: [u8; 64] = v
                    .try_into()
                    .map_err(|_| E::invalid_length(v.len(), &self))?;
                Ok(Uint512Union(arr))
            }

            fn visit_seq<A: serde::de::SeqAccess<'de>>(
                self,
                mut seq: A,
            ) -> Result<Self::Value, A::Error> {
                let mut arr = [0u8; 64];
                for (i, byte) in arr.iter_mut().enumerate() {
                    *byte = seq
                        .next_element()?
                        .ok_or_else(|| serde::de::Error::invalid_length(i, &self))?;
                }
                Ok(Uint512Union(arr))
            }
        }

        deserializer.deserialize_bytes(UnionVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_is_last_byte() {
        let value = Uint256Union::from_number(U256::one());
        let mut expected = [0u8; 32];
        expected[31] = 1;
        assert_eq!(value.as_bytes(), &expected);
    }

    #[test]
    fn high_limb_is_first_bytes() {
        let value = Uint256Union::from_number(U256([0, 0, 0, 0x0102_0304_0506_0708]));
        assert_eq!(&value.as_bytes()[..8], &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(value.as_bytes()[8..].iter().all(|b| *b == 0));
    }

    #[test]
    fn number_reverses_construction() {
        let n = U256::from_dec_str("123456789012345678901234567890123456789").unwrap();
        assert_eq!(Uint256Union::from(n).number(), n);
        let m = U512::MAX - U512::from(7u64);
        assert_eq!(Uint512Union::from(m).number(), m);
    }

    #[test]
    fn clear_zeroes_bytes() {
        let mut value = Uint256Union::from_bytes([0xAB; 32]);
        value.clear();
        assert!(value.is_zero());

        let mut sig = Uint512Union::from_bytes([0xCD; 64]);
        sig.clear();
        assert!(sig.is_zero());
    }

    #[test]
    fn hex_display_parses_back() {
        let value = Uint256Union::from_number(U256::from(0xDEAD_BEEFu64));
        let text = value.to_string();
        assert_eq!(text.len(), 64);
        assert!(text.ends_with("DEADBEEF"));
        assert_eq!(text.parse::<Uint256Union>().unwrap(), value);
    }

    #[test]
    fn short_hex_is_rejected() {
        assert!("ABCD".parse::<Uint256Union>().is_err());
    }

    #[test]
    fn public_key_uses_x_coordinate() {
        let mut raw = [0x11u8; 33];
        raw[0] = 0x02;
        let value = Uint256Union::from_public_key(&PublicKey(raw));
        assert_eq!(value.as_bytes(), &[0x11u8; 32]);
    }
}
