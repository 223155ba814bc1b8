//! Account address derivation from public keys.

use mu_types::{Address, PublicKey, Uint256Union, Uint512Union, PUBLIC_KEY_LEN};

use crate::sign::verify_signature;

/// Derive the account address for a public key.
///
/// The address is the x-coordinate of the key's compressed point; the parity
/// byte is not part of the address, so two keys that differ only in parity
/// share an address. Verification always needs the full key.
pub fn derive_address(public_key: &PublicKey) -> Address {
    Address::from_public_key(public_key)
}

/// Whether `public_key` is the key behind `address`.
pub fn key_owns_address(public_key: &PublicKey, address: &Address) -> bool {
    derive_address(public_key) == *address
}

/// The two compressed keys whose x-coordinate is `address`, even parity first.
pub fn address_keys(address: &Address) -> [PublicKey; 2] {
    [0x02u8, 0x03].map(|parity| {
        let mut bytes = [0u8; PUBLIC_KEY_LEN];
        bytes[0] = parity;
        bytes[1..].copy_from_slice(address.as_bytes());
        PublicKey(bytes)
    })
}

/// Verify a signature against the account behind `address`.
///
/// The address does not record the key's parity, so both candidates are
/// tried. Addresses that are not a curve x-coordinate never verify.
pub fn verify_for_address(
    address: &Address,
    message: &Uint256Union,
    signature: &Uint512Union,
) -> bool {
    address_keys(address)
        .iter()
        .any(|key| verify_signature(key, message, signature))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generate_keypair, CryptoContext};

    #[test]
    fn derived_address_matches_key() {
        let kp = generate_keypair(&CryptoContext::from_seed(9));
        let address = derive_address(&kp.public);
        assert_eq!(address.as_bytes()[..], kp.public.0[1..]);
        assert!(key_owns_address(&kp.public, &address));
    }

    #[test]
    fn address_keys_include_original() {
        let kp = generate_keypair(&CryptoContext::from_seed(12));
        assert!(address_keys(&kp.address()).contains(&kp.public));
    }

    #[test]
    fn verify_through_address() {
        let ctx = CryptoContext::from_seed(13);
        let kp = generate_keypair(&ctx);
        let message = Uint256Union::from_bytes([3u8; 32]);
        let sig = crate::sign_message(&ctx, &kp.private, &message).unwrap();
        assert!(verify_for_address(&kp.address(), &message, &sig));

        let other = generate_keypair(&ctx);
        assert!(!verify_for_address(&other.address(), &message, &sig));
        assert!(!verify_for_address(&Address::from([0xFF; 32]), &message, &sig));
    }

    #[test]
    fn other_key_does_not_own_address() {
        let ctx = CryptoContext::new();
        let a = generate_keypair(&ctx);
        let b = generate_keypair(&ctx);
        assert!(!key_owns_address(&b.public, &a.address()));
    }
}
