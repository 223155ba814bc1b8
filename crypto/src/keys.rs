//! secp256k1 key generation.

use k256::ecdsa::SigningKey;
use mu_types::{KeyPair, PrivateKey, PublicKey, PUBLIC_KEY_LEN};

use crate::{CryptoContext, CryptoError};

pub(crate) fn signing_key(private: &PrivateKey) -> Result<SigningKey, CryptoError> {
    SigningKey::from_slice(&private.0).map_err(|_| CryptoError::InvalidPrivateKey)
}

fn encode_public(signing_key: &SigningKey) -> PublicKey {
    let point = signing_key.verifying_key().to_encoded_point(true);
    let mut bytes = [0u8; PUBLIC_KEY_LEN];
    bytes.copy_from_slice(point.as_bytes());
    PublicKey(bytes)
}

/// Generate a new key pair from the context's random source.
pub fn generate_keypair(ctx: &CryptoContext) -> KeyPair {
    let signing_key = ctx.with_rng(|rng| SigningKey::random(rng));
    KeyPair {
        public: encode_public(&signing_key),
        private: PrivateKey(signing_key.to_bytes().into()),
    }
}

/// Derive the compressed public key from a private key.
pub fn public_from_private(private: &PrivateKey) -> Result<PublicKey, CryptoError> {
    Ok(encode_public(&signing_key(private)?))
}

/// Reconstruct a full key pair from a private key.
pub fn keypair_from_private(private: PrivateKey) -> Result<KeyPair, CryptoError> {
    let public = public_from_private(&private)?;
    Ok(KeyPair { public, private })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_produces_compressed_key() {
        let ctx = CryptoContext::from_seed(3);
        let kp = generate_keypair(&ctx);
        assert!(matches!(kp.public.0[0], 0x02 | 0x03));
        assert_ne!(kp.private.0, [0u8; 32]);
    }

    #[test]
    fn public_from_private_is_deterministic() {
        let kp = generate_keypair(&CryptoContext::new());
        let public = public_from_private(&kp.private).unwrap();
        assert_eq!(kp.public, public);
    }

    #[test]
    fn keypair_from_private_roundtrip() {
        let kp1 = generate_keypair(&CryptoContext::new());
        let kp2 = keypair_from_private(PrivateKey(kp1.private.0)).unwrap();
        assert_eq!(kp1.public, kp2.public);
    }

    #[test]
    fn zero_scalar_is_rejected() {
        assert_eq!(
            public_from_private(&PrivateKey([0u8; 32])).unwrap_err(),
            CryptoError::InvalidPrivateKey
        );
    }

    #[test]
    fn seeded_contexts_generate_same_keys() {
        let a = generate_keypair(&CryptoContext::from_seed(11));
        let b = generate_keypair(&CryptoContext::from_seed(11));
        assert_eq!(a.public, b.public);
    }
}
