//! ECDSA message signing and verification over secp256k1.
//!
//! Messages are always 256-bit values. The signature is the fixed-size
//! `r || s` encoding, each half big-endian, stored in a [`Uint512Union`].

use k256::ecdsa::signature::{RandomizedSigner, Verifier};
use k256::ecdsa::{Signature, VerifyingKey};
use mu_types::{PrivateKey, PublicKey, Uint256Union, Uint512Union};

use crate::keys::signing_key;
use crate::{CryptoContext, CryptoError};

/// Sign a 256-bit message with a private key.
///
/// The nonce is derived per RFC 6979 with extra entropy drawn from `ctx`.
pub fn sign_message(
    ctx: &CryptoContext,
    private_key: &PrivateKey,
    message: &Uint256Union,
) -> Result<Uint512Union, CryptoError> {
    let key = signing_key(private_key)?;
    let signature = ctx
        .with_rng(|rng| {
            RandomizedSigner::<Signature>::try_sign_with_rng(&key, rng, message.as_bytes())
        })
        .map_err(|e| CryptoError::Signing(e.to_string()))?;
    let mut bytes = [0u8; 64];
    bytes.copy_from_slice(&signature.to_bytes());
    Ok(Uint512Union::from_bytes(bytes))
}

/// Verify a signature against a message and public key.
///
/// Returns `false` for malformed keys or signatures as well as for
/// signatures that do not match.
pub fn verify_signature(
    public_key: &PublicKey,
    message: &Uint256Union,
    signature: &Uint512Union,
) -> bool {
    let Ok(verifying_key) = VerifyingKey::from_sec1_bytes(public_key.as_bytes()) else {
        return false;
    };
    let Ok(signature) = Signature::from_slice(signature.as_bytes()) else {
        return false;
    };
    verifying_key.verify(message.as_bytes(), &signature).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::generate_keypair;
    use mu_types::U256;

    fn message() -> Uint256Union {
        Uint256Union::from_number(U256::from(0xC0FFEEu64))
    }

    #[test]
    fn sign_and_verify() {
        let ctx = CryptoContext::new();
        let kp = generate_keypair(&ctx);
        let sig = sign_message(&ctx, &kp.private, &message()).unwrap();
        assert!(verify_signature(&kp.public, &message(), &sig));
    }

    #[test]
    fn wrong_message_fails() {
        let ctx = CryptoContext::new();
        let kp = generate_keypair(&ctx);
        let sig = sign_message(&ctx, &kp.private, &message()).unwrap();
        let other = Uint256Union::from_number(U256::from(1u64));
        assert!(!verify_signature(&kp.public, &other, &sig));
    }

    #[test]
    fn wrong_key_fails() {
        let ctx = CryptoContext::new();
        let kp1 = generate_keypair(&ctx);
        let kp2 = generate_keypair(&ctx);
        let sig = sign_message(&ctx, &kp1.private, &message()).unwrap();
        assert!(!verify_signature(&kp2.public, &message(), &sig));
    }

    #[test]
    fn any_bit_flip_fails() {
        let ctx = CryptoContext::from_seed(5);
        let kp = generate_keypair(&ctx);
        let msg = message();
        let sig = sign_message(&ctx, &kp.private, &msg).unwrap();

        for bit in [0usize, 7, 100, 255] {
            let mut bytes = *msg.as_bytes();
            bytes[bit / 8] ^= 1 << (bit % 8);
            assert!(!verify_signature(&kp.public, &Uint256Union::from_bytes(bytes), &sig));
        }
        for bit in [0usize, 9, 256, 511] {
            let mut bytes = *sig.as_bytes();
            bytes[bit / 8] ^= 1 << (bit % 8);
            assert!(!verify_signature(&kp.public, &msg, &Uint512Union::from_bytes(bytes)));
        }
    }

    #[test]
    fn zero_signature_fails() {
        let kp = generate_keypair(&CryptoContext::new());
        assert!(!verify_signature(&kp.public, &message(), &Uint512Union::ZERO));
    }

    #[test]
    fn invalid_public_key() {
        let ctx = CryptoContext::new();
        let kp = generate_keypair(&ctx);
        let sig = sign_message(&ctx, &kp.private, &message()).unwrap();
        let bad_key = PublicKey([0xFF; 33]);
        assert!(!verify_signature(&bad_key, &message(), &sig));
    }
}
