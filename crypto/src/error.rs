use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("private key is not a valid secp256k1 scalar")]
    InvalidPrivateKey,

    #[error("signing failed: {0}")]
    Signing(String),
}
