use thiserror::Error;

/// Errors from parsing textual representations of core types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid hex: {0}")]
    InvalidHex(String),
}
