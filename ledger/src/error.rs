use mu_types::Address;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("account not found: {0}")]
    AccountNotFound(Address),

    #[error("genesis account {0} already has a balance")]
    GenesisExists(Address),
}
