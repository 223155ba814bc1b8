use thiserror::Error;

#[derive(Debug, Error)]
pub enum NodeError {
    #[error("ledger error: {0}")]
    Ledger(#[from] mu_ledger::LedgerError),

    #[error("protocol error: {0}")]
    Protocol(#[from] mu_protocol::ProtocolError),

    #[error("block rejected: {0}")]
    Rejected(mu_ledger::RejectReason),

    #[error("config error: {0}")]
    Config(String),

    #[error("logging already initialised: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}
