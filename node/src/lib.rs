//! mu node core: wires the ledger to the wire protocol.
//!
//! The node:
//! - Loads its configuration from TOML
//! - Initialises structured logging
//! - Decodes incoming messages and feeds published blocks to the ledger
//! - Encodes local blocks and keepalives for transmission
//!
//! Sockets, peer management and persistence live outside this crate.

pub mod config;
pub mod error;
pub mod ledger_event;
pub mod logging;
pub mod node;

pub use config::NodeConfig;
pub use error::NodeError;
pub use ledger_event::{EventBus, LedgerEvent};
pub use logging::{init_from_config, init_logging, LogFormat};
pub use node::{Node, Received};
