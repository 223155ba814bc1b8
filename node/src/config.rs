//! Node configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

use mu_ledger::GenesisConfig;
use mu_protocol::KEEPALIVE_PEERS;
use mu_types::NetworkId;

use crate::logging::LogFormat;
use crate::NodeError;

/// Configuration for a node.
///
/// Can be loaded from a TOML file via [`NodeConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Which network to connect to.
    #[serde(default = "default_network")]
    pub network: NetworkId,

    /// Port to listen on for peer messages.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Peers advertised in keepalives (at most eight).
    #[serde(default)]
    pub peers: Vec<SocketAddr>,

    /// Set the `ipv4_only` flag on outgoing publishes.
    #[serde(default)]
    pub ipv4_only: bool,

    /// Require every entry of an incoming block to be signed by its account.
    #[serde(default = "default_true")]
    pub verify_signatures: bool,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Initial supply, installed into an empty ledger at startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genesis: Option<GenesisConfig>,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_network() -> NetworkId {
    NetworkId::Dev
}

fn default_port() -> u16 {
    NetworkId::Dev.default_port()
}

fn default_true() -> bool {
    true
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl NodeConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, NodeError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| NodeError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, NodeError> {
        let config: Self = toml::from_str(s).map_err(|e| NodeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, NodeError> {
        toml::to_string_pretty(self).map_err(|e| NodeError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), NodeError> {
        if self.peers.len() > KEEPALIVE_PEERS {
            return Err(NodeError::Config(format!(
                "{} peers configured, keepalive carries at most {KEEPALIVE_PEERS}",
                self.peers.len()
            )));
        }
        self.log_format().map(|_| ())
    }

    pub fn log_format(&self) -> Result<LogFormat, NodeError> {
        self.log_format.parse().map_err(NodeError::Config)
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            network: default_network(),
            port: default_port(),
            peers: Vec::new(),
            ipv4_only: false,
            verify_signatures: default_true(),
            log_format: default_log_format(),
            log_level: default_log_level(),
            genesis: None,
        }
    }
}
