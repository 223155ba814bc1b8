//! The node coordinator: one ledger and the wire codec in front of it.

use std::net::SocketAddrV6;
use std::sync::Arc;

use tracing::{debug, info, warn};

use mu_ledger::{Ledger, ProcessResult, TransactionBlock};
use mu_protocol::{Keepalive, Message, Publish};
use mu_types::Uint256Union;

use crate::config::NodeConfig;
use crate::error::NodeError;
use crate::ledger_event::{EventBus, LedgerEvent};

/// What an incoming message amounted to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Received {
    /// A keepalive; the peers it advertised, empty slots skipped.
    Keepalive(Vec<SocketAddrV6>),
    /// A published block and the ledger's verdict on it.
    Block {
        hash: Uint256Union,
        result: ProcessResult,
    },
}

pub struct Node {
    config: NodeConfig,
    ledger: Arc<Ledger>,
    events: EventBus,
}

impl Node {
    /// Build a node with an empty ledger, seeded with the configured genesis
    /// block if there is one.
    pub fn new(config: NodeConfig) -> Result<Self, NodeError> {
        config.validate()?;
        let ledger = Arc::new(Ledger::new());
        if let Some(genesis) = &config.genesis {
            let hash = ledger.install_genesis(genesis)?;
            info!(
                address = %genesis.address,
                coins = %genesis.coins,
                %hash,
                "genesis installed"
            );
        }
        info!(
            network = config.network.as_str(),
            port = config.port,
            verify_signatures = config.verify_signatures,
            "node initialised"
        );
        Ok(Self {
            config,
            ledger,
            events: EventBus::new(),
        })
    }

    pub fn ledger(&self) -> &Arc<Ledger> {
        &self.ledger
    }

    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    pub fn subscribe(&mut self, listener: Box<dyn Fn(&LedgerEvent) + Send + Sync>) {
        self.events.subscribe(listener);
    }

    /// Decode one complete message and act on it.
    ///
    /// Malformed input is an error; a well-formed block the ledger refuses
    /// is not, it comes back as [`Received::Block`] with a rejection.
    pub fn receive(&self, bytes: &[u8]) -> Result<Received, NodeError> {
        let message = Message::deserialize(bytes).inspect_err(|e| {
            warn!(len = bytes.len(), error = %e, "dropping malformed message");
        })?;
        debug!(message_type = ?message.message_type(), "message received");

        match message {
            Message::Keepalive(keepalive) => {
                let peers: Vec<_> = keepalive.known_peers().copied().collect();
                debug!(peers = peers.len(), "keepalive");
                Ok(Received::Keepalive(peers))
            }
            Message::Publish(publish) => {
                let block = Arc::new(publish.block);
                let hash = block.hash();
                let result = self.process(block);
                Ok(Received::Block { hash, result })
            }
        }
    }

    /// Apply a locally built block and encode it for publication.
    ///
    /// The block is encoded first and only committed if the ledger then
    /// accepts it, so a block peers could not decode never lands locally.
    pub fn publish_bytes(&self, block: TransactionBlock) -> Result<Vec<u8>, NodeError> {
        let mut publish = Publish::new(block);
        publish.set_ipv4_only(self.config.ipv4_only);
        let bytes = publish.serialize()?;
        match self.process(Arc::new(publish.block)) {
            ProcessResult::Accepted => Ok(bytes),
            ProcessResult::Rejected(reason) => Err(NodeError::Rejected(reason)),
        }
    }

    /// A keepalive advertising the configured peers.
    pub fn keepalive_bytes(&self) -> Vec<u8> {
        Keepalive::new(self.config.peers.iter().copied()).serialize()
    }

    fn process(&self, block: Arc<TransactionBlock>) -> ProcessResult {
        let hash = block.hash();
        let result = if self.config.verify_signatures {
            self.ledger.process_verified(Arc::clone(&block))
        } else {
            self.ledger.process(Arc::clone(&block))
        };

        match &result {
            ProcessResult::Accepted => {
                for entry in block.entries.iter().filter(|e| e.is_open()) {
                    self.events.emit(&LedgerEvent::AccountOpened {
                        address: entry.address,
                    });
                }
                self.events.emit(&LedgerEvent::BlockAccepted {
                    hash,
                    accounts: block.addresses().copied().collect(),
                });
            }
            ProcessResult::Rejected(reason) => {
                self.events.emit(&LedgerEvent::BlockRejected {
                    hash,
                    reason: reason.clone(),
                });
            }
        }
        result
    }
}
