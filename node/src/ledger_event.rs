//! Events emitted during block processing for subscribers.

use mu_ledger::RejectReason;
use mu_types::{Address, Uint256Union};

/// Ledger-level events that observers can subscribe to via the [`EventBus`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LedgerEvent {
    /// A block was accepted and is now the latest block of `accounts`.
    BlockAccepted {
        hash: Uint256Union,
        accounts: Vec<Address>,
    },
    /// A block was rejected.
    BlockRejected {
        hash: Uint256Union,
        reason: RejectReason,
    },
    /// An account was opened (its sequence-0 entry was accepted).
    AccountOpened { address: Address },
}

/// Synchronous fan-out event bus for ledger events.
///
/// Listeners are invoked inline on the emitting thread; keep handlers fast to
/// avoid stalling block processing.
pub struct EventBus {
    listeners: Vec<Box<dyn Fn(&LedgerEvent) + Send + Sync>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: Box<dyn Fn(&LedgerEvent) + Send + Sync>) {
        self.listeners.push(listener);
    }

    pub fn emit(&self, event: &LedgerEvent) {
        for listener in &self.listeners {
            listener(event);
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
