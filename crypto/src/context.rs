//! Explicit crypto context.
//!
//! Holds the random source used for key generation and signature nonces.
//! A context is shared by reference (usually behind an `Arc`) between every
//! component that signs; the generator sits behind a mutex so concurrent
//! callers never observe torn state.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Mutex, PoisonError};

/// Random source for signing and key generation.
///
/// The curve itself is the compile-time `k256::Secp256k1` type, so there are
/// no runtime curve parameters to share.
pub struct CryptoContext {
    rng: Mutex<StdRng>,
}

impl CryptoContext {
    /// A context seeded from the operating system's entropy source.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// A deterministic context. Only for tests and simulations.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Run `f` with exclusive access to the generator.
    pub fn with_rng<R>(&self, f: impl FnOnce(&mut StdRng) -> R) -> R {
        // A panic mid-draw leaves the generator in a valid state.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }
}

impl Default for CryptoContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;
    use std::sync::Arc;

    #[test]
    fn seeded_contexts_agree() {
        let a = CryptoContext::from_seed(7);
        let b = CryptoContext::from_seed(7);
        assert_eq!(a.with_rng(|r| r.next_u64()), b.with_rng(|r| r.next_u64()));
    }

    #[test]
    fn shared_across_threads() {
        let ctx = Arc::new(CryptoContext::from_seed(1));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let ctx = Arc::clone(&ctx);
                std::thread::spawn(move || (0..100).map(|_| ctx.with_rng(|r| r.next_u32())).count())
            })
            .collect();
        let total: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(total, 400);
    }
}
