//! Pool of reusable hash-function instances
//!
//! Keyed HMAC state and plain digests are comparatively expensive to set up,
//! so every algorithm keeps a [`HashPool`] and checks a hasher out for the
//! duration of a single digest computation. A hasher only goes back into the
//! pool after a successful `finish_reset`, which guarantees it carries no
//! residual state. Checkout and checkin happen under a mutex, so two
//! concurrent operations never share an instance.

use crate::error::{Error, Result};
use crate::limits::MAX_IDLE_HASHERS;
use hmac::digest::{FixedOutputReset, Update};
use std::io;
use std::sync::{Mutex, PoisonError};

/// A streaming hash function that can be reused after producing a digest
pub trait Hasher: Send {
    /// Feed `data` into the hash state
    fn write(&mut self, data: &[u8]) -> io::Result<()>;

    /// Produce the digest and reset the state to its initial value
    fn finish_reset(&mut self) -> Vec<u8>;
}

/// Adapter exposing any RustCrypto digest or MAC as a [`Hasher`]
#[derive(Clone)]
pub struct DigestHasher<D>(pub D);

impl<D> Hasher for DigestHasher<D>
where
    D: Update + FixedOutputReset + Send,
{
    fn write(&mut self, data: &[u8]) -> io::Result<()> {
        Update::update(&mut self.0, data);
        Ok(())
    }

    fn finish_reset(&mut self) -> Vec<u8> {
        self.0.finalize_fixed_reset().to_vec()
    }
}

type Constructor = Box<dyn Fn() -> Box<dyn Hasher> + Send + Sync>;

/// Hands out reset-ready hashers and takes them back after use
pub struct HashPool {
    constructor: Constructor,
    idle: Mutex<Vec<Box<dyn Hasher>>>,
}

impl HashPool {
    /// Create a pool that builds new hashers with `constructor` on demand
    pub fn new<F, H>(constructor: F) -> Self
    where
        F: Fn() -> H + Send + Sync + 'static,
        H: Hasher + 'static,
    {
        Self {
            constructor: Box::new(move || Box::new(constructor())),
            idle: Mutex::new(Vec::new()),
        }
    }

    /// Create a pool of plain digests such as `Sha256`
    pub fn of_digest<D>() -> Self
    where
        D: Default + Update + FixedOutputReset + Send + 'static,
    {
        Self::new(|| DigestHasher(D::default()))
    }

    /// Hash `data` with a pooled instance and return the digest
    pub fn digest(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut hasher = self.acquire();
        if let Err(e) = hasher.write(data) {
            // the instance may hold partial state, so it is dropped
            return Err(Error::HashWrite(e.to_string()));
        }

        let digest = hasher.finish_reset();
        self.release(hasher);
        Ok(digest)
    }

    /// Number of idle hashers currently held
    pub fn idle(&self) -> usize {
        self.idle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn acquire(&self) -> Box<dyn Hasher> {
        let pooled = self
            .idle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop();

        pooled.unwrap_or_else(|| (self.constructor)())
    }

    fn release(&self, hasher: Box<dyn Hasher>) {
        let mut idle = self.idle.lock().unwrap_or_else(PoisonError::into_inner);
        if idle.len() < MAX_IDLE_HASHERS {
            idle.push(hasher);
        }
    }
}

impl std::fmt::Debug for HashPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashPool")
            .field("idle", &self.idle())
            .finish_non_exhaustive()
    }
}
