//! Algorithm registry
//!
//! Maps the `alg` header value to the signer and verifier used for it. A
//! registry is built mutably at startup and then shared read-only, usually
//! behind an `Arc`, by every [`Parser`](crate::Parser) and encode call.

use crate::algorithm::{Signer, Verifier};

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
struct Entry {
    signer: Arc<dyn Signer>,
    verifier: Arc<dyn Verifier>,
}

/// Signer/verifier pairs keyed by algorithm identifier
#[derive(Clone, Default)]
pub struct Registry {
    entries: HashMap<String, Entry>,
}

impl Registry {
    /// Create an empty registry
    ///
    /// Nothing is registered by default, not even `none`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `verifier` and `signer` under `alg`, replacing any previous entry
    pub fn register<V, S>(&mut self, alg: impl AsRef<str>, verifier: V, signer: S) -> &mut Self
    where
        V: Verifier + 'static,
        S: Signer + 'static,
    {
        self.register_shared(alg, Arc::new(verifier), Arc::new(signer))
    }

    /// Register one value that both signs and verifies
    pub fn register_algorithm<A>(&mut self, alg: impl AsRef<str>, algorithm: A) -> &mut Self
    where
        A: Signer + Verifier + 'static,
    {
        let algorithm = Arc::new(algorithm);
        self.register_shared(alg, algorithm.clone(), algorithm)
    }

    /// Register already shared trait objects
    pub fn register_shared(
        &mut self,
        alg: impl AsRef<str>,
        verifier: Arc<dyn Verifier>,
        signer: Arc<dyn Signer>,
    ) -> &mut Self {
        let alg = alg.as_ref();
        let replaced = self
            .entries
            .insert(alg.to_owned(), Entry { signer, verifier })
            .is_some();

        debug!(alg, replaced, "registered algorithm");
        self
    }

    /// Look up the signer and verifier registered for `alg`
    pub fn lookup(&self, alg: &str) -> Option<(Arc<dyn Signer>, Arc<dyn Verifier>)> {
        self.entries
            .get(alg)
            .map(|entry| (entry.signer.clone(), entry.verifier.clone()))
    }

    /// Borrow the signer registered for `alg`
    pub fn signer(&self, alg: &str) -> Option<&dyn Signer> {
        self.entries.get(alg).map(|entry| entry.signer.as_ref())
    }

    /// Borrow the verifier registered for `alg`
    pub fn verifier(&self, alg: &str) -> Option<&dyn Verifier> {
        self.entries.get(alg).map(|entry| entry.verifier.as_ref())
    }

    /// Whether `alg` is registered
    pub fn contains(&self, alg: &str) -> bool {
        self.entries.contains_key(alg)
    }

    /// Number of registered algorithms
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut algorithms: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        algorithms.sort_unstable();

        f.debug_struct("Registry")
            .field("algorithms", &algorithms)
            .finish()
    }
}
