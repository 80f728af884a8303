use crate::algorithm::rsa::{Sha2, require_pair, verification_outcome};
use crate::algorithm::{Algorithm, Signer, Verifier};
use crate::error::{Error, Result};
use crate::utils::hash_pool::HashPool;

use rsa::traits::PublicKeyParts;
use rsa::{Pss, RsaPrivateKey, RsaPublicKey};
use sha2::{Sha256, Sha384, Sha512};

/// RSASSA-PSS (PS256, PS384, PS512)
///
/// The salt is as long as the digest and MGF1 uses the same hash. Signatures
/// are randomized, so two signatures over the same payload differ.
#[derive(Debug)]
pub struct RsaPss {
    private_key: RsaPrivateKey,
    public_key: RsaPublicKey,
    hash: Sha2,
    pool: HashPool,
}

impl RsaPss {
    /// Create an RSASSA-PSS signer/verifier
    pub fn new(
        algorithm: Algorithm,
        private_key: Option<RsaPrivateKey>,
        public_key: Option<RsaPublicKey>,
    ) -> Result<Self> {
        let (private_key, public_key) = require_pair(private_key, public_key)?;

        let hash = match algorithm {
            Algorithm::PS256 => Sha2::Sha256,
            Algorithm::PS384 => Sha2::Sha384,
            Algorithm::PS512 => Sha2::Sha512,
            _ => return Err(algorithm.mismatch("RSASSA-PSS")),
        };

        Ok(Self {
            private_key,
            public_key,
            hash,
            pool: hash.pool(),
        })
    }

    fn scheme(&self) -> Pss {
        match self.hash {
            Sha2::Sha256 => Pss::new::<Sha256>(),
            Sha2::Sha384 => Pss::new::<Sha384>(),
            Sha2::Sha512 => Pss::new::<Sha512>(),
        }
    }
}

impl Signer for RsaPss {
    fn size(&self) -> usize {
        self.private_key.size()
    }

    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>> {
        let digest = self.pool.digest(payload)?;
        self.private_key
            .sign_with_rng(&mut rand::thread_rng(), self.scheme(), &digest)
            .map_err(|e| Error::Crypto(e.to_string()))
    }
}

impl Verifier for RsaPss {
    fn verify(&self, payload: &[u8], signature: &[u8]) -> Result<bool> {
        let digest = self.pool.digest(payload)?;
        verification_outcome(self.public_key.verify(self.scheme(), &digest, signature))
    }
}
