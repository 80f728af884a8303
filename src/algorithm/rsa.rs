use crate::algorithm::{Algorithm, Signer, Verifier};
use crate::error::{Error, Result};
use crate::utils::hash_pool::HashPool;

use rsa::traits::PublicKeyParts;
use rsa::{Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use sha2::{Sha256, Sha384, Sha512};

/// SHA-2 variant paired with an RSA algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sha2 {
    Sha256,
    Sha384,
    Sha512,
}

impl Sha2 {
    pub(crate) fn pool(&self) -> HashPool {
        match self {
            Sha2::Sha256 => HashPool::of_digest::<Sha256>(),
            Sha2::Sha384 => HashPool::of_digest::<Sha384>(),
            Sha2::Sha512 => HashPool::of_digest::<Sha512>(),
        }
    }

    fn pkcs1v15(&self) -> Pkcs1v15Sign {
        match self {
            Sha2::Sha256 => Pkcs1v15Sign::new::<Sha256>(),
            Sha2::Sha384 => Pkcs1v15Sign::new::<Sha384>(),
            Sha2::Sha512 => Pkcs1v15Sign::new::<Sha512>(),
        }
    }
}

/// Require both halves of an RSA key pair
pub(crate) fn require_pair(
    private_key: Option<RsaPrivateKey>,
    public_key: Option<RsaPublicKey>,
) -> Result<(RsaPrivateKey, RsaPublicKey)> {
    match (private_key, public_key) {
        (Some(private_key), Some(public_key)) => Ok((private_key, public_key)),
        _ => Err(Error::InvalidKey),
    }
}

/// Map an `rsa` verification outcome onto the verifier contract
///
/// Only a signature mismatch is reported as `Ok(false)`.
pub(crate) fn verification_outcome(result: rsa::Result<()>) -> Result<bool> {
    match result {
        Ok(()) => Ok(true),
        Err(rsa::Error::Verification) => Ok(false),
        Err(e) => Err(Error::Crypto(e.to_string())),
    }
}

/// RSASSA-PKCS1-v1_5 (RS256, RS384, RS512)
#[derive(Debug)]
pub struct RsaPkcs1 {
    private_key: RsaPrivateKey,
    public_key: RsaPublicKey,
    hash: Sha2,
    pool: HashPool,
}

impl RsaPkcs1 {
    /// Create an RSASSA-PKCS1-v1_5 signer/verifier
    ///
    /// Both keys are required; a missing one fails with [`Error::InvalidKey`].
    pub fn new(
        algorithm: Algorithm,
        private_key: Option<RsaPrivateKey>,
        public_key: Option<RsaPublicKey>,
    ) -> Result<Self> {
        let (private_key, public_key) = require_pair(private_key, public_key)?;

        let hash = match algorithm {
            Algorithm::RS256 => Sha2::Sha256,
            Algorithm::RS384 => Sha2::Sha384,
            Algorithm::RS512 => Sha2::Sha512,
            _ => return Err(algorithm.mismatch("RSASSA-PKCS1")),
        };

        Ok(Self {
            private_key,
            public_key,
            hash,
            pool: hash.pool(),
        })
    }
}

impl Signer for RsaPkcs1 {
    fn size(&self) -> usize {
        self.private_key.size()
    }

    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>> {
        let digest = self.pool.digest(payload)?;
        self.private_key
            .sign_with_rng(&mut rand::thread_rng(), self.hash.pkcs1v15(), &digest)
            .map_err(|e| Error::Crypto(e.to_string()))
    }
}

impl Verifier for RsaPkcs1 {
    fn verify(&self, payload: &[u8], signature: &[u8]) -> Result<bool> {
        let digest = self.pool.digest(payload)?;
        verification_outcome(
            self.public_key
                .verify(self.hash.pkcs1v15(), &digest, signature),
        )
    }
}
