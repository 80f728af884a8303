use crate::algorithm::{Algorithm, Signer, Verifier};
use crate::error::{Error, Result};
use crate::utils::hash_pool::{DigestHasher, HashPool};

use constant_time_eq::constant_time_eq;
use hmac::Hmac;
use hmac::digest::{FixedOutputReset, KeyInit, Update};
use sha2::{Sha256, Sha384, Sha512};

/// HMAC with SHA-2 (HS256, HS384, HS512)
///
/// The secret is absorbed once into a keyed MAC state which the pool clones
/// on demand, so signing never re-derives the padded key.
#[derive(Debug)]
pub struct HmacSha {
    algorithm: Algorithm,
    pool: HashPool,
    size: usize,
}

impl HmacSha {
    /// Create an HMAC signer/verifier for `algorithm` with a shared secret
    ///
    /// Fails with [`Error::InvalidKey`] for an empty secret and with
    /// [`Error::AlgorithmMismatch`] for a non-HMAC algorithm.
    pub fn new(algorithm: Algorithm, key: impl AsRef<[u8]>) -> Result<Self> {
        let key = key.as_ref();
        if key.is_empty() {
            return Err(Error::InvalidKey);
        }

        let (pool, size) = match algorithm {
            Algorithm::HS256 => (keyed_pool::<Hmac<Sha256>>(key)?, 32),
            Algorithm::HS384 => (keyed_pool::<Hmac<Sha384>>(key)?, 48),
            Algorithm::HS512 => (keyed_pool::<Hmac<Sha512>>(key)?, 64),
            _ => return Err(algorithm.mismatch("HMAC SHA")),
        };

        Ok(Self {
            algorithm,
            pool,
            size,
        })
    }

    /// The algorithm this instance was built for
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[cfg(test)]
    pub(crate) fn with_pool(mut self, pool: HashPool) -> Self {
        self.pool = pool;
        self
    }
}

fn keyed_pool<M>(key: &[u8]) -> Result<HashPool>
where
    M: KeyInit + Update + FixedOutputReset + Clone + Send + Sync + 'static,
{
    let mac = <M as KeyInit>::new_from_slice(key).map_err(|_| Error::InvalidKey)?;
    Ok(HashPool::new(move || DigestHasher(mac.clone())))
}

impl Signer for HmacSha {
    fn size(&self) -> usize {
        self.size
    }

    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>> {
        self.pool.digest(payload)
    }
}

impl Verifier for HmacSha {
    fn verify(&self, payload: &[u8], signature: &[u8]) -> Result<bool> {
        if signature.len() != self.size {
            return Ok(false);
        }

        let expected = self.sign(payload)?;
        Ok(constant_time_eq(&expected, signature))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::base64url;
    use crate::utils::hash_pool::tests::FailingHasher;

    const PAYLOAD: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJqdGkiOiIwMjJhZWU4OC00MzA1LTQ5N2ItODMwNS00MDRjMGM2YmFjNTciLCJpYXQiOjE2NTUwMTAwMDAsImV4cCI6MTY1NzYwMjAwMH0";

    fn check_vector(algorithm: Algorithm, expected: &str) {
        let hmac = HmacSha::new(algorithm, "my-secret").unwrap();

        let signature = hmac.sign(PAYLOAD.as_bytes()).unwrap();
        assert_eq!(base64url::encode_bytes(&signature), expected);
        assert_eq!(signature.len(), hmac.size());
        assert!(hmac.verify(PAYLOAD.as_bytes(), &signature).unwrap());
    }

    #[test]
    fn test_hs256_vector() {
        check_vector(
            Algorithm::HS256,
            "LE-wEGZ8PpTX5RKASzsuKZBm40Wrbj5J3ezy-0FD2fY",
        );
    }

    #[test]
    fn test_hs384_vector() {
        check_vector(
            Algorithm::HS384,
            "xsa2GXBdCUInD0bfR6Ztcd71PF7N4ohSJJHy3ZfdUduSyj3e7o0l3Vb7NEMxDVEc",
        );
    }

    #[test]
    fn test_hs512_vector() {
        check_vector(
            Algorithm::HS512,
            "6ZRj6tNpGUWugFuAQpvsxXziLPbXj7NVsLAp4vgQYA6TxInSi7UX4Pkm1KQEIuhcRp82mmSzDzwjm7shlLX4NA",
        );
    }

    // A returned MAC must be reset back to its keyed state
    #[test]
    fn test_pooled_mac_is_reset_between_uses() {
        for algorithm in [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512] {
            let hmac = HmacSha::new(algorithm, "my-secret").unwrap();

            let first = hmac.sign(PAYLOAD.as_bytes()).unwrap();
            hmac.sign(b"something else").unwrap();
            let again = hmac.sign(PAYLOAD.as_bytes()).unwrap();

            assert_eq!(first, again, "{algorithm}");
        }
    }

    #[test]
    fn test_sizes() {
        assert_eq!(HmacSha::new(Algorithm::HS256, "key").unwrap().size(), 32);
        assert_eq!(HmacSha::new(Algorithm::HS384, "key").unwrap().size(), 48);
        assert_eq!(HmacSha::new(Algorithm::HS512, "key").unwrap().size(), 64);
    }

    #[test]
    fn test_empty_key() {
        assert!(matches!(
            HmacSha::new(Algorithm::HS256, ""),
            Err(Error::InvalidKey)
        ));
    }

    #[test]
    fn test_invalid_algorithm() {
        assert!(matches!(
            HmacSha::new(Algorithm::RS256, "test"),
            Err(Error::AlgorithmMismatch { .. })
        ));
    }

    #[test]
    fn test_wrong_secret() {
        let primary = HmacSha::new(Algorithm::HS256, "primary").unwrap();
        let secondary = HmacSha::new(Algorithm::HS256, "secondary").unwrap();

        let signature = primary.sign(b"message").unwrap();
        assert_eq!(secondary.verify(b"message", &signature), Ok(false));
    }

    #[test]
    fn test_truncated_signature() {
        let hmac = HmacSha::new(Algorithm::HS256, "secret").unwrap();
        let signature = hmac.sign(b"message").unwrap();

        assert_eq!(hmac.verify(b"message", &signature[..31]), Ok(false));
        assert_eq!(hmac.verify(b"message", &[]), Ok(false));
    }

    #[test]
    fn test_digest_error_propagates() {
        let hmac = HmacSha::new(Algorithm::HS256, "test")
            .unwrap()
            .with_pool(HashPool::new(|| FailingHasher));

        assert!(matches!(hmac.sign(b"data"), Err(Error::HashWrite(_))));
        assert!(matches!(
            hmac.verify(b"data", &[0u8; 32]),
            Err(Error::HashWrite(_))
        ));
    }
}
