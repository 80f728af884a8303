use crate::algorithm::{Algorithm, Signer, Verifier};
use crate::error::{Error, Result};
use crate::keys::{EcdsaCurve, EcdsaPrivateKey, EcdsaPublicKey};

use aws_lc_rs::rand::SystemRandom;
use aws_lc_rs::signature::UnparsedPublicKey;

/// ECDSA with a fixed curve per algorithm (ES256, ES384, ES512)
///
/// Signatures are the fixed-width `r || s` encoding, each half left-padded
/// with zeros to the curve's scalar size.
#[derive(Debug)]
pub struct Ecdsa {
    algorithm: Algorithm,
    private_key: EcdsaPrivateKey,
    public_key: EcdsaPublicKey,
    rng: SystemRandom,
}

impl Ecdsa {
    /// Create an ECDSA signer/verifier
    ///
    /// Keys on a curve other than the one `algorithm` expects are rejected
    /// with [`Error::SizeMismatch`].
    pub fn new(
        algorithm: Algorithm,
        private_key: Option<EcdsaPrivateKey>,
        public_key: Option<EcdsaPublicKey>,
    ) -> Result<Self> {
        let (Some(private_key), Some(public_key)) = (private_key, public_key) else {
            return Err(Error::InvalidKey);
        };

        let curve = match algorithm {
            Algorithm::ES256 => EcdsaCurve::P256,
            Algorithm::ES384 => EcdsaCurve::P384,
            Algorithm::ES512 => EcdsaCurve::P521,
            _ => return Err(algorithm.mismatch("ECDSA")),
        };

        for actual in [private_key.curve(), public_key.curve()] {
            if actual != curve {
                return Err(Error::SizeMismatch {
                    expected: curve.signature_size(),
                    actual: actual.signature_size(),
                });
            }
        }

        Ok(Self {
            algorithm,
            private_key,
            public_key,
            rng: SystemRandom::new(),
        })
    }

    /// The algorithm this instance was built for
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
}

impl Signer for Ecdsa {
    fn size(&self) -> usize {
        self.private_key.curve().signature_size()
    }

    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>> {
        let signature = self
            .private_key
            .pair()
            .sign(&self.rng, payload)
            .map_err(|e| Error::Crypto(e.to_string()))?;

        Ok(signature.as_ref().to_vec())
    }
}

impl Verifier for Ecdsa {
    fn verify(&self, payload: &[u8], signature: &[u8]) -> Result<bool> {
        let expected = self.size();
        if signature.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: signature.len(),
            });
        }

        let curve = self.public_key.curve();
        let public_key =
            UnparsedPublicKey::new(curve.verification_algorithm(), self.public_key.as_bytes());

        Ok(public_key.verify(payload, signature).is_ok())
    }
}
