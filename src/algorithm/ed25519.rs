use crate::algorithm::{Signer, Verifier};
use crate::error::{Error, Result};
use crate::keys::Ed25519PrivateKey;

use aws_lc_rs::signature::{ED25519, UnparsedPublicKey};

const SIGNATURE_SIZE: usize = 64;
const PUBLIC_KEY_SIZE: usize = 32;

/// EdDSA over Ed25519
///
/// The payload is signed directly, there is no pooled pre-hash.
#[derive(Debug)]
pub struct Ed25519 {
    private_key: Ed25519PrivateKey,
    public_key: Vec<u8>,
}

impl Ed25519 {
    /// Create an Ed25519 signer/verifier from a private key and a raw 32-byte public key
    pub fn new(
        private_key: Option<Ed25519PrivateKey>,
        public_key: impl Into<Vec<u8>>,
    ) -> Result<Self> {
        let public_key = public_key.into();
        let Some(private_key) = private_key else {
            return Err(Error::InvalidKey);
        };
        if public_key.len() != PUBLIC_KEY_SIZE {
            return Err(Error::InvalidKey);
        }

        Ok(Self {
            private_key,
            public_key,
        })
    }
}

impl Signer for Ed25519 {
    fn size(&self) -> usize {
        SIGNATURE_SIZE
    }

    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>> {
        Ok(self.private_key.pair().sign(payload).as_ref().to_vec())
    }
}

impl Verifier for Ed25519 {
    fn verify(&self, payload: &[u8], signature: &[u8]) -> Result<bool> {
        if signature.len() != SIGNATURE_SIZE {
            return Ok(false);
        }

        let public_key = UnparsedPublicKey::new(&ED25519, &self.public_key);
        Ok(public_key.verify(payload, signature).is_ok())
    }
}
