//! Key material handed to algorithm constructors
//!
//! Loading keys from PEM or certificates is left to the caller. This module
//! only wraps already-decoded material (PKCS#8 DER, raw curve points, seeds)
//! in types that remember which curve they belong to:
//! - ECDSA private and public keys, tagged with their [`EcdsaCurve`]
//! - Ed25519 private keys
//! - RSA keys are the `rsa` crate's own types, re-exported here
use crate::error::{Error, Result};

use aws_lc_rs::rand::SystemRandom;
use aws_lc_rs::signature::{self, EcdsaKeyPair, Ed25519KeyPair, KeyPair};

pub use rsa::{RsaPrivateKey, RsaPublicKey};

/// ECDSA curve identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcdsaCurve {
    /// P-256 (secp256r1) curve
    P256,
    /// P-384 (secp384r1) curve
    P384,
    /// P-521 (secp521r1) curve
    P521,
}

impl EcdsaCurve {
    /// Size in bytes of a fixed-width `r || s` signature on this curve
    pub const fn signature_size(&self) -> usize {
        match self {
            EcdsaCurve::P256 => 64,
            EcdsaCurve::P384 => 96,
            EcdsaCurve::P521 => 132,
        }
    }

    pub(crate) fn signing_algorithm(&self) -> &'static signature::EcdsaSigningAlgorithm {
        match self {
            EcdsaCurve::P256 => &signature::ECDSA_P256_SHA256_FIXED_SIGNING,
            EcdsaCurve::P384 => &signature::ECDSA_P384_SHA384_FIXED_SIGNING,
            EcdsaCurve::P521 => &signature::ECDSA_P521_SHA512_FIXED_SIGNING,
        }
    }

    pub(crate) fn verification_algorithm(&self) -> &'static signature::EcdsaVerificationAlgorithm {
        match self {
            EcdsaCurve::P256 => &signature::ECDSA_P256_SHA256_FIXED,
            EcdsaCurve::P384 => &signature::ECDSA_P384_SHA384_FIXED,
            EcdsaCurve::P521 => &signature::ECDSA_P521_SHA512_FIXED,
        }
    }
}

/// ECDSA private key
#[derive(Debug)]
pub struct EcdsaPrivateKey {
    curve: EcdsaCurve,
    pair: EcdsaKeyPair,
}

impl EcdsaPrivateKey {
    /// Load a private key from PKCS#8 DER
    pub fn from_pkcs8(curve: EcdsaCurve, der: &[u8]) -> Result<Self> {
        let pair = EcdsaKeyPair::from_pkcs8(curve.signing_algorithm(), der)
            .map_err(|e| Error::Crypto(e.to_string()))?;
        Ok(Self { curve, pair })
    }

    /// Generate a fresh random key on `curve`
    pub fn generate(curve: EcdsaCurve) -> Result<Self> {
        let rng = SystemRandom::new();
        let document = EcdsaKeyPair::generate_pkcs8(curve.signing_algorithm(), &rng)
            .map_err(|e| Error::Crypto(e.to_string()))?;
        Self::from_pkcs8(curve, document.as_ref())
    }

    /// Get the curve
    pub fn curve(&self) -> EcdsaCurve {
        self.curve
    }

    /// Derive the matching public key
    pub fn public_key(&self) -> EcdsaPublicKey {
        EcdsaPublicKey::new(self.curve, self.pair.public_key().as_ref().to_vec())
    }

    pub(crate) fn pair(&self) -> &EcdsaKeyPair {
        &self.pair
    }
}

/// ECDSA public key (uncompressed SEC1 point)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcdsaPublicKey {
    curve: EcdsaCurve,
    point: Vec<u8>,
}

impl EcdsaPublicKey {
    /// Create a new ECDSA public key from an uncompressed point
    pub fn new(curve: EcdsaCurve, point: impl Into<Vec<u8>>) -> Self {
        Self {
            curve,
            point: point.into(),
        }
    }

    /// Get the curve
    pub fn curve(&self) -> EcdsaCurve {
        self.curve
    }

    /// Get the encoded point
    pub fn as_bytes(&self) -> &[u8] {
        &self.point
    }
}

/// Ed25519 private key
#[derive(Debug)]
pub struct Ed25519PrivateKey {
    pair: Ed25519KeyPair,
}

impl Ed25519PrivateKey {
    /// Load a private key from PKCS#8 DER
    pub fn from_pkcs8(der: &[u8]) -> Result<Self> {
        let pair = Ed25519KeyPair::from_pkcs8_maybe_unchecked(der)
            .map_err(|e| Error::Crypto(e.to_string()))?;
        Ok(Self { pair })
    }

    /// Load a private key from its 32-byte seed
    ///
    /// A 64-byte `seed || public key` value is also accepted; the public half
    /// is checked against the one derived from the seed.
    pub fn from_seed(seed: &[u8]) -> Result<Self> {
        let pair = match seed.len() {
            32 => Ed25519KeyPair::from_seed_unchecked(seed),
            64 => Ed25519KeyPair::from_seed_and_public_key(&seed[..32], &seed[32..]),
            _ => return Err(Error::InvalidKey),
        }
        .map_err(|e| Error::Crypto(e.to_string()))?;

        Ok(Self { pair })
    }

    /// Generate a fresh random key
    pub fn generate() -> Result<Self> {
        let rng = SystemRandom::new();
        let document =
            Ed25519KeyPair::generate_pkcs8(&rng).map_err(|e| Error::Crypto(e.to_string()))?;
        Self::from_pkcs8(document.as_ref())
    }

    /// The 32-byte public key matching this private key
    pub fn public_key(&self) -> Vec<u8> {
        self.pair.public_key().as_ref().to_vec()
    }

    pub(crate) fn pair(&self) -> &Ed25519KeyPair {
        &self.pair
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_sizes() {
        assert_eq!(EcdsaCurve::P256.signature_size(), 64);
        assert_eq!(EcdsaCurve::P384.signature_size(), 96);
        assert_eq!(EcdsaCurve::P521.signature_size(), 132);
    }

    #[test]
    fn test_generated_ecdsa_key_keeps_curve() {
        for curve in [EcdsaCurve::P256, EcdsaCurve::P384, EcdsaCurve::P521] {
            let key = EcdsaPrivateKey::generate(curve).unwrap();
            assert_eq!(key.curve(), curve);
            assert_eq!(key.public_key().curve(), curve);
            assert!(!key.public_key().as_bytes().is_empty());
        }
    }

    #[test]
    fn test_ecdsa_pkcs8_rejects_garbage() {
        let result = EcdsaPrivateKey::from_pkcs8(EcdsaCurve::P256, &[1, 2, 3]);
        assert!(matches!(result, Err(Error::Crypto(_))));
    }

    #[test]
    fn test_ed25519_seed_lengths() {
        let seed = [7u8; 32];
        let key = Ed25519PrivateKey::from_seed(&seed).unwrap();
        assert_eq!(key.public_key().len(), 32);

        let mut full = seed.to_vec();
        full.extend_from_slice(&key.public_key());
        assert!(Ed25519PrivateKey::from_seed(&full).is_ok());

        assert!(matches!(
            Ed25519PrivateKey::from_seed(&seed[..16]),
            Err(Error::InvalidKey)
        ));
    }
}
